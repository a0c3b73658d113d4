pub mod coordinates;
pub mod court_id;
pub mod court_status;
pub mod map_bounds;
pub mod route;
pub mod screen;
pub mod vote_type;

pub use coordinates::Coordinates;
pub use court_id::CourtId;
pub use court_status::CourtStatus;
pub use map_bounds::MapBounds;
pub use route::AppRoute;
pub use screen::{ScreenPoint, ScreenSize};
pub use vote_type::VoteType;
