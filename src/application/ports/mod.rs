pub mod court_api;
pub mod geocoder;
pub mod image_attachment;
pub mod map_surface;
pub mod navigation_history;

pub use court_api::CourtApi;
pub use geocoder::Geocoder;
pub use image_attachment::ImageAttachments;
pub use map_surface::{CameraTarget, EventDisposition, MapCursor, MapEvent, MapSurface};
pub use navigation_history::NavigationHistory;
