pub mod constants;
pub mod entities;
pub mod value_objects;

pub use constants::{COURT_PATH_PREFIX, CURRENT_USER, REVIEW_MAX_CHARS};
pub use entities::{Court, CourtDraft, CourtPatch, MarkerFeature, MarkerLayer, MarkerStyle, Vote};
pub use value_objects::{
    AppRoute, Coordinates, CourtId, CourtStatus, MapBounds, ScreenPoint, ScreenSize, VoteType,
};
