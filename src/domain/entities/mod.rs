pub mod court;
pub mod marker;
pub mod vote;

pub use court::{Court, CourtDraft, CourtPatch};
pub use marker::{MarkerFeature, MarkerLayer, MarkerStyle};
pub use vote::Vote;
