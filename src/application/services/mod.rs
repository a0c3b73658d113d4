pub mod context_menu;
pub mod court_service;
pub mod court_store;
pub mod map_adapter;
pub mod navigation_sync;
pub mod registration;

pub use context_menu::{ContextMenu, place_menu};
pub use court_service::CourtService;
pub use court_store::{CourtState, CourtStore, Notice, NoticeLevel};
pub use map_adapter::{MapAdapter, MapSignal, build_marker_layer};
pub use navigation_sync::NavigationSync;
pub use registration::{RegistrationFlow, RegistrationForm};
