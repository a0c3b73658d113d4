pub mod court_handler;

pub use court_handler::CourtHandler;
