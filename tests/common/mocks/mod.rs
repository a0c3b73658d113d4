pub mod court_api;

pub use court_api::MockCourtApiPort;
