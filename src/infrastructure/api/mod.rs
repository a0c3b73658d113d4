pub mod http_court_api;
pub mod mock_court_api;

pub use http_court_api::HttpCourtApi;
pub use mock_court_api::{MockCourtApi, sample_courts};
