pub mod cancellation;
pub mod config;
pub mod error;

pub use cancellation::run_cancellable;
pub use config::AppConfig;
pub use error::{AppError, Result};
