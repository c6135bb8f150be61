pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::AppError;
pub use middleware::structured_logger::StructuredLogger;
pub use state::AppState;
