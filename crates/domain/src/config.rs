pub mod blocking;
pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use blocking::{AliasPair, BlockingConfig};
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
