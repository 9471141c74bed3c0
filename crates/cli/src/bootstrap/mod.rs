mod database;

pub use database::init_database;

use focusgate_domain::config::ConfigError;
use focusgate_domain::{CliOverrides, Config};
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
