//! Admin tool configuration

use clap::Args;

pub use api::{ApiConfig, ImageEncodingArg};
pub use logging::{LogFormat, LoggingConfig};

mod api;
mod logging;

/// Settings shared by every command, from flags or the environment.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Products API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
