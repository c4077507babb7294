pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
pub const MAX_TIMEOUT_SECONDS: u64 = 120;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "euphrosyne-import")]
#[command(about = "Import an object group from the C2RMF Eros reference system")]
pub struct CliConfig {
    /// C2RMF identifier, e.g. C2RMF00000
    pub c2rmf_id: String,

    #[arg(long, help = "TOML configuration file; replaces the Eros flags below")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "EROS_BASE_URL", default_value = "http://localhost:3000")]
    pub eros_base_url: String,

    #[arg(long, env = "EROS_HTTP_TOKEN", hide_env_values = true)]
    pub eros_token: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn eros_base_url(&self) -> &str {
        &self.eros_base_url
    }

    fn eros_token(&self) -> Option<&str> {
        self.eros_token.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("eros_base_url", &self.eros_base_url)?;
        if let Some(token) = &self.eros_token {
            validation::validate_non_empty_string("eros_token", token)?;
        }
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)
    }
}
