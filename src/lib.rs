pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::eros::ErosClient;
pub use config::toml_config::TomlConfig;
pub use self::core::{forms::ObjectGroupImportC2rmfForm, import::ImportEngine};
pub use utils::error::{ErosHttpError, LabError, Result, ValidationError};
