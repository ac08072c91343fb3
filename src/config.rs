//! Client configuration: built-in defaults, then an optional TOML file, then
//! `PLATFORM_SESSION_*` environment variables.

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "PLATFORM_SESSION";

/// Settings that shape how the client presents itself and where it keeps state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Name used in advisory messages, e.g. `'<binary_name> target -s SPACE'`.
    pub binary_name: String,
    pub session_path: PathBuf,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl ClientConfig {
    /// Loads the layered configuration. `file` may point at a missing file.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(file, Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`ClientConfig::load`] with an explicit environment source.
    pub fn load_with_env(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = builder_with_defaults()?;
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder.add_source(env).build()?.try_deserialize()
    }
}

fn default_session_path() -> PathBuf {
    let base = std::env::var("HOME").map(PathBuf::from).unwrap_or_default();
    base.join(".platform-session").join("session.toml")
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("binary_name", "platform-session")?
        .set_default(
            "session_path",
            default_session_path().to_string_lossy().into_owned(),
        )?
        .set_default("log_filter", "info")
}
