use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to build configuration: {source}")]
    Build { source: config::ConfigError },
    #[error("Failed to deserialize configuration: {source}")]
    Deserialize { source: config::ConfigError },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `server.toml`) when one exists. If no
///    path is provided, it defaults to `"server"` in the current working directory. The file
///    is optional; a deployment that relies on defaults and environment overrides alone needs
///    no file at all.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `TITANIC__`. Nested structures are accessed using double underscores
///    (e.g., `TITANIC__SERVER__PORT` maps to `server.port`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source.
///
/// # Errors
/// This function will return an error if:
/// * The configuration sources cannot be assembled (e.g., malformed file contents).
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use titanic_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("TITANIC")
                .separator("__")
                .convert_case(config::Case::Snake),  // Env var overrides (e.g., TITANIC__SERVER__PORT)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .map_err(|source| ConfigError::Build { source })?
        .try_deserialize::<T>()
        .map_err(|source| ConfigError::Deserialize { source })?;

    Ok(config)
}
