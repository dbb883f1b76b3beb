mod backend;
mod error;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use error::ConfigError;
pub use paths::{BASE_DIR_ENV, ConfigLocation};

use once_cell::sync::OnceCell;

static LOCATION: OnceCell<ConfigLocation> = OnceCell::new();

/// Process-wide config location, resolved on first use.
pub fn location() -> Result<&'static ConfigLocation, ConfigError> {
  LOCATION.get_or_try_init(ConfigLocation::discover)
}

/// Backend over the process-wide `biblio.toml`.
pub fn config_backend() -> Result<TomlConfigBackend, ConfigError> {
  Ok(TomlConfigBackend::new(location()?.clone()))
}
