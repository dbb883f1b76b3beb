use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Relocates the config directory to `$BIBLIO_BASE_DIR/config`.
pub const BASE_DIR_ENV: &str = "BIBLIO_BASE_DIR";

const CONFIG_FILE: &str = "biblio.toml";

/// Directory holding `biblio.toml`. Nothing is created until the first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
  dir: PathBuf,
}

impl ConfigLocation {
  pub fn discover() -> Result<Self, ConfigError> {
    Self::resolve(std::env::var_os(BASE_DIR_ENV).map(PathBuf::from))
  }

  fn resolve(base: Option<PathBuf>) -> Result<Self, ConfigError> {
    match base.filter(|b| !b.as_os_str().is_empty()) {
      Some(base) => Ok(Self::under(&base)),
      None => ProjectDirs::from("org", "biblio", "biblio")
        .map(|dirs| Self { dir: dirs.config_dir().to_path_buf() })
        .ok_or(ConfigError::NoHomeDir),
    }
  }

  pub fn under(base: &Path) -> Self {
    Self { dir: base.join("config") }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub fn file(&self) -> PathBuf {
    self.dir.join(CONFIG_FILE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_override_nests_the_config_dir() {
    let location = ConfigLocation::resolve(Some(PathBuf::from("/srv/biblio"))).unwrap();

    assert_eq!(location.dir(), Path::new("/srv/biblio/config"));
    assert_eq!(location.file(), PathBuf::from("/srv/biblio/config/biblio.toml"));
  }

  #[test]
  fn empty_override_is_ignored() {
    let empty = ConfigLocation::resolve(Some(PathBuf::new()));
    let unset = ConfigLocation::resolve(None);

    match (empty, unset) {
      (Ok(a), Ok(b)) => assert_eq!(a, b),
      (Err(ConfigError::NoHomeDir), Err(ConfigError::NoHomeDir)) => {}
      other => panic!("empty and unset overrides disagree: {other:?}"),
    }
  }

  #[test]
  fn resolving_does_not_touch_the_filesystem() {
    let tmp = tempfile::tempdir().unwrap();
    let location = ConfigLocation::under(tmp.path());

    assert!(!location.dir().exists());
  }
}
