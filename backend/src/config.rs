use biblio_config::{ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};

const SECTION: &str = "lending";

/// The `[lending]` section of `biblio.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingConfig {
  /// Loan length used when the demo borrows without an explicit period.
  #[serde(default = "default_borrow_days")]
  pub default_borrow_days: i64,

  /// How many entries the popularity reports list.
  #[serde(default = "default_report_limit")]
  pub report_limit: usize,

  /// `EnvFilter` directives used when `RUST_LOG` is unset.
  #[serde(default = "default_log_filter")]
  pub log_filter: String,
}

fn default_borrow_days() -> i64 {
  14
}

fn default_report_limit() -> usize {
  3
}

fn default_log_filter() -> String {
  "info".into()
}

impl Default for LendingConfig {
  fn default() -> Self {
    LendingConfig {
      default_borrow_days: default_borrow_days(),
      report_limit: default_report_limit(),
      log_filter: default_log_filter(),
    }
  }
}

impl LendingConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&biblio_config::config_backend()?)
  }

  /// Reads the section, filling gaps with defaults, and writes the completed section back.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: LendingConfig = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use biblio_config::ConfigLocation;
  use std::fs;
  use tempfile::tempdir;

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(ConfigLocation::under(dir))
  }

  #[test]
  fn first_load_writes_defaults() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let cfg = LendingConfig::load_from(&backend).unwrap();

    assert_eq!(cfg, LendingConfig::default());
    let text = fs::read_to_string(backend.location().file()).unwrap();
    assert!(text.contains("[lending]"));
    assert!(text.contains("default_borrow_days = 14"));
  }

  #[test]
  fn partial_section_keeps_explicit_values() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    fs::create_dir_all(backend.location().dir()).unwrap();
    fs::write(backend.location().file(), "[lending]\nreport_limit = 5\n").unwrap();

    let cfg = LendingConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.report_limit, 5);
    assert_eq!(cfg.default_borrow_days, 14);
    assert_eq!(cfg.log_filter, "info");
  }

  #[test]
  fn edited_file_survives_reload() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let cfg = LendingConfig { default_borrow_days: 21, report_limit: 10, log_filter: "biblio_core=debug".into() };

    backend.save_section(SECTION, &cfg).unwrap();

    assert_eq!(LendingConfig::load_from(&backend).unwrap(), cfg);
  }
}
