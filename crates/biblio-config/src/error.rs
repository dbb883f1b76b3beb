use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid toml in {}: {source}", path.display())]
  Parse { path: PathBuf, source: toml::de::Error },

  #[error("cannot edit {}: {source}", path.display())]
  Edit { path: PathBuf, source: toml_edit::TomlError },

  #[error("decode section [{section}]: {source}")]
  Decode { section: String, source: toml::de::Error },

  #[error("encode section [{section}]: {source}")]
  Encode { section: String, source: toml::ser::Error },

  #[error("missing section [{section}] in {}", path.display())]
  MissingSection { section: String, path: PathBuf },

  #[error("no home directory to place the config in")]
  NoHomeDir,
}
