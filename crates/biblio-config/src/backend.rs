use crate::error::ConfigError;
use crate::paths::ConfigLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

// toml_edit only for writing, so hand-written comments survive a save
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct TomlConfigBackend {
  location: ConfigLocation,
}

impl TomlConfigBackend {
  pub fn new(location: ConfigLocation) -> Self {
    Self { location }
  }

  pub fn location(&self) -> &ConfigLocation {
    &self.location
  }

  /// Like [`ConfigBackend::load_section`], but a missing file or section yields `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(content) = self.read()? else {
      return Ok(T::default());
    };
    match parse(&self.location.file(), &content)?.get(section) {
      Some(value) => decode(section, value),
      None => Ok(T::default()),
    }
  }

  fn read(&self) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(self.location.file()) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }
}

fn parse(path: &Path, content: &str) -> Result<toml::Table, ConfigError> {
  toml::from_str(content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

fn decode<T: DeserializeOwned>(section: &str, value: &toml::Value) -> Result<T, ConfigError> {
  value.clone().try_into().map_err(|source| ConfigError::Decode { section: section.to_string(), source })
}

/// Replaces `path` through a temp file in the same directory, creating the directory first.
fn write_atomically(path: &Path, contents: &str) -> Result<(), ConfigError> {
  let dir = path.parent().unwrap_or(Path::new("."));
  fs::create_dir_all(dir)?;

  let mut tmp = NamedTempFile::new_in(dir)?;
  tmp.write_all(contents.as_bytes())?;
  tmp.as_file().sync_all()?;
  tmp.persist(path).map_err(|e| ConfigError::Io(e.error))?;
  Ok(())
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.location.file();
    let table = parse(&path, &fs::read_to_string(&path)?)?;

    let value = table
      .get(section)
      .ok_or_else(|| ConfigError::MissingSection { section: section.to_string(), path: path.clone() })?;

    decode(section, value)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.location.file();
    let edit_error = |source| ConfigError::Edit { path: path.clone(), source };

    // 1) Current document, or an empty one on first save.
    let mut doc = match self.read()? {
      Some(content) => content.parse::<DocumentMut>().map_err(edit_error)?,
      None => DocumentMut::new(),
    };

    // 2) The section alone, rendered as header-less `key = value` lines.
    let rendered =
      toml::to_string(value).map_err(|source| ConfigError::Encode { section: section.to_string(), source })?;
    let section_doc = rendered.parse::<DocumentMut>().map_err(edit_error)?;

    // 3) Swap it in; everything outside the section keeps its formatting.
    doc[section] = Item::Table(section_doc.as_table().clone());

    write_atomically(&path, &doc.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Loans {
    days: i64,
    branch: String,
  }

  fn backend_in(dir: &Path) -> TomlConfigBackend {
    TomlConfigBackend::new(ConfigLocation::under(dir))
  }

  fn write_config(backend: &TomlConfigBackend, text: &str) {
    fs::create_dir_all(backend.location().dir()).unwrap();
    fs::write(backend.location().file(), text).unwrap();
  }

  #[test]
  fn missing_file_falls_back_to_default() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let loaded: Loans = backend.load_section_with_default("loans").unwrap();
    assert_eq!(loaded, Loans::default());
    assert!(matches!(backend.load_section::<Loans>("loans"), Err(ConfigError::Io(_))));
  }

  #[test]
  fn first_save_creates_the_directory() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let value = Loans { days: 21, branch: "north".into() };

    backend.save_section("loans", &value).unwrap();

    assert_eq!(backend.load_section::<Loans>("loans").unwrap(), value);
    assert!(matches!(backend.load_section::<Loans>("fines"), Err(ConfigError::MissingSection { .. })));
  }

  #[test]
  fn save_keeps_comments_and_other_sections() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    write_config(&backend, "# branch settings\n[fines]\nper_day = 2\n");

    backend.save_section("loans", &Loans { days: 7, branch: "east".into() }).unwrap();

    let text = fs::read_to_string(backend.location().file()).unwrap();
    assert!(text.contains("# branch settings"));
    assert!(text.contains("per_day = 2"));
    assert!(text.contains("[loans]"));
  }

  #[test]
  fn save_leaves_only_the_config_file() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    backend.save_section("loans", &Loans::default()).unwrap();
    backend.save_section("loans", &Loans { days: 3, branch: "west".into() }).unwrap();

    let names: Vec<String> = fs::read_dir(backend.location().dir())
      .unwrap()
      .map(|entry| entry.unwrap().file_name().into_string().unwrap())
      .collect();
    assert_eq!(names, ["biblio.toml"]);
  }

  #[test]
  fn wrong_value_type_reports_the_section() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    write_config(&backend, "[loans]\ndays = \"many\"\n");

    let err = backend.load_section_with_default::<Loans>("loans").unwrap_err();
    assert!(matches!(&err, ConfigError::Decode { section, .. } if section == "loans"));
  }

  #[test]
  fn broken_file_is_a_parse_error() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    write_config(&backend, "[loans\n");

    assert!(matches!(backend.load_section_with_default::<Loans>("loans"), Err(ConfigError::Parse { .. })));
    assert!(matches!(backend.save_section("loans", &Loans::default()), Err(ConfigError::Edit { .. })));
  }
}
