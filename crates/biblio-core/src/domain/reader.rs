use std::hash::{Hash, Hasher};
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ids::ReaderId;

/// Membership category of a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReaderCategory {
  Student,
  Teacher,
  Regular,
  Vip,
}

impl fmt::Display for ReaderCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      ReaderCategory::Student => "STUDENT",
      ReaderCategory::Teacher => "TEACHER",
      ReaderCategory::Regular => "REGULAR",
      ReaderCategory::Vip => "VIP",
    };
    f.write_str(text)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid reader category: {input}")]
pub struct ReaderCategoryParseError {
  pub input: String,
}

impl FromStr for ReaderCategory {
  type Err = ReaderCategoryParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "student" => Ok(ReaderCategory::Student),
      "teacher" => Ok(ReaderCategory::Teacher),
      "regular" => Ok(ReaderCategory::Regular),
      "vip" => Ok(ReaderCategory::Vip),
      _ => Err(ReaderCategoryParseError { input: s.to_string() }),
    }
  }
}

/// A registered library member. Equality and hashing use the id only.
#[derive(Debug, Clone, Serialize)]
pub struct Reader {
  id: ReaderId,
  pub name: String,
  pub email: String,
  pub category: ReaderCategory,
}

impl Reader {
  pub fn new(
    id: impl Into<ReaderId>,
    name: impl Into<String>,
    email: impl Into<String>,
    category: ReaderCategory,
  ) -> Self {
    Self { id: id.into(), name: name.into(), email: email.into(), category }
  }

  pub fn id(&self) -> &ReaderId {
    &self.id
  }
}

impl PartialEq for Reader {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for Reader {}

impl Hash for Reader {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Display for Reader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Reader{{id='{}', name='{}', email='{}', category={}}}",
      self.id, self.name, self.email, self.category
    )
  }
}
