use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// International Standard Book Number, the identity of a [`Book`](super::book::Book).
///
/// The value is stored as given; no checksum validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Isbn(String);

impl Isbn {
  pub fn new(value: impl Into<String>) -> Self {
    Isbn(value.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for Isbn {
  fn from(value: &str) -> Self {
    Isbn(value.to_owned())
  }
}

impl From<String> for Isbn {
  fn from(value: String) -> Self {
    Isbn(value)
  }
}

impl Borrow<str> for Isbn {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Isbn {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Identifier of a registered [`Reader`](super::reader::Reader).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReaderId(String);

impl ReaderId {
  pub fn new(value: impl Into<String>) -> Self {
    ReaderId(value.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ReaderId {
  fn from(value: &str) -> Self {
    ReaderId(value.to_owned())
  }
}

impl From<String> for ReaderId {
  fn from(value: String) -> Self {
    ReaderId(value)
  }
}

impl Borrow<str> for ReaderId {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ReaderId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  #[test]
  fn ids_look_up_by_str() {
    let mut map = HashMap::new();
    map.insert(Isbn::from("978-0"), 1);
    assert_eq!(map.get("978-0"), Some(&1));

    let mut readers = HashMap::new();
    readers.insert(ReaderId::new("r1"), "Max");
    assert_eq!(readers.get("r1"), Some(&"Max"));
  }
}
