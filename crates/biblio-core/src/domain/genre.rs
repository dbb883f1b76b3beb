use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shelving genre of a book.
///
/// `Display` prints the canonical upper-snake name (`NON_FICTION`), which is
/// also the key used by [`crate::ordering::by_genre_and_title`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
  Fiction,
  NonFiction,
  Science,
  History,
  Fantasy,
  Detective,
  Romance,
  Biography,
  Children,
}

impl Genre {
  pub const ALL: [Genre; 9] = [
    Genre::Fiction,
    Genre::NonFiction,
    Genre::Science,
    Genre::History,
    Genre::Fantasy,
    Genre::Detective,
    Genre::Romance,
    Genre::Biography,
    Genre::Children,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Genre::Fiction => "FICTION",
      Genre::NonFiction => "NON_FICTION",
      Genre::Science => "SCIENCE",
      Genre::History => "HISTORY",
      Genre::Fantasy => "FANTASY",
      Genre::Detective => "DETECTIVE",
      Genre::Romance => "ROMANCE",
      Genre::Biography => "BIOGRAPHY",
      Genre::Children => "CHILDREN",
    }
  }
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Returned when a string names no known [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid genre: {input}")]
pub struct GenreParseError {
  pub input: String,
}

impl FromStr for Genre {
  type Err = GenreParseError;

  /// Accepts the canonical name in any case, with `_`, `-` or spaces as separators.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', ' ', '_'], "");

    let genre = match normalized.as_str() {
      "fiction" => Genre::Fiction,
      "nonfiction" => Genre::NonFiction,
      "science" => Genre::Science,
      "history" => Genre::History,
      "fantasy" => Genre::Fantasy,
      "detective" => Genre::Detective,
      "romance" => Genre::Romance,
      "biography" => Genre::Biography,
      "children" | "childrens" => Genre::Children,
      _ => return Err(GenreParseError { input: s.to_string() }),
    };

    Ok(genre)
  }
}
