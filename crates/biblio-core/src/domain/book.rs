use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::domain::genre::Genre;
use crate::domain::ids::Isbn;
use crate::errors::{LibraryError, require_non_blank};

/// A catalogued book.
///
/// Identity is the ISBN alone: two `Book` values with the same ISBN compare
/// equal whatever their other attributes. Availability can only be flipped by
/// the [`LibraryManager`](crate::services::LibraryManager) while lending.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
  isbn: Isbn,
  title: String,
  authors: BTreeSet<String>,
  genre: Genre,
  publication_year: i32,
  page_count: u32,
  available: bool,
}

impl Book {
  /// Creates an available book with no authors and no page count.
  pub fn new(isbn: impl Into<Isbn>, title: impl Into<String>, publication_year: i32, genre: Genre) -> Self {
    Self {
      isbn: isbn.into(),
      title: title.into(),
      authors: BTreeSet::new(),
      genre,
      publication_year,
      page_count: 0,
      available: true,
    }
  }

  pub fn isbn(&self) -> &Isbn {
    &self.isbn
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn set_title(&mut self, title: impl Into<String>) {
    self.title = title.into();
  }

  /// Authors in lexical order.
  pub fn authors(&self) -> &BTreeSet<String> {
    &self.authors
  }

  /// Adds a trimmed author name.
  ///
  /// Returns `Ok(false)` when the author was already listed.
  pub fn add_author(&mut self, author: &str) -> Result<bool, LibraryError> {
    require_non_blank(author, "author must not be blank")?;
    Ok(self.authors.insert(author.trim().to_string()))
  }

  /// Builder-style variant of [`Book::add_author`].
  pub fn with_author(mut self, author: &str) -> Result<Self, LibraryError> {
    self.add_author(author)?;
    Ok(self)
  }

  pub fn genre(&self) -> Genre {
    self.genre
  }

  pub fn set_genre(&mut self, genre: Genre) {
    self.genre = genre;
  }

  pub fn publication_year(&self) -> i32 {
    self.publication_year
  }

  pub fn set_publication_year(&mut self, year: i32) {
    self.publication_year = year;
  }

  pub fn page_count(&self) -> u32 {
    self.page_count
  }

  pub fn set_page_count(&mut self, pages: u32) {
    self.page_count = pages;
  }

  pub fn is_available(&self) -> bool {
    self.available
  }

  pub(crate) fn set_available(&mut self, available: bool) {
    self.available = available;
  }
}

impl PartialEq for Book {
  fn eq(&self, other: &Self) -> bool {
    self.isbn == other.isbn
  }
}

impl Eq for Book {}

impl Hash for Book {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.isbn.hash(state);
  }
}

impl fmt::Display for Book {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Book{{title='{}', isbn='{}', year={}}}", self.title, self.isbn, self.publication_year)
  }
}
