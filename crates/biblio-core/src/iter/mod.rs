//! Lazy, peek-buffered views over the manager's indexes.

mod lookahead;

use std::collections::{HashMap, hash_map, hash_set};
use std::slice;

use chrono::NaiveDate;

use crate::domain::{Book, Borrowing, Genre, Isbn};

pub use lookahead::{Criterion, LookaheadFilter};

/// Books of one genre published in one year, walked over that genre's bucket.
pub type BooksByGenreAndYear<'a> = LookaheadFilter<'a, Book, IndexedBooks<'a>, GenreAndYear>;

/// Books with at least a given number of authors, walked over the whole catalog.
pub type BooksWithMultipleAuthors<'a> = LookaheadFilter<'a, Book, hash_map::Values<'a, Isbn, Book>, MinAuthors>;

/// Overdue borrowings, walked over the full borrowing log.
pub type OverdueBorrowings<'a> = LookaheadFilter<'a, Borrowing, slice::Iter<'a, Borrowing>, OverdueOn>;

#[derive(Debug, Clone, Copy)]
pub struct GenreAndYear {
  pub genre: Genre,
  pub year: i32,
}

impl Criterion<Book> for GenreAndYear {
  fn matches(&self, book: &Book) -> bool {
    book.genre() == self.genre && book.publication_year() == self.year
  }

  fn describe(&self) -> String {
    format!("no books of genre {} published in {}", self.genre, self.year)
  }
}

#[derive(Debug, Clone, Copy)]
pub struct MinAuthors(pub usize);

impl Criterion<Book> for MinAuthors {
  fn matches(&self, book: &Book) -> bool {
    book.authors().len() >= self.0
  }

  fn describe(&self) -> String {
    format!("no books with {} or more authors", self.0)
  }
}

/// Overdue as of a date fixed when the iterator was created.
#[derive(Debug, Clone, Copy)]
pub struct OverdueOn(pub NaiveDate);

impl Criterion<Borrowing> for OverdueOn {
  fn matches(&self, borrowing: &Borrowing) -> bool {
    borrowing.is_overdue(self.0)
  }

  fn describe(&self) -> String {
    format!("no overdue borrowings as of {}", self.0)
  }
}

/// Resolves a set of ISBNs from a secondary index against the catalog,
/// falling back to books removed since they were indexed.
///
/// ISBNs found in neither map are skipped.
#[derive(Debug)]
pub struct IndexedBooks<'a> {
  isbns: Option<hash_set::Iter<'a, Isbn>>,
  books: &'a HashMap<Isbn, Book>,
  retired: &'a HashMap<Isbn, Book>,
}

impl<'a> IndexedBooks<'a> {
  pub(crate) fn new(
    isbns: Option<hash_set::Iter<'a, Isbn>>,
    books: &'a HashMap<Isbn, Book>,
    retired: &'a HashMap<Isbn, Book>,
  ) -> Self {
    Self { isbns, books, retired }
  }
}

impl<'a> Iterator for IndexedBooks<'a> {
  type Item = &'a Book;

  fn next(&mut self) -> Option<&'a Book> {
    let (books, retired) = (self.books, self.retired);
    self.isbns.as_mut()?.find_map(|isbn| books.get(isbn).or_else(|| retired.get(isbn)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn indexed_books_fall_back_to_retired_and_skip_unknown() {
    let mut books = HashMap::new();
    let kept = Book::new("1", "Kept", 2020, Genre::Fantasy);
    books.insert(kept.isbn().clone(), kept);
    let mut retired = HashMap::new();
    let shelved = Book::new("2", "Shelved", 2020, Genre::Fantasy);
    retired.insert(shelved.isbn().clone(), shelved);

    let bucket: HashSet<Isbn> = ["1", "2", "gone"].into_iter().map(Isbn::from).collect();
    let mut resolved: Vec<&str> =
      IndexedBooks::new(Some(bucket.iter()), &books, &retired).map(Book::title).collect();
    resolved.sort_unstable();
    assert_eq!(resolved, ["Kept", "Shelved"]);

    assert_eq!(IndexedBooks::new(None, &books, &retired).count(), 0);
  }

  #[test]
  fn criteria_messages_name_the_search() {
    let c = GenreAndYear { genre: Genre::History, year: 1990 };
    assert_eq!(c.describe(), "no books of genre HISTORY published in 1990");
    assert_eq!(MinAuthors(3).describe(), "no books with 3 or more authors");
  }
}
