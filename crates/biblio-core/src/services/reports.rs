use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use crate::domain::{Book, Genre, Reader};
use crate::errors::LibraryError;
use crate::iter::{
  BooksByGenreAndYear, BooksWithMultipleAuthors, GenreAndYear, IndexedBooks, LookaheadFilter, MinAuthors,
  OverdueBorrowings, OverdueOn,
};
use crate::ordering::by_count_desc;
use crate::ports::Clock;
use crate::services::LibraryManager;

/// Counts occurrences, highest first; ties keep the order of first appearance.
fn tally<'a, K: Eq + Hash + 'a>(keys: impl Iterator<Item = &'a K>) -> Vec<(&'a K, usize)> {
  let mut slots: HashMap<&K, usize> = HashMap::new();
  let mut counts: Vec<(&K, usize)> = Vec::new();
  for key in keys {
    match slots.get(key) {
      Some(&slot) => counts[slot].1 += 1,
      None => {
        slots.insert(key, counts.len());
        counts.push((key, 1));
      }
    }
  }
  counts.sort_by(by_count_desc);
  counts
}

fn require_limit(limit: usize) -> Result<(), LibraryError> {
  if limit == 0 {
    return Err(LibraryError::InvalidArgument("limit must be greater than zero"));
  }
  Ok(())
}

impl<C: Clock> LibraryManager<C> {
  // -------- STATISTICS --------

  /// Number of books per genre as recorded by the add-only genre index.
  pub fn get_genre_statistics(&self) -> BTreeMap<Genre, usize> {
    self.genre_index.counts()
  }

  /// Books ranked by how often they were ever borrowed, at most `limit` of them.
  ///
  /// Books no longer in the catalog are skipped and do not use up the limit.
  pub fn get_most_popular_books(&self, limit: usize) -> Result<Vec<(Book, usize)>, LibraryError> {
    require_limit(limit)?;
    Ok(
      tally(self.borrowings.iter().map(|b| b.isbn()))
        .into_iter()
        .filter_map(|(isbn, count)| self.books.get(isbn).map(|book| (book.clone(), count)))
        .take(limit)
        .collect(),
    )
  }

  /// Readers ranked by number of borrowings, at most `limit` of them.
  pub fn get_most_active_readers(&self, limit: usize) -> Result<Vec<(Reader, usize)>, LibraryError> {
    require_limit(limit)?;
    Ok(
      tally(self.borrowings.iter().map(|b| b.reader_id()))
        .into_iter()
        .filter_map(|(id, count)| self.readers.get(id).map(|reader| (reader.clone(), count)))
        .take(limit)
        .collect(),
    )
  }

  /// Distinct readers holding at least one overdue book. Order is unspecified.
  pub fn get_readers_with_overdue_books(&self) -> Vec<Reader> {
    let today = self.clock.today();
    let ids: HashSet<_> = self.borrowings.iter().filter(|b| b.is_overdue(today)).map(|b| b.reader_id()).collect();
    ids.into_iter().filter_map(|id| self.readers.get(id)).cloned().collect()
  }

  // -------- ITERATORS --------

  /// Walks the genre index, so books removed after being added still show up.
  pub fn books_by_genre_and_year(&self, genre: Genre, year: i32) -> BooksByGenreAndYear<'_> {
    let bucket = self.genre_index.bucket(genre).map(|isbns| isbns.iter());
    LookaheadFilter::new(IndexedBooks::new(bucket, &self.books, &self.retired), GenreAndYear { genre, year })
  }

  pub fn books_with_multiple_authors(&self, min_authors: usize) -> BooksWithMultipleAuthors<'_> {
    LookaheadFilter::new(self.books.values(), MinAuthors(min_authors))
  }

  /// Overdue borrowings as of the clock's date at the time of the call.
  pub fn overdue_borrowings_iter(&self) -> OverdueBorrowings<'_> {
    LookaheadFilter::new(self.borrowings.iter(), OverdueOn(self.clock.today()))
  }
}
