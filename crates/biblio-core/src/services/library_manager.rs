use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Book, Borrowing, Genre, Isbn, Reader, ReaderId};
use crate::errors::{LibraryError, require_non_blank};
use crate::iter::IndexedBooks;
use crate::ordering;
use crate::ports::{Clock, SystemClock};
use crate::services::indexes::{AuthorIndex, GenreIndex};

/// The lending aggregate: catalog, members, loan history and their indexes.
///
/// Every mutation goes through `&mut self`, so wrapping the manager in a
/// `Mutex` is enough to share it between threads. Reads return owned copies;
/// only the lookahead iterators borrow internal storage.
///
/// Lending operations live in `lending.rs`, statistics and iterators in
/// `reports.rs`.
///
/// The genre and author indexes are add-only. A removed book moves to
/// `retired`, so index-backed views (genre and author listings, the genre and
/// year iterator, genre statistics) keep reporting it as it was at removal.
#[derive(Debug)]
pub struct LibraryManager<C = SystemClock> {
  pub(super) books: HashMap<Isbn, Book>,
  pub(super) readers: HashMap<ReaderId, Reader>,
  pub(super) retired: HashMap<Isbn, Book>,
  pub(super) borrowings: Vec<Borrowing>,
  pub(super) genre_index: GenreIndex,
  pub(super) author_index: AuthorIndex,
  pub(super) clock: C,
}

impl LibraryManager<SystemClock> {
  pub fn new() -> Self {
    Self::with_clock(SystemClock)
  }
}

impl Default for LibraryManager<SystemClock> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C: Clock> LibraryManager<C> {
  pub fn with_clock(clock: C) -> Self {
    Self {
      books: HashMap::new(),
      readers: HashMap::new(),
      retired: HashMap::new(),
      borrowings: Vec::new(),
      genre_index: GenreIndex::default(),
      author_index: AuthorIndex::default(),
      clock,
    }
  }

  pub fn clock(&self) -> &C {
    &self.clock
  }

  // -------- BOOKS --------

  /// Registers a book and indexes it by genre and by author.
  ///
  /// Returns `false` without touching anything when the ISBN is taken.
  pub fn add_book(&mut self, book: Book) -> bool {
    if self.books.contains_key(book.isbn()) {
      debug!(isbn = %book.isbn(), "book rejected: isbn already registered");
      return false;
    }

    let isbn = book.isbn().clone();
    self.retired.remove(&isbn);
    self.genre_index.insert(book.genre(), isbn.clone());
    for author in book.authors() {
      self.author_index.insert(author, &isbn);
    }

    debug!(isbn = %isbn, genre = %book.genre(), "book added");
    self.books.insert(isbn, book);
    true
  }

  /// A blank ISBN matches no book.
  pub fn get_book_by_isbn(&self, isbn: &str) -> Option<Book> {
    self.books.get(isbn).cloned()
  }

  /// Drops the book from the catalog. Genre and author indexes keep their entries.
  pub fn remove_book(&mut self, isbn: &str) -> bool {
    let Some(book) = self.books.remove(isbn) else {
      return false;
    };
    debug!(isbn, "book removed");
    self.retired.insert(book.isbn().clone(), book);
    true
  }

  /// Resolves an ISBN taken from a secondary index, removed books included.
  fn indexed_book(&self, isbn: &Isbn) -> Option<&Book> {
    self.books.get(isbn).or_else(|| self.retired.get(isbn))
  }

  pub fn get_all_books(&self) -> Vec<Book> {
    self.books.values().cloned().collect()
  }

  /// Walks the add-only genre index, so removed books stay listed.
  pub fn get_books_by_genre(&self, genre: Genre) -> Vec<Book> {
    IndexedBooks::new(self.genre_index.bucket(genre).map(|isbns| isbns.iter()), &self.books, &self.retired)
      .filter(|book| book.genre() == genre)
      .cloned()
      .collect()
  }

  /// Exact author name lookup; a blank name yields nothing. Removed books stay listed.
  pub fn get_books_by_author(&self, author: &str) -> Vec<Book> {
    if author.trim().is_empty() {
      return Vec::new();
    }
    self
      .author_index
      .books_of(author)
      .iter()
      .filter_map(|isbn| self.indexed_book(isbn))
      .filter(|book| book.authors().contains(author))
      .cloned()
      .collect()
  }

  /// Books whose title contains `title_part`, ignoring case.
  pub fn search_books_by_title(&self, title_part: &str) -> Vec<Book> {
    let needle = title_part.to_lowercase();
    self.books.values().filter(|book| book.title().to_lowercase().contains(&needle)).cloned().collect()
  }

  pub fn get_available_books(&self) -> Vec<Book> {
    self.books.values().filter(|book| book.is_available()).cloned().collect()
  }

  pub fn sort_books_by_title(&self, books: &[Book]) -> Vec<Book> {
    sorted(books, ordering::by_title)
  }

  /// Newest first.
  pub fn sort_books_by_publication_year(&self, books: &[Book]) -> Vec<Book> {
    sorted(books, ordering::by_publication_year)
  }

  /// Available books first.
  pub fn sort_books_by_availability(&self, books: &[Book]) -> Vec<Book> {
    sorted(books, ordering::by_availability)
  }

  pub fn sort_books_by_genre_and_title(&self, books: &[Book]) -> Vec<Book> {
    sorted(books, ordering::by_genre_and_title)
  }

  // -------- READERS --------

  pub fn add_reader(&mut self, reader: Reader) -> bool {
    if self.readers.contains_key(reader.id()) {
      debug!(reader_id = %reader.id(), "reader rejected: id already registered");
      return false;
    }
    debug!(reader_id = %reader.id(), "reader added");
    self.readers.insert(reader.id().clone(), reader);
    true
  }

  pub fn get_reader_by_id(&self, reader_id: &str) -> Result<Option<Reader>, LibraryError> {
    require_non_blank(reader_id, "reader id must not be blank")?;
    Ok(self.readers.get(reader_id).cloned())
  }

  pub fn remove_reader(&mut self, reader_id: &str) -> Result<bool, LibraryError> {
    require_non_blank(reader_id, "reader id must not be blank")?;
    let removed = self.readers.remove(reader_id).is_some();
    if removed {
      debug!(reader_id, "reader removed");
    }
    Ok(removed)
  }

  pub fn get_all_readers(&self) -> Vec<Reader> {
    self.readers.values().cloned().collect()
  }
}

fn sorted(books: &[Book], order: fn(&Book, &Book) -> std::cmp::Ordering) -> Vec<Book> {
  let mut out = books.to_vec();
  out.sort_by(order);
  out
}
