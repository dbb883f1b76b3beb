use tracing::debug;

use crate::domain::borrowing::shift;
use crate::domain::{Borrowing, ReaderId};
use crate::errors::{LibraryError, require_non_blank};
use crate::ports::Clock;
use crate::services::LibraryManager;

fn require_pair(isbn: &str, reader_id: &str) -> Result<(), LibraryError> {
  require_non_blank(isbn, "isbn must not be blank")?;
  require_non_blank(reader_id, "reader id must not be blank")
}

impl<C: Clock> LibraryManager<C> {
  /// Lends a book for `borrow_days` days starting today.
  ///
  /// `Ok(false)` when the book or reader is unknown, or the book already has
  /// an active borrowing. On success the book becomes unavailable.
  pub fn borrow_book(&mut self, isbn: &str, reader_id: &str, borrow_days: i64) -> Result<bool, LibraryError> {
    require_pair(isbn, reader_id)?;
    let today = self.clock.today();
    let due_date = shift(today, borrow_days)?;

    if !self.readers.contains_key(reader_id) {
      debug!(isbn, reader_id, "borrow refused: unknown reader");
      return Ok(false);
    }
    if self.borrowings.iter().any(|b| !b.is_returned() && b.isbn().as_str() == isbn) {
      debug!(isbn, reader_id, "borrow refused: book already lent");
      return Ok(false);
    }
    let Some(book) = self.books.get_mut(isbn) else {
      debug!(isbn, reader_id, "borrow refused: unknown book");
      return Ok(false);
    };

    self.borrowings.push(Borrowing::new(book.isbn().clone(), ReaderId::from(reader_id), today, due_date));
    book.set_available(false);
    debug!(isbn, reader_id, %due_date, "book borrowed");
    Ok(true)
  }

  /// Closes the active borrowing of `isbn` by `reader_id` and makes the book available.
  pub fn return_book(&mut self, isbn: &str, reader_id: &str) -> Result<bool, LibraryError> {
    require_pair(isbn, reader_id)?;
    if !self.readers.contains_key(reader_id) {
      return Ok(false);
    }
    let Some(book) = self.books.get_mut(isbn) else {
      return Ok(false);
    };
    let Some(borrowing) = self.borrowings.iter_mut().find(|b| b.is_active_for(isbn, reader_id)) else {
      debug!(isbn, reader_id, "return refused: no active borrowing");
      return Ok(false);
    };

    let today = self.clock.today();
    borrowing.close(today);
    book.set_available(true);
    debug!(isbn, reader_id, %today, "book returned");
    Ok(true)
  }

  /// Moves the due date of an active borrowing by `additional_days`.
  ///
  /// Negative values shorten the loan; there is no lower bound.
  pub fn extend_borrowing_period(
    &mut self,
    isbn: &str,
    reader_id: &str,
    additional_days: i64,
  ) -> Result<bool, LibraryError> {
    require_pair(isbn, reader_id)?;
    if additional_days == 0 {
      return Err(LibraryError::InvalidArgument("additional days must not be zero"));
    }
    if !self.readers.contains_key(reader_id) || !self.books.contains_key(isbn) {
      return Ok(false);
    }
    let Some(borrowing) = self.borrowings.iter_mut().find(|b| b.is_active_for(isbn, reader_id)) else {
      return Ok(false);
    };

    let due_date = borrowing.move_due_date(additional_days)?;
    debug!(isbn, reader_id, %due_date, "borrowing period changed");
    Ok(true)
  }

  // -------- QUERIES --------

  pub fn get_all_borrowings(&self) -> Vec<Borrowing> {
    self.borrowings.clone()
  }

  pub fn get_overdue_borrowings(&self) -> Vec<Borrowing> {
    let today = self.clock.today();
    self.borrowings.iter().filter(|b| b.is_overdue(today)).cloned().collect()
  }

  /// Full history of a reader, returned loans included.
  pub fn get_borrowings_by_reader(&self, reader_id: &str) -> Result<Vec<Borrowing>, LibraryError> {
    require_non_blank(reader_id, "reader id must not be blank")?;
    Ok(self.borrowings.iter().filter(|b| b.reader_id().as_str() == reader_id).cloned().collect())
  }

  /// Full history of a book, returned loans included.
  pub fn get_borrowings_by_book(&self, isbn: &str) -> Result<Vec<Borrowing>, LibraryError> {
    require_non_blank(isbn, "isbn must not be blank")?;
    Ok(self.borrowings.iter().filter(|b| b.isbn().as_str() == isbn).cloned().collect())
  }
}
