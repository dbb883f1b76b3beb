use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use crate::domain::ids::{Isbn, ReaderId};
use crate::errors::LibraryError;

/// One loan of a book to a reader.
///
/// Records are append-only history: once returned they stay in the log with
/// their `return_date` set. Equality uses (isbn, reader, borrow date).
#[derive(Debug, Clone, Serialize)]
pub struct Borrowing {
  isbn: Isbn,
  reader_id: ReaderId,
  borrow_date: NaiveDate,
  due_date: NaiveDate,
  return_date: Option<NaiveDate>,
}

impl Borrowing {
  pub(crate) fn new(isbn: Isbn, reader_id: ReaderId, borrow_date: NaiveDate, due_date: NaiveDate) -> Self {
    Self { isbn, reader_id, borrow_date, due_date, return_date: None }
  }

  pub fn isbn(&self) -> &Isbn {
    &self.isbn
  }

  pub fn reader_id(&self) -> &ReaderId {
    &self.reader_id
  }

  pub fn borrow_date(&self) -> NaiveDate {
    self.borrow_date
  }

  pub fn due_date(&self) -> NaiveDate {
    self.due_date
  }

  pub fn return_date(&self) -> Option<NaiveDate> {
    self.return_date
  }

  pub fn is_returned(&self) -> bool {
    self.return_date.is_some()
  }

  /// Still out and `today` is strictly past the due date.
  pub fn is_overdue(&self, today: NaiveDate) -> bool {
    self.return_date.is_none() && today > self.due_date
  }

  pub(crate) fn is_active_for(&self, isbn: &str, reader_id: &str) -> bool {
    !self.is_returned() && self.isbn.as_str() == isbn && self.reader_id.as_str() == reader_id
  }

  pub(crate) fn close(&mut self, on: NaiveDate) {
    debug_assert!(self.return_date.is_none(), "borrowing closed twice");
    self.return_date = Some(on);
  }

  pub(crate) fn move_due_date(&mut self, days: i64) -> Result<NaiveDate, LibraryError> {
    self.due_date = shift(self.due_date, days)?;
    Ok(self.due_date)
  }
}

/// `date` moved by a signed number of days, refusing to leave chrono's calendar range.
pub(crate) fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, LibraryError> {
  TimeDelta::try_days(days)
    .and_then(|delta| date.checked_add_signed(delta))
    .ok_or(LibraryError::DateOutOfRange { date, days })
}

impl PartialEq for Borrowing {
  fn eq(&self, other: &Self) -> bool {
    self.isbn == other.isbn && self.reader_id == other.reader_id && self.borrow_date == other.borrow_date
  }
}

impl Eq for Borrowing {}

impl Hash for Borrowing {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.isbn.hash(state);
    self.reader_id.hash(state);
    self.borrow_date.hash(state);
  }
}

impl fmt::Display for Borrowing {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Borrowing{{isbn='{}', reader id='{}', borrow date={}, due date={}}}",
      self.isbn, self.reader_id, self.borrow_date, self.due_date
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn loan() -> Borrowing {
    Borrowing::new("111".into(), "r1".into(), date(2024, 3, 1), date(2024, 3, 15))
  }

  #[test]
  fn overdue_only_after_due_date() {
    let b = loan();
    assert!(!b.is_overdue(date(2024, 3, 15)));
    assert!(b.is_overdue(date(2024, 3, 16)));
  }

  #[test]
  fn returned_loans_are_never_overdue() {
    let mut b = loan();
    b.close(date(2024, 4, 1));
    assert!(b.is_returned());
    assert!(!b.is_overdue(date(2024, 5, 1)));
    assert_eq!(b.return_date(), Some(date(2024, 4, 1)));
  }

  #[test]
  fn due_date_moves_both_ways() {
    let mut b = loan();
    assert_eq!(b.move_due_date(3), Ok(date(2024, 3, 18)));
    assert_eq!(b.move_due_date(-10), Ok(date(2024, 3, 8)));
  }

  #[test]
  fn shifting_past_the_calendar_fails() {
    assert_eq!(
      shift(NaiveDate::MAX, 1),
      Err(LibraryError::DateOutOfRange { date: NaiveDate::MAX, days: 1 })
    );
    assert!(shift(date(2024, 1, 1), i64::MAX).is_err());
  }

  #[test]
  fn equality_uses_isbn_reader_and_borrow_date() {
    let mut a = loan();
    let b = loan();
    a.move_due_date(30).unwrap();
    assert_eq!(a, b);
    let other_day = Borrowing::new("111".into(), "r1".into(), date(2024, 3, 2), date(2024, 3, 15));
    assert_ne!(b, other_day);
  }
}
