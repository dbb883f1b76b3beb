// crates/biblio-core/src/errors.rs
use chrono::NaiveDate;
use thiserror::Error;

/// Caller-contract violations raised by the lending core.
///
/// These never describe a domain outcome: a missing book, a duplicate id or a
/// book that is already lent are reported through `Ok(false)` / `Ok(None)`.
/// Every variant is returned before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),

  #[error("date out of range: {date} shifted by {days} days")]
  DateOutOfRange { date: NaiveDate, days: i64 },
}

/// Failures of the lookahead iterators' explicit protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterError {
  #[error("no such element: {0}")]
  NoSuchElement(String),

  #[error("unsupported operation: {0}")]
  Unsupported(&'static str),
}

pub(crate) fn require_non_blank(value: &str, what: &'static str) -> Result<(), LibraryError> {
  if value.trim().is_empty() {
    return Err(LibraryError::InvalidArgument(what));
  }
  Ok(())
}
