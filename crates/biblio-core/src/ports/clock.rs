use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{Datelike, Local, NaiveDate};

use crate::domain::borrowing::shift;
use crate::errors::LibraryError;

/// Source of "today" for every date the lending core records or compares.
pub trait Clock {
  fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    Local::now().date_naive()
  }
}

/// Manually driven clock. Clones share the same date, so a test can keep a
/// handle while the manager owns another.
#[derive(Debug, Clone)]
pub struct FixedClock {
  days_from_ce: Arc<AtomicI32>,
}

impl FixedClock {
  pub fn new(today: NaiveDate) -> Self {
    Self { days_from_ce: Arc::new(AtomicI32::new(today.num_days_from_ce())) }
  }

  pub fn set(&self, today: NaiveDate) {
    self.days_from_ce.store(today.num_days_from_ce(), Ordering::Relaxed);
  }

  /// Moves the shared date by `days` (negative goes back) and returns it.
  pub fn advance(&self, days: i64) -> Result<NaiveDate, LibraryError> {
    let next = shift(self.today(), days)?;
    self.set(next);
    Ok(next)
  }
}

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate {
    // Only dates produced by `num_days_from_ce` are ever stored.
    NaiveDate::from_num_days_from_ce_opt(self.days_from_ce.load(Ordering::Relaxed)).unwrap_or_default()
  }
}

impl<C: Clock + ?Sized> Clock for &C {
  fn today(&self) -> NaiveDate {
    (**self).today()
  }
}
