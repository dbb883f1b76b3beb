use biblio_core::domain::Genre;
use biblio_core::ports::FixedClock;
use biblio_core::{LibraryError, LibraryManager};
use tracing::info;

/// Outcome of [`walkthrough`], one flag or count per step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walkthrough {
  pub first_loan: bool,
  pub double_loan_refused: bool,
  pub extended: bool,
  pub returned: bool,
  pub overdue_after_advance: usize,
  pub multi_author_books: usize,
}

const TOLKIEN: &str = "978-0-261-10238-5";
const CHRISTIE: &str = "978-0-00-711931-8";

/// Drives a seeded library through a lending cycle: two loans, a refused
/// double loan, time passing past the due date, an extension and a return.
pub fn walkthrough(
  library: &mut LibraryManager<FixedClock>,
  borrow_days: i64,
) -> Result<Walkthrough, LibraryError> {
  let mut outcome = Walkthrough::default();

  outcome.first_loan = library.borrow_book(TOLKIEN, "R001", borrow_days)?;
  outcome.double_loan_refused = !library.borrow_book(TOLKIEN, "R002", borrow_days)?;
  library.borrow_book(CHRISTIE, "R002", borrow_days)?;
  info!(available = library.get_available_books().len(), "two books on loan");

  let today = library.clock().advance(borrow_days.saturating_add(3))?;
  outcome.overdue_after_advance = library.get_overdue_borrowings().len();
  info!(%today, overdue = outcome.overdue_after_advance, "clock moved past the due date");

  outcome.extended = library.extend_borrowing_period(CHRISTIE, "R002", 7)?;
  outcome.returned = library.return_book(TOLKIEN, "R001")?;
  info!(
    extended = outcome.extended,
    returned = outcome.returned,
    overdue = library.get_overdue_borrowings().len(),
    "loans settled"
  );

  let newest_first = library.sort_books_by_publication_year(&library.search_books_by_title("the"));
  for book in &newest_first {
    info!(%book, "title search");
  }

  for book in library.books_by_genre_and_year(Genre::Fantasy, 1954) {
    info!(%book, "fantasy from 1954");
  }

  for book in library.books_with_multiple_authors(2) {
    info!(%book, authors = book.authors().len(), "co-authored");
    outcome.multi_author_books += 1;
  }

  Ok(outcome)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::catalog;
  use biblio_core::ports::Clock;
  use chrono::NaiveDate;

  #[test]
  fn walkthrough_over_the_demo_catalog() {
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    let mut library = LibraryManager::with_clock(clock.clone());
    catalog::seed(&mut library).unwrap();

    let outcome = walkthrough(&mut library, 14).unwrap();

    assert_eq!(
      outcome,
      Walkthrough {
        first_loan: true,
        double_loan_refused: true,
        extended: true,
        returned: true,
        overdue_after_advance: 2,
        multi_author_books: 2,
      }
    );
    assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
    assert!(library.get_book_by_isbn(TOLKIEN).unwrap().is_available());
    assert!(!library.get_book_by_isbn(CHRISTIE).unwrap().is_available());
    assert_eq!(library.get_overdue_borrowings().len(), 0);
  }
}
