use biblio_core::ports::Clock;
use biblio_core::{LibraryError, LibraryManager};
use tracing::{info, warn};

/// What a report run emitted, for callers that want more than log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
  pub genres: usize,
  pub popular_books: usize,
  pub active_readers: usize,
  pub overdue_readers: usize,
  pub overdue_borrowings: usize,
}

/// Writes the lending reports as `tracing` events.
///
/// Overdue findings go out at `warn`, everything else at `info`.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
  limit: usize,
}

impl LogReporter {
  pub fn new(limit: usize) -> Self {
    Self { limit }
  }

  pub fn report<C: Clock>(&self, library: &LibraryManager<C>) -> Result<ReportSummary, LibraryError> {
    let mut summary = ReportSummary::default();

    for (genre, count) in library.get_genre_statistics() {
      info!(%genre, count, "genre statistics");
      summary.genres += 1;
    }

    for (rank, (book, count)) in library.get_most_popular_books(self.limit)?.iter().enumerate() {
      info!(rank = rank + 1, isbn = %book.isbn(), title = book.title(), count, "popular book");
      summary.popular_books += 1;
    }

    for (rank, (reader, count)) in library.get_most_active_readers(self.limit)?.iter().enumerate() {
      info!(rank = rank + 1, reader_id = %reader.id(), name = %reader.name, count, "active reader");
      summary.active_readers += 1;
    }

    for reader in library.get_readers_with_overdue_books() {
      warn!(reader_id = %reader.id(), email = %reader.email, "reader holds overdue books");
      summary.overdue_readers += 1;
    }

    let mut overdue = library.overdue_borrowings_iter();
    while overdue.has_next() {
      let Ok(borrowing) = overdue.try_next() else { break };
      let late_by = (library.clock().today() - borrowing.due_date()).num_days();
      warn!(isbn = %borrowing.isbn(), reader_id = %borrowing.reader_id(), late_by, "overdue borrowing");
      summary.overdue_borrowings += 1;
    }

    Ok(summary)
  }
}
