mod config;
mod infrastructure;
mod scenario;

use anyhow::Context;
use biblio_core::LibraryManager;
use biblio_core::ports::{Clock, FixedClock, SystemClock};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use config::LendingConfig;
use infrastructure::catalog;
use infrastructure::reporter::LogReporter;

/// `RUST_LOG` wins; otherwise the filter from the `[lending]` section.
fn init_tracing(fallback: &str) -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(fallback))
    .with_context(|| format!("invalid log filter {fallback:?}"))?;

  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).try_init()?;
  Ok(())
}

pub fn run() -> anyhow::Result<()> {
  let config = LendingConfig::load().context("failed to load [lending] config")?;
  init_tracing(&config.log_filter)?;

  // --- Wiring ---

  // The demo starts from the real date but moves time itself.
  let clock = FixedClock::new(SystemClock.today());
  let mut library = LibraryManager::with_clock(clock);

  let added = catalog::seed(&mut library)?;
  info!(
    added,
    readers = library.get_all_readers().len(),
    borrow_days = config.default_borrow_days,
    "library ready"
  );

  // --- Lending cycle ---

  let outcome = scenario::walkthrough(&mut library, config.default_borrow_days)?;
  info!(?outcome, "walkthrough finished");

  // --- Reports ---

  let summary = LogReporter::new(config.report_limit).report(&library)?;
  info!(?summary, "reports written");

  Ok(())
}
