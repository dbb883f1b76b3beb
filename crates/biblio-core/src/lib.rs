//! In-memory library lending: catalog, members, loans and their reports.

pub mod domain;
pub mod errors;
pub mod iter;
pub mod ordering;
pub mod ports;
pub mod services;

pub use errors::{IterError, LibraryError};
pub use services::LibraryManager;
