mod indexes;
mod lending;
pub mod library_manager;
mod reports;

pub use library_manager::LibraryManager;
