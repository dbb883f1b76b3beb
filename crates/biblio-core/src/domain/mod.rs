pub mod book;
pub mod borrowing;
pub mod genre;
pub mod ids;
pub mod reader;

pub use book::Book;
pub use borrowing::Borrowing;
pub use genre::{Genre, GenreParseError};
pub use ids::{Isbn, ReaderId};
pub use reader::{Reader, ReaderCategory, ReaderCategoryParseError};
