pub mod catalog;
pub mod reporter;
