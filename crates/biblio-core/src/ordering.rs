//! Total orders over books, usable with `slice::sort_by`.
//!
//! All sorts in the crate are stable, so books that compare equal keep the
//! order of the input slice.

use std::cmp::Ordering;

use crate::domain::Book;

/// Compares two strings ignoring case, char by char, without allocating.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
  a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}

/// Title, case-insensitive.
pub fn by_title(a: &Book, b: &Book) -> Ordering {
  cmp_ignore_case(a.title(), b.title())
}

/// Newest publication year first.
pub fn by_publication_year(a: &Book, b: &Book) -> Ordering {
  b.publication_year().cmp(&a.publication_year())
}

/// Available books before lent ones.
pub fn by_availability(a: &Book, b: &Book) -> Ordering {
  (!a.is_available()).cmp(&!b.is_available())
}

/// Genre name (case-insensitive), then title.
pub fn by_genre_and_title(a: &Book, b: &Book) -> Ordering {
  cmp_ignore_case(a.genre().name(), b.genre().name()).then_with(|| by_title(a, b))
}

/// Tally entries with the highest count first.
pub(crate) fn by_count_desc<K>(a: &(K, usize), b: &(K, usize)) -> Ordering {
  b.1.cmp(&a.1)
}
