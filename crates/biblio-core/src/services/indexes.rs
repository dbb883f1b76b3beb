use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::{Genre, Isbn};

/// Genre -> ISBNs shelved under it.
///
/// Add-only: removing a book from the catalog leaves its entry here, so
/// [`GenreIndex::counts`] keeps counting it. Pruning would be a `forget`
/// call from `LibraryManager::remove_book`.
#[derive(Debug, Default)]
pub(crate) struct GenreIndex {
  buckets: HashMap<Genre, HashSet<Isbn>>,
}

impl GenreIndex {
  pub(crate) fn insert(&mut self, genre: Genre, isbn: Isbn) {
    self.buckets.entry(genre).or_default().insert(isbn);
  }

  pub(crate) fn bucket(&self, genre: Genre) -> Option<&HashSet<Isbn>> {
    self.buckets.get(&genre)
  }

  pub(crate) fn counts(&self) -> BTreeMap<Genre, usize> {
    self.buckets.iter().map(|(genre, isbns)| (*genre, isbns.len())).collect()
  }
}

/// Author name -> ISBNs they wrote, in insertion order. Add-only as well.
#[derive(Debug, Default)]
pub(crate) struct AuthorIndex {
  by_author: HashMap<String, Vec<Isbn>>,
}

impl AuthorIndex {
  pub(crate) fn insert(&mut self, author: &str, isbn: &Isbn) {
    let isbns = self.by_author.entry(author.to_string()).or_default();
    if !isbns.contains(isbn) {
      isbns.push(isbn.clone());
    }
  }

  pub(crate) fn books_of(&self, author: &str) -> &[Isbn] {
    self.by_author.get(author).map(Vec::as_slice).unwrap_or_default()
  }
}
