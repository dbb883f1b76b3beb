use std::iter::FusedIterator;

use crate::errors::IterError;

/// Predicate deciding which source elements a [`LookaheadFilter`] yields.
pub trait Criterion<T: ?Sized> {
  fn matches(&self, item: &T) -> bool;

  /// Human-readable description of what was searched for, used in
  /// [`IterError::NoSuchElement`].
  fn describe(&self) -> String;
}

/// What the filter knows about the element after the last one handed out.
#[derive(Debug)]
enum Lookahead<T> {
  /// Nobody asked yet.
  Unknown,
  /// A matching element was pulled from the source and waits for `try_next`.
  Buffered(T),
  /// The source ran dry; stays this way.
  Exhausted,
}

/// Lazily filters a single-pass source, buffering at most one matching element.
///
/// `has_next` is idempotent: once resolved it answers from the buffer without
/// pulling again. The filter borrows its source, so the underlying collection
/// cannot change while it is alive.
#[derive(Debug)]
pub struct LookaheadFilter<'a, T, I, C> {
  source: I,
  criterion: C,
  state: Lookahead<&'a T>,
}

impl<'a, T, I, C> LookaheadFilter<'a, T, I, C>
where
  I: Iterator<Item = &'a T>,
  C: Criterion<T>,
{
  pub(crate) fn new(source: I, criterion: C) -> Self {
    Self { source, criterion, state: Lookahead::Unknown }
  }

  pub fn has_next(&mut self) -> bool {
    if let Lookahead::Unknown = self.state {
      let criterion = &self.criterion;
      self.state = match self.source.find(|item| criterion.matches(item)) {
        Some(item) => Lookahead::Buffered(item),
        None => Lookahead::Exhausted,
      };
    }
    matches!(self.state, Lookahead::Buffered(_))
  }

  /// Hands out the next matching element.
  ///
  /// Fails with [`IterError::NoSuchElement`] once the source is exhausted,
  /// and keeps failing on every later call.
  pub fn try_next(&mut self) -> Result<&'a T, IterError> {
    if !self.has_next() {
      return Err(IterError::NoSuchElement(self.criterion.describe()));
    }
    match std::mem::replace(&mut self.state, Lookahead::Unknown) {
      Lookahead::Buffered(item) => Ok(item),
      other => {
        self.state = other;
        Err(IterError::NoSuchElement(self.criterion.describe()))
      }
    }
  }

  /// Removal through a lookahead filter is never supported.
  pub fn remove(&mut self) -> Result<(), IterError> {
    Err(IterError::Unsupported("removal through a lookahead iterator"))
  }
}

impl<'a, T, I, C> Iterator for LookaheadFilter<'a, T, I, C>
where
  I: Iterator<Item = &'a T>,
  C: Criterion<T>,
{
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.try_next().ok()
  }
}

impl<'a, T, I, C> FusedIterator for LookaheadFilter<'a, T, I, C>
where
  I: Iterator<Item = &'a T>,
  C: Criterion<T>,
{
}
