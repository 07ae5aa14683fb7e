use std::hash::Hash;

use hashbrown::HashSet;

use crate::either::Either;
use crate::error::Error;
use crate::opt::Opt;
use crate::try_::Try;

/// Gives a native [`Option`] the vocabulary of [`Opt`], without wrapping it first.
///
/// Every method converts into [`Opt`] and delegates to it. Mapping, filtering and defaulting are not part of this
/// trait: [`Option::map`], [`Option::filter`] and [`Option::unwrap_or`] already have the same semantics, and inherent
/// methods take precedence over trait methods.
pub trait NullableExt<T>: Sized {
  fn into_opt(self) -> Opt<T>;

  /// Calls `on_present` with the value if present, otherwise calls `on_absent`. Returns `self`.
  fn fold(self, on_present: impl FnOnce(&T), on_absent: impl FnOnce()) -> Self;
  #[inline]
  fn if_present(self, on_present: impl FnOnce(&T)) -> Self {
    self.fold(on_present, || {})
  }
  #[inline]
  fn if_absent(self, on_absent: impl FnOnce()) -> Self {
    self.fold(|_| {}, on_absent)
  }

  #[inline]
  fn or_else_get(self, other: impl FnOnce() -> T) -> T {
    self.into_opt().or_else_get(other)
  }
  #[inline]
  fn or_else_err<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
    self.into_opt().or_else_err(error)
  }

  #[inline]
  fn to_left<U>(self, right: U) -> Either<T, U> {
    self.into_opt().to_left(right)
  }
  #[inline]
  fn to_right<U>(self, left: U) -> Either<U, T> {
    self.into_opt().to_right(left)
  }
  #[inline]
  fn to_try<E>(self, error: impl FnOnce() -> E) -> Try<T, E> {
    self.into_opt().to_try(error)
  }
  #[inline]
  fn to_try_or_absent<E: From<Error>>(self) -> Try<T, E> {
    self.into_opt().to_try_or_absent()
  }

  #[inline]
  fn to_singleton_vec(self) -> Vec<T> {
    self.into_opt().to_vec()
  }
  #[inline]
  fn to_singleton_set(self) -> HashSet<T> where
    T: Eq + Hash
  {
    self.into_opt().to_set()
  }
  #[inline]
  fn to_singleton_iter(self) -> std::option::IntoIter<T> {
    self.into_opt().into_iter()
  }
}

impl<T> NullableExt<T> for Option<T> {
  #[inline]
  fn into_opt(self) -> Opt<T> { Opt::from(self) }

  #[inline]
  fn fold(self, on_present: impl FnOnce(&T), on_absent: impl FnOnce()) -> Self {
    self.into_opt().fold(on_present, on_absent).or_null()
  }
}
