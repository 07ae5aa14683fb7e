use std::fmt::{self, Display, Formatter};

use crate::error::Error;
use crate::opt::Opt;

/// A value that is one of two types: [`Left`](Either::Left) or [`Right`](Either::Right).
///
/// Exactly one side holds a value. The accessors [`left`](Either::left) and [`right`](Either::right) return an
/// [`Opt`] of the side, while [`left_value`](Either::left_value) and [`right_value`](Either::right_value) signal
/// [`Error::NotLeft`] or [`Error::NotRight`] when accessed through the wrong side.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}

impl<L, R> Either<L, R> {
  #[inline]
  pub const fn left_of(value: L) -> Self { Self::Left(value) }
  #[inline]
  pub const fn right_of(value: R) -> Self { Self::Right(value) }

  #[inline]
  pub const fn is_left(&self) -> bool { matches!(self, Self::Left(_)) }
  #[inline]
  pub const fn is_right(&self) -> bool { matches!(self, Self::Right(_)) }

  #[inline]
  pub fn as_ref(&self) -> Either<&L, &R> {
    match self {
      Self::Left(value) => Either::Left(value),
      Self::Right(value) => Either::Right(value),
    }
  }

  #[inline]
  pub fn left(&self) -> Opt<&L> { self.as_ref().into_left() }
  #[inline]
  pub fn right(&self) -> Opt<&R> { self.as_ref().into_right() }
  #[inline]
  pub fn into_left(self) -> Opt<L> {
    match self {
      Self::Left(value) => Opt::Some(value),
      Self::Right(_) => Opt::None,
    }
  }
  #[inline]
  pub fn into_right(self) -> Opt<R> {
    match self {
      Self::Left(_) => Opt::None,
      Self::Right(value) => Opt::Some(value),
    }
  }

  /// # Errors
  ///
  /// Returns [`Error::NotLeft`] if `self` is [`Right`](Either::Right).
  #[inline]
  pub fn left_value(&self) -> Result<&L, Error> {
    self.left().or_else_err(|| Error::NotLeft)
  }
  /// # Errors
  ///
  /// Returns [`Error::NotRight`] if `self` is [`Left`](Either::Left).
  #[inline]
  pub fn right_value(&self) -> Result<&R, Error> {
    self.right().or_else_err(|| Error::NotRight)
  }

  /// Destructures into a pair of which exactly one side is present.
  #[inline]
  pub fn to_pair(self) -> (Option<L>, Option<R>) {
    match self {
      Self::Left(value) => (Some(value), None),
      Self::Right(value) => (None, Some(value)),
    }
  }
}

impl<L, R> Either<L, R> {
  /// Calls `on_left` or `on_right` depending on the side that holds a value. Returns `self`.
  #[inline]
  pub fn fold(self, on_left: impl FnOnce(&L), on_right: impl FnOnce(&R)) -> Self {
    match &self {
      Self::Left(value) => on_left(value),
      Self::Right(value) => on_right(value),
    }
    self
  }
  #[inline]
  pub fn if_left(self, on_left: impl FnOnce(&L)) -> Self {
    self.fold(on_left, |_| {})
  }
  #[inline]
  pub fn if_right(self, on_right: impl FnOnce(&R)) -> Self {
    self.fold(|_| {}, on_right)
  }

  #[inline]
  pub fn swap(self) -> Either<R, L> {
    match self {
      Self::Left(value) => Either::Right(value),
      Self::Right(value) => Either::Left(value),
    }
  }

  #[inline]
  pub fn map_left<U>(self, f: impl FnOnce(L) -> U) -> Either<U, R> {
    match self {
      Self::Left(value) => Either::Left(f(value)),
      Self::Right(value) => Either::Right(value),
    }
  }
  #[inline]
  pub fn map_right<U>(self, f: impl FnOnce(R) -> U) -> Either<L, U> {
    match self {
      Self::Left(value) => Either::Left(value),
      Self::Right(value) => Either::Right(f(value)),
    }
  }
}

impl<L, R> Either<Either<L, R>, R> {
  /// Unwraps a nested `Either` held on the left; an outer [`Right`](Either::Right) passes through.
  #[inline]
  pub fn flatten_left(self) -> Either<L, R> {
    match self {
      Self::Left(inner) => inner,
      Self::Right(value) => Either::Right(value),
    }
  }
}

impl<L, R> Either<L, Either<L, R>> {
  /// Unwraps a nested `Either` held on the right; an outer [`Left`](Either::Left) passes through.
  #[inline]
  pub fn flatten_right(self) -> Either<L, R> {
    match self {
      Self::Left(value) => Either::Left(value),
      Self::Right(inner) => inner,
    }
  }
}

impl<L: Display, R: Display> Display for Either<L, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Left(value) => write!(f, "Left({})", value),
      Self::Right(value) => write!(f, "Right({})", value),
    }
  }
}
