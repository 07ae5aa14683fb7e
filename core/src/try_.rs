use std::fmt::{self, Display, Formatter};
use std::panic::{self, AssertUnwindSafe};

use crate::either::Either;
use crate::error::{BoxError, Error, Panic};
use crate::opt::Opt;

/// The outcome of a fallible computation: [`Success`](Try::Success) with a value, or [`Failure`](Try::Failure) with
/// an error.
///
/// Create one with a capturing constructor: [`of`](Try::of) runs a computation that returns a [`Result`], and
/// [`catching`](Try::catching) runs a computation that may panic. These are the only operations that turn a raised
/// error into a `Failure`; [`map`](Try::map) and [`recover`](Try::recover) route through `catching`, so a panic in
/// their function becomes a `Failure`. [`flat_map`](Try::flat_map) and [`recover_with`](Try::recover_with) do not
/// capture: their function already returns a `Try`, and a panic inside it propagates to the caller.
///
/// Because a captured panic has to be stored as `E`, `catching`, `map` and `recover` require `E: From<Panic>`. The
/// default [`BoxError`] satisfies it; a domain error opts in with a `#[from] Panic` variant. Other error types, such
/// as `&str`, can still use `flat_map` and `recover_with`.
///
/// ```
/// use trio_core::{Opt, Panic, Try};
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// enum LookupError {
///   #[error("absent")]
///   Absent,
///   #[error(transparent)]
///   Panicked(#[from] Panic),
/// }
///
/// let found = Opt::Some(1).to_try(|| LookupError::Absent).map(|x| x + 1);
/// assert_eq!(found, Try::Success(2));
/// let missing = Opt::<i32>::None.to_try(|| LookupError::Absent).recover(|_| 0);
/// assert_eq!(missing, Try::Success(0));
/// ```
///
/// Leave the monadic style with [`value`](Try::value) or [`propagate_failure`](Try::propagate_failure), which return
/// the held error unchanged so it can be propagated with `?`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Try<T, E = BoxError> {
  Success(T),
  Failure(E),
}

impl<T, E> Try<T, E> {
  /// Runs `f`, turning an `Err` it returns into [`Failure`](Try::Failure) and an `Ok` into
  /// [`Success`](Try::Success).
  #[inline]
  pub fn of(f: impl FnOnce() -> Result<T, E>) -> Self {
    f().into()
  }

  /// Runs `f`, turning a panic inside it into [`Failure`](Try::Failure) and its return value into
  /// [`Success`](Try::Success).
  ///
  /// Panics are caught with [`std::panic::catch_unwind`], so this only captures them when the crate is built with
  /// `panic = "unwind"`. The panic hook still runs before the panic is captured.
  pub fn catching(f: impl FnOnce() -> T) -> Self where
    E: From<Panic>
  {
    Self::of(|| panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
      let panic = Panic::from_payload(payload);
      #[cfg(feature = "tracing")]
      tracing::debug!(%panic, "captured panic as failure");
      E::from(panic)
    }))
  }

  #[inline]
  pub const fn success(value: T) -> Self { Self::Success(value) }
  #[inline]
  pub const fn failure(error: E) -> Self { Self::Failure(error) }

  #[inline]
  pub const fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }
  #[inline]
  pub const fn is_failure(&self) -> bool { matches!(self, Self::Failure(_)) }
  /// Returns `true` if `self` is [`Success`](Try::Success) and its value equals `other`.
  #[inline]
  pub fn contains<U>(&self, other: &U) -> bool where
    T: PartialEq<U>
  {
    match self {
      Self::Success(value) => value == other,
      Self::Failure(_) => false,
    }
  }

  #[inline]
  pub fn as_ref(&self) -> Try<&T, &E> {
    match self {
      Self::Success(value) => Try::Success(value),
      Self::Failure(error) => Try::Failure(error),
    }
  }

  /// Gets the success value.
  ///
  /// # Errors
  ///
  /// Returns the held error, unchanged, if `self` is [`Failure`](Try::Failure).
  #[inline]
  pub fn value(self) -> Result<T, E> { self.into_result() }
  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    match self {
      Self::Success(value) => Ok(value),
      Self::Failure(error) => Err(error),
    }
  }
  /// Gets a reference to the held error.
  ///
  /// # Errors
  ///
  /// Returns [`Error::NotAFailure`] if `self` is [`Success`](Try::Success).
  #[inline]
  pub fn error(&self) -> Result<&E, Error> {
    match self {
      Self::Success(_) => Err(Error::NotAFailure),
      Self::Failure(error) => Ok(error),
    }
  }

  /// Returns `self` if it is [`Success`](Try::Success), otherwise the held error, unchanged, as `Err`.
  ///
  /// ```
  /// use trio_core::Try;
  ///
  /// fn parse(text: &str) -> Result<i32, std::num::ParseIntError> {
  ///   let parsed = Try::of(|| text.parse::<i32>()).propagate_failure()?;
  ///   Ok(parsed.or_else(0) * 2)
  /// }
  ///
  /// assert_eq!(parse("21"), Ok(42));
  /// assert!(parse("twenty-one").is_err());
  /// ```
  #[inline]
  pub fn propagate_failure(self) -> Result<Self, E> {
    match self {
      Self::Failure(error) => Err(error),
      success => Ok(success),
    }
  }

  /// Destructures into a pair of which exactly one side is present.
  #[inline]
  pub fn to_pair(self) -> (Option<T>, Option<E>) {
    match self {
      Self::Success(value) => (Some(value), None),
      Self::Failure(error) => (None, Some(error)),
    }
  }
}

impl<T, E> Try<T, E> {
  /// Applies `f` to the success value, otherwise passes the held error through. A panic in `f` is not captured.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Try<U, E>) -> Try<U, E> {
    match self {
      Self::Success(value) => f(value),
      Self::Failure(error) => Try::Failure(error),
    }
  }

  /// Applies `f` to the success value inside [`catching`](Try::catching), so a panic in `f` becomes a
  /// [`Failure`](Try::Failure). A held error passes through.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Try<U, E> where
    E: From<Panic>
  {
    self.flat_map(|value| Try::catching(|| f(value)))
  }

  /// Replaces a [`Failure`](Try::Failure) by the result of `f`. A panic in `f` is not captured.
  #[inline]
  pub fn recover_with(self, f: impl FnOnce(E) -> Try<T, E>) -> Self {
    match self {
      Self::Success(value) => Self::Success(value),
      Self::Failure(error) => f(error),
    }
  }

  /// Replaces a [`Failure`](Try::Failure) by the value of `f`, run inside [`catching`](Try::catching).
  #[inline]
  pub fn recover(self, f: impl FnOnce(E) -> T) -> Self where
    E: From<Panic>
  {
    self.recover_with(|error| Try::catching(|| f(error)))
  }

  /// Calls `on_success` or `on_failure` depending on the variant. Returns `self`.
  #[inline]
  pub fn fold(self, on_success: impl FnOnce(&T), on_failure: impl FnOnce(&E)) -> Self {
    match &self {
      Self::Success(value) => on_success(value),
      Self::Failure(error) => on_failure(error),
    }
    self
  }
  #[inline]
  pub fn if_success(self, on_success: impl FnOnce(&T)) -> Self {
    self.fold(on_success, |_| {})
  }
  #[inline]
  pub fn if_failure(self, on_failure: impl FnOnce(&E)) -> Self {
    self.fold(|_| {}, on_failure)
  }
}

impl<T, E> Try<T, E> {
  #[inline]
  pub fn to_option(self) -> Opt<T> {
    match self {
      Self::Success(value) => Opt::Some(value),
      Self::Failure(_) => Opt::None,
    }
  }
  #[inline]
  pub fn to_either(self) -> Either<T, E> {
    match self {
      Self::Success(value) => Either::Left(value),
      Self::Failure(error) => Either::Right(error),
    }
  }

  #[inline]
  pub fn or_else_get(self, other: impl FnOnce() -> T) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(_) => other(),
    }
  }
  #[inline]
  pub fn or_else(self, other: T) -> T {
    self.or_else_get(|| other)
  }

  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.as_ref().to_option().into_iter()
  }
}

impl<T, E> Try<Try<T, E>, E> {
  /// Removes one level of nesting. An outer [`Failure`](Try::Failure) is returned unchanged.
  #[inline]
  pub fn flatten(self) -> Try<T, E> {
    self.flat_map(|inner| inner)
  }
}


impl<T, E> From<Result<T, E>> for Try<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Success(value),
      Err(error) => Self::Failure(error),
    }
  }
}
impl<T, E> From<Try<T, E>> for Result<T, E> {
  #[inline]
  fn from(value: Try<T, E>) -> Self { value.into_result() }
}

impl<T, E> IntoIterator for Try<T, E> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.to_option().into_iter() }
}
impl<'a, T, E> IntoIterator for &'a Try<T, E> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Display, E: Display> Display for Try<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Success(value) => write!(f, "Success({})", value),
      Self::Failure(error) => write!(f, "Failure({})", error),
    }
  }
}
