use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

use hashbrown::HashSet;

use crate::either::Either;
use crate::error::Error;
use crate::try_::Try;

/// A possibly present value, or the absence thereof.
///
/// An `Opt` is either [`Some`](Opt::Some), wrapping a value, or [`None`](Opt::None). Construct one through its
/// variants, or from a native [`Option`] with [`from_nullable`](Opt::from_nullable) or [`From`], which yields `None`
/// exactly when the native value is absent.
///
/// Transform it with [`map`](Opt::map), [`flat_map`](Opt::flat_map) and [`filter`](Opt::filter) without unwrapping,
/// and terminate the chain with [`fold`](Opt::fold), [`or_else`](Opt::or_else), [`or_else_err`](Opt::or_else_err),
/// or a conversion into [`Either`] or [`Try`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Opt<T> {
  None,
  Some(T),
}

impl<T> Default for Opt<T> {
  #[inline]
  fn default() -> Self { Self::None }
}

impl<T> Opt<T> {
  #[inline]
  pub const fn some(value: T) -> Self { Self::Some(value) }
  #[inline]
  pub const fn none() -> Self { Self::None }
  /// Creates [`Some`](Opt::Some) if `value` is present, otherwise [`None`](Opt::None).
  #[inline]
  pub fn from_nullable(value: Option<T>) -> Self {
    match value {
      Option::Some(value) => Self::Some(value),
      Option::None => Self::None,
    }
  }

  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Some(_)) }
  #[inline]
  pub const fn is_absent(&self) -> bool { matches!(self, Self::None) }
  /// Returns `true` if `self` is [`Some`](Opt::Some) and its value equals `other`.
  #[inline]
  pub fn contains<U>(&self, other: &U) -> bool where
    T: PartialEq<U>
  {
    match self {
      Self::Some(value) => value == other,
      Self::None => false,
    }
  }

  #[inline]
  pub fn as_ref(&self) -> Opt<&T> {
    match self {
      Self::Some(value) => Opt::Some(value),
      Self::None => Opt::None,
    }
  }

  /// Gets a reference to the wrapped value.
  ///
  /// # Errors
  ///
  /// Returns [`Error::NoValue`] if `self` is [`None`](Opt::None).
  #[inline]
  pub fn value(&self) -> Result<&T, Error> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None => Err(Error::NoValue),
    }
  }
  /// Gets the wrapped value.
  ///
  /// # Errors
  ///
  /// Returns [`Error::NoValue`] if `self` is [`None`](Opt::None).
  #[inline]
  pub fn into_value(self) -> Result<T, Error> {
    self.or_else_err(|| Error::NoValue)
  }
}

impl<T> Opt<T> {
  /// Applies `f` to the wrapped value if present, otherwise returns [`None`](Opt::None).
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
    match self {
      Self::Some(value) => f(value),
      Self::None => Opt::None,
    }
  }

  /// Applies `f` to the wrapped value if present and wraps the result, otherwise returns [`None`](Opt::None).
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
    self.flat_map(|value| Opt::Some(f(value)))
  }

  /// Like [`map`](Opt::map), but `f` may produce an absent result, in which case the outcome collapses to
  /// [`None`](Opt::None).
  #[inline]
  pub fn map_nullable<U>(self, f: impl FnOnce(T) -> Option<U>) -> Opt<U> {
    self.flat_map(|value| Opt::from(f(value)))
  }

  /// Keeps the wrapped value only if it satisfies `predicate`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    self.flat_map(|value| if predicate(&value) { Opt::Some(value) } else { Opt::None })
  }

  /// Calls `on_present` with the wrapped value if present, otherwise calls `on_absent`. Returns `self`.
  #[inline]
  pub fn fold(self, on_present: impl FnOnce(&T), on_absent: impl FnOnce()) -> Self {
    match &self {
      Self::Some(value) => on_present(value),
      Self::None => on_absent(),
    }
    self
  }
  #[inline]
  pub fn if_present(self, on_present: impl FnOnce(&T)) -> Self {
    self.fold(on_present, || {})
  }
  #[inline]
  pub fn if_absent(self, on_absent: impl FnOnce()) -> Self {
    self.fold(|_| {}, on_absent)
  }
}

impl<T> Opt<T> {
  /// Converts into [`Left`](Either::Left) if present, otherwise into [`Right`](Either::Right) of `right`.
  #[inline]
  pub fn to_left<U>(self, right: U) -> Either<T, U> {
    match self {
      Self::Some(value) => Either::Left(value),
      Self::None => Either::Right(right),
    }
  }
  /// Converts into [`Right`](Either::Right) if present, otherwise into [`Left`](Either::Left) of `left`.
  #[inline]
  pub fn to_right<U>(self, left: U) -> Either<U, T> {
    match self {
      Self::Some(value) => Either::Right(value),
      Self::None => Either::Left(left),
    }
  }

  /// Converts into [`Success`](Try::Success) if present, otherwise into a [`Failure`](Try::Failure) holding the error
  /// produced by `error`.
  #[inline]
  pub fn to_try<E>(self, error: impl FnOnce() -> E) -> Try<T, E> {
    match self {
      Self::Some(value) => Try::Success(value),
      Self::None => Try::Failure(error()),
    }
  }
  /// Like [`to_try`](Opt::to_try), failing with [`Error::NoValue`] when absent.
  #[inline]
  pub fn to_try_or_absent<E: From<Error>>(self) -> Try<T, E> {
    self.to_try(|| Error::NoValue.into())
  }
}

impl<T> Opt<T> {
  #[inline]
  pub fn or_else_get(self, other: impl FnOnce() -> T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => other(),
    }
  }
  #[inline]
  pub fn or_else(self, other: T) -> T {
    self.or_else_get(|| other)
  }
  #[inline]
  pub fn or_null(self) -> Option<T> {
    match self {
      Self::Some(value) => Option::Some(value),
      Self::None => Option::None,
    }
  }
  /// Gets the wrapped value, or the error produced by `error` if absent.
  #[inline]
  pub fn or_else_err<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None => Err(error()),
    }
  }

  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.as_ref().into_iter()
  }
  #[inline]
  pub fn to_vec(self) -> Vec<T> {
    self.into_iter().collect()
  }
  #[inline]
  pub fn to_set(self) -> HashSet<T> where
    T: Eq + Hash
  {
    self.into_iter().collect()
  }
}

impl<T> Opt<Opt<T>> {
  /// Removes one level of nesting.
  #[inline]
  pub fn flatten(self) -> Opt<T> {
    self.flat_map(|inner| inner)
  }
}


impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::from_nullable(value) }
}
impl<T> From<Opt<T>> for Option<T> {
  #[inline]
  fn from(value: Opt<T>) -> Self { value.or_null() }
}

impl<T> IntoIterator for Opt<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.or_null().into_iter() }
}
impl<'a, T> IntoIterator for &'a Opt<T> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Display> Display for Opt<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Some(value) => write!(f, "Some({})", value),
      Self::None => f.write_str("None"),
    }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn from_nullable() {
    assert_eq!(Opt::from(Some(1)), Opt::Some(1));
    assert_eq!(Opt::<i32>::from(None), Opt::None);
    assert_eq!(Opt::from_nullable(Some("a")), Opt::some("a"));
    assert_eq!(Opt::<i32>::default(), Opt::none());
  }

  #[test]
  fn presence_queries() {
    assert!(Opt::Some(1).is_present());
    assert!(!Opt::Some(1).is_absent());
    assert!(Opt::<i32>::None.is_absent());
    assert!(Opt::Some(1).contains(&1));
    assert!(!Opt::Some(1).contains(&2));
    assert!(!Opt::<i32>::None.contains(&1));
  }

  #[test]
  fn value_access() {
    assert_eq!(Opt::Some(1).value(), Ok(&1));
    assert_eq!(Opt::<i32>::None.value(), Err(Error::NoValue));
    assert_eq!(Opt::Some("a".to_owned()).into_value(), Ok("a".to_owned()));
    assert_eq!(Opt::<String>::None.into_value(), Err(Error::NoValue));
  }

  #[test]
  fn map_and_flat_map() {
    assert_eq!(Opt::Some(5).map(|x| x + 1), Opt::Some(6));
    assert_eq!(Opt::<i32>::None.map(|x| x + 1), Opt::None);
    assert_eq!(Opt::Some(5).flat_map(|x| Opt::Some(x * 2)), Opt::Some(10));
    assert_eq!(Opt::Some(5).flat_map(|_| Opt::<i32>::None), Opt::None);
    assert_eq!(Opt::<i32>::None.flat_map(|x| Opt::Some(x * 2)), Opt::None);
  }

  #[test]
  fn map_nullable_collapses_absent_result() {
    assert_eq!(Opt::Some(4).map_nullable(|x| if x % 2 == 0 { Some(x / 2) } else { None }), Opt::Some(2));
    assert_eq!(Opt::Some(3).map_nullable(|x| if x % 2 == 0 { Some(x / 2) } else { None }), Opt::None);
    assert_eq!(Opt::<i32>::None.map_nullable(Some), Opt::None);
  }

  #[test]
  fn filter() {
    assert_eq!(Opt::Some(4).filter(|x| x % 2 == 0), Opt::Some(4));
    assert_eq!(Opt::Some(3).filter(|x| x % 2 == 0), Opt::None);
    assert_eq!(Opt::<i32>::None.filter(|_| true), Opt::None);
  }

  #[test]
  fn fold_runs_exactly_one_branch() {
    let present = Cell::new(0);
    let absent = Cell::new(0);
    let opt = Opt::Some(7).fold(|v| present.set(*v), || absent.set(absent.get() + 1));
    assert_eq!(opt, Opt::Some(7));
    assert_eq!((present.get(), absent.get()), (7, 0));

    let opt = Opt::<i32>::None.fold(|v| present.set(*v), || absent.set(absent.get() + 1));
    assert_eq!(opt, Opt::None);
    assert_eq!((present.get(), absent.get()), (7, 1));
  }

  #[test]
  fn if_present_and_if_absent() {
    let calls = Cell::new(0);
    Opt::Some(1).if_present(|_| calls.set(calls.get() + 1)).if_absent(|| calls.set(calls.get() + 10));
    assert_eq!(calls.get(), 1);
    Opt::<i32>::None.if_present(|_| calls.set(calls.get() + 1)).if_absent(|| calls.set(calls.get() + 10));
    assert_eq!(calls.get(), 11);
  }

  #[test]
  fn flatten() {
    assert_eq!(Opt::Some(Opt::Some(1)).flatten(), Opt::Some(1));
    assert_eq!(Opt::Some(Opt::<i32>::None).flatten(), Opt::None);
    assert_eq!(Opt::<Opt<i32>>::None.flatten(), Opt::None);
  }

  #[test]
  fn terminals() {
    assert_eq!(Opt::Some(1).or_else(2), 1);
    assert_eq!(Opt::None.or_else(2), 2);
    assert_eq!(Opt::None.or_else_get(|| 3), 3);
    assert_eq!(Opt::Some(1).or_null(), Some(1));
    assert_eq!(Opt::<i32>::None.or_null(), None);
    assert_eq!(Opt::Some(1).or_else_err(|| "absent"), Ok(1));
    assert_eq!(Opt::<i32>::None.or_else_err(|| "absent"), Err("absent"));
  }

  #[test]
  fn conversions() {
    assert_eq!(Opt::Some(1).to_left("r"), Either::Left(1));
    assert_eq!(Opt::<i32>::None.to_left("r"), Either::Right("r"));
    assert_eq!(Opt::Some(1).to_right("l"), Either::Right(1));
    assert_eq!(Opt::<i32>::None.to_right("l"), Either::Left("l"));
    assert_eq!(Opt::Some(1).to_try(|| "absent"), Try::Success(1));
    assert_eq!(Opt::<i32>::None.to_try(|| "absent"), Try::Failure("absent"));
    assert_eq!(Opt::<i32>::None.to_try_or_absent::<Error>(), Try::Failure(Error::NoValue));
  }

  #[test]
  fn iteration() {
    assert_eq!(Opt::Some(1).to_vec(), vec![1]);
    assert!(Opt::<i32>::None.to_vec().is_empty());
    assert!(Opt::Some(1).to_set().contains(&1));
    assert!(Opt::<i32>::None.to_set().is_empty());
    assert_eq!(Opt::Some(1).iter().collect::<Vec<_>>(), vec![&1]);
    let mut sum = 0;
    for v in &Opt::Some(2) {
      sum += v;
    }
    for v in Opt::Some(3) {
      sum += v;
    }
    assert_eq!(sum, 5);
  }

  #[test]
  fn ordering_matches_native_option() {
    let values = [None, Some(-1), Some(0), Some(2)];
    for a in values {
      for b in values {
        assert_eq!(Opt::from(a) < Opt::from(b), a < b);
        assert_eq!(Opt::from(a).cmp(&Opt::from(b)), a.cmp(&b));
      }
    }

    let mut native = vec![Some(2), None, Some(1)];
    let mut wrapped: Vec<Opt<i32>> = native.iter().copied().map(Opt::from).collect();
    native.sort();
    wrapped.sort();
    assert_eq!(wrapped.into_iter().map(Opt::or_null).collect::<Vec<_>>(), native);
  }

  #[test]
  fn display() {
    assert_eq!(Opt::Some(1).to_string(), "Some(1)");
    assert_eq!(Opt::<i32>::None.to_string(), "None");
  }
}
