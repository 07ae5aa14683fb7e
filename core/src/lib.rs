//! Immutable container types for chaining computations without unwrapping: [`Opt`] for a possibly absent value,
//! [`Either`] for a value of one of two types, and [`Try`] for the outcome of a fallible computation. The three
//! convert into each other, and [`NullableExt`] gives a native [`Option`] the same vocabulary.
//!
//! ```
//! use trio_core::{Either, NullableExt, Opt, Try};
//!
//! assert_eq!(Opt::from(None::<i32>).map(|x| x + 1).or_else(-1), -1);
//! assert_eq!(Opt::from(Some(5)).map(|x| x + 1).or_else(-1), 6);
//! assert_eq!(Some(1).to_left("absent"), Either::Left(1));
//!
//! let parsed = Try::of(|| "12".parse::<i32>());
//! assert_eq!(parsed.to_option(), Opt::Some(12));
//! ```

pub mod error;
pub mod opt;
pub mod either;
pub mod try_;
pub mod nullable;

pub use error::{BoxError, Error, Panic};
pub use opt::Opt;
pub use either::Either;
pub use try_::Try;
pub use nullable::NullableExt;
