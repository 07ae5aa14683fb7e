use std::any::Any;

use thiserror::Error;

/// Boxed error, the default failure type of [`Try`](crate::Try).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Value accessed through the wrong variant of a container.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum Error {
  #[error("no value present; not an instance of Opt::Some")]
  NoValue,
  #[error("not an instance of Either::Left")]
  NotLeft,
  #[error("not an instance of Either::Right")]
  NotRight,
  #[error("not an instance of Try::Failure")]
  NotAFailure,
}

/// A panic caught by [`Try::catching`](crate::Try::catching) or one of the operations built on it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("computation panicked: {message}")]
pub struct Panic {
  message: String,
}
impl Panic {
  #[inline]
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  #[inline]
  pub fn message(&self) -> &str { &self.message }

  /// Extracts the message from a payload returned by [`std::panic::catch_unwind`]. Payloads that are neither a
  /// `String` nor a `&'static str` get a placeholder message.
  pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
    let message = match payload.downcast::<String>() {
      Ok(message) => *message,
      Err(payload) => match payload.downcast::<&'static str>() {
        Ok(message) => (*message).to_owned(),
        Err(_) => "Box<dyn Any>".to_owned(),
      },
    };
    Self { message }
  }
}
