use std::fmt::{self, Display, Formatter};

use crate::error::OptionalError;
use crate::nullable::Nullable;

/// A container holding either no value ([`Empty`](Optional::Empty)) or exactly one value
/// ([`Present`](Optional::Present)).
///
/// Immutable once constructed: every operation either consumes the optional and returns a new one, or returns a plain
/// value. Use [`as_ref`](Self::as_ref) to operate on a borrow instead.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Optional<T> {
  Empty,
  Present(T),
}

// Construction

impl<T> Optional<T> {
  /// Creates an empty optional.
  #[inline]
  pub const fn empty() -> Self { Self::Empty }

  /// Creates an optional holding `value`.
  ///
  /// `value` is wrapped as is: when `T` is itself an `Option`, `of(None)` yields a present optional holding `None`. Use
  /// [`try_of`](Self::try_of) to reject an absent value, or [`of_nullable`](Self::of_nullable) to turn it into an empty
  /// optional.
  #[inline]
  pub const fn of(value: T) -> Self { Self::Present(value) }

  /// Creates an optional holding the value of `value`, failing with [`OptionalError::IllegalArgument`] if `value` is
  /// absent.
  #[inline]
  pub fn try_of(value: impl Nullable<Value=T>) -> Result<Self, OptionalError> {
    value.into_value().map(Self::Present).ok_or(OptionalError::IllegalArgument)
  }

  /// Creates an optional holding the value of `value`, or an empty optional if `value` is absent.
  #[inline]
  pub fn of_nullable(value: impl Nullable<Value=T>) -> Self {
    match value.into_value() {
      Some(value) => Self::Present(value),
      None => Self::Empty,
    }
  }
}

// Queries and extraction

impl<T> Optional<T> {
  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }
  #[inline]
  pub const fn is_empty(&self) -> bool { matches!(self, Self::Empty) }

  /// Converts from `&Optional<T>` to `Optional<&T>`.
  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Empty => Optional::Empty,
    }
  }

  /// Returns the value, or [`OptionalError::NoSuchElement`] if empty.
  #[inline]
  pub fn get(self) -> Result<T, OptionalError> {
    self.or_else_throw(|| OptionalError::NoSuchElement)
  }

  /// Returns the value, or `default` if empty. `default` is evaluated by the caller even when a value is present; use
  /// [`or_else_get`](Self::or_else_get) to compute it on demand.
  #[inline]
  pub fn or_else(self, default: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Empty => default,
    }
  }

  /// Returns the value, or the result of calling `supplier` if empty. `supplier` is not called when a value is present.
  #[inline]
  pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Empty => supplier(),
    }
  }

  /// Returns the value, or `Err` with the error created by `error` if empty.
  #[inline]
  pub fn or_else_throw<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Empty => Err(error()),
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Empty => None,
    }
  }

  /// Returns an iterator over the zero or one contained values.
  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.as_ref().into_option().into_iter()
  }
}

// Conditional execution

impl<T> Optional<T> {
  /// Calls `action` with the value if present; does nothing if empty.
  #[inline]
  pub fn if_present(self, action: impl FnOnce(T)) {
    if let Self::Present(value) = self {
      action(value);
    }
  }

  /// Calls `action` with the value if present, or `empty_action` if empty.
  #[inline]
  pub fn if_present_or_else(self, action: impl FnOnce(T), empty_action: impl FnOnce()) {
    match self {
      Self::Present(value) => action(value),
      Self::Empty => empty_action(),
    }
  }
}

// Filtering and transformation

impl<T> Optional<T> {
  /// Returns this optional if it holds a value matching `predicate`, or an empty optional otherwise. `predicate` is not
  /// called when empty.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Present(value) => if predicate(&value) { Self::Present(value) } else { Self::Empty },
      Self::Empty => Self::Empty,
    }
  }

  /// Maps the value with `transform` if present. `transform` is not called when empty.
  ///
  /// The result of `transform` is always wrapped as present, even when it is a `None`. Use
  /// [`map_nullable`](Self::map_nullable) for transforms that may return an absent value.
  #[inline]
  pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Self::Present(value) => Optional::Present(transform(value)),
      Self::Empty => Optional::Empty,
    }
  }

  /// Maps the value with `transform` if present, producing an empty optional when `transform` returns an absent
  /// value.
  #[inline]
  pub fn map_nullable<N: Nullable>(self, transform: impl FnOnce(T) -> N) -> Optional<N::Value> {
    match self {
      Self::Present(value) => Optional::of_nullable(transform(value)),
      Self::Empty => Optional::Empty,
    }
  }

  #[inline]
  pub fn flat_map<U>(self, transform: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Self::Present(value) => transform(value),
      Self::Empty => Optional::Empty,
    }
  }

  /// Returns this optional if present, or the optional produced by `supplier` otherwise.
  #[inline]
  pub fn or(self, supplier: impl FnOnce() -> Self) -> Self {
    match self {
      Self::Present(value) => Self::Present(value),
      Self::Empty => supplier(),
    }
  }
}


impl<T: Display> Display for Optional<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Present(value) => write!(f, "Optional[{}]", value),
      Self::Empty => f.write_str("Optional.empty"),
    }
  }
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::Empty }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::of_nullable(value) }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_option() }
}

impl<T> IntoIterator for Optional<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.into_option().into_iter() }
}
impl<'a, T> IntoIterator for &'a Optional<T> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_ref().into_option().serialize(serializer)
  }
}
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Self::from)
  }
}
