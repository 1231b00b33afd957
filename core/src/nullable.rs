use crate::Optional;

/// A value that may be the absence sentinel.
///
/// Constructors and transformations of [`Optional`] that accept a `Nullable` turn an absent value into
/// [`Optional::Empty`], so a present optional never wraps absence.
pub trait Nullable {
  type Value;

  /// Returns the value, or `None` if this is the absence sentinel.
  fn into_value(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
  type Value = T;

  #[inline]
  fn into_value(self) -> Option<T> { self }
}

impl<T> Nullable for Optional<T> {
  type Value = T;

  #[inline]
  fn into_value(self) -> Option<T> { self.into_option() }
}


#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn option_into_value() {
    assert_eq!(Some(3).into_value(), Some(3));
    assert_eq!(None::<i32>.into_value(), None);
  }

  #[test]
  fn optional_into_value() {
    assert_eq!(Optional::of("x").into_value(), Some("x"));
    assert_eq!(Optional::<&str>::empty().into_value(), None);
  }
}
