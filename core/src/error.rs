use thiserror::Error;

/// Errors produced by [`Optional`](crate::Optional) operations.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionalError {
  /// An absent value was passed where a present value is required.
  #[error("Value must not be absent")]
  IllegalArgument,
  /// A value was requested from an empty optional.
  #[error("No value present")]
  NoSuchElement,
}
