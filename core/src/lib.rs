pub mod optional;
pub mod nullable;
pub mod error;

pub mod app;

pub use error::OptionalError;
pub use nullable::Nullable;
pub use optional::Optional;
