use thiserror::Error;

/// Raised when a walk reaches a value whose fields cannot be enumerated.
///
/// Not retryable: the caller has to lower the input into an introspectable
/// shape before comparing again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("cannot enumerate fields of opaque value `{0}`")]
    Opaque(&'static str),
}
