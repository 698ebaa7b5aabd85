use thiserror::Error;

/// Returned when a [`BigInt`](crate::BigInt) does not fit the requested native integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("big integer out of range for {target}")]
pub struct TryFromBigIntError {
    target: &'static str,
}

impl TryFromBigIntError {
    pub(crate) fn new(target: &'static str) -> Self {
        TryFromBigIntError { target }
    }

    /// Name of the native type the conversion targeted.
    pub fn target(&self) -> &'static str {
        self.target
    }
}
