use thiserror::Error;

/// Error type shared by every converter.
///
/// Two kinds only: the input was unusable before any work started, or the
/// work itself failed. HTTP handlers map the former to client errors and
/// the latter to server errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Required input was missing, empty, or syntactically unusable.
    #[error("{0}")]
    Precondition(String),

    /// The conversion itself failed.
    #[error("{0}")]
    Conversion(String),
}

impl ConvertError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        ConvertError::Precondition(msg.into())
    }

    pub fn conversion(msg: impl Into<String>) -> Self {
        ConvertError::Conversion(msg.into())
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, ConvertError::Precondition(_))
    }
}
