use super::ErrorCode;

/// The thrown form of an [`ErrorCode`], produced by [`ErrorCode::raise`].
///
/// Displays the domain message of the wrapped code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .code.message())]
pub struct Exception {
    code: ErrorCode,
}

impl Exception {
    pub const fn new(code: ErrorCode) -> Self {
        Exception { code }
    }

    /// The error code this exception was raised from.
    pub const fn error(&self) -> &ErrorCode {
        &self.code
    }
}

impl From<Exception> for ErrorCode {
    fn from(exception: Exception) -> Self {
        exception.code
    }
}
