//! Precondition failures of the view types.

/// A broken precondition of a span operation.
///
/// These describe programming errors. They are never returned to the caller;
/// [`violated`] logs them and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("index {index} is out of range for a span of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("span extent {expected} does not match source length {actual}")]
    ExtentMismatch { expected: usize, actual: usize },

    #[error("sub-view at offset {offset} with count {count} exceeds a span of size {size}")]
    SubspanOutOfRange {
        offset: usize,
        count: usize,
        size: usize,
    },

    #[error("pointer range is inverted: last precedes first")]
    InvertedRange,

    #[error("element access on an empty span")]
    EmptyAccess,
}

/// Reports a contract violation and aborts the current operation.
#[cold]
#[track_caller]
pub fn violated(violation: ContractViolation) -> ! {
    tracing::error!(%violation, "span contract violated");
    panic!("contract violation: {violation}")
}
