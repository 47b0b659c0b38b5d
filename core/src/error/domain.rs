use core::fmt;

use super::{ErrorCode, Exception};

/// Raw error value within a domain.
pub type CodeType = i32;

/// Vendor-specific context attached to an [`ErrorCode`]; not part of its identity.
pub type SupportDataType = i32;

/// Unique identifier of an [`ErrorDomain`].
pub type IdType = u64;

/// A family of error values and the meaning attached to them.
///
/// Domains are usually process-wide statics; [`ErrorCode`] holds a
/// `&'static dyn ErrorDomain`. Two domains are the same domain iff their
/// [`id`](Self::id)s are equal.
pub trait ErrorDomain: Sync {
    /// Unique identifier of the domain.
    fn id(&self) -> IdType;

    /// Short name, e.g. `"Core"`.
    fn name(&self) -> &'static str;

    /// Human-readable text for `code`.
    fn message(&self, code: CodeType) -> &'static str;

    /// Maps `code` to its thrown representation.
    fn throw_as_exception(&self, code: ErrorCode) -> Exception {
        Exception::new(code)
    }
}

impl PartialEq for dyn ErrorDomain {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for dyn ErrorDomain {}

impl fmt::Debug for dyn ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#018x})", self.name(), self.id())
    }
}

/// An error enumeration that belongs to exactly one [`ErrorDomain`].
///
/// Implementing it lets the enum convert into an [`ErrorCode`] directly.
pub trait DomainErrc: Copy {
    /// The domain every value of this enum belongs to.
    fn domain() -> &'static dyn ErrorDomain;

    /// Raw value of `self` within [`domain`](Self::domain).
    fn code(self) -> CodeType;
}
