//! Domain error codes.
//!
//! An [`ErrorCode`] is a raw numeric value paired with the [`ErrorDomain`]
//! that defines its meaning. Codes are cheap to copy and are propagated by
//! return value through [`Result`]; the domain renders them as text only when
//! asked. [`ErrorCode::raise`] turns a code into an [`Exception`], the error
//! type for callers that want `?` into a `dyn Error`.

mod code;
mod core_domain;
mod domain;
mod exception;

pub use code::ErrorCode;
pub use core_domain::{CoreErrc, CoreErrorDomain, get_core_error_domain, make_error_code};
pub use domain::{CodeType, DomainErrc, ErrorDomain, IdType, SupportDataType};
pub use exception::Exception;

/// `Result` whose error defaults to [`ErrorCode`].
pub type Result<T, E = ErrorCode> = core::result::Result<T, E>;
