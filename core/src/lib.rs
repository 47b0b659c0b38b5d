//! `ara::core` building blocks: contiguous views and domain error codes.
//!
//! - [`span`]: [`Span`] / [`SpanMut`], non-owning views with a static or
//!   dynamic extent (re-exported from `ara-span`).
//! - [`error`]: [`ErrorCode`], the `(value, domain)` pair callers propagate in
//!   a [`Result`], the [`ErrorDomain`] that gives it meaning, and the built-in
//!   [`CoreErrorDomain`].
//!
//! ```
//! use ara_core::{CoreErrc, ErrorCode, Result, Span};
//!
//! fn checked_first(values: Span<'_, u32>, count: usize) -> Result<Span<'_, u32>> {
//!     if count > values.size() {
//!         return Err(ErrorCode::from_errc(CoreErrc::InvalidArgument, count as i32));
//!     }
//!     Ok(values.first(count))
//! }
//!
//! let storage = [1, 2, 3];
//! let span = Span::from(&storage);
//! assert_eq!(checked_first(span, 2).unwrap(), [1, 2]);
//!
//! let error = checked_first(span, 5).unwrap_err();
//! assert_eq!(error, CoreErrc::InvalidArgument);
//! assert_eq!(error.message(), "Invalid argument");
//! assert_eq!(error.support_data(), 5);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub mod error;

pub use ara_span as span;

pub use ara_span::{
    DYNAMIC_EXTENT, Span, SpanMut, make_span, make_span_from_ptr_range, make_span_from_raw_parts,
    make_span_mut,
};
pub use error::{
    CodeType, CoreErrc, CoreErrorDomain, DomainErrc, ErrorCode, ErrorDomain, Exception, IdType,
    Result, SupportDataType, get_core_error_domain, make_error_code,
};
