//! ara - `ara::core` views and error codes for Rust
//!
//! # Overview
//!
//! This crate re-exposes two standard facilities under the names of the
//! AUTOSAR Adaptive Platform `ara::core` API:
//!
//! - [`Span`]: a non-owning view over contiguous elements whose length is
//!   either fixed in the type or carried at run time.
//! - [`ErrorCode`]: an error value paired with the [`ErrorDomain`] that gives
//!   it meaning, propagated through [`Result`].
//!
//! # Quick Start
//!
//! ```
//! use ara::{CoreErrc, DYNAMIC_EXTENT, ErrorCode, Result, Span};
//!
//! fn header(frame: Span<'_, u8>) -> Result<Span<'_, u8, 4>> {
//!     if frame.size() < 4 {
//!         return Err(ErrorCode::from_errc(CoreErrc::InvalidArgument, frame.size() as i32));
//!     }
//!     Ok(frame.first_static::<4>())
//! }
//!
//! let frame = [0xCA, 0xFE, 0xBA, 0xBE, 0x01, 0x02];
//! let span: Span<u8> = Span::from(&frame);
//!
//! assert_eq!(header(span).unwrap(), [0xCA, 0xFE, 0xBA, 0xBE]);
//! assert_eq!(span.subspan(4, DYNAMIC_EXTENT), [0x01, 0x02]);
//! assert_eq!(header(span.last(2)).unwrap_err(), CoreErrc::InvalidArgument);
//! ```
//!
//! # Error Reports
//!
//! [`render_error`] prints an [`ErrorCode`] as a `miette` diagnostic, and
//! [`ErrorReport`] plugs into any `miette`-based reporting pipeline.

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, ErrorReport, RenderConfig, render_error, render_error_to};

// Re-export public API from ara_core
pub use ara_core::{
    CodeType, CoreErrc, CoreErrorDomain, DYNAMIC_EXTENT, DomainErrc, ErrorCode, ErrorDomain,
    Exception, IdType, Result, Span, SpanMut, SupportDataType, get_core_error_domain,
    make_error_code, make_span, make_span_from_ptr_range, make_span_from_raw_parts, make_span_mut,
};
pub use ara_core::{error, span};
