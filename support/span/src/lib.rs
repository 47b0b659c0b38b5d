//! Non-owning views over contiguous sequences.
//!
//! A [`Span`] is a borrowed `(pointer, length)` pair, exactly like `&[T]`, with
//! one extra piece of information: an *extent*. The extent is either a number
//! fixed in the type (`Span<'_, T, 4>` always has four elements) or the
//! [`DYNAMIC_EXTENT`] sentinel, in which case the length is only known at run
//! time.
//!
//! ```text
//! Span<'a, T, 4>:     ptr ──▶ [T, T, T, T]        length checked once, at construction
//! Span<'a, T>:        ptr ──▶ [T, T, ..., T]      length carried at run time
//! ```
//!
//! Both forms are two words wide. A fixed extent costs nothing at run time; it
//! only lets downstream code rely on a size checked by the compiler.
//!
//! # Example
//!
//! ```
//! use ara_span::{DYNAMIC_EXTENT, Span};
//!
//! let storage = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! // Dynamic extent: the length is data.
//! let all: Span<i32> = Span::from(&storage);
//! assert_eq!(all.subspan(2, 4), [3, 4, 5, 6]);
//! assert_eq!(all.last(4), [6, 7, 8, 9]);
//!
//! // Static extent: the length is part of the type.
//! let fixed = Span::from_array(&storage);
//! let head: Span<i32, 3> = fixed.first_static::<3>();
//! let tail: Span<i32, 7> = fixed.subspan_static::<2, DYNAMIC_EXTENT, 7>();
//! assert_eq!(head, [1, 2, 3]);
//! assert_eq!(tail.size(), 7);
//! ```
//!
//! # Contract violations
//!
//! Out-of-range indices, sub-views that do not fit, and sources whose length
//! disagrees with a fixed extent are programming errors, not recoverable
//! failures. They are reported through [`contract::violated`], which logs the
//! violation and panics. When both extents are known to the compiler the same
//! checks happen at compile time instead.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod contract;
pub mod extent;
mod make;
mod span;
mod span_mut;

pub use contract::ContractViolation;
pub use extent::{DYNAMIC_EXTENT, subspan_extent};
pub use make::{make_span, make_span_from_ptr_range, make_span_from_raw_parts, make_span_mut};
pub use span::Span;
pub use span_mut::SpanMut;

/// Logging setup shared by the tests of this workspace.
///
/// Enabled for this crate's own tests and, for dependents, through the
/// `test-utils` feature.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    /// Routes `tracing` events to the test writer, at `debug` unless
    /// `RUST_LOG` says otherwise.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
