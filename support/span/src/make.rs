//! Free-function constructors, for call sites that prefer not to name the span type.

use crate::{Span, SpanMut};

/// A dynamic-extent view over any container with contiguous storage.
///
/// ```
/// use ara_span::make_span;
///
/// let values = vec![1, 2, 3];
/// let span = make_span(&values);
/// assert_eq!(span.size(), 3);
/// ```
pub fn make_span<T, C>(container: &C) -> Span<'_, T>
where
    C: AsRef<[T]> + ?Sized,
{
    Span::from_container(container)
}

pub fn make_span_mut<T, C>(container: &mut C) -> SpanMut<'_, T>
where
    C: AsMut<[T]> + ?Sized,
{
    SpanMut::from_container(container)
}

/// # Safety
///
/// See [`Span::from_raw_parts`].
pub unsafe fn make_span_from_raw_parts<'a, T>(data: *const T, count: usize) -> Span<'a, T> {
    // SAFETY: forwarded to the caller.
    unsafe { Span::from_raw_parts(data, count) }
}

/// # Safety
///
/// See [`Span::from_ptr_range`].
pub unsafe fn make_span_from_ptr_range<'a, T>(first: *const T, last: *const T) -> Span<'a, T> {
    // SAFETY: forwarded to the caller.
    unsafe { Span::from_ptr_range(first, last) }
}
