//! Extent arithmetic shared by [`Span`](crate::Span) and [`SpanMut`](crate::SpanMut).
//!
//! The `const fn` checks are evaluated inside inline `const` blocks, so a
//! sub-view that provably does not fit a fixed extent fails to compile. The
//! `*_range` helpers are their run-time counterparts for dynamic extents.

use core::ops::Range;

use crate::contract::{self, ContractViolation};

/// Sentinel extent: the view carries its length at run time.
pub const DYNAMIC_EXTENT: usize = usize::MAX;

/// Extent of the view produced by a static `subspan` of a view with `extent`.
///
/// - an explicit `count` is kept as is;
/// - otherwise a fixed source extent yields `extent - offset`;
/// - otherwise the result is dynamic.
///
/// # Panics
///
/// If `extent` is fixed, `count` is [`DYNAMIC_EXTENT`] and `offset > extent`.
/// In a `const` context this is a compile error.
///
/// ```
/// use ara_span::{DYNAMIC_EXTENT, subspan_extent};
///
/// assert_eq!(subspan_extent(9, 2, 4), 4);
/// assert_eq!(subspan_extent(9, 2, DYNAMIC_EXTENT), 7);
/// assert_eq!(subspan_extent(DYNAMIC_EXTENT, 2, DYNAMIC_EXTENT), DYNAMIC_EXTENT);
/// ```
pub const fn subspan_extent(extent: usize, offset: usize, count: usize) -> usize {
    if count != DYNAMIC_EXTENT {
        count
    } else if extent != DYNAMIC_EXTENT {
        match extent.checked_sub(offset) {
            Some(rest) => rest,
            None => panic!("subspan offset exceeds the span extent"),
        }
    } else {
        DYNAMIC_EXTENT
    }
}

pub(crate) const fn assert_fixed(extent: usize) {
    assert!(extent != DYNAMIC_EXTENT, "a static view needs a fixed extent");
}

pub(crate) const fn assert_conversion(from: usize, to: usize) {
    assert!(
        from == DYNAMIC_EXTENT || to == DYNAMIC_EXTENT || from == to,
        "source length does not match the span extent"
    );
}

pub(crate) const fn assert_take(extent: usize, count: usize) {
    assert_fixed(count);
    assert!(
        extent == DYNAMIC_EXTENT || count <= extent,
        "count exceeds the span extent"
    );
}

pub(crate) const fn assert_subspan(extent: usize, offset: usize, count: usize, result: usize) {
    assert!(
        extent == DYNAMIC_EXTENT || offset <= extent,
        "subspan offset exceeds the span extent"
    );
    assert!(
        extent == DYNAMIC_EXTENT || count == DYNAMIC_EXTENT || count <= extent - offset,
        "subspan count exceeds the span extent"
    );
    assert!(
        result == subspan_extent(extent, offset, count),
        "result extent does not match the subspan"
    );
}

/// Fails unless `len` fits a view of extent `E`.
#[track_caller]
pub(crate) fn check_len<const E: usize>(len: usize) {
    if E != DYNAMIC_EXTENT && len != E {
        contract::violated(ContractViolation::ExtentMismatch {
            expected: E,
            actual: len,
        });
    }
}

#[track_caller]
pub(crate) fn first_range(size: usize, count: usize) -> Range<usize> {
    if count > size {
        contract::violated(ContractViolation::SubspanOutOfRange {
            offset: 0,
            count,
            size,
        });
    }
    0..count
}

#[track_caller]
pub(crate) fn last_range(size: usize, count: usize) -> Range<usize> {
    match size.checked_sub(count) {
        Some(offset) => offset..size,
        None => contract::violated(ContractViolation::SubspanOutOfRange {
            offset: 0,
            count,
            size,
        }),
    }
}

/// Range of `subspan(offset, count)`; `count == DYNAMIC_EXTENT` runs to the end.
#[track_caller]
pub(crate) fn sub_range(size: usize, offset: usize, count: usize) -> Range<usize> {
    let end = if count == DYNAMIC_EXTENT {
        Some(size)
    } else {
        offset.checked_add(count)
    };
    match end {
        Some(end) if offset <= size && end <= size => offset..end,
        _ => contract::violated(ContractViolation::SubspanOutOfRange {
            offset,
            count,
            size,
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use static_assertions::const_assert_eq;

    use super::*;

    const_assert_eq!(subspan_extent(9, 0, 4), 4);
    const_assert_eq!(subspan_extent(9, 2, DYNAMIC_EXTENT), 7);
    const_assert_eq!(subspan_extent(9, 9, DYNAMIC_EXTENT), 0);
    const_assert_eq!(subspan_extent(DYNAMIC_EXTENT, 3, 2), 2);
    const_assert_eq!(subspan_extent(DYNAMIC_EXTENT, 3, DYNAMIC_EXTENT), DYNAMIC_EXTENT);

    #[test]
    #[should_panic(expected = "subspan offset exceeds the span extent")]
    fn subspan_extent_offset_past_fixed_extent() {
        subspan_extent(3, 5, DYNAMIC_EXTENT);
    }

    #[test]
    fn subspan_extent_offset_at_fixed_extent() {
        assert_eq!(subspan_extent(3, 3, DYNAMIC_EXTENT), 0);
        assert_eq!(subspan_extent(3, 5, 2), 2);
    }

    #[test]
    fn sub_range_explicit_count() {
        assert_eq!(sub_range(9, 2, 4), 2..6);
        assert_eq!(sub_range(9, 0, 9), 0..9);
        assert_eq!(sub_range(9, 9, 0), 9..9);
    }

    #[test]
    fn sub_range_to_end() {
        assert_eq!(sub_range(9, 2, DYNAMIC_EXTENT), 2..9);
        assert_eq!(sub_range(9, 9, DYNAMIC_EXTENT), 9..9);
        assert_eq!(sub_range(0, 0, DYNAMIC_EXTENT), 0..0);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn sub_range_offset_past_end() {
        sub_range(9, 10, DYNAMIC_EXTENT);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn sub_range_count_past_end() {
        sub_range(9, 6, 4);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn sub_range_overflowing_count() {
        sub_range(9, 1, usize::MAX - 1);
    }

    #[test]
    fn first_and_last_ranges() {
        assert_eq!(first_range(9, 4), 0..4);
        assert_eq!(last_range(9, 4), 5..9);
        assert_eq!(first_range(9, 0), 0..0);
        assert_eq!(last_range(9, 9), 0..9);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn last_range_too_long() {
        last_range(3, 4);
    }

    #[test]
    fn check_len_dynamic_accepts_anything() {
        check_len::<DYNAMIC_EXTENT>(0);
        check_len::<DYNAMIC_EXTENT>(1234);
        check_len::<3>(3);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn check_len_fixed_mismatch() {
        check_len::<3>(4);
    }
}
