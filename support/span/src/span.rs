use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
    slice,
};

use crate::{
    SpanMut,
    contract::{self, ContractViolation},
    extent::{self, DYNAMIC_EXTENT},
};

/// A shared view over `E` contiguous elements of type `T`.
///
/// `E` is either a fixed element count or [`DYNAMIC_EXTENT`] (the default).
/// The view never owns its elements; the lifetime `'a` ties it to the storage
/// it was created from. Copies are shallow.
///
/// See [crate-level docs](crate) for examples.
pub struct Span<'a, T, const E: usize = DYNAMIC_EXTENT> {
    // Invariant: `slice.len() == E` whenever `E != DYNAMIC_EXTENT`.
    slice: &'a [T],
}

static_assertions::assert_eq_size!(Span<'static, u64>, &'static [u64]);
static_assertions::assert_eq_size!(Span<'static, u64, 4>, &'static [u64]);
static_assertions::assert_impl_all!(Span<'static, u8>: Copy, Send, Sync);

impl<'a, T, const E: usize> Span<'a, T, E> {
    /// The extent of this span type, or [`DYNAMIC_EXTENT`].
    pub const EXTENT: usize = E;

    /// Creates a view over `slice`.
    ///
    /// # Panics
    ///
    /// If `E` is fixed and `slice.len() != E`.
    #[track_caller]
    pub fn new(slice: &'a [T]) -> Self {
        extent::check_len::<E>(slice.len());
        Span { slice }
    }

    /// Creates a view over a whole array, taking the extent from its length.
    pub const fn from_array(array: &'a [T; E]) -> Self {
        Span { slice: array }
    }

    /// Creates a view over any container that exposes contiguous storage.
    ///
    /// The container must outlive the view and cannot be reallocated while
    /// the view exists; the borrow enforces both.
    #[track_caller]
    pub fn from_container<C>(container: &'a C) -> Self
    where
        C: AsRef<[T]> + ?Sized,
    {
        Self::new(container.as_ref())
    }

    /// Creates a view over `[data, data + count)`.
    ///
    /// `data` may be null when `count` is zero. Any other pointer is kept, so
    /// `data()` returns it even for an empty view.
    ///
    /// # Safety
    ///
    /// Unless `data` is null and `count` is zero, `data` must satisfy the
    /// requirements of [`slice::from_raw_parts`] for the lifetime `'a`.
    #[track_caller]
    pub unsafe fn from_raw_parts(data: *const T, count: usize) -> Self {
        let slice: &'a [T] = if data.is_null() && count == 0 {
            &[]
        } else {
            // SAFETY: forwarded to the caller.
            unsafe { slice::from_raw_parts(data, count) }
        };
        Self::new(slice)
    }

    /// Creates a view over `[first, last)`.
    ///
    /// # Safety
    ///
    /// Both pointers must belong to the same allocation, and the range must
    /// satisfy the requirements of [`slice::from_raw_parts`] for `'a`. `T`
    /// must not be zero-sized.
    #[track_caller]
    pub unsafe fn from_ptr_range(first: *const T, last: *const T) -> Self {
        if last < first {
            contract::violated(ContractViolation::InvertedRange);
        }
        if first == last {
            // SAFETY: forwarded to the caller.
            return unsafe { Self::from_raw_parts(first, 0) };
        }
        // SAFETY: both pointers lie in one allocation and `first <= last`.
        let count = unsafe { last.offset_from(first) } as usize;
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_raw_parts(first, count) }
    }

    /// Creates an empty view.
    pub const fn empty() -> Self {
        const { extent::assert_conversion(0, E) };
        Span { slice: &[] }
    }

    /// Number of elements.
    #[doc(alias = "len")]
    pub const fn size(&self) -> usize {
        self.slice.len()
    }

    /// Number of bytes covered by the view.
    pub const fn size_bytes(&self) -> usize {
        self.slice.len() * size_of::<T>()
    }

    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Pointer to the first element. For an empty view this is the pointer it
    /// was built from, or dangling (but aligned) if there was none.
    pub const fn data(&self) -> *const T {
        self.slice.as_ptr()
    }

    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.slice.get(index)
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// If the span is empty.
    #[track_caller]
    pub fn front(&self) -> &'a T {
        match self.slice.first() {
            Some(element) => element,
            None => contract::violated(ContractViolation::EmptyAccess),
        }
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// If the span is empty.
    #[track_caller]
    pub fn back(&self) -> &'a T {
        match self.slice.last() {
            Some(element) => element,
            None => contract::violated(ContractViolation::EmptyAccess),
        }
    }

    /// Iterates the elements in storage order. Use `.rev()` for reverse order.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.slice.iter()
    }

    /// The first `count` elements.
    ///
    /// # Panics
    ///
    /// If `count > self.size()`.
    #[track_caller]
    pub fn first(self, count: usize) -> Span<'a, T> {
        Span {
            slice: &self.slice[extent::first_range(self.size(), count)],
        }
    }

    /// The last `count` elements.
    ///
    /// # Panics
    ///
    /// If `count > self.size()`.
    #[track_caller]
    pub fn last(self, count: usize) -> Span<'a, T> {
        Span {
            slice: &self.slice[extent::last_range(self.size(), count)],
        }
    }

    /// `count` elements starting at `offset`; [`DYNAMIC_EXTENT`] as `count`
    /// takes everything after `offset`.
    ///
    /// # Panics
    ///
    /// If `offset > self.size()` or `offset + count > self.size()`.
    #[track_caller]
    pub fn subspan(self, offset: usize, count: usize) -> Span<'a, T> {
        Span {
            slice: &self.slice[extent::sub_range(self.size(), offset, count)],
        }
    }

    /// The first `COUNT` elements as a fixed-extent view.
    ///
    /// Checked at compile time when `E` is fixed.
    #[track_caller]
    pub fn first_static<const COUNT: usize>(self) -> Span<'a, T, COUNT> {
        const { extent::assert_take(E, COUNT) };
        Span {
            slice: &self.slice[extent::first_range(self.size(), COUNT)],
        }
    }

    /// The last `COUNT` elements as a fixed-extent view.
    ///
    /// Checked at compile time when `E` is fixed.
    #[track_caller]
    pub fn last_static<const COUNT: usize>(self) -> Span<'a, T, COUNT> {
        const { extent::assert_take(E, COUNT) };
        Span {
            slice: &self.slice[extent::last_range(self.size(), COUNT)],
        }
    }

    /// Sub-view at a compile-time `OFFSET` of `COUNT` elements (or the
    /// remainder when `COUNT` is [`DYNAMIC_EXTENT`]).
    ///
    /// `R` must equal [`subspan_extent(E, OFFSET, COUNT)`](crate::subspan_extent);
    /// anything else fails to compile.
    ///
    /// ```
    /// use ara_span::{DYNAMIC_EXTENT, Span};
    ///
    /// let storage = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    /// let fixed = Span::from_array(&storage);
    ///
    /// let middle: Span<i32, 4> = fixed.subspan_static::<2, 4, 4>();
    /// let rest: Span<i32, 7> = fixed.subspan_static::<2, DYNAMIC_EXTENT, 7>();
    /// assert_eq!(middle, [3, 4, 5, 6]);
    /// assert_eq!(rest.first(2), [3, 4]);
    ///
    /// let dynamic: Span<i32> = fixed.into_dynamic();
    /// let rest: Span<i32> = dynamic.subspan_static::<2, DYNAMIC_EXTENT, DYNAMIC_EXTENT>();
    /// assert_eq!(rest.size(), 7);
    /// ```
    #[track_caller]
    pub fn subspan_static<const OFFSET: usize, const COUNT: usize, const R: usize>(
        self,
    ) -> Span<'a, T, R> {
        const { extent::assert_subspan(E, OFFSET, COUNT, R) };
        Span {
            slice: &self.slice[extent::sub_range(self.size(), OFFSET, COUNT)],
        }
    }

    /// Forgets the fixed extent.
    pub const fn into_dynamic(self) -> Span<'a, T> {
        Span { slice: self.slice }
    }

    /// Re-types the view with the fixed extent `N`.
    ///
    /// # Panics
    ///
    /// If `self.size() != N`. Fails to compile when `E` is fixed and differs
    /// from `N`.
    #[track_caller]
    pub fn into_static<const N: usize>(self) -> Span<'a, T, N> {
        const {
            extent::assert_fixed(N);
            extent::assert_conversion(E, N);
        };
        tracing::trace!(extent = N, size = self.size(), "narrowing span to a fixed extent");
        Span::new(self.slice)
    }

    /// Views the elements as raw bytes.
    pub fn as_bytes(self) -> Span<'a, u8>
    where
        T: bytemuck::NoUninit,
    {
        Span {
            slice: bytemuck::cast_slice(self.slice),
        }
    }
}

impl<T, const E: usize> Clone for Span<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const E: usize> Copy for Span<'_, T, E> {}

impl<T, const E: usize> Default for Span<'_, T, E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, const E: usize> Index<usize> for Span<'_, T, E> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.slice.get(index) {
            Some(element) => element,
            None => contract::violated(ContractViolation::IndexOutOfRange {
                index,
                size: self.size(),
            }),
        }
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Span { slice }
    }
}

impl<'a, T, const N: usize, const E: usize> From<&'a [T; N]> for Span<'a, T, E> {
    fn from(array: &'a [T; N]) -> Self {
        const { extent::assert_conversion(N, E) };
        Span { slice: array }
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> From<&'a alloc::vec::Vec<T>> for Span<'a, T> {
    fn from(vec: &'a alloc::vec::Vec<T>) -> Self {
        Span { slice: vec }
    }
}

impl<'a, T, const E: usize> IntoIterator for Span<'a, T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<'a, T, const E: usize> IntoIterator for &Span<'a, T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<T, const E: usize> AsRef<[T]> for Span<'_, T, E> {
    fn as_ref(&self) -> &[T] {
        self.slice
    }
}

impl<T: fmt::Debug, const E: usize> fmt::Debug for Span<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.slice, f)
    }
}

impl<T, U, const E: usize, const F: usize> PartialEq<Span<'_, U, F>> for Span<'_, T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Span<'_, U, F>) -> bool {
        self.slice == other.slice
    }
}

impl<T, U, const E: usize, const F: usize> PartialEq<SpanMut<'_, U, F>> for Span<'_, T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SpanMut<'_, U, F>) -> bool {
        self.slice == other.as_slice()
    }
}

impl<T: Eq, const E: usize> Eq for Span<'_, T, E> {}

impl<T, U, const E: usize> PartialEq<[U]> for Span<'_, T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.slice == other
    }
}

impl<T, U, const E: usize, const M: usize> PartialEq<[U; M]> for Span<'_, T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.slice == other
    }
}

impl<T: Hash, const E: usize> Hash for Span<'_, T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slice.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static NINE: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    // ===================
    // Construction tests
    // ===================

    #[test]
    fn from_array_construct() {
        let arr = [0, 1, 2, 3, 4];
        let span = Span::from_array(&arr);
        assert_eq!(span.data(), arr.as_ptr());
        assert_eq!(span[3], arr[3]);
        assert_eq!(Span::<i32, 5>::EXTENT, 5);
    }

    #[test]
    fn from_array_reference_into_dynamic() {
        let arr = [0, 1, 2, 3, 4];
        let span: Span<i32> = (&arr).into();
        assert_eq!(span.size(), 5);
        assert_eq!(Span::<i32>::EXTENT, DYNAMIC_EXTENT);
    }

    #[test]
    fn from_vec_container() {
        let vect = vec![1, 2, 3, 4, 5];
        let span: Span<i32> = Span::from_container(&vect);
        assert!(!span.data().is_null());
        assert_eq!(span.size(), vect.len());
        assert_eq!(span[3], vect[3]);
    }

    #[test]
    fn from_vec_assigned_later() {
        let vect = vec![1, 2, 3, 4, 5];
        let mut span: Span<i32> = Span::default();
        assert!(span.is_empty());
        span = Span::from(vect.as_slice());
        assert_eq!(span.size(), 5);
        assert_eq!(span[3], 4);
    }

    #[test]
    fn from_raw_parts_matches_pointer_and_count() {
        let span = unsafe { Span::<i32>::from_raw_parts(NINE.as_ptr(), 4) };
        assert_eq!(span.data(), NINE.as_ptr());
        assert_eq!(span.size(), 4);
        assert_eq!(span, [1, 2, 3, 4]);
    }

    #[test]
    fn from_raw_parts_null_empty() {
        let span = unsafe { Span::<u8>::from_raw_parts(core::ptr::null(), 0) };
        assert!(span.is_empty());
        assert_eq!(span.size_bytes(), 0);
    }

    #[test]
    fn from_ptr_range_counts_elements() {
        let range = NINE.as_ptr_range();
        let span = unsafe { Span::<i32>::from_ptr_range(range.start, range.end) };
        assert_eq!(span.size(), 9);
        assert_eq!(span.data(), NINE.as_ptr());

        let empty = unsafe { Span::<i32>::from_ptr_range(range.end, range.end) };
        assert!(empty.is_empty());
        assert_eq!(empty.data(), range.end);
    }

    #[test]
    fn from_raw_parts_empty_keeps_pointer() {
        let inner = NINE.as_ptr().wrapping_add(1);
        let span = unsafe { Span::<i32>::from_raw_parts(inner, 0) };
        assert!(span.is_empty());
        assert_eq!(span.data(), inner);

        let fixed = unsafe { Span::<i32, 0>::from_raw_parts(inner, 0) };
        assert_eq!(fixed.data(), inner);
    }

    #[test]
    #[should_panic(expected = "pointer range is inverted")]
    fn from_ptr_range_inverted() {
        let range = NINE.as_ptr_range();
        let _ = unsafe { Span::<i32>::from_ptr_range(range.end, range.start) };
    }

    #[test]
    fn new_fixed_extent_matching_length() {
        let span = Span::<i32, 9>::new(&NINE);
        assert_eq!(span.size(), 9);
    }

    #[test]
    #[should_panic(expected = "span extent 4 does not match source length 9")]
    fn new_fixed_extent_mismatch() {
        let _ = Span::<i32, 4>::new(&NINE);
    }

    #[test]
    fn empty_spans() {
        let dynamic: Span<u32> = Span::empty();
        let fixed: Span<u32, 0> = Span::default();
        assert!(dynamic.is_empty());
        assert!(fixed.is_empty());
        assert_eq!(dynamic, fixed);
    }

    // ===================
    // Accessor tests
    // ===================

    #[test]
    fn size_in_bytes() {
        let values = [1u64, 2, 3];
        let span = Span::from_array(&values);
        assert_eq!(span.size_bytes(), 24);
    }

    #[test]
    fn front_back_and_get() {
        let span = Span::from_array(&NINE);
        assert_eq!(*span.front(), 1);
        assert_eq!(*span.back(), 9);
        assert_eq!(span.get(8), Some(&9));
        assert_eq!(span.get(9), None);
    }

    #[test]
    #[should_panic(expected = "element access on an empty span")]
    fn front_of_empty() {
        Span::<i32>::empty().front();
    }

    #[test]
    #[should_panic(expected = "index 9 is out of range for a span of size 9")]
    fn index_out_of_range() {
        let span = Span::from_array(&NINE);
        let _value = span[9];
    }

    // ===================
    // Sub-view tests
    // ===================

    #[test]
    fn subspan_middle() {
        let span: Span<i32> = Span::from(&NINE);
        let sub = span.subspan(2, 4);
        assert_eq!(sub, [3, 4, 5, 6]);
        assert_eq!(sub.data(), span.data().wrapping_add(2));
    }

    #[test]
    fn subspan_to_end() {
        let span: Span<i32> = Span::from(&NINE);
        assert_eq!(span.subspan(6, DYNAMIC_EXTENT), [7, 8, 9]);
        assert!(span.subspan(9, DYNAMIC_EXTENT).is_empty());
    }

    #[test]
    fn first_is_leading_subspan() {
        let span: Span<i32> = Span::from(&NINE);
        let first = span.first(4);
        assert_eq!(first, [1, 2, 3, 4]);
        assert_eq!(first, span.subspan(0, 4));
        assert_eq!(first.data(), span.data());
    }

    #[test]
    fn last_is_trailing_subspan() {
        let span: Span<i32> = Span::from(&NINE);
        let last = span.last(4);
        assert_eq!(last, [6, 7, 8, 9]);
        assert_eq!(last, span.subspan(span.size() - 4, 4));
        assert_eq!(last.data(), span.data().wrapping_add(5));
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn first_too_long() {
        let span: Span<i32> = Span::from(&NINE);
        span.first(10);
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn subspan_out_of_range() {
        let span: Span<i32> = Span::from(&NINE);
        span.subspan(8, 2);
    }

    #[test]
    fn static_first_and_last() {
        let span = Span::from_array(&NINE);
        let head: Span<i32, 4> = span.first_static::<4>();
        let tail: Span<i32, 4> = span.last_static::<4>();
        assert_eq!(head, [1, 2, 3, 4]);
        assert_eq!(tail, [6, 7, 8, 9]);
    }

    #[test]
    fn static_first_from_dynamic_source() {
        let span: Span<i32> = Span::from(&NINE);
        let head = span.first_static::<2>();
        assert_eq!(Span::<i32, 2>::EXTENT, head.size());
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn static_first_from_short_dynamic_source() {
        let span: Span<i32> = Span::from_array(&NINE).first(1);
        span.first_static::<2>();
    }

    #[test]
    fn static_subspan_extent_arithmetic() {
        let span = Span::from_array(&NINE);

        let explicit: Span<i32, 3> = span.subspan_static::<1, 3, 3>();
        assert_eq!(explicit, [2, 3, 4]);

        let rest: Span<i32, 5> = span.subspan_static::<4, DYNAMIC_EXTENT, 5>();
        assert_eq!(rest, [5, 6, 7, 8, 9]);

        let dynamic: Span<i32> = span.into_dynamic();
        let rest: Span<i32> = dynamic.subspan_static::<4, DYNAMIC_EXTENT, DYNAMIC_EXTENT>();
        assert_eq!(rest, [5, 6, 7, 8, 9]);
    }

    #[test]
    fn sub_views_alias_storage() {
        let span = Span::from_array(&NINE);
        let nested = span.subspan(1, 7).subspan(1, 5).last(2);
        assert_eq!(nested, [6, 7]);
        assert_eq!(nested.data(), NINE[5..].as_ptr());
    }

    // ===================
    // Conversion tests
    // ===================

    #[test]
    fn fixed_dynamic_round_trip() {
        let fixed = Span::from_array(&NINE);
        let dynamic = fixed.into_dynamic();
        let back: Span<i32, 9> = dynamic.into_static::<9>();
        assert_eq!(back.data(), fixed.data());
        assert_eq!(back.size(), fixed.size());
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn into_static_wrong_size() {
        let dynamic: Span<i32> = Span::from(&NINE);
        dynamic.into_static::<3>();
    }

    #[test]
    fn as_bytes_covers_size_bytes() {
        let values = [0x0102_0304u32, 0x0506_0708];
        let span = Span::from_array(&values);
        let bytes = span.as_bytes();
        assert_eq!(bytes.size(), span.size_bytes());
        assert_eq!(bytes.data() as usize, span.data() as usize);
    }

    // ===================
    // Iteration tests
    // ===================

    #[test]
    fn iterates_in_storage_order() {
        let span = Span::from_array(&NINE);
        let forward: Vec<i32> = span.iter().copied().collect();
        assert_eq!(forward, NINE.to_vec());

        // Restartable: a second pass sees the same elements.
        assert_eq!(span.iter().count(), 9);
    }

    #[test]
    fn reverse_iteration() {
        let span: Span<i32> = Span::from_array(&NINE).subspan(2, 4);
        let backward: Vec<i32> = span.iter().rev().copied().collect();
        assert_eq!(backward, vec![6, 5, 4, 3]);
    }

    #[test]
    fn into_iterator_by_value_and_reference() {
        let span = Span::from_array(&NINE);
        let mut total = 0;
        for value in span {
            total += value;
        }
        for value in &span {
            total += value;
        }
        assert_eq!(total, 90);
    }

    // ===================
    // Equality and formatting tests
    // ===================

    #[test]
    fn equality_is_elementwise() {
        let a = [1, 2, 3];
        let b = vec![1, 2, 3];
        let fixed = Span::from_array(&a);
        let dynamic: Span<i32> = Span::from(b.as_slice());
        assert_eq!(fixed, dynamic);
        assert_ne!(fixed, dynamic.first(2));
        assert!(fixed == a[..]);
    }

    #[test]
    fn debug_formats_like_slice() {
        let span = Span::from_array(&NINE).first(3);
        assert_eq!(format!("{:?}", span), "[1, 2, 3]");
    }

    #[test]
    fn send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Span<i32>>();
        assert_sync::<Span<i32, 4>>();
    }
}
