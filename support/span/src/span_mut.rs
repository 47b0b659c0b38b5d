use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice,
};

use crate::{
    Span,
    contract::{self, ContractViolation},
    extent::{self, DYNAMIC_EXTENT},
};

/// An exclusive view over `E` contiguous elements of type `T`.
///
/// The writable counterpart of [`Span`]. It cannot be copied; use
/// [`reborrow`](Self::reborrow) for a shorter-lived handle or
/// [`into_span`](Self::into_span) to give up write access.
pub struct SpanMut<'a, T, const E: usize = DYNAMIC_EXTENT> {
    // Invariant: `slice.len() == E` whenever `E != DYNAMIC_EXTENT`.
    slice: &'a mut [T],
}

static_assertions::assert_eq_size!(SpanMut<'static, u64>, &'static mut [u64]);
static_assertions::assert_not_impl_any!(SpanMut<'static, u8>: Copy, Clone);

impl<'a, T, const E: usize> SpanMut<'a, T, E> {
    pub const EXTENT: usize = E;

    /// Creates a view over `slice`.
    ///
    /// # Panics
    ///
    /// If `E` is fixed and `slice.len() != E`.
    #[track_caller]
    pub fn new(slice: &'a mut [T]) -> Self {
        extent::check_len::<E>(slice.len());
        SpanMut { slice }
    }

    pub fn from_array(array: &'a mut [T; E]) -> Self {
        SpanMut { slice: array }
    }

    #[track_caller]
    pub fn from_container<C>(container: &'a mut C) -> Self
    where
        C: AsMut<[T]> + ?Sized,
    {
        Self::new(container.as_mut())
    }

    /// `data` may be null when `count` is zero.
    ///
    /// # Safety
    ///
    /// Unless `data` is null and `count` is zero, `data` must satisfy the
    /// requirements of [`slice::from_raw_parts_mut`] for the lifetime `'a`.
    #[track_caller]
    pub unsafe fn from_raw_parts(data: *mut T, count: usize) -> Self {
        let slice: &'a mut [T] = if data.is_null() && count == 0 {
            &mut []
        } else {
            // SAFETY: forwarded to the caller.
            unsafe { slice::from_raw_parts_mut(data, count) }
        };
        Self::new(slice)
    }

    /// # Safety
    ///
    /// See [`Span::from_ptr_range`]; the range must also be unaliased for `'a`.
    #[track_caller]
    pub unsafe fn from_ptr_range(first: *mut T, last: *mut T) -> Self {
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

    pub fn empty() -> Self {
        const { extent::assert_conversion(0, E) };
        SpanMut { slice: &mut [] }
    }

    #[doc(alias = "len")]
    pub const fn size(&self) -> usize {
        self.slice.len()
    }

    pub const fn size_bytes(&self) -> usize {
        self.slice.len() * size_of::<T>()
    }

    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    pub const fn data(&self) -> *const T {
        self.slice.as_ptr()
    }

    pub fn data_mut(&mut self) -> *mut T {
        self.slice.as_mut_ptr()
    }

    pub fn as_slice(&self) -> &[T] {
        self.slice
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.slice
    }

    pub fn into_slice(self) -> &'a mut [T] {
        self.slice
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slice.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slice.get_mut(index)
    }

    /// A shared view of the same elements, valid while `self` is borrowed.
    pub fn as_span(&self) -> Span<'_, T, E> {
        Span::new(self.slice)
    }

    /// Gives up write access for the rest of `'a`.
    pub fn into_span(self) -> Span<'a, T, E> {
        Span::new(self.slice)
    }

    /// A shorter-lived exclusive view of the same elements.
    pub fn reborrow(&mut self) -> SpanMut<'_, T, E> {
        SpanMut { slice: self.slice }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.slice.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.slice.iter_mut()
    }

    #[track_caller]
    pub fn first(self, count: usize) -> SpanMut<'a, T> {
        let range = extent::first_range(self.size(), count);
        SpanMut {
            slice: &mut self.slice[range],
        }
    }

    #[track_caller]
    pub fn last(self, count: usize) -> SpanMut<'a, T> {
        let range = extent::last_range(self.size(), count);
        SpanMut {
            slice: &mut self.slice[range],
        }
    }

    /// See [`Span::subspan`].
    #[track_caller]
    pub fn subspan(self, offset: usize, count: usize) -> SpanMut<'a, T> {
        let range = extent::sub_range(self.size(), offset, count);
        SpanMut {
            slice: &mut self.slice[range],
        }
    }

    #[track_caller]
    pub fn first_static<const COUNT: usize>(self) -> SpanMut<'a, T, COUNT> {
        const { extent::assert_take(E, COUNT) };
        let range = extent::first_range(self.size(), COUNT);
        SpanMut {
            slice: &mut self.slice[range],
        }
    }

    #[track_caller]
    pub fn last_static<const COUNT: usize>(self) -> SpanMut<'a, T, COUNT> {
        const { extent::assert_take(E, COUNT) };
        let range = extent::last_range(self.size(), COUNT);
        SpanMut {
            slice: &mut self.slice[range],
        }
    }

    /// See [`Span::subspan_static`].
    #[track_caller]
    pub fn subspan_static<const OFFSET: usize, const COUNT: usize, const R: usize>(
        self,
    ) -> SpanMut<'a, T, R> {
        const { extent::assert_subspan(E, OFFSET, COUNT, R) };
        let range = extent::sub_range(self.size(), OFFSET, COUNT);
        SpanMut {
            slice: &mut self.slice[range],
        }
    }

    pub fn into_dynamic(self) -> SpanMut<'a, T> {
        SpanMut { slice: self.slice }
    }

    #[track_caller]
    pub fn into_static<const N: usize>(self) -> SpanMut<'a, T, N> {
        const {
            extent::assert_fixed(N);
            extent::assert_conversion(E, N);
        };
        tracing::trace!(extent = N, size = self.size(), "narrowing span to a fixed extent");
        SpanMut::new(self.slice)
    }

    /// Views the elements as writable raw bytes.
    pub fn as_writable_bytes(&mut self) -> SpanMut<'_, u8>
    where
        T: bytemuck::Pod,
    {
        SpanMut {
            slice: bytemuck::cast_slice_mut(self.slice),
        }
    }
}

impl<T, const E: usize> Default for SpanMut<'_, T, E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, const E: usize> Index<usize> for SpanMut<'_, T, E> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let size = self.size();
        match self.slice.get(index) {
            Some(element) => element,
            None => contract::violated(ContractViolation::IndexOutOfRange { index, size }),
        }
    }
}

impl<T, const E: usize> IndexMut<usize> for SpanMut<'_, T, E> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let size = self.size();
        match self.slice.get_mut(index) {
            Some(element) => element,
            None => contract::violated(ContractViolation::IndexOutOfRange { index, size }),
        }
    }
}

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        SpanMut { slice }
    }
}

impl<'a, T, const N: usize, const E: usize> From<&'a mut [T; N]> for SpanMut<'a, T, E> {
    fn from(array: &'a mut [T; N]) -> Self {
        const { extent::assert_conversion(N, E) };
        SpanMut { slice: array }
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> From<&'a mut alloc::vec::Vec<T>> for SpanMut<'a, T> {
    fn from(vec: &'a mut alloc::vec::Vec<T>) -> Self {
        SpanMut { slice: vec }
    }
}

impl<'a, T, const E: usize> From<SpanMut<'a, T, E>> for Span<'a, T, E> {
    fn from(span: SpanMut<'a, T, E>) -> Self {
        span.into_span()
    }
}

impl<'a, T, const E: usize> IntoIterator for SpanMut<'a, T, E> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter_mut()
    }
}

impl<'s, T, const E: usize> IntoIterator for &'s SpanMut<'_, T, E> {
    type Item = &'s T;
    type IntoIter = slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<'s, T, const E: usize> IntoIterator for &'s mut SpanMut<'_, T, E> {
    type Item = &'s mut T;
    type IntoIter = slice::IterMut<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter_mut()
    }
}

impl<T, const E: usize> AsRef<[T]> for SpanMut<'_, T, E> {
    fn as_ref(&self) -> &[T] {
        self.slice
    }
}

impl<T, const E: usize> AsMut<[T]> for SpanMut<'_, T, E> {
    fn as_mut(&mut self) -> &mut [T] {
        self.slice
    }
}

impl<T: fmt::Debug, const E: usize> fmt::Debug for SpanMut<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.slice, f)
    }
}

impl<T, U, const E: usize, const F: usize> PartialEq<SpanMut<'_, U, F>> for SpanMut<'_, T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SpanMut<'_, U, F>) -> bool {
        *self.slice == *other.slice
    }
}

impl<T, U, const E: usize, const F: usize> PartialEq<Span<'_, U, F>> for SpanMut<'_, T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Span<'_, U, F>) -> bool {
        *self.slice == *other.as_slice()
    }
}

impl<T: Eq, const E: usize> Eq for SpanMut<'_, T, E> {}

impl<T, U, const E: usize> PartialEq<[U]> for SpanMut<'_, T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        *self.slice == *other
    }
}

impl<T, U, const E: usize, const M: usize> PartialEq<[U; M]> for SpanMut<'_, T, E>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        *self.slice == *other
    }
}

impl<T: Hash, const E: usize> Hash for SpanMut<'_, T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slice.hash(state);
    }
}
