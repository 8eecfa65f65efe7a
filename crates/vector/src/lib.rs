mod raw;

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use raw::{RawBuf, capacity_overflow};

const GROWTH_FACTOR: usize = 2;
const DEFAULT_CAPACITY: usize = 1;

/// Growable contiguous buffer with explicit capacity control.
///
/// - Slots `[0, len)` are live, `[len, capacity)` are uninitialized.
/// - Appending to a full buffer replaces the storage with one of
///   `max(1, capacity * 2)` slots; `reserve` never shrinks.
/// - Cloning copies exactly the live elements into storage of the same length.
pub struct Vector<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Vector<T> {
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Buffer holding `count` copies of `value`, with capacity `count`.
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut out = Self::with_capacity(count);
        if count == 0 {
            return out;
        }
        for _ in 1..count {
            out.push(value.clone());
        }
        out.push(value);
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_for_one_more();
        }
        // SAFETY: `len < capacity` after growth, and the slot is uninitialized.
        unsafe {
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Ensures `capacity() >= capacity`. Grows to exactly `capacity` slots.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        // SAFETY: the live prefix is initialized and fits in both buffers.
        unsafe {
            self.buf.relocate(self.len, capacity);
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is non-null and aligned.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Exchanges storage with `other` without touching any element.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Releases the current contents, then takes over `source`'s storage.
    /// `source` is left empty with no allocation.
    pub fn move_from(&mut self, source: &mut Self) {
        drop(mem::take(self));
        self.swap(source);
    }

    /// Returns the contents and leaves `self` empty with no allocation.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    #[cold]
    fn grow_for_one_more(&mut self) {
        let cap = self.capacity();
        let new_cap = if cap == 0 {
            DEFAULT_CAPACITY
        } else {
            cap.checked_mul(GROWTH_FACTOR)
                .unwrap_or_else(|| capacity_overflow())
        };
        self.reserve(new_cap);
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: drops exactly the live prefix; `buf` releases the storage afterwards.
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for value in self.iter() {
            out.push(value.clone());
        }
        out
    }

    /// Copy-and-swap: `self` is untouched if cloning `source` panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len.saturating_add(lower));
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn push_doubles_capacity() {
        let mut v = Vector::new();
        assert_eq!(v.capacity(), 0);

        let mut seen = Vec::new();
        for i in 0..9_u32 {
            v.push(i);
            seen.push(v.capacity());
        }
        assert_eq!(seen, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn reserve_grows_exactly_and_never_shrinks() {
        let mut v: Vector<u64> = (0..5).collect();
        v.reserve(100);
        assert_eq!(v.capacity(), 100);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);

        v.reserve(10);
        assert_eq!(v.capacity(), 100);

        let before = v.as_ptr();
        v.reserve(100);
        assert_eq!(v.as_ptr(), before);
    }

    #[test]
    fn push_after_reserve_uses_reserved_slots() {
        let mut v = Vector::with_capacity(3);
        v.push('a');
        v.push('b');
        v.push('c');
        assert_eq!(v.capacity(), 3);
        v.push('d');
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn from_elem_fills_and_sizes() {
        let v = Vector::from_elem(4, 7_u32);
        assert_eq!(v.len(), 4);
        assert_eq!(v.capacity(), 4);
        assert!(v.iter().all(|&x| x == 7));

        let empty = Vector::from_elem(0, String::from("x"));
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn indexed_access_reads_and_writes() {
        let mut v = Vector::from_elem(3, 0_i32);
        v[1] = 5;
        v[2] += 9;
        assert_eq!((v[0], v[1], v[2]), (0, 5, 9));
        assert_eq!(&v[1..], &[5, 9]);
    }

    #[test]
    fn views_cover_live_elements() {
        let mut v: Vector<u32> = [5, 3, 9, 1].into_iter().collect();
        let range = v.as_ptr_range();
        assert_eq!(unsafe { range.end.offset_from(range.start) }, 4);

        v.sort_unstable();
        assert_eq!(v.as_slice(), &[1, 3, 5, 9]);
        assert_eq!((&v).into_iter().sum::<u32>(), 18);

        for x in &mut v {
            *x *= 2;
        }
        assert_eq!(v.as_slice(), &[2, 6, 10, 18]);
    }

    #[test]
    fn clone_is_independent() {
        let mut a: Vector<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.capacity(), 2);

        b[0].push('!');
        b.push("z".to_string());
        assert_eq!(a.as_slice(), &["x", "y"]);

        a[1].clear();
        assert_eq!(b.as_slice(), &["x!", "y", "z"]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source: Vector<u32> = (0..3).collect();
        let mut target: Vector<u32> = (10..20).collect();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.capacity(), 3);
    }

    /// Clone panics on the element whose tag is `fail_on`.
    struct Fragile {
        tag: u32,
        fail_on: u32,
        token: Rc<()>,
    }

    impl Clone for Fragile {
        fn clone(&self) -> Self {
            assert_ne!(self.tag, self.fail_on, "clone failed");
            Self {
                tag: self.tag,
                fail_on: self.fail_on,
                token: Rc::clone(&self.token),
            }
        }
    }

    #[test]
    fn clone_from_failure_leaves_target_untouched() {
        let token = Rc::new(());
        let fragile = |tag| Fragile {
            tag,
            fail_on: 2,
            token: Rc::clone(&token),
        };

        let source: Vector<Fragile> = (0..4).map(fragile).collect();
        let mut target: Vector<Fragile> = (10..12).map(fragile).collect();
        let target_ptr = target.as_ptr();
        assert_eq!(Rc::strong_count(&token), 7);

        let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());

        let tags = target.iter().map(|f| f.tag).collect::<Vec<_>>();
        assert_eq!(tags, [10, 11]);
        assert_eq!(target.as_ptr(), target_ptr);
        assert_eq!(target.capacity(), 2);
        assert_eq!(Rc::strong_count(&token), 7);

        drop(source);
        drop(target);
        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    fn move_from_leaves_source_empty() {
        let mut a: Vector<u32> = (0..6).collect();
        let a_ptr = a.as_ptr();
        let mut b: Vector<u32> = (100..103).collect();

        b.move_from(&mut a);
        assert_eq!(b.as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(b.as_ptr(), a_ptr);
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert!(a.is_empty());

        a.push(1);
        assert_eq!(a.as_slice(), &[1]);
    }

    #[test]
    fn take_leaves_empty() {
        let mut a: Vector<u8> = (0..4).collect();
        let b = a.take();
        assert_eq!(b.as_slice(), &[0, 1, 2, 3]);
        assert_eq!((a.len(), a.capacity()), (0, 0));
    }

    #[test]
    fn swap_exchanges_storage() {
        let mut a: Vector<u32> = (0..2).collect();
        let mut b: Vector<u32> = (5..10).collect();
        let (pa, pb) = (a.as_ptr(), b.as_ptr());

        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[5, 6, 7, 8, 9]);
        assert_eq!(b.as_slice(), &[0, 1]);
        assert_eq!((a.as_ptr(), b.as_ptr()), (pb, pa));
    }

    #[test]
    fn drops_every_live_element_once() {
        let token = Rc::new(());
        {
            let mut v = Vector::new();
            for _ in 0..37 {
                v.push(Rc::clone(&token));
            }
            assert_eq!(Rc::strong_count(&token), 38);

            let copy = v.clone();
            assert_eq!(Rc::strong_count(&token), 75);
            drop(copy);

            let mut other = Vector::from_elem(5, Rc::clone(&token));
            assert_eq!(Rc::strong_count(&token), 43);
            other.move_from(&mut v);
            assert_eq!(Rc::strong_count(&token), 38);
        }
        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = Vector::new();
        for _ in 0..10 {
            v.push(());
        }
        assert_eq!(v.len(), 10);
        assert_eq!(v.capacity(), 16);
        let copy = v.clone();
        assert_eq!(copy.len(), 10);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn reserve_past_address_space_panics() {
        let mut v: Vector<u64> = Vector::new();
        v.reserve(usize::MAX / 4);
    }

    #[test]
    fn fixed_seed_matches_std_vec() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut actual = Vector::new();
        let mut expected = Vec::new();

        for _ in 0..4096 {
            match rng.random_range(0..10) {
                0 => {
                    let extra = rng.random_range(0..64);
                    actual.reserve(actual.len() + extra);
                }
                1 if !expected.is_empty() => {
                    let i = rng.random_range(0..expected.len());
                    let value = rng.random::<u64>();
                    actual[i] = value;
                    expected[i] = value;
                }
                _ => {
                    let value = rng.random::<u64>();
                    actual.push(value);
                    expected.push(value);
                }
            }
            assert!(actual.len() <= actual.capacity());
        }

        assert_eq!(actual.as_slice(), expected.as_slice());
    }
}
