use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

/// Owned, uninitialized storage for `cap` values of `T`.
///
/// Only the allocation is managed here; which slots hold live values is
/// tracked by the owner.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        if cap == 0 || Self::IS_ZST {
            return Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            };
        }

        let layout = layout_for::<T>(cap);
        // SAFETY: `cap > 0` and `T` is not zero-sized, so the layout is non-empty.
        let raw = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            alloc::handle_alloc_error(layout);
        };

        Self {
            ptr,
            cap,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Moves the first `len` slots into a fresh allocation of `new_cap`
    /// slots, then releases the old allocation.
    ///
    /// # Safety
    ///
    /// Slots `[0, len)` must be initialized and `len <= min(cap, new_cap)`.
    pub(crate) unsafe fn relocate(&mut self, len: usize, new_cap: usize) {
        debug_assert!(len <= self.cap && len <= new_cap);

        let fresh = Self::with_capacity(new_cap);
        // Bitwise moves; the old slots are treated as uninitialized afterwards.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr(), fresh.ptr(), len);
        }
        *self = fresh;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || Self::IS_ZST {
            return;
        }
        let layout = layout_for::<T>(self.cap);
        // SAFETY: allocated in `with_capacity` with this exact layout.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

fn layout_for<T>(cap: usize) -> Layout {
    match Layout::array::<T>(cap) {
        Ok(layout) => layout,
        Err(_) => capacity_overflow(),
    }
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
