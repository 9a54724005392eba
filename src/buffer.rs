// Heap buffer built directly on the global allocator.
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ptr::NonNull;
use std::slice;

use crate::error::ArrayError;

/// A fixed-length run of `f64` values on the heap.
///
/// Memory comes from `alloc_zeroed`, so every element starts at `0.0`, and is
/// returned in `Drop` with the same layout it was allocated with.
pub struct HeapBuffer {
    ptr: NonNull<f64>,
    len: usize,
}

impl HeapBuffer {
    pub fn zeroed(len: usize) -> Result<Self, ArrayError> {
        if len == 0 {
            return Err(ArrayError::ZeroLength);
        }
        let layout = Layout::array::<f64>(len)
            .map_err(|_| ArrayError::CapacityOverflow { rows: len, cols: 1 })?;

        // SAFETY: layout has a non-zero size because len > 0.
        let raw = unsafe { alloc_zeroed(layout) as *mut f64 };
        let ptr = NonNull::new(raw).ok_or(ArrayError::AllocFailed {
            bytes: layout.size(),
        })?;

        Ok(HeapBuffer { ptr, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start address of the data, for printing.
    pub fn as_ptr(&self) -> *const f64 {
        self.ptr.as_ptr()
    }

    pub fn get(&self, index: usize) -> Result<f64, ArrayError> {
        self.check(index)?;
        // SAFETY: index < len, and all len elements were initialized by alloc_zeroed.
        Ok(unsafe { *self.ptr.as_ptr().add(index) })
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), ArrayError> {
        self.check(index)?;
        // SAFETY: index < len, so the write stays inside the allocation.
        unsafe {
            self.ptr.as_ptr().add(index).write(value);
        }
        Ok(())
    }

    /// Writes `value` into every element by walking a pointer from the
    /// first element to one past the last.
    pub fn fill(&mut self, value: f64) {
        // SAFETY: `end` is one past the last element, and only cursors below it are written.
        unsafe {
            let mut cursor = self.ptr.as_ptr();
            let end = cursor.add(self.len);
            while cursor < end {
                cursor.write(value);
                cursor = cursor.add(1);
            }
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        // SAFETY: ptr points at len initialized f64s owned by self.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        // SAFETY: as in as_slice; &mut self guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn check(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl Drop for HeapBuffer {
    fn drop(&mut self) {
        // The same layout succeeded in zeroed(), so this cannot fail.
        if let Ok(layout) = Layout::array::<f64>(self.len) {
            // SAFETY: ptr came from alloc_zeroed with this layout and is freed once.
            unsafe {
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

impl std::fmt::Debug for HeapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeapBuffer")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}
