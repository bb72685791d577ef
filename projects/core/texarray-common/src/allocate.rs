//! Memory allocation for texture storage.
//!
//! ## Useful APIs
//!
//! [`allocate_zeroed_align_64`]: Allocates zero-initialised memory aligned to 64 bytes.
//!
//! Aligning storage to 64 bytes means any texel type up to 64 bytes wide can be viewed in
//! place without an unaligned reinterpretation.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::allocator_api::*;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Alignment of every buffer handed out by this module.
pub const STORAGE_ALIGNMENT: usize = 64;

/// Allocates `num_bytes` of zero-initialised data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate. Must not be zero.
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
pub fn allocate_zeroed_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    if num_bytes == 0 {
        return Err(AllocateError::ZeroSized);
    }

    let layout = Layout::from_size_align(num_bytes, STORAGE_ALIGNMENT)?;
    Ok(RawAlloc::new_zeroed(layout)?)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),

    /// A zero byte allocation was requested.
    #[error("Cannot allocate zero bytes")]
    ZeroSized,
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(64)]
    #[case(4097)]
    fn allocations_are_aligned_and_zeroed(#[case] num_bytes: usize) {
        let allocation = allocate_zeroed_align_64(num_bytes).unwrap();
        assert_eq!(allocation.as_ptr() as usize % STORAGE_ALIGNMENT, 0);
        assert_eq!(allocation.as_slice().len(), num_bytes);
        assert!(allocation.as_slice().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn zero_bytes_is_rejected() {
        assert_eq!(allocate_zeroed_align_64(0).unwrap_err(), AllocateError::ZeroSized);
    }

    #[test]
    fn oversized_layout_is_rejected() {
        assert!(matches!(
            allocate_zeroed_align_64(usize::MAX),
            Err(AllocateError::LayoutError(_))
        ));
    }
}
