//! Loading and saving textures as DDS files.
//!
//! This module provides memory-mapped file operations using `lightweight-mmap`.

mod error;
pub use error::*;

mod lightweight_mmap_impl;

// Public API lives in there.
// If adding alternative implementation, you need to swap it out.
pub use lightweight_mmap_impl::*;
