//! Common test imports and utilities for texarray-api tests
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::*;
pub use texarray_dds::DdsError;
