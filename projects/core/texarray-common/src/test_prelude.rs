//! Common test imports and utilities for texarray-common tests
//!
//! This module provides a centralized location for commonly used imports
//! across test modules, reducing code duplication.

#![allow(unused_imports)]

extern crate std;

pub use alloc::string::{String, ToString};
pub use alloc::vec;
pub use alloc::vec::Vec;
pub use rstest::rstest;

pub use crate::allocate::*;
pub use crate::catalog::*;
pub use crate::format_info::*;
pub use crate::half::*;
pub use crate::pixel_format::*;
