#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![cfg_attr(feature = "nightly", feature(allocator_api))]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod allocate;
pub mod catalog;
pub mod format_info;
pub mod half;
pub mod pixel_format;

pub use catalog::{ElementKind, FormatDescriptor, UnsupportedFormat};
pub use format_info::Extent;
pub use pixel_format::PixelFormat;
