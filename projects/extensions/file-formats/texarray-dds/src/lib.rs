#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

/// DDS container support.
pub mod dds;
pub mod error;
pub mod texture;

pub use dds::{dds_file_size, likely_dds, parse_dds_header, read_dds, to_dds, write_dds, DdsHeader};
pub use error::{DdsError, TextureError};
pub use texture::{TexelCoord, Texture};
