#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(test)]
pub mod test_prelude;

pub mod array;
pub mod decode;
pub mod encode;
pub mod error;

#[cfg(feature = "file-io")]
pub mod file_io;

// Re-export key types
pub use array::{Element, TexelArray};
pub use decode::decode;
pub use encode::encode;
pub use error::{TexArrayError, TexArrayResult};
pub use texarray_common::{ElementKind, Extent, PixelFormat};
pub use texarray_dds::{TexelCoord, Texture};

// Re-export file operations when the file-io feature is enabled
#[cfg(feature = "file-io")]
pub use file_io::{load, open_texture, save, FileIoError};
