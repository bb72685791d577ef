//! Error types for converting between textures and arrays.

use bytemuck::PodCastError;
use texarray_common::{ElementKind, PixelFormat, UnsupportedFormat};
use texarray_dds::{DdsError, TextureError};
use thiserror::Error;

#[cfg(feature = "file-io")]
use crate::file_io::FileIoError;

/// Result type for texture and array conversions.
pub type TexArrayResult<T> = Result<T, TexArrayError>;

/// Errors that can occur while decoding, encoding, loading or saving textures.
///
/// Every validation error is returned before any storage is allocated or any file is written.
#[derive(Debug, Error)]
pub enum TexArrayError {
    /// The path does not name a readable file.
    #[cfg(feature = "file-io")]
    #[error("File not found: {}", .0.display())]
    FileNotFound(std::path::PathBuf),

    /// The texture or array has no texels.
    #[error("Texture is empty")]
    EmptyTexture,

    /// The pixel format cannot be represented as a plain array.
    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(PixelFormat),

    /// Arrays exchanged with textures must have exactly 3 axes: rows, cols and channels.
    #[error("Expected an array with 3 dimensions (rows, cols, channels), got {0}")]
    InvalidArrayRank(usize),

    /// The array's element type or channel count does not match the target pixel format.
    #[error(
        "Format {format} needs {expected_channels} channels of {expected_kind}, \
         but the array has {actual_channels} channels of {actual_kind}"
    )]
    FormatArrayMismatch {
        /// Target pixel format.
        format: PixelFormat,
        /// Element kind the format takes.
        expected_kind: ElementKind,
        /// Channel count of the format.
        expected_channels: usize,
        /// Element kind of the array.
        actual_kind: ElementKind,
        /// Length of the array's last axis.
        actual_channels: usize,
    },

    /// The texture's image holds fewer bytes than its shape requires.
    #[error("Image data is {actual} bytes, but its shape needs {expected} bytes")]
    BufferLength {
        /// Bytes needed by the shape.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// The image bytes could not be reinterpreted as the element type.
    #[error("Cannot reinterpret image data: {0:?}")]
    Reinterpret(PodCastError),

    /// The array is too large to be stored in a texture.
    #[error("Array of {rows} rows and {cols} cols exceeds the largest texture extent")]
    DimensionOverflow {
        /// Rows of the array.
        rows: usize,
        /// Cols of the array.
        cols: usize,
    },

    /// Reading or writing the DDS container failed.
    #[error("DDS container error: {0}")]
    Container(#[from] DdsError),

    /// Creating or accessing texture storage failed.
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    /// A file operation failed.
    #[cfg(feature = "file-io")]
    #[error("I/O operation failed: {0}")]
    Io(#[from] FileIoError),
}

impl From<UnsupportedFormat> for TexArrayError {
    #[inline]
    fn from(error: UnsupportedFormat) -> Self {
        Self::UnsupportedFormat(error.0)
    }
}

impl From<PodCastError> for TexArrayError {
    #[inline]
    fn from(error: PodCastError) -> Self {
        Self::Reinterpret(error)
    }
}
