//! Error types for texture storage and the DDS container.

use texarray_common::allocate::AllocateError;
use texarray_common::PixelFormat;
use thiserror::Error;

/// An error that happened while creating or accessing a [`Texture`].
///
/// [`Texture`]: crate::texture::Texture
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    /// A texture needs at least one level and layer, and either 1 or 6 faces.
    #[error("Invalid texture layout: {levels} levels, {layers} layers, {faces} faces")]
    InvalidLayout {
        /// Requested number of mip levels.
        levels: u32,
        /// Requested number of array layers.
        layers: u32,
        /// Requested number of cube faces.
        faces: u32,
    },

    /// The storage needed for the texture does not fit in memory.
    #[error("Texture storage size overflows usize")]
    SizeOverflow,

    /// [`PixelFormat::Undefined`] has no storage layout.
    #[error("Cannot create a texture with an undefined pixel format")]
    UndefinedFormat,

    /// Allocating the texture storage failed.
    #[error(transparent)]
    Allocate(#[from] AllocateError),

    /// The texture has no storage because its extent is empty.
    #[error("Texture is empty")]
    Empty,

    /// The requested level, layer or face does not exist.
    #[error("Image (level {level}, layer {layer}, face {face}) does not exist")]
    ImageOutOfBounds {
        /// Requested mip level.
        level: u32,
        /// Requested array layer.
        layer: u32,
        /// Requested cube face.
        face: u32,
    },

    /// Texels of block compressed formats cannot be addressed individually.
    #[error("Format {0} is block compressed and cannot be addressed per texel")]
    CompressedFormat(PixelFormat),

    /// The size of the texel type does not match the format's texel size.
    #[error("Texel type is {actual} bytes, but format {format} stores {expected} bytes per texel")]
    TexelSizeMismatch {
        /// Format of the texture.
        format: PixelFormat,
        /// Bytes per texel of the format.
        expected: usize,
        /// Size of the texel type.
        actual: usize,
    },

    /// The texel coordinate lies outside of the image.
    #[error("Texel ({x}, {y}, {z}) is outside of the {width}x{height}x{depth} image")]
    CoordinateOutOfBounds {
        /// Requested X coordinate.
        x: u32,
        /// Requested Y coordinate.
        y: u32,
        /// Requested Z coordinate.
        z: u32,
        /// Width of the image.
        width: u32,
        /// Height of the image.
        height: u32,
        /// Depth of the image.
        depth: u32,
    },
}

/// An error that happened while reading or writing a DDS file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdsError {
    /// The data does not start with the DDS magic.
    #[error("Data is not a DDS file")]
    NotADds,

    /// The data ends before the headers or image data do.
    #[error("DDS data is truncated: expected at least {expected} bytes, got {actual}")]
    DataTooShort {
        /// Bytes needed.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// The `dwSize` field of the header is not 124.
    #[error("Invalid DDS header size: {0}")]
    InvalidHeaderSize(u32),

    /// The legacy pixel format (FourCC or bit masks) is not recognised.
    #[error("Unknown DDS pixel format")]
    UnknownPixelFormat,

    /// The DX10 header names a DXGI format with no [`PixelFormat`] equivalent.
    #[error("Unsupported DXGI format: {0}")]
    UnsupportedDxgiFormat(u32),

    /// The VKF1 header holds a value that is not a [`PixelFormat`].
    #[error("Invalid pixel format value: {0}")]
    InvalidFormatValue(u32),

    /// Empty textures cannot be written.
    #[error("Cannot write an empty texture")]
    EmptyTexture,

    /// The output buffer is too small for the DDS file.
    #[error("Output buffer is too small: expected {expected} bytes, got {actual}")]
    OutputTooSmall {
        /// Bytes needed.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// Creating the texture described by the header failed.
    #[error(transparent)]
    Texture(#[from] TextureError),
}
