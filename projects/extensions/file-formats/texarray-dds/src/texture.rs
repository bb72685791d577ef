//! Owned texture storage.
//!
//! A [`Texture`] owns one contiguous, zero-initialised, 64-byte aligned buffer holding every
//! image of the texture. Images are ordered layer, then face, then mip level; i.e. each face
//! of each layer stores its full mip chain before the next face starts. This is the same
//! order DDS files use, so whole textures can be copied in and out with a single memcpy.

use crate::error::TextureError;
use bytemuck::Pod;
use core::fmt;
use core::mem::size_of;
use core::ops::Range;
use safe_allocator_api::RawAlloc;
use texarray_common::allocate::allocate_zeroed_align_64;
use texarray_common::{Extent, PixelFormat};
use tracing::trace;

/// Most mip levels a texture can have; enough to shrink a `u32::MAX` extent to 1.
pub const MAX_LEVELS: u32 = u32::BITS;

/// Position of a texel within an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TexelCoord {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// Depth slice.
    pub z: u32,
}

impl TexelCoord {
    /// Creates a [`TexelCoord`].
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// A texture with its storage.
pub struct Texture {
    format: PixelFormat,
    extent: Extent,
    levels: u32,
    layers: u32,
    faces: u32,
    /// [`None`] when the extent is empty.
    storage: Option<RawAlloc>,
}

impl Texture {
    /// Creates a texture with zero-initialised storage.
    ///
    /// # Parameters
    ///
    /// - `format`: Pixel format of every image
    /// - `extent`: Extent of mip level 0
    /// - `levels`: Number of mip levels, `1..=32`
    /// - `layers`: Number of array layers, at least 1
    /// - `faces`: 1, or 6 for cube maps
    ///
    /// An `extent` with a zero dimension creates an empty texture without storage.
    pub fn create(
        format: PixelFormat,
        extent: Extent,
        levels: u32,
        layers: u32,
        faces: u32,
    ) -> Result<Self, TextureError> {
        let size = Self::storage_size(format, extent, levels, layers, faces)?;
        let mut texture = Self {
            format,
            extent,
            levels,
            layers,
            faces,
            storage: None,
        };
        if size == 0 {
            return Ok(texture);
        }

        trace!(%format, ?extent, levels, layers, faces, size, "Allocating texture storage");
        texture.storage = Some(allocate_zeroed_align_64(size)?);
        Ok(texture)
    }

    /// Size in bytes of the storage [`Texture::create`] allocates for the same arguments,
    /// without allocating it. Zero for an empty `extent`.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidLayout`] if `levels`, `layers` or `faces` are out of range
    /// - [`TextureError::UndefinedFormat`] if `format` is [`PixelFormat::Undefined`]
    /// - [`TextureError::SizeOverflow`] if the size does not fit in a [`usize`]
    pub fn storage_size(
        format: PixelFormat,
        extent: Extent,
        levels: u32,
        layers: u32,
        faces: u32,
    ) -> Result<usize, TextureError> {
        if !(1..=MAX_LEVELS).contains(&levels) || layers == 0 || !matches!(faces, 1 | 6) {
            return Err(TextureError::InvalidLayout {
                levels,
                layers,
                faces,
            });
        }
        if format == PixelFormat::Undefined {
            return Err(TextureError::UndefinedFormat);
        }
        if extent.is_empty() {
            return Ok(0);
        }

        chain_size(format, extent, levels)
            .and_then(|size| size.checked_mul(layers as usize))
            .and_then(|size| size.checked_mul(faces as usize))
            .ok_or(TextureError::SizeOverflow)
    }

    /// Creates a single level, single layer 2D texture.
    pub fn create_2d(format: PixelFormat, width: u32, height: u32) -> Result<Self, TextureError> {
        Self::create(format, Extent::new(width, height, 1), 1, 1, 1)
    }

    /// Pixel format of every image in the texture.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Extent of mip level 0.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of mip levels.
    #[inline]
    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Number of array layers.
    #[inline]
    pub fn layers(&self) -> u32 {
        self.layers
    }

    /// Number of cube faces; 1 for non-cube textures.
    #[inline]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Returns `true` if the texture has no storage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_none()
    }

    /// Total size of the storage in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.data().len()
    }

    /// The storage of every image. Empty for empty textures.
    #[inline]
    pub fn data(&self) -> &[u8] {
        match &self.storage {
            Some(storage) => storage.as_slice(),
            None => &[],
        }
    }

    /// Mutable access to the storage of every image. Empty for empty textures.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Some(storage) => storage.as_mut_slice(),
            None => &mut [],
        }
    }

    /// Size in bytes of one image of mip level `level`.
    #[inline]
    pub fn level_size(&self, level: u32) -> Option<usize> {
        self.format.image_size(self.extent.mip_level(level))
    }

    /// Size in bytes of one full mip chain.
    fn face_size(&self) -> Option<usize> {
        chain_size(self.format, self.extent, self.levels)
    }

    /// Byte range of the image at the given level, layer and face within [`Self::data`].
    pub fn image_range(
        &self,
        level: u32,
        layer: u32,
        face: u32,
    ) -> Result<Range<usize>, TextureError> {
        if self.is_empty() {
            return Err(TextureError::Empty);
        }
        if level >= self.levels || layer >= self.layers || face >= self.faces {
            return Err(TextureError::ImageOutOfBounds { level, layer, face });
        }

        // Sizes were validated when the storage was allocated, so none of these can overflow.
        let face_size = self.face_size().ok_or(TextureError::SizeOverflow)?;
        let level_offset = (0..level).try_fold(0usize, |total, level| {
            total.checked_add(self.level_size(level)?)
        });
        let level_offset = level_offset.ok_or(TextureError::SizeOverflow)?;
        let level_size = self.level_size(level).ok_or(TextureError::SizeOverflow)?;

        let image_index = layer as usize * self.faces as usize + face as usize;
        let start = image_index * face_size + level_offset;
        Ok(start..start + level_size)
    }

    /// The bytes of the image at the given level, layer and face.
    pub fn image_data(&self, level: u32, layer: u32, face: u32) -> Result<&[u8], TextureError> {
        let range = self.image_range(level, layer, face)?;
        Ok(&self.data()[range])
    }

    /// Mutable access to the bytes of the image at the given level, layer and face.
    pub fn image_data_mut(
        &mut self,
        level: u32,
        layer: u32,
        face: u32,
    ) -> Result<&mut [u8], TextureError> {
        let range = self.image_range(level, layer, face)?;
        Ok(&mut self.data_mut()[range])
    }

    /// Writes one texel.
    ///
    /// `T` must be exactly as large as one texel of the texture's format, e.g. `[u8; 4]`
    /// for `RGBA8_UNORM_PACK8` or `[u16; 3]` for `RGB16_UINT_PACK16`. The bytes of `value`
    /// are stored as they are laid out in memory.
    pub fn store<T: Pod>(
        &mut self,
        coord: TexelCoord,
        level: u32,
        layer: u32,
        face: u32,
        value: T,
    ) -> Result<(), TextureError> {
        let range = self.texel_range::<T>(coord, level, layer, face)?;
        self.data_mut()[range].copy_from_slice(bytemuck::bytes_of(&value));
        Ok(())
    }

    /// Reads one texel. The counterpart of [`Self::store`].
    pub fn load<T: Pod>(
        &self,
        coord: TexelCoord,
        level: u32,
        layer: u32,
        face: u32,
    ) -> Result<T, TextureError> {
        let range = self.texel_range::<T>(coord, level, layer, face)?;
        Ok(bytemuck::pod_read_unaligned(&self.data()[range]))
    }

    fn texel_range<T>(
        &self,
        coord: TexelCoord,
        level: u32,
        layer: u32,
        face: u32,
    ) -> Result<Range<usize>, TextureError> {
        if self.format.is_compressed() {
            return Err(TextureError::CompressedFormat(self.format));
        }
        let texel_size = self.format.block_size() as usize;
        if size_of::<T>() != texel_size {
            return Err(TextureError::TexelSizeMismatch {
                format: self.format,
                expected: texel_size,
                actual: size_of::<T>(),
            });
        }

        let image = self.image_range(level, layer, face)?;
        let extent = self.extent.mip_level(level);
        if coord.x >= extent.width || coord.y >= extent.height || coord.z >= extent.depth {
            return Err(TextureError::CoordinateOutOfBounds {
                x: coord.x,
                y: coord.y,
                z: coord.z,
                width: extent.width,
                height: extent.height,
                depth: extent.depth,
            });
        }

        let texel_index = (coord.z as usize * extent.height as usize + coord.y as usize)
            * extent.width as usize
            + coord.x as usize;
        let start = image.start + texel_index * texel_size;
        Ok(start..start + texel_size)
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("format", &self.format)
            .field("extent", &self.extent)
            .field("levels", &self.levels)
            .field("layers", &self.layers)
            .field("faces", &self.faces)
            .field("size", &self.size())
            .finish()
    }
}

/// Size in bytes of the first `levels` mip levels of one image.
fn chain_size(format: PixelFormat, extent: Extent, levels: u32) -> Option<usize> {
    (0..levels).try_fold(0usize, |total, level| {
        total.checked_add(format.image_size(extent.mip_level(level))?)
    })
}
