use super::constants::*;
use super::dxgi::pixel_format_to_dxgi;
use crate::error::DdsError;
use crate::texture::Texture;
use alloc::vec;
use alloc::vec::Vec;
use endian_writer::{EndianWriter, LittleEndianWriter};
use tracing::trace;

/// Size of the headers written by [`write_dds`]; both `DX10` and `VKF1` files carry the
/// 20 byte extension header.
pub const DDS_WRITTEN_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

/// Exact number of bytes [`write_dds`] writes for `texture`.
#[inline]
pub fn dds_file_size(texture: &Texture) -> usize {
    DDS_WRITTEN_HEADER_SIZE + texture.size()
}

/// Writes `texture` as a DDS file into the start of `output`.
///
/// Formats with a DXGI equivalent are written with a `DX10` header, all others with a `VKF1`
/// header holding the pixel format's wire value.
///
/// # Returns
///
/// The number of bytes written, which is always [`dds_file_size`].
///
/// # Errors
///
/// - [`DdsError::EmptyTexture`] if the texture has no storage
/// - [`DdsError::OutputTooSmall`] if `output` cannot hold the file
pub fn write_dds(texture: &Texture, output: &mut [u8]) -> Result<usize, DdsError> {
    if texture.is_empty() {
        return Err(DdsError::EmptyTexture);
    }

    let file_size = dds_file_size(texture);
    if output.len() < file_size {
        return Err(DdsError::OutputTooSmall {
            expected: file_size,
            actual: output.len(),
        });
    }

    let format = texture.format();
    let extent = texture.extent();
    let (fourcc, format_value) = match pixel_format_to_dxgi(format) {
        Some(dxgi_format) => (FOURCC_DX10, dxgi_format),
        None => (FOURCC_VKF1, format.raw()),
    };
    trace!(%format, fourcc, format_value, file_size, "Writing DDS file");

    let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
    let pitch_or_linear_size = if format.is_compressed() {
        flags |= DDSD_LINEARSIZE;
        texture.level_size(0).unwrap_or(0)
    } else {
        flags |= DDSD_PITCH;
        format.row_pitch(extent.width)
    };
    if texture.levels() > 1 {
        flags |= DDSD_MIPMAPCOUNT;
    }
    if extent.depth > 1 {
        flags |= DDSD_DEPTH;
    }

    let mut caps = DDSCAPS_TEXTURE;
    if texture.levels() > 1 {
        caps |= DDSCAPS_COMPLEX | DDSCAPS_MIPMAP;
    }
    if texture.faces() > 1 || texture.layers() > 1 {
        caps |= DDSCAPS_COMPLEX;
    }

    let mut caps2 = 0;
    let mut misc_flag = 0;
    if texture.faces() == 6 {
        caps2 |= DDSCAPS2_CUBEMAP | DDSCAPS2_CUBEMAP_ALLFACES;
        misc_flag |= DDS_RESOURCE_MISC_TEXTURECUBE;
    }
    let dimension = if extent.depth > 1 {
        caps2 |= DDSCAPS2_VOLUME;
        D3D10_RESOURCE_DIMENSION_TEXTURE3D
    } else {
        D3D10_RESOURCE_DIMENSION_TEXTURE2D
    };

    let (header, image_data) = output[..file_size].split_at_mut(DDS_WRITTEN_HEADER_SIZE);
    header.fill(0);

    // SAFETY: header is exactly DDS_WRITTEN_HEADER_SIZE (148) bytes, and the last field
    // written, DX10_MISC_FLAGS2_OFFSET (0x90), ends at 148.
    unsafe {
        let mut writer = LittleEndianWriter::new(header.as_mut_ptr());
        writer.write_u32_at(DDS_MAGIC, 0);
        writer.write_u32_at(DDS_HEADER_STRUCT_SIZE, DDS_SIZE_OFFSET as isize);
        writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);
        writer.write_u32_at(extent.height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(extent.width, DDS_WIDTH_OFFSET as isize);
        writer.write_u32_at(
            saturate_u32(pitch_or_linear_size),
            DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize,
        );
        if extent.depth > 1 {
            writer.write_u32_at(extent.depth, DDS_DEPTH_OFFSET as isize);
        }
        writer.write_u32_at(texture.levels(), DDS_MIPMAP_COUNT_OFFSET as isize);

        writer.write_u32_at(DDS_PIXELFORMAT_STRUCT_SIZE, DDS_PIXELFORMAT_OFFSET as isize);
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(fourcc, FOURCC_OFFSET as isize);
        writer.write_u32_at(caps, DDS_CAPS_OFFSET as isize);
        writer.write_u32_at(caps2, DDS_CAPS2_OFFSET as isize);

        writer.write_u32_at(format_value, DX10_FORMAT_OFFSET as isize);
        writer.write_u32_at(dimension, DX10_RESOURCE_DIMENSION_OFFSET as isize);
        writer.write_u32_at(misc_flag, DX10_MISC_FLAG_OFFSET as isize);
        writer.write_u32_at(texture.layers(), DX10_ARRAY_SIZE_OFFSET as isize);
        writer.write_u32_at(0, DX10_MISC_FLAGS2_OFFSET as isize);
    }

    image_data.copy_from_slice(texture.data());
    Ok(file_size)
}

/// Writes `texture` as a DDS file into a new buffer. See [`write_dds`].
pub fn to_dds(texture: &Texture) -> Result<Vec<u8>, DdsError> {
    if texture.is_empty() {
        return Err(DdsError::EmptyTexture);
    }

    let mut output = vec![0u8; dds_file_size(texture)];
    write_dds(texture, &mut output)?;
    Ok(output)
}

impl Texture {
    /// Writes this texture as a DDS file into a new buffer. See [`write_dds`].
    #[inline]
    pub fn to_dds(&self) -> Result<Vec<u8>, DdsError> {
        to_dds(self)
    }
}

#[inline(always)]
fn saturate_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
