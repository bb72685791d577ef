use super::dxgi::dxgi_to_pixel_format;
use super::{constants::*, likely_dds::has_dds_magic};
use crate::error::DdsError;
use crate::texture::{Texture, MAX_LEVELS};
use endian_writer::{EndianReader, LittleEndianReader};
use texarray_common::{Extent, PixelFormat};
use tracing::trace;

/// Everything a DDS header says about the texture that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    /// Pixel format of the images.
    pub format: PixelFormat,
    /// Extent of mip level 0. Depth is 1 unless this is a volume texture.
    pub extent: Extent,
    /// Number of mip levels.
    pub levels: u32,
    /// Number of array layers.
    pub layers: u32,
    /// 6 for cube maps, 1 otherwise.
    pub faces: u32,
    /// Offset of the first image from the start of the file.
    pub data_offset: usize,
}

/// Parses the headers of a DDS file.
///
/// # Errors
///
/// - [`DdsError::NotADds`] if the magic is missing
/// - [`DdsError::DataTooShort`] if the headers are truncated
/// - [`DdsError::InvalidHeaderSize`] if the header's `dwSize` is not 124
/// - [`DdsError::UnknownPixelFormat`], [`DdsError::UnsupportedDxgiFormat`] or
///   [`DdsError::InvalidFormatValue`] if the pixel format is not recognised
pub fn parse_dds_header(data: &[u8]) -> Result<DdsHeader, DdsError> {
    if !has_dds_magic(data) {
        return Err(DdsError::NotADds);
    }
    if data.len() < DDS_HEADER_SIZE {
        return Err(DdsError::DataTooShort {
            expected: DDS_HEADER_SIZE,
            actual: data.len(),
        });
    }

    // SAFETY: We checked data.len() >= DDS_HEADER_SIZE (128), every offset read below is
    // a u32 that ends at or before 0x74.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let header_size = unsafe { reader.read_u32_at(DDS_SIZE_OFFSET as isize) };
    if header_size != DDS_HEADER_STRUCT_SIZE {
        return Err(DdsError::InvalidHeaderSize(header_size));
    }

    let flags = unsafe { reader.read_u32_at(DDS_FLAGS_OFFSET as isize) };
    let height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) };
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) };
    let raw_depth = unsafe { reader.read_u32_at(DDS_DEPTH_OFFSET as isize) };
    let raw_mipmap_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) };
    let caps2 = unsafe { reader.read_u32_at(DDS_CAPS2_OFFSET as isize) };
    let fourcc = unsafe { reader.read_u32_at(FOURCC_OFFSET as isize) };

    // Determine mipmap count
    let levels = if (flags & DDSD_MIPMAPCOUNT) != 0 {
        raw_mipmap_count.clamp(1, MAX_LEVELS)
    } else {
        1
    };

    let is_volume = (flags & DDSD_DEPTH) != 0 || (caps2 & DDSCAPS2_VOLUME) != 0;
    let mut depth = if is_volume { raw_depth.max(1) } else { 1 };
    let mut faces = if (caps2 & DDSCAPS2_CUBEMAP) != 0 { 6 } else { 1 };

    let (format, layers, data_offset) = if fourcc == FOURCC_DX10 || fourcc == FOURCC_VKF1 {
        // Extension header present, ensure the data is long enough.
        if data.len() < DDS_HEADER_SIZE + DX10_HEADER_SIZE {
            return Err(DdsError::DataTooShort {
                expected: DDS_HEADER_SIZE + DX10_HEADER_SIZE,
                actual: data.len(),
            });
        }

        // SAFETY: We checked data.len() >= DDS_HEADER_SIZE + DX10_HEADER_SIZE (148),
        // so DX10_ARRAY_SIZE_OFFSET (0x8C) + 4 is safe
        let raw_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
        let dimension = unsafe { reader.read_u32_at(DX10_RESOURCE_DIMENSION_OFFSET as isize) };
        let misc_flag = unsafe { reader.read_u32_at(DX10_MISC_FLAG_OFFSET as isize) };
        let array_size = unsafe { reader.read_u32_at(DX10_ARRAY_SIZE_OFFSET as isize) };

        let format = if fourcc == FOURCC_DX10 {
            dxgi_to_pixel_format(raw_format).ok_or(DdsError::UnsupportedDxgiFormat(raw_format))?
        } else {
            PixelFormat::from_raw(raw_format)
                .filter(|format| *format != PixelFormat::Undefined)
                .ok_or(DdsError::InvalidFormatValue(raw_format))?
        };

        faces = if (misc_flag & DDS_RESOURCE_MISC_TEXTURECUBE) != 0 {
            6
        } else {
            1
        };
        if dimension != D3D10_RESOURCE_DIMENSION_TEXTURE3D {
            depth = 1;
        }

        // 148 bytes: 128 byte header + 20 byte DX10 header
        (
            format,
            array_size.max(1),
            DDS_HEADER_SIZE + DX10_HEADER_SIZE,
        )
    } else {
        // Legacy header - check pixel format flags to determine format type
        let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };

        let format = if (pixel_flags & DDPF_FOURCC) != 0 {
            detect_fourcc_format(fourcc)
        } else if (pixel_flags & DDPF_RGB) != 0 {
            detect_uncompressed_format(data)
        } else if (pixel_flags & (DDPF_LUMINANCE | DDPF_ALPHA)) != 0 {
            detect_luminance_alpha_format(data)
        } else {
            // Other formats (YUV, etc.) are not supported
            None
        };
        let format = format.ok_or(DdsError::UnknownPixelFormat)?;
        trace!(%format, pixel_flags, fourcc, "Detected legacy DDS pixel format");

        // 128 bytes: standard header size
        (format, 1, DDS_HEADER_SIZE)
    };

    Ok(DdsHeader {
        format,
        extent: Extent::new(width, height, depth),
        levels,
        layers,
        faces,
        data_offset,
    })
}

/// Reads a DDS file into a new [`Texture`].
///
/// A header with a zero width or height produces an empty texture.
///
/// # Errors
///
/// Any error of [`parse_dds_header`], [`DdsError::DataTooShort`] if the file ends before
/// the last image does, or [`DdsError::Texture`] if the texture cannot be allocated.
pub fn read_dds(data: &[u8]) -> Result<Texture, DdsError> {
    let header = parse_dds_header(data)?;
    trace!(?header, "Parsed DDS header");

    let size = Texture::storage_size(
        header.format,
        header.extent,
        header.levels,
        header.layers,
        header.faces,
    )?;
    let image_data = &data[header.data_offset..];
    if image_data.len() < size {
        return Err(DdsError::DataTooShort {
            expected: header.data_offset.saturating_add(size),
            actual: data.len(),
        });
    }

    let mut texture = Texture::create(
        header.format,
        header.extent,
        header.levels,
        header.layers,
        header.faces,
    )?;
    texture.data_mut().copy_from_slice(&image_data[..size]);
    Ok(texture)
}

impl Texture {
    /// Reads a DDS file into a new [`Texture`]. See [`read_dds`].
    #[inline]
    pub fn from_dds(data: &[u8]) -> Result<Self, DdsError> {
        read_dds(data)
    }
}

/// Maps a legacy FOURCC, or a D3DFMT value stored in its place, to a [`PixelFormat`].
fn detect_fourcc_format(fourcc: u32) -> Option<PixelFormat> {
    let format = match fourcc {
        FOURCC_DXT1 => PixelFormat::RgbaDxt1UnormBlock8,
        FOURCC_DXT2 | FOURCC_DXT3 => PixelFormat::RgbaDxt3UnormBlock16,
        FOURCC_DXT4 | FOURCC_DXT5 => PixelFormat::RgbaDxt5UnormBlock16,
        FOURCC_ATI1 | FOURCC_BC4U => PixelFormat::RAti1nUnormBlock8,
        FOURCC_BC4S => PixelFormat::RAti1nSnormBlock8,
        FOURCC_ATI2 | FOURCC_BC5U => PixelFormat::RgAti2nUnormBlock16,
        FOURCC_BC5S => PixelFormat::RgAti2nSnormBlock16,
        D3DFMT_A16B16G16R16 => PixelFormat::Rgba16UnormPack16,
        D3DFMT_Q16W16V16U16 => PixelFormat::Rgba16SnormPack16,
        D3DFMT_R16F => PixelFormat::R16SfloatPack16,
        D3DFMT_G16R16F => PixelFormat::Rg16SfloatPack16,
        D3DFMT_A16B16G16R16F => PixelFormat::Rgba16SfloatPack16,
        D3DFMT_R32F => PixelFormat::R32SfloatPack32,
        D3DFMT_G32R32F => PixelFormat::Rg32SfloatPack32,
        D3DFMT_A32B32G32R32F => PixelFormat::Rgba32SfloatPack32,
        _ => return None,
    };
    Some(format)
}

/// Bit count and channel masks of a legacy DDS pixel format.
struct PixelMasks {
    flags: u32,
    bit_count: u32,
    red: u32,
    green: u32,
    blue: u32,
    alpha: u32,
}

impl PixelMasks {
    fn read(data: &[u8]) -> Self {
        // SAFETY: Callers only pass data with at least DDS_HEADER_SIZE bytes, and the last
        // mask ends at 0x6C.
        let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
        unsafe {
            Self {
                flags: reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize),
                bit_count: reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
                red: reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
                green: reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
                blue: reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
                alpha: reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
            }
        }
    }

    fn is(&self, red: u32, green: u32, blue: u32, alpha: u32) -> bool {
        self.red == red && self.green == green && self.blue == blue && self.alpha == alpha
    }
}

/// Detects uncompressed DDS format by examining bit masks and bit count
///
/// # Preconditions
///
/// This function assumes that the DDPF_RGB flag has already been checked by the caller.
fn detect_uncompressed_format(data: &[u8]) -> Option<PixelFormat> {
    let masks = PixelMasks::read(data);
    let has_alpha = (masks.flags & DDPF_ALPHAPIXELS) != 0;
    let alpha = if has_alpha { masks.alpha } else { 0 };
    let masks = PixelMasks { alpha, ..masks };

    match masks.bit_count {
        32 => {
            if masks.is(
                RGBA8888_RED_MASK,
                RGBA8888_GREEN_MASK,
                RGBA8888_BLUE_MASK,
                RGBA8888_ALPHA_MASK,
            ) {
                Some(PixelFormat::Rgba8UnormPack8)
            } else if masks.is(
                BGRA8888_RED_MASK,
                BGRA8888_GREEN_MASK,
                BGRA8888_BLUE_MASK,
                BGRA8888_ALPHA_MASK,
            ) {
                Some(PixelFormat::Bgra8UnormPack8)
            } else if masks.is(BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, 0) {
                Some(PixelFormat::Bgr8UnormPack32)
            } else if masks.is(G16R16_RED_MASK, G16R16_GREEN_MASK, 0, 0) {
                Some(PixelFormat::Rg16UnormPack16)
            } else {
                None
            }
        }
        24 => {
            if masks.is(BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, 0) {
                Some(PixelFormat::Bgr8UnormPack8)
            } else if masks.is(RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK, 0) {
                Some(PixelFormat::Rgb8UnormPack8)
            } else {
                None
            }
        }
        16 => {
            if masks.is(R5G6B5_RED_MASK, R5G6B5_GREEN_MASK, R5G6B5_BLUE_MASK, 0) {
                Some(PixelFormat::R5g6b5UnormPack16)
            } else if masks.is(
                A1R5G5B5_RED_MASK,
                A1R5G5B5_GREEN_MASK,
                A1R5G5B5_BLUE_MASK,
                A1R5G5B5_ALPHA_MASK,
            ) {
                Some(PixelFormat::A1rgb5UnormPack16)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Detects luminance and alpha-only formats.
fn detect_luminance_alpha_format(data: &[u8]) -> Option<PixelFormat> {
    let masks = PixelMasks::read(data);
    let is_luminance = (masks.flags & DDPF_LUMINANCE) != 0;
    let has_alpha = (masks.flags & (DDPF_ALPHAPIXELS | DDPF_ALPHA)) != 0;

    match (is_luminance, has_alpha, masks.bit_count) {
        (true, false, 8) => Some(PixelFormat::L8UnormPack8),
        (true, true, 16) => Some(PixelFormat::La8UnormPack8),
        (true, false, 16) => Some(PixelFormat::L16UnormPack16),
        (false, true, 8) => Some(PixelFormat::A8UnormPack8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(28, PixelFormat::Rgba8UnormPack8)]
    #[case(87, PixelFormat::Bgra8UnormPack8)]
    #[case(10, PixelFormat::Rgba16SfloatPack16)]
    #[case(71, PixelFormat::RgbaDxt1UnormBlock8)]
    fn parses_dx10_headers(#[case] dxgi_format: u32, #[case] format: PixelFormat) {
        let data = create_dx10_dds(dxgi_format, 8, 4, 1);
        let header = parse_dds_header(&data).unwrap();
        assert_eq!(header.format, format);
        assert_eq!(header.extent, Extent::new(8, 4, 1));
        assert_eq!(header.levels, 1);
        assert_eq!(header.layers, 1);
        assert_eq!(header.faces, 1);
        assert_eq!(header.data_offset, DDS_DX10_TOTAL_HEADER_SIZE);
    }

    #[rstest]
    #[case(PixelFormat::Rgb8UnormPack8)]
    #[case(PixelFormat::Rgba64SfloatPack64)]
    #[case(PixelFormat::RgbaAstc6x6SrgbBlock16)]
    fn parses_vkf1_headers(#[case] format: PixelFormat) {
        let data = create_vkf1_dds(format.raw(), 3, 5, 2);
        let header = parse_dds_header(&data).unwrap();
        assert_eq!(header.format, format);
        assert_eq!(header.extent, Extent::new(3, 5, 1));
        assert_eq!(header.levels, 2);
    }

    #[rstest]
    #[case(b"DXT1", PixelFormat::RgbaDxt1UnormBlock8)]
    #[case(b"DXT3", PixelFormat::RgbaDxt3UnormBlock16)]
    #[case(b"DXT5", PixelFormat::RgbaDxt5UnormBlock16)]
    #[case(b"ATI1", PixelFormat::RAti1nUnormBlock8)]
    #[case(b"BC5S", PixelFormat::RgAti2nSnormBlock16)]
    #[case(&113u32.to_le_bytes(), PixelFormat::Rgba16SfloatPack16)]
    #[case(&116u32.to_le_bytes(), PixelFormat::Rgba32SfloatPack32)]
    fn parses_legacy_fourcc_headers(#[case] fourcc: &[u8; 4], #[case] format: PixelFormat) {
        let data = create_fourcc_dds(fourcc, 16, 16, 1);
        assert_eq!(parse_dds_header(&data).unwrap().format, format);
    }

    #[rstest]
    #[case(32, RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK, RGBA8888_ALPHA_MASK, Some(PixelFormat::Rgba8UnormPack8))]
    #[case(32, BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, BGRA8888_ALPHA_MASK, Some(PixelFormat::Bgra8UnormPack8))]
    #[case(32, BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, 0, Some(PixelFormat::Bgr8UnormPack32))]
    #[case(24, BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, 0, Some(PixelFormat::Bgr8UnormPack8))]
    #[case(24, RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK, 0, Some(PixelFormat::Rgb8UnormPack8))]
    #[case(16, R5G6B5_RED_MASK, R5G6B5_GREEN_MASK, R5G6B5_BLUE_MASK, 0, Some(PixelFormat::R5g6b5UnormPack16))]
    #[case(32, 0x3FF, 0xFFC00, 0x3FF00000, 0xC0000000, None)]
    fn detects_uncompressed_formats(
        #[case] bit_count: u32,
        #[case] red: u32,
        #[case] green: u32,
        #[case] blue: u32,
        #[case] alpha: u32,
        #[case] expected: Option<PixelFormat>,
    ) {
        let data = create_masked_dds(DDPF_RGB, bit_count, [red, green, blue, alpha], 4, 4);
        match expected {
            Some(format) => assert_eq!(parse_dds_header(&data).unwrap().format, format),
            None => assert_eq!(parse_dds_header(&data), Err(DdsError::UnknownPixelFormat)),
        }
    }

    #[rstest]
    #[case(DDPF_LUMINANCE, 8, [0xFF, 0, 0, 0], PixelFormat::L8UnormPack8)]
    #[case(DDPF_LUMINANCE, 16, [0xFFFF, 0, 0, 0], PixelFormat::L16UnormPack16)]
    #[case(DDPF_LUMINANCE | DDPF_ALPHAPIXELS, 16, [0xFF, 0, 0, 0xFF00], PixelFormat::La8UnormPack8)]
    #[case(DDPF_ALPHA, 8, [0, 0, 0, 0xFF], PixelFormat::A8UnormPack8)]
    fn detects_luminance_alpha_formats(
        #[case] flags: u32,
        #[case] bit_count: u32,
        #[case] masks: [u32; 4],
        #[case] format: PixelFormat,
    ) {
        let data = create_masked_dds(flags, bit_count, masks, 4, 4);
        assert_eq!(parse_dds_header(&data).unwrap().format, format);
    }

    #[test]
    fn parses_cube_and_array_layouts() {
        let mut data = create_dx10_dds(28, 4, 4, 1);
        set_dx10_layout(&mut data, DDS_RESOURCE_MISC_TEXTURECUBE, 3);
        let header = parse_dds_header(&data).unwrap();
        assert_eq!(header.faces, 6);
        assert_eq!(header.layers, 3);
    }

    #[test]
    fn rejects_bad_magic_and_truncated_headers() {
        let mut data = create_dx10_dds(28, 4, 4, 1);
        assert_eq!(
            parse_dds_header(&data[..DDS_HEADER_SIZE + 4]),
            Err(DdsError::DataTooShort {
                expected: DDS_DX10_TOTAL_HEADER_SIZE,
                actual: DDS_HEADER_SIZE + 4
            })
        );
        assert_eq!(
            parse_dds_header(&data[..64]),
            Err(DdsError::DataTooShort {
                expected: DDS_HEADER_SIZE,
                actual: 64
            })
        );
        data[0] = b'X';
        assert_eq!(parse_dds_header(&data), Err(DdsError::NotADds));
        assert_eq!(parse_dds_header(&[]), Err(DdsError::NotADds));
    }

    #[test]
    fn rejects_invalid_header_size() {
        let mut data = create_dx10_dds(28, 4, 4, 1);
        data[DDS_SIZE_OFFSET] = 100;
        assert_eq!(parse_dds_header(&data), Err(DdsError::InvalidHeaderSize(100)));
    }

    #[test]
    fn rejects_unknown_formats() {
        assert_eq!(
            parse_dds_header(&create_dx10_dds(1000, 4, 4, 1)),
            Err(DdsError::UnsupportedDxgiFormat(1000))
        );
        assert_eq!(
            parse_dds_header(&create_vkf1_dds(500, 4, 4, 1)),
            Err(DdsError::InvalidFormatValue(500))
        );
        assert_eq!(
            parse_dds_header(&create_vkf1_dds(0, 4, 4, 1)),
            Err(DdsError::InvalidFormatValue(0))
        );
        assert_eq!(
            parse_dds_header(&create_fourcc_dds(b"ABCD", 4, 4, 1)),
            Err(DdsError::UnknownPixelFormat)
        );
    }

    #[test]
    fn read_dds_copies_image_data() {
        let mut data = create_dx10_dds(28, 2, 2, 1);
        data.extend((0..16u8).collect::<Vec<_>>());
        let texture = read_dds(&data).unwrap();
        assert_eq!(texture.format(), PixelFormat::Rgba8UnormPack8);
        assert_eq!(texture.data(), &data[DDS_DX10_TOTAL_HEADER_SIZE..]);
    }

    #[test]
    fn read_dds_rejects_truncated_image_data() {
        let mut data = create_dx10_dds(28, 2, 2, 1);
        data.extend([0u8; 15]);
        assert_eq!(
            read_dds(&data).unwrap_err(),
            DdsError::DataTooShort {
                expected: DDS_DX10_TOTAL_HEADER_SIZE + 16,
                actual: DDS_DX10_TOTAL_HEADER_SIZE + 15
            }
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn read_dds_checks_length_before_allocating() {
        // Headers alone, claiming a 30000x30000 RGBA32F image of 14.4 GB.
        let data = create_dx10_dds(2, 30000, 30000, 1);
        assert_eq!(
            read_dds(&data).unwrap_err(),
            DdsError::DataTooShort {
                expected: DDS_DX10_TOTAL_HEADER_SIZE + 30000 * 30000 * 16,
                actual: DDS_DX10_TOTAL_HEADER_SIZE
            }
        );
    }

    #[test]
    fn read_dds_with_zero_extent_is_empty() {
        let data = create_dx10_dds(28, 0, 0, 1);
        let texture = read_dds(&data).unwrap();
        assert!(texture.is_empty());
        assert_eq!(texture.format(), PixelFormat::Rgba8UnormPack8);
    }
}
