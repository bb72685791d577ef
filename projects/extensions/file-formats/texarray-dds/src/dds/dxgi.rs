//! Mapping between `DXGI_FORMAT` values and [`PixelFormat`]s.

use texarray_common::PixelFormat;

const DXGI_FORMAT_R32G32B32A32_FLOAT: u32 = 2;
const DXGI_FORMAT_R32G32B32A32_UINT: u32 = 3;
const DXGI_FORMAT_R32G32B32A32_SINT: u32 = 4;
const DXGI_FORMAT_R32G32B32_FLOAT: u32 = 6;
const DXGI_FORMAT_R32G32B32_UINT: u32 = 7;
const DXGI_FORMAT_R32G32B32_SINT: u32 = 8;
const DXGI_FORMAT_R16G16B16A16_FLOAT: u32 = 10;
const DXGI_FORMAT_R16G16B16A16_UNORM: u32 = 11;
const DXGI_FORMAT_R16G16B16A16_UINT: u32 = 12;
const DXGI_FORMAT_R16G16B16A16_SNORM: u32 = 13;
const DXGI_FORMAT_R16G16B16A16_SINT: u32 = 14;
const DXGI_FORMAT_R32G32_FLOAT: u32 = 16;
const DXGI_FORMAT_R32G32_UINT: u32 = 17;
const DXGI_FORMAT_R32G32_SINT: u32 = 18;
const DXGI_FORMAT_D32_FLOAT_S8X24_UINT: u32 = 20;
const DXGI_FORMAT_R10G10B10A2_UNORM: u32 = 24;
const DXGI_FORMAT_R10G10B10A2_UINT: u32 = 25;
const DXGI_FORMAT_R11G11B10_FLOAT: u32 = 26;
const DXGI_FORMAT_R8G8B8A8_TYPELESS: u32 = 27;
const DXGI_FORMAT_R8G8B8A8_UNORM: u32 = 28;
const DXGI_FORMAT_R8G8B8A8_UNORM_SRGB: u32 = 29;
const DXGI_FORMAT_R8G8B8A8_UINT: u32 = 30;
const DXGI_FORMAT_R8G8B8A8_SNORM: u32 = 31;
const DXGI_FORMAT_R8G8B8A8_SINT: u32 = 32;
const DXGI_FORMAT_R16G16_FLOAT: u32 = 34;
const DXGI_FORMAT_R16G16_UNORM: u32 = 35;
const DXGI_FORMAT_R16G16_UINT: u32 = 36;
const DXGI_FORMAT_R16G16_SNORM: u32 = 37;
const DXGI_FORMAT_R16G16_SINT: u32 = 38;
const DXGI_FORMAT_D32_FLOAT: u32 = 40;
const DXGI_FORMAT_R32_FLOAT: u32 = 41;
const DXGI_FORMAT_R32_UINT: u32 = 42;
const DXGI_FORMAT_R32_SINT: u32 = 43;
const DXGI_FORMAT_D24_UNORM_S8_UINT: u32 = 45;
const DXGI_FORMAT_R8G8_UNORM: u32 = 49;
const DXGI_FORMAT_R8G8_UINT: u32 = 50;
const DXGI_FORMAT_R8G8_SNORM: u32 = 51;
const DXGI_FORMAT_R8G8_SINT: u32 = 52;
const DXGI_FORMAT_R16_FLOAT: u32 = 54;
const DXGI_FORMAT_D16_UNORM: u32 = 55;
const DXGI_FORMAT_R16_UNORM: u32 = 56;
const DXGI_FORMAT_R16_UINT: u32 = 57;
const DXGI_FORMAT_R16_SNORM: u32 = 58;
const DXGI_FORMAT_R16_SINT: u32 = 59;
const DXGI_FORMAT_R8_UNORM: u32 = 61;
const DXGI_FORMAT_R8_UINT: u32 = 62;
const DXGI_FORMAT_R8_SNORM: u32 = 63;
const DXGI_FORMAT_R8_SINT: u32 = 64;
const DXGI_FORMAT_A8_UNORM: u32 = 65;
const DXGI_FORMAT_R9G9B9E5_SHAREDEXP: u32 = 67;
const DXGI_FORMAT_BC1_TYPELESS: u32 = 70;
const DXGI_FORMAT_BC1_UNORM: u32 = 71;
const DXGI_FORMAT_BC1_UNORM_SRGB: u32 = 72;
const DXGI_FORMAT_BC2_TYPELESS: u32 = 73;
const DXGI_FORMAT_BC2_UNORM: u32 = 74;
const DXGI_FORMAT_BC2_UNORM_SRGB: u32 = 75;
const DXGI_FORMAT_BC3_TYPELESS: u32 = 76;
const DXGI_FORMAT_BC3_UNORM: u32 = 77;
const DXGI_FORMAT_BC3_UNORM_SRGB: u32 = 78;
const DXGI_FORMAT_BC4_TYPELESS: u32 = 79;
const DXGI_FORMAT_BC4_UNORM: u32 = 80;
const DXGI_FORMAT_BC4_SNORM: u32 = 81;
const DXGI_FORMAT_BC5_TYPELESS: u32 = 82;
const DXGI_FORMAT_BC5_UNORM: u32 = 83;
const DXGI_FORMAT_BC5_SNORM: u32 = 84;
const DXGI_FORMAT_B5G6R5_UNORM: u32 = 85;
const DXGI_FORMAT_B5G5R5A1_UNORM: u32 = 86;
const DXGI_FORMAT_B8G8R8A8_UNORM: u32 = 87;
const DXGI_FORMAT_B8G8R8X8_UNORM: u32 = 88;
const DXGI_FORMAT_B8G8R8A8_TYPELESS: u32 = 90;
const DXGI_FORMAT_B8G8R8A8_UNORM_SRGB: u32 = 91;
const DXGI_FORMAT_B8G8R8X8_UNORM_SRGB: u32 = 93;
const DXGI_FORMAT_BC6H_TYPELESS: u32 = 94;
const DXGI_FORMAT_BC6H_UF16: u32 = 95;
const DXGI_FORMAT_BC6H_SF16: u32 = 96;
const DXGI_FORMAT_BC7_TYPELESS: u32 = 97;
const DXGI_FORMAT_BC7_UNORM: u32 = 98;
const DXGI_FORMAT_BC7_UNORM_SRGB: u32 = 99;

/// Every known `(DXGI_FORMAT, PixelFormat)` pair.
///
/// The first pair for a given [`PixelFormat`] is the one used when writing; typeless
/// formats therefore come after their typed counterparts.
const DXGI_FORMATS: &[(u32, PixelFormat)] = &[
    (DXGI_FORMAT_R32G32B32A32_FLOAT, PixelFormat::Rgba32SfloatPack32),
    (DXGI_FORMAT_R32G32B32A32_UINT, PixelFormat::Rgba32UintPack32),
    (DXGI_FORMAT_R32G32B32A32_SINT, PixelFormat::Rgba32SintPack32),
    (DXGI_FORMAT_R32G32B32_FLOAT, PixelFormat::Rgb32SfloatPack32),
    (DXGI_FORMAT_R32G32B32_UINT, PixelFormat::Rgb32UintPack32),
    (DXGI_FORMAT_R32G32B32_SINT, PixelFormat::Rgb32SintPack32),
    (DXGI_FORMAT_R16G16B16A16_FLOAT, PixelFormat::Rgba16SfloatPack16),
    (DXGI_FORMAT_R16G16B16A16_UNORM, PixelFormat::Rgba16UnormPack16),
    (DXGI_FORMAT_R16G16B16A16_UINT, PixelFormat::Rgba16UintPack16),
    (DXGI_FORMAT_R16G16B16A16_SNORM, PixelFormat::Rgba16SnormPack16),
    (DXGI_FORMAT_R16G16B16A16_SINT, PixelFormat::Rgba16SintPack16),
    (DXGI_FORMAT_R32G32_FLOAT, PixelFormat::Rg32SfloatPack32),
    (DXGI_FORMAT_R32G32_UINT, PixelFormat::Rg32UintPack32),
    (DXGI_FORMAT_R32G32_SINT, PixelFormat::Rg32SintPack32),
    (DXGI_FORMAT_D32_FLOAT_S8X24_UINT, PixelFormat::D32SfloatS8UintPack64),
    // DXGI names packed formats from the least significant bit, Vulkan from the most.
    (DXGI_FORMAT_R10G10B10A2_UNORM, PixelFormat::Bgr10a2UnormPack32),
    (DXGI_FORMAT_R10G10B10A2_UINT, PixelFormat::Bgr10a2UintPack32),
    (DXGI_FORMAT_R11G11B10_FLOAT, PixelFormat::Rg11b10UfloatPack32),
    (DXGI_FORMAT_R8G8B8A8_UNORM, PixelFormat::Rgba8UnormPack8),
    (DXGI_FORMAT_R8G8B8A8_UNORM_SRGB, PixelFormat::Rgba8SrgbPack8),
    (DXGI_FORMAT_R8G8B8A8_UINT, PixelFormat::Rgba8UintPack8),
    (DXGI_FORMAT_R8G8B8A8_SNORM, PixelFormat::Rgba8SnormPack8),
    (DXGI_FORMAT_R8G8B8A8_SINT, PixelFormat::Rgba8SintPack8),
    (DXGI_FORMAT_R8G8B8A8_TYPELESS, PixelFormat::Rgba8UnormPack8),
    (DXGI_FORMAT_R16G16_FLOAT, PixelFormat::Rg16SfloatPack16),
    (DXGI_FORMAT_R16G16_UNORM, PixelFormat::Rg16UnormPack16),
    (DXGI_FORMAT_R16G16_UINT, PixelFormat::Rg16UintPack16),
    (DXGI_FORMAT_R16G16_SNORM, PixelFormat::Rg16SnormPack16),
    (DXGI_FORMAT_R16G16_SINT, PixelFormat::Rg16SintPack16),
    (DXGI_FORMAT_D32_FLOAT, PixelFormat::D32SfloatPack32),
    (DXGI_FORMAT_R32_FLOAT, PixelFormat::R32SfloatPack32),
    (DXGI_FORMAT_R32_UINT, PixelFormat::R32UintPack32),
    (DXGI_FORMAT_R32_SINT, PixelFormat::R32SintPack32),
    (DXGI_FORMAT_D24_UNORM_S8_UINT, PixelFormat::D24UnormS8UintPack32),
    (DXGI_FORMAT_R8G8_UNORM, PixelFormat::Rg8UnormPack8),
    (DXGI_FORMAT_R8G8_UINT, PixelFormat::Rg8UintPack8),
    (DXGI_FORMAT_R8G8_SNORM, PixelFormat::Rg8SnormPack8),
    (DXGI_FORMAT_R8G8_SINT, PixelFormat::Rg8SintPack8),
    (DXGI_FORMAT_R16_FLOAT, PixelFormat::R16SfloatPack16),
    (DXGI_FORMAT_D16_UNORM, PixelFormat::D16UnormPack16),
    (DXGI_FORMAT_R16_UNORM, PixelFormat::R16UnormPack16),
    (DXGI_FORMAT_R16_UINT, PixelFormat::R16UintPack16),
    (DXGI_FORMAT_R16_SNORM, PixelFormat::R16SnormPack16),
    (DXGI_FORMAT_R16_SINT, PixelFormat::R16SintPack16),
    (DXGI_FORMAT_R8_UNORM, PixelFormat::R8UnormPack8),
    (DXGI_FORMAT_R8_UINT, PixelFormat::R8UintPack8),
    (DXGI_FORMAT_R8_SNORM, PixelFormat::R8SnormPack8),
    (DXGI_FORMAT_R8_SINT, PixelFormat::R8SintPack8),
    (DXGI_FORMAT_A8_UNORM, PixelFormat::A8UnormPack8),
    (DXGI_FORMAT_R9G9B9E5_SHAREDEXP, PixelFormat::Rgb9e5UfloatPack32),
    (DXGI_FORMAT_BC1_UNORM, PixelFormat::RgbaDxt1UnormBlock8),
    (DXGI_FORMAT_BC1_UNORM_SRGB, PixelFormat::RgbaDxt1SrgbBlock8),
    (DXGI_FORMAT_BC1_TYPELESS, PixelFormat::RgbaDxt1UnormBlock8),
    (DXGI_FORMAT_BC2_UNORM, PixelFormat::RgbaDxt3UnormBlock16),
    (DXGI_FORMAT_BC2_UNORM_SRGB, PixelFormat::RgbaDxt3SrgbBlock16),
    (DXGI_FORMAT_BC2_TYPELESS, PixelFormat::RgbaDxt3UnormBlock16),
    (DXGI_FORMAT_BC3_UNORM, PixelFormat::RgbaDxt5UnormBlock16),
    (DXGI_FORMAT_BC3_UNORM_SRGB, PixelFormat::RgbaDxt5SrgbBlock16),
    (DXGI_FORMAT_BC3_TYPELESS, PixelFormat::RgbaDxt5UnormBlock16),
    (DXGI_FORMAT_BC4_UNORM, PixelFormat::RAti1nUnormBlock8),
    (DXGI_FORMAT_BC4_SNORM, PixelFormat::RAti1nSnormBlock8),
    (DXGI_FORMAT_BC4_TYPELESS, PixelFormat::RAti1nUnormBlock8),
    (DXGI_FORMAT_BC5_UNORM, PixelFormat::RgAti2nUnormBlock16),
    (DXGI_FORMAT_BC5_SNORM, PixelFormat::RgAti2nSnormBlock16),
    (DXGI_FORMAT_BC5_TYPELESS, PixelFormat::RgAti2nUnormBlock16),
    (DXGI_FORMAT_B5G6R5_UNORM, PixelFormat::R5g6b5UnormPack16),
    (DXGI_FORMAT_B5G5R5A1_UNORM, PixelFormat::A1rgb5UnormPack16),
    (DXGI_FORMAT_B8G8R8A8_UNORM, PixelFormat::Bgra8UnormPack8),
    (DXGI_FORMAT_B8G8R8A8_UNORM_SRGB, PixelFormat::Bgra8SrgbPack8),
    (DXGI_FORMAT_B8G8R8A8_TYPELESS, PixelFormat::Bgra8UnormPack8),
    (DXGI_FORMAT_B8G8R8X8_UNORM, PixelFormat::Bgr8UnormPack32),
    (DXGI_FORMAT_B8G8R8X8_UNORM_SRGB, PixelFormat::Bgr8SrgbPack32),
    (DXGI_FORMAT_BC6H_UF16, PixelFormat::RgbBpUfloatBlock16),
    (DXGI_FORMAT_BC6H_SF16, PixelFormat::RgbBpSfloatBlock16),
    (DXGI_FORMAT_BC6H_TYPELESS, PixelFormat::RgbBpUfloatBlock16),
    (DXGI_FORMAT_BC7_UNORM, PixelFormat::RgbaBpUnormBlock16),
    (DXGI_FORMAT_BC7_UNORM_SRGB, PixelFormat::RgbaBpSrgbBlock16),
    (DXGI_FORMAT_BC7_TYPELESS, PixelFormat::RgbaBpUnormBlock16),
];

/// Converts a `DXGI_FORMAT` into a [`PixelFormat`], if there is an equivalent.
pub fn dxgi_to_pixel_format(dxgi_format: u32) -> Option<PixelFormat> {
    DXGI_FORMATS
        .iter()
        .find(|(dxgi, _)| *dxgi == dxgi_format)
        .map(|(_, format)| *format)
}

/// Converts a [`PixelFormat`] into the `DXGI_FORMAT` used to write it, if there is one.
pub fn pixel_format_to_dxgi(format: PixelFormat) -> Option<u32> {
    DXGI_FORMATS
        .iter()
        .find(|(_, pixel_format)| *pixel_format == format)
        .map(|(dxgi, _)| *dxgi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(28, PixelFormat::Rgba8UnormPack8)]
    #[case(29, PixelFormat::Rgba8SrgbPack8)]
    #[case(87, PixelFormat::Bgra8UnormPack8)]
    #[case(10, PixelFormat::Rgba16SfloatPack16)]
    #[case(2, PixelFormat::Rgba32SfloatPack32)]
    #[case(61, PixelFormat::R8UnormPack8)]
    #[case(71, PixelFormat::RgbaDxt1UnormBlock8)]
    #[case(98, PixelFormat::RgbaBpUnormBlock16)]
    fn maps_both_ways(#[case] dxgi: u32, #[case] format: PixelFormat) {
        assert_eq!(dxgi_to_pixel_format(dxgi), Some(format));
        assert_eq!(pixel_format_to_dxgi(format), Some(dxgi));
    }

    #[test]
    fn typeless_formats_read_but_are_never_written() {
        assert_eq!(dxgi_to_pixel_format(27), Some(PixelFormat::Rgba8UnormPack8));
        assert_eq!(pixel_format_to_dxgi(PixelFormat::Rgba8UnormPack8), Some(28));
        assert_eq!(dxgi_to_pixel_format(70), Some(PixelFormat::RgbaDxt1UnormBlock8));
    }

    #[test]
    fn every_written_format_reads_back() {
        for format in PixelFormat::all_values() {
            if let Some(dxgi) = pixel_format_to_dxgi(*format) {
                assert_eq!(dxgi_to_pixel_format(dxgi), Some(*format), "{format}");
            }
        }
    }

    #[rstest]
    #[case(PixelFormat::Rgb8UnormPack8)]
    #[case(PixelFormat::Bgr8UnormPack8)]
    #[case(PixelFormat::Rgba8UscaledPack8)]
    #[case(PixelFormat::Rgba64SfloatPack64)]
    #[case(PixelFormat::RgbaAstc4x4UnormBlock16)]
    fn formats_without_dxgi_equivalent(#[case] format: PixelFormat) {
        assert_eq!(pixel_format_to_dxgi(format), None);
    }

    #[test]
    fn unknown_dxgi_formats() {
        assert_eq!(dxgi_to_pixel_format(0), None);
        assert_eq!(dxgi_to_pixel_format(1000), None);
    }
}
