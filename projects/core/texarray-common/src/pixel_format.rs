//! The closed set of texture pixel formats.
//!
//! Wire values `0..=184` follow the Vulkan `VkFormat` numbering. Values `185..=209` are
//! extension formats (PVRTC, ATC, ETC1, luminance/alpha, BGRX and RG3B2) that have no
//! Vulkan equivalent.

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// Declares [`PixelFormat`] along with the wire value and name lookups derived from it.
macro_rules! pixel_formats {
    ($($(#[$meta:meta])* $variant:ident = $value:literal => $name:literal,)*) => {
        /// Identifies how the texels of a texture are laid out in memory.
        ///
        /// The discriminant of each variant is its stable wire value, as stored in
        /// texture containers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AllValues)]
        #[repr(u32)]
        pub enum PixelFormat {
            $($(#[$meta])* #[doc = $name] $variant = $value,)*
        }

        impl PixelFormat {
            /// Converts a wire value back into a [`PixelFormat`].
            ///
            /// Returns [`None`] for values outside of the known range.
            pub const fn from_raw(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the canonical name of this format, e.g. `RGBA8_UNORM_PACK8`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

pixel_formats! {
    Undefined = 0 => "UNDEFINED",
    Rg4UnormPack8 = 1 => "RG4_UNORM_PACK8",
    Rgba4UnormPack16 = 2 => "RGBA4_UNORM_PACK16",
    Bgra4UnormPack16 = 3 => "BGRA4_UNORM_PACK16",
    R5g6b5UnormPack16 = 4 => "R5G6B5_UNORM_PACK16",
    B5g6r5UnormPack16 = 5 => "B5G6R5_UNORM_PACK16",
    Rgb5a1UnormPack16 = 6 => "RGB5A1_UNORM_PACK16",
    Bgr5a1UnormPack16 = 7 => "BGR5A1_UNORM_PACK16",
    A1rgb5UnormPack16 = 8 => "A1RGB5_UNORM_PACK16",
    R8UnormPack8 = 9 => "R8_UNORM_PACK8",
    R8SnormPack8 = 10 => "R8_SNORM_PACK8",
    R8UscaledPack8 = 11 => "R8_USCALED_PACK8",
    R8SscaledPack8 = 12 => "R8_SSCALED_PACK8",
    R8UintPack8 = 13 => "R8_UINT_PACK8",
    R8SintPack8 = 14 => "R8_SINT_PACK8",
    R8SrgbPack8 = 15 => "R8_SRGB_PACK8",
    Rg8UnormPack8 = 16 => "RG8_UNORM_PACK8",
    Rg8SnormPack8 = 17 => "RG8_SNORM_PACK8",
    Rg8UscaledPack8 = 18 => "RG8_USCALED_PACK8",
    Rg8SscaledPack8 = 19 => "RG8_SSCALED_PACK8",
    Rg8UintPack8 = 20 => "RG8_UINT_PACK8",
    Rg8SintPack8 = 21 => "RG8_SINT_PACK8",
    Rg8SrgbPack8 = 22 => "RG8_SRGB_PACK8",
    Rgb8UnormPack8 = 23 => "RGB8_UNORM_PACK8",
    Rgb8SnormPack8 = 24 => "RGB8_SNORM_PACK8",
    Rgb8UscaledPack8 = 25 => "RGB8_USCALED_PACK8",
    Rgb8SscaledPack8 = 26 => "RGB8_SSCALED_PACK8",
    Rgb8UintPack8 = 27 => "RGB8_UINT_PACK8",
    Rgb8SintPack8 = 28 => "RGB8_SINT_PACK8",
    Rgb8SrgbPack8 = 29 => "RGB8_SRGB_PACK8",
    Bgr8UnormPack8 = 30 => "BGR8_UNORM_PACK8",
    Bgr8SnormPack8 = 31 => "BGR8_SNORM_PACK8",
    Bgr8UscaledPack8 = 32 => "BGR8_USCALED_PACK8",
    Bgr8SscaledPack8 = 33 => "BGR8_SSCALED_PACK8",
    Bgr8UintPack8 = 34 => "BGR8_UINT_PACK8",
    Bgr8SintPack8 = 35 => "BGR8_SINT_PACK8",
    Bgr8SrgbPack8 = 36 => "BGR8_SRGB_PACK8",
    Rgba8UnormPack8 = 37 => "RGBA8_UNORM_PACK8",
    Rgba8SnormPack8 = 38 => "RGBA8_SNORM_PACK8",
    Rgba8UscaledPack8 = 39 => "RGBA8_USCALED_PACK8",
    Rgba8SscaledPack8 = 40 => "RGBA8_SSCALED_PACK8",
    Rgba8UintPack8 = 41 => "RGBA8_UINT_PACK8",
    Rgba8SintPack8 = 42 => "RGBA8_SINT_PACK8",
    Rgba8SrgbPack8 = 43 => "RGBA8_SRGB_PACK8",
    Bgra8UnormPack8 = 44 => "BGRA8_UNORM_PACK8",
    Bgra8SnormPack8 = 45 => "BGRA8_SNORM_PACK8",
    Bgra8UscaledPack8 = 46 => "BGRA8_USCALED_PACK8",
    Bgra8SscaledPack8 = 47 => "BGRA8_SSCALED_PACK8",
    Bgra8UintPack8 = 48 => "BGRA8_UINT_PACK8",
    Bgra8SintPack8 = 49 => "BGRA8_SINT_PACK8",
    Bgra8SrgbPack8 = 50 => "BGRA8_SRGB_PACK8",
    Rgba8UnormPack32 = 51 => "RGBA8_UNORM_PACK32",
    Rgba8SnormPack32 = 52 => "RGBA8_SNORM_PACK32",
    Rgba8UscaledPack32 = 53 => "RGBA8_USCALED_PACK32",
    Rgba8SscaledPack32 = 54 => "RGBA8_SSCALED_PACK32",
    Rgba8UintPack32 = 55 => "RGBA8_UINT_PACK32",
    Rgba8SintPack32 = 56 => "RGBA8_SINT_PACK32",
    Rgba8SrgbPack32 = 57 => "RGBA8_SRGB_PACK32",
    Rgb10a2UnormPack32 = 58 => "RGB10A2_UNORM_PACK32",
    Rgb10a2SnormPack32 = 59 => "RGB10A2_SNORM_PACK32",
    Rgb10a2UscaledPack32 = 60 => "RGB10A2_USCALED_PACK32",
    Rgb10a2SscaledPack32 = 61 => "RGB10A2_SSCALED_PACK32",
    Rgb10a2UintPack32 = 62 => "RGB10A2_UINT_PACK32",
    Rgb10a2SintPack32 = 63 => "RGB10A2_SINT_PACK32",
    Bgr10a2UnormPack32 = 64 => "BGR10A2_UNORM_PACK32",
    Bgr10a2SnormPack32 = 65 => "BGR10A2_SNORM_PACK32",
    Bgr10a2UscaledPack32 = 66 => "BGR10A2_USCALED_PACK32",
    Bgr10a2SscaledPack32 = 67 => "BGR10A2_SSCALED_PACK32",
    Bgr10a2UintPack32 = 68 => "BGR10A2_UINT_PACK32",
    Bgr10a2SintPack32 = 69 => "BGR10A2_SINT_PACK32",
    R16UnormPack16 = 70 => "R16_UNORM_PACK16",
    R16SnormPack16 = 71 => "R16_SNORM_PACK16",
    R16UscaledPack16 = 72 => "R16_USCALED_PACK16",
    R16SscaledPack16 = 73 => "R16_SSCALED_PACK16",
    R16UintPack16 = 74 => "R16_UINT_PACK16",
    R16SintPack16 = 75 => "R16_SINT_PACK16",
    R16SfloatPack16 = 76 => "R16_SFLOAT_PACK16",
    Rg16UnormPack16 = 77 => "RG16_UNORM_PACK16",
    Rg16SnormPack16 = 78 => "RG16_SNORM_PACK16",
    Rg16UscaledPack16 = 79 => "RG16_USCALED_PACK16",
    Rg16SscaledPack16 = 80 => "RG16_SSCALED_PACK16",
    Rg16UintPack16 = 81 => "RG16_UINT_PACK16",
    Rg16SintPack16 = 82 => "RG16_SINT_PACK16",
    Rg16SfloatPack16 = 83 => "RG16_SFLOAT_PACK16",
    Rgb16UnormPack16 = 84 => "RGB16_UNORM_PACK16",
    Rgb16SnormPack16 = 85 => "RGB16_SNORM_PACK16",
    Rgb16UscaledPack16 = 86 => "RGB16_USCALED_PACK16",
    Rgb16SscaledPack16 = 87 => "RGB16_SSCALED_PACK16",
    Rgb16UintPack16 = 88 => "RGB16_UINT_PACK16",
    Rgb16SintPack16 = 89 => "RGB16_SINT_PACK16",
    Rgb16SfloatPack16 = 90 => "RGB16_SFLOAT_PACK16",
    Rgba16UnormPack16 = 91 => "RGBA16_UNORM_PACK16",
    Rgba16SnormPack16 = 92 => "RGBA16_SNORM_PACK16",
    Rgba16UscaledPack16 = 93 => "RGBA16_USCALED_PACK16",
    Rgba16SscaledPack16 = 94 => "RGBA16_SSCALED_PACK16",
    Rgba16UintPack16 = 95 => "RGBA16_UINT_PACK16",
    Rgba16SintPack16 = 96 => "RGBA16_SINT_PACK16",
    Rgba16SfloatPack16 = 97 => "RGBA16_SFLOAT_PACK16",
    R32UintPack32 = 98 => "R32_UINT_PACK32",
    R32SintPack32 = 99 => "R32_SINT_PACK32",
    R32SfloatPack32 = 100 => "R32_SFLOAT_PACK32",
    Rg32UintPack32 = 101 => "RG32_UINT_PACK32",
    Rg32SintPack32 = 102 => "RG32_SINT_PACK32",
    Rg32SfloatPack32 = 103 => "RG32_SFLOAT_PACK32",
    Rgb32UintPack32 = 104 => "RGB32_UINT_PACK32",
    Rgb32SintPack32 = 105 => "RGB32_SINT_PACK32",
    Rgb32SfloatPack32 = 106 => "RGB32_SFLOAT_PACK32",
    Rgba32UintPack32 = 107 => "RGBA32_UINT_PACK32",
    Rgba32SintPack32 = 108 => "RGBA32_SINT_PACK32",
    Rgba32SfloatPack32 = 109 => "RGBA32_SFLOAT_PACK32",
    R64UintPack64 = 110 => "R64_UINT_PACK64",
    R64SintPack64 = 111 => "R64_SINT_PACK64",
    R64SfloatPack64 = 112 => "R64_SFLOAT_PACK64",
    Rg64UintPack64 = 113 => "RG64_UINT_PACK64",
    Rg64SintPack64 = 114 => "RG64_SINT_PACK64",
    Rg64SfloatPack64 = 115 => "RG64_SFLOAT_PACK64",
    Rgb64UintPack64 = 116 => "RGB64_UINT_PACK64",
    Rgb64SintPack64 = 117 => "RGB64_SINT_PACK64",
    Rgb64SfloatPack64 = 118 => "RGB64_SFLOAT_PACK64",
    Rgba64UintPack64 = 119 => "RGBA64_UINT_PACK64",
    Rgba64SintPack64 = 120 => "RGBA64_SINT_PACK64",
    Rgba64SfloatPack64 = 121 => "RGBA64_SFLOAT_PACK64",
    Rg11b10UfloatPack32 = 122 => "RG11B10_UFLOAT_PACK32",
    Rgb9e5UfloatPack32 = 123 => "RGB9E5_UFLOAT_PACK32",
    D16UnormPack16 = 124 => "D16_UNORM_PACK16",
    D24UnormPack32 = 125 => "D24_UNORM_PACK32",
    D32SfloatPack32 = 126 => "D32_SFLOAT_PACK32",
    S8UintPack8 = 127 => "S8_UINT_PACK8",
    D16UnormS8UintPack32 = 128 => "D16_UNORM_S8_UINT_PACK32",
    D24UnormS8UintPack32 = 129 => "D24_UNORM_S8_UINT_PACK32",
    D32SfloatS8UintPack64 = 130 => "D32_SFLOAT_S8_UINT_PACK64",
    RgbDxt1UnormBlock8 = 131 => "RGB_DXT1_UNORM_BLOCK8",
    RgbDxt1SrgbBlock8 = 132 => "RGB_DXT1_SRGB_BLOCK8",
    RgbaDxt1UnormBlock8 = 133 => "RGBA_DXT1_UNORM_BLOCK8",
    RgbaDxt1SrgbBlock8 = 134 => "RGBA_DXT1_SRGB_BLOCK8",
    RgbaDxt3UnormBlock16 = 135 => "RGBA_DXT3_UNORM_BLOCK16",
    RgbaDxt3SrgbBlock16 = 136 => "RGBA_DXT3_SRGB_BLOCK16",
    RgbaDxt5UnormBlock16 = 137 => "RGBA_DXT5_UNORM_BLOCK16",
    RgbaDxt5SrgbBlock16 = 138 => "RGBA_DXT5_SRGB_BLOCK16",
    RAti1nUnormBlock8 = 139 => "R_ATI1N_UNORM_BLOCK8",
    RAti1nSnormBlock8 = 140 => "R_ATI1N_SNORM_BLOCK8",
    RgAti2nUnormBlock16 = 141 => "RG_ATI2N_UNORM_BLOCK16",
    RgAti2nSnormBlock16 = 142 => "RG_ATI2N_SNORM_BLOCK16",
    RgbBpUfloatBlock16 = 143 => "RGB_BP_UFLOAT_BLOCK16",
    RgbBpSfloatBlock16 = 144 => "RGB_BP_SFLOAT_BLOCK16",
    RgbaBpUnormBlock16 = 145 => "RGBA_BP_UNORM_BLOCK16",
    RgbaBpSrgbBlock16 = 146 => "RGBA_BP_SRGB_BLOCK16",
    RgbEtc2UnormBlock8 = 147 => "RGB_ETC2_UNORM_BLOCK8",
    RgbEtc2SrgbBlock8 = 148 => "RGB_ETC2_SRGB_BLOCK8",
    RgbaEtc2UnormBlock8 = 149 => "RGBA_ETC2_UNORM_BLOCK8",
    RgbaEtc2SrgbBlock8 = 150 => "RGBA_ETC2_SRGB_BLOCK8",
    RgbaEtc2UnormBlock16 = 151 => "RGBA_ETC2_UNORM_BLOCK16",
    RgbaEtc2SrgbBlock16 = 152 => "RGBA_ETC2_SRGB_BLOCK16",
    REacUnormBlock8 = 153 => "R_EAC_UNORM_BLOCK8",
    REacSnormBlock8 = 154 => "R_EAC_SNORM_BLOCK8",
    RgEacUnormBlock16 = 155 => "RG_EAC_UNORM_BLOCK16",
    RgEacSnormBlock16 = 156 => "RG_EAC_SNORM_BLOCK16",
    RgbaAstc4x4UnormBlock16 = 157 => "RGBA_ASTC_4X4_UNORM_BLOCK16",
    RgbaAstc4x4SrgbBlock16 = 158 => "RGBA_ASTC_4X4_SRGB_BLOCK16",
    RgbaAstc5x4UnormBlock16 = 159 => "RGBA_ASTC_5X4_UNORM_BLOCK16",
    RgbaAstc5x4SrgbBlock16 = 160 => "RGBA_ASTC_5X4_SRGB_BLOCK16",
    RgbaAstc5x5UnormBlock16 = 161 => "RGBA_ASTC_5X5_UNORM_BLOCK16",
    RgbaAstc5x5SrgbBlock16 = 162 => "RGBA_ASTC_5X5_SRGB_BLOCK16",
    RgbaAstc6x5UnormBlock16 = 163 => "RGBA_ASTC_6X5_UNORM_BLOCK16",
    RgbaAstc6x5SrgbBlock16 = 164 => "RGBA_ASTC_6X5_SRGB_BLOCK16",
    RgbaAstc6x6UnormBlock16 = 165 => "RGBA_ASTC_6X6_UNORM_BLOCK16",
    RgbaAstc6x6SrgbBlock16 = 166 => "RGBA_ASTC_6X6_SRGB_BLOCK16",
    RgbaAstc8x5UnormBlock16 = 167 => "RGBA_ASTC_8X5_UNORM_BLOCK16",
    RgbaAstc8x5SrgbBlock16 = 168 => "RGBA_ASTC_8X5_SRGB_BLOCK16",
    RgbaAstc8x6UnormBlock16 = 169 => "RGBA_ASTC_8X6_UNORM_BLOCK16",
    RgbaAstc8x6SrgbBlock16 = 170 => "RGBA_ASTC_8X6_SRGB_BLOCK16",
    RgbaAstc8x8UnormBlock16 = 171 => "RGBA_ASTC_8X8_UNORM_BLOCK16",
    RgbaAstc8x8SrgbBlock16 = 172 => "RGBA_ASTC_8X8_SRGB_BLOCK16",
    RgbaAstc10x5UnormBlock16 = 173 => "RGBA_ASTC_10X5_UNORM_BLOCK16",
    RgbaAstc10x5SrgbBlock16 = 174 => "RGBA_ASTC_10X5_SRGB_BLOCK16",
    RgbaAstc10x6UnormBlock16 = 175 => "RGBA_ASTC_10X6_UNORM_BLOCK16",
    RgbaAstc10x6SrgbBlock16 = 176 => "RGBA_ASTC_10X6_SRGB_BLOCK16",
    RgbaAstc10x8UnormBlock16 = 177 => "RGBA_ASTC_10X8_UNORM_BLOCK16",
    RgbaAstc10x8SrgbBlock16 = 178 => "RGBA_ASTC_10X8_SRGB_BLOCK16",
    RgbaAstc10x10UnormBlock16 = 179 => "RGBA_ASTC_10X10_UNORM_BLOCK16",
    RgbaAstc10x10SrgbBlock16 = 180 => "RGBA_ASTC_10X10_SRGB_BLOCK16",
    RgbaAstc12x10UnormBlock16 = 181 => "RGBA_ASTC_12X10_UNORM_BLOCK16",
    RgbaAstc12x10SrgbBlock16 = 182 => "RGBA_ASTC_12X10_SRGB_BLOCK16",
    RgbaAstc12x12UnormBlock16 = 183 => "RGBA_ASTC_12X12_UNORM_BLOCK16",
    RgbaAstc12x12SrgbBlock16 = 184 => "RGBA_ASTC_12X12_SRGB_BLOCK16",
    #[allow(non_camel_case_types)]
    RgbPvrtc1_8x8UnormBlock32 = 185 => "RGB_PVRTC1_8X8_UNORM_BLOCK32",
    #[allow(non_camel_case_types)]
    RgbPvrtc1_8x8SrgbBlock32 = 186 => "RGB_PVRTC1_8X8_SRGB_BLOCK32",
    #[allow(non_camel_case_types)]
    RgbPvrtc1_16x8UnormBlock32 = 187 => "RGB_PVRTC1_16X8_UNORM_BLOCK32",
    #[allow(non_camel_case_types)]
    RgbPvrtc1_16x8SrgbBlock32 = 188 => "RGB_PVRTC1_16X8_SRGB_BLOCK32",
    #[allow(non_camel_case_types)]
    RgbaPvrtc1_8x8UnormBlock32 = 189 => "RGBA_PVRTC1_8X8_UNORM_BLOCK32",
    #[allow(non_camel_case_types)]
    RgbaPvrtc1_8x8SrgbBlock32 = 190 => "RGBA_PVRTC1_8X8_SRGB_BLOCK32",
    #[allow(non_camel_case_types)]
    RgbaPvrtc1_16x8UnormBlock32 = 191 => "RGBA_PVRTC1_16X8_UNORM_BLOCK32",
    #[allow(non_camel_case_types)]
    RgbaPvrtc1_16x8SrgbBlock32 = 192 => "RGBA_PVRTC1_16X8_SRGB_BLOCK32",
    #[allow(non_camel_case_types)]
    RgbaPvrtc2_4x4UnormBlock8 = 193 => "RGBA_PVRTC2_4X4_UNORM_BLOCK8",
    #[allow(non_camel_case_types)]
    RgbaPvrtc2_4x4SrgbBlock8 = 194 => "RGBA_PVRTC2_4X4_SRGB_BLOCK8",
    #[allow(non_camel_case_types)]
    RgbaPvrtc2_8x4UnormBlock8 = 195 => "RGBA_PVRTC2_8X4_UNORM_BLOCK8",
    #[allow(non_camel_case_types)]
    RgbaPvrtc2_8x4SrgbBlock8 = 196 => "RGBA_PVRTC2_8X4_SRGB_BLOCK8",
    RgbEtcUnormBlock8 = 197 => "RGB_ETC_UNORM_BLOCK8",
    RgbAtcUnormBlock8 = 198 => "RGB_ATC_UNORM_BLOCK8",
    RgbaAtcaUnormBlock16 = 199 => "RGBA_ATCA_UNORM_BLOCK16",
    RgbaAtciUnormBlock16 = 200 => "RGBA_ATCI_UNORM_BLOCK16",
    L8UnormPack8 = 201 => "L8_UNORM_PACK8",
    A8UnormPack8 = 202 => "A8_UNORM_PACK8",
    La8UnormPack8 = 203 => "LA8_UNORM_PACK8",
    L16UnormPack16 = 204 => "L16_UNORM_PACK16",
    A16UnormPack16 = 205 => "A16_UNORM_PACK16",
    La16UnormPack16 = 206 => "LA16_UNORM_PACK16",
    Bgr8UnormPack32 = 207 => "BGR8_UNORM_PACK32",
    Bgr8SrgbPack32 = 208 => "BGR8_SRGB_PACK32",
    Rg3b2UnormPack8 = 209 => "RG3B2_UNORM_PACK8",
}

impl PixelFormat {
    /// Number of pixel formats, which is also one past the largest wire value.
    pub const COUNT: usize = Self::all_values().len();

    /// Returns the stable wire value of this format.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a [`PixelFormat`] from a name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pixel format name: {0}")]
pub struct UnknownPixelFormatName(pub alloc::string::String);

impl FromStr for PixelFormat {
    type Err = UnknownPixelFormatName;

    /// Parses a format from its canonical name. Matching ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPixelFormatName(s.into()))
    }
}
