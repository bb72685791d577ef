//! Classification of pixel formats into array element types and channel counts.
//!
//! Every format that can be viewed as a plain `(rows, cols, channels)` array has exactly one
//! [`FormatDescriptor`] here. Formats that pack several channels into a single word, block
//! compressed formats, depth/stencil and luminance/alpha formats have no entry and resolve to
//! [`UnsupportedFormat`].
//!
//! The table is built at compile time and indexed by the format's wire value, so a
//! [`lookup`] is a single array access.

use crate::pixel_format::PixelFormat;
use core::mem::size_of;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// The numeric type a single channel of a texel is stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ElementKind {
    /// [`u8`]
    U8,
    /// [`i8`]
    I8,
    /// [`u16`]
    U16,
    /// [`i16`]
    I16,
    /// IEEE 754 binary16. Never exposed in arrays; decoded to [`ElementKind::F32`].
    Half,
    /// [`u32`]
    U32,
    /// [`i32`]
    I32,
    /// [`f32`]
    F32,
    /// [`u64`]
    U64,
    /// [`i64`]
    I64,
    /// [`f64`]
    F64,
}

impl ElementKind {
    /// Size of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            ElementKind::U8 | ElementKind::I8 => size_of::<u8>(),
            ElementKind::U16 | ElementKind::I16 | ElementKind::Half => size_of::<u16>(),
            ElementKind::U32 | ElementKind::I32 | ElementKind::F32 => size_of::<u32>(),
            ElementKind::U64 | ElementKind::I64 | ElementKind::F64 => size_of::<u64>(),
        }
    }

    /// The element kind arrays of this kind are exposed as.
    ///
    /// This is the kind itself, except for [`ElementKind::Half`].
    pub const fn array_kind(self) -> ElementKind {
        match self {
            ElementKind::Half => ElementKind::F32,
            kind => kind,
        }
    }

    /// Lowercase name of the element type, e.g. `u8` or `f16`.
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::U8 => "u8",
            ElementKind::I8 => "i8",
            ElementKind::U16 => "u16",
            ElementKind::I16 => "i16",
            ElementKind::Half => "f16",
            ElementKind::U32 => "u32",
            ElementKind::I32 => "i32",
            ElementKind::F32 => "f32",
            ElementKind::U64 => "u64",
            ElementKind::I64 => "i64",
            ElementKind::F64 => "f64",
        }
    }
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// What has to happen to texture bytes before they can be used as an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeTransform {
    /// The bytes already are the array; they can be viewed in place.
    None,
    /// Every element is a binary16 float and must be widened to `f32` into a new buffer.
    HalfToFloat,
}

/// How the texels of a supported format map onto an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    element_kind: ElementKind,
    channel_count: u8,
}

impl FormatDescriptor {
    /// Creates a descriptor. `channel_count` is expected to be in `1..=4`.
    pub const fn new(element_kind: ElementKind, channel_count: u8) -> Self {
        Self {
            element_kind,
            channel_count,
        }
    }

    /// Storage type of each channel.
    #[inline]
    pub const fn element_kind(&self) -> ElementKind {
        self.element_kind
    }

    /// Number of channels per texel; the length of the array's last axis.
    #[inline]
    pub const fn channel_count(&self) -> usize {
        self.channel_count as usize
    }

    /// Bytes per texel in the texture.
    #[inline]
    pub const fn texel_size(&self) -> usize {
        self.element_kind.size() * self.channel_count as usize
    }

    /// The transform needed to turn texture bytes into array elements.
    #[inline]
    pub const fn decode_transform(&self) -> DecodeTransform {
        match self.element_kind {
            ElementKind::Half => DecodeTransform::HalfToFloat,
            _ => DecodeTransform::None,
        }
    }
}

/// The pixel format cannot be represented as an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Pixel format {0} cannot be represented as an array")]
pub struct UnsupportedFormat(pub PixelFormat);

/// Returns the descriptor of `format`, or [`UnsupportedFormat`] if it has none.
#[inline]
pub fn lookup(format: PixelFormat) -> Result<FormatDescriptor, UnsupportedFormat> {
    CATALOG
        .get(format as usize)
        .copied()
        .flatten()
        .ok_or(UnsupportedFormat(format))
}

/// Returns `true` if `format` can be converted to and from an array.
#[inline]
pub fn is_supported(format: PixelFormat) -> bool {
    lookup(format).is_ok()
}

/// Iterates every supported format together with its descriptor, in wire value order.
pub fn supported_formats() -> impl Iterator<Item = (PixelFormat, FormatDescriptor)> {
    PixelFormat::all_values()
        .iter()
        .filter_map(|format| Some((*format, lookup(*format).ok()?)))
}

/// Declares the catalog rows as `(format, descriptor)` pairs.
macro_rules! catalog_entries {
    ($($format:ident => $kind:ident x $channels:literal,)*) => {
        &[$((PixelFormat::$format, FormatDescriptor::new(ElementKind::$kind, $channels)),)*]
    };
}

const ENTRIES: &[(PixelFormat, FormatDescriptor)] = catalog_entries! {
    R8UnormPack8 => U8 x 1,
    R8SnormPack8 => I8 x 1,
    R8UscaledPack8 => U8 x 1,
    R8SscaledPack8 => I8 x 1,
    R8UintPack8 => U8 x 1,
    R8SintPack8 => I8 x 1,
    R8SrgbPack8 => U8 x 1,

    Rg8UnormPack8 => U8 x 2,
    Rg8SnormPack8 => I8 x 2,
    Rg8UscaledPack8 => U8 x 2,
    Rg8SscaledPack8 => I8 x 2,
    Rg8UintPack8 => U8 x 2,
    Rg8SintPack8 => I8 x 2,
    Rg8SrgbPack8 => U8 x 2,

    Rgb8UnormPack8 => U8 x 3,
    Rgb8SnormPack8 => I8 x 3,
    Rgb8UscaledPack8 => U8 x 3,
    Rgb8SscaledPack8 => I8 x 3,
    Rgb8UintPack8 => U8 x 3,
    Rgb8SintPack8 => I8 x 3,
    Rgb8SrgbPack8 => U8 x 3,

    Bgr8UnormPack8 => U8 x 3,
    Bgr8SnormPack8 => I8 x 3,
    Bgr8UscaledPack8 => U8 x 3,
    Bgr8SscaledPack8 => I8 x 3,
    Bgr8UintPack8 => U8 x 3,
    Bgr8SintPack8 => I8 x 3,
    Bgr8SrgbPack8 => U8 x 3,

    Rgba8UnormPack8 => U8 x 4,
    Rgba8SnormPack8 => I8 x 4,
    Rgba8UscaledPack8 => U8 x 4,
    Rgba8SscaledPack8 => I8 x 4,
    Rgba8UintPack8 => U8 x 4,
    Rgba8SintPack8 => I8 x 4,
    Rgba8SrgbPack8 => U8 x 4,

    Bgra8UnormPack8 => U8 x 4,
    Bgra8SnormPack8 => I8 x 4,
    Bgra8UscaledPack8 => U8 x 4,
    Bgra8SscaledPack8 => I8 x 4,
    Bgra8UintPack8 => U8 x 4,
    Bgra8SintPack8 => I8 x 4,
    Bgra8SrgbPack8 => U8 x 4,

    // One byte per channel in R, G, B, A order, so these read as 4 x u8 too.
    Rgba8UnormPack32 => U8 x 4,
    Rgba8SnormPack32 => I8 x 4,
    Rgba8UscaledPack32 => U8 x 4,
    Rgba8SscaledPack32 => I8 x 4,
    Rgba8UintPack32 => U8 x 4,
    Rgba8SintPack32 => I8 x 4,
    Rgba8SrgbPack32 => U8 x 4,

    R16UnormPack16 => U16 x 1,
    R16SnormPack16 => I16 x 1,
    R16UscaledPack16 => U16 x 1,
    R16SscaledPack16 => I16 x 1,
    R16UintPack16 => U16 x 1,
    R16SintPack16 => I16 x 1,
    R16SfloatPack16 => Half x 1,

    Rg16UnormPack16 => U16 x 2,
    Rg16SnormPack16 => I16 x 2,
    Rg16UscaledPack16 => U16 x 2,
    Rg16SscaledPack16 => I16 x 2,
    Rg16UintPack16 => U16 x 2,
    Rg16SintPack16 => I16 x 2,
    Rg16SfloatPack16 => Half x 2,

    Rgb16UnormPack16 => U16 x 3,
    Rgb16SnormPack16 => I16 x 3,
    Rgb16UscaledPack16 => U16 x 3,
    Rgb16SscaledPack16 => I16 x 3,
    Rgb16UintPack16 => U16 x 3,
    Rgb16SintPack16 => I16 x 3,
    Rgb16SfloatPack16 => Half x 3,

    Rgba16UnormPack16 => U16 x 4,
    Rgba16SnormPack16 => I16 x 4,
    Rgba16UscaledPack16 => U16 x 4,
    Rgba16SscaledPack16 => I16 x 4,
    Rgba16UintPack16 => U16 x 4,
    Rgba16SintPack16 => I16 x 4,
    Rgba16SfloatPack16 => Half x 4,

    R32UintPack32 => U32 x 1,
    R32SintPack32 => I32 x 1,
    R32SfloatPack32 => F32 x 1,
    Rg32UintPack32 => U32 x 2,
    Rg32SintPack32 => I32 x 2,
    Rg32SfloatPack32 => F32 x 2,
    Rgb32UintPack32 => U32 x 3,
    Rgb32SintPack32 => I32 x 3,
    Rgb32SfloatPack32 => F32 x 3,
    Rgba32UintPack32 => U32 x 4,
    Rgba32SintPack32 => I32 x 4,
    Rgba32SfloatPack32 => F32 x 4,

    R64UintPack64 => U64 x 1,
    R64SintPack64 => I64 x 1,
    R64SfloatPack64 => F64 x 1,
    Rg64UintPack64 => U64 x 2,
    Rg64SintPack64 => I64 x 2,
    Rg64SfloatPack64 => F64 x 2,
    Rgb64UintPack64 => U64 x 3,
    Rgb64SintPack64 => I64 x 3,
    Rgb64SfloatPack64 => F64 x 3,
    Rgba64UintPack64 => U64 x 4,
    Rgba64SintPack64 => I64 x 4,
    Rgba64SfloatPack64 => F64 x 4,
};

static CATALOG: [Option<FormatDescriptor>; PixelFormat::COUNT] = build_catalog(ENTRIES);

const fn build_catalog(
    entries: &[(PixelFormat, FormatDescriptor)],
) -> [Option<FormatDescriptor>; PixelFormat::COUNT] {
    let mut table = [None; PixelFormat::COUNT];
    let mut index = 0;
    while index < entries.len() {
        let (format, descriptor) = entries[index];
        assert!(
            table[format as usize].is_none(),
            "duplicate catalog entry"
        );
        table[format as usize] = Some(descriptor);
        index += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn catalog_has_every_array_format() {
        assert_eq!(supported_formats().count(), 101);
    }

    #[rstest]
    #[case(PixelFormat::R8UnormPack8, ElementKind::U8, 1)]
    #[case(PixelFormat::R8UintPack8, ElementKind::U8, 1)]
    #[case(PixelFormat::Rg8SnormPack8, ElementKind::I8, 2)]
    #[case(PixelFormat::Bgr8SrgbPack8, ElementKind::U8, 3)]
    #[case(PixelFormat::Rgba8UnormPack8, ElementKind::U8, 4)]
    #[case(PixelFormat::Bgra8SintPack8, ElementKind::I8, 4)]
    #[case(PixelFormat::Rgba8SrgbPack32, ElementKind::U8, 4)]
    #[case(PixelFormat::R16SscaledPack16, ElementKind::I16, 1)]
    #[case(PixelFormat::Rgba16SfloatPack16, ElementKind::Half, 4)]
    #[case(PixelFormat::Rgb32SintPack32, ElementKind::I32, 3)]
    #[case(PixelFormat::Rg32SfloatPack32, ElementKind::F32, 2)]
    #[case(PixelFormat::Rgba64UintPack64, ElementKind::U64, 4)]
    #[case(PixelFormat::R64SfloatPack64, ElementKind::F64, 1)]
    fn classifies_array_formats(
        #[case] format: PixelFormat,
        #[case] kind: ElementKind,
        #[case] channels: usize,
    ) {
        let descriptor = lookup(format).unwrap();
        assert_eq!(descriptor.element_kind(), kind);
        assert_eq!(descriptor.channel_count(), channels);
        assert_eq!(descriptor.texel_size(), format.block_size() as usize);
    }

    #[rstest]
    #[case(PixelFormat::Undefined)]
    #[case(PixelFormat::Rg4UnormPack8)]
    #[case(PixelFormat::R5g6b5UnormPack16)]
    #[case(PixelFormat::Rgb10a2UnormPack32)]
    #[case(PixelFormat::Rg11b10UfloatPack32)]
    #[case(PixelFormat::Rgb9e5UfloatPack32)]
    #[case(PixelFormat::D16UnormPack16)]
    #[case(PixelFormat::D24UnormS8UintPack32)]
    #[case(PixelFormat::S8UintPack8)]
    #[case(PixelFormat::RgbDxt1UnormBlock8)]
    #[case(PixelFormat::RgbaDxt5SrgbBlock16)]
    #[case(PixelFormat::RgbaBpUnormBlock16)]
    #[case(PixelFormat::RgbaAstc4x4UnormBlock16)]
    #[case(PixelFormat::RgbaPvrtc2_4x4SrgbBlock8)]
    #[case(PixelFormat::L8UnormPack8)]
    #[case(PixelFormat::La16UnormPack16)]
    #[case(PixelFormat::Bgr8UnormPack32)]
    #[case(PixelFormat::Rg3b2UnormPack8)]
    fn rejects_non_array_formats(#[case] format: PixelFormat) {
        assert_eq!(lookup(format), Err(UnsupportedFormat(format)));
        assert!(!is_supported(format));
    }

    /// Every entry must agree with the channel group and suffix spelled out in its name.
    #[test]
    fn entries_agree_with_format_names() {
        for (format, descriptor) in supported_formats() {
            let name = format.name();
            let mut parts = name.split('_');
            let group = parts.next().unwrap();
            let suffix = parts.next().unwrap();

            let letters = group.trim_end_matches(|c: char| c.is_ascii_digit());
            let bits: usize = group[letters.len()..].parse().unwrap();
            assert_eq!(descriptor.channel_count(), letters.len(), "{name}");
            assert_eq!(descriptor.element_kind().size() * 8, bits, "{name}");

            let expected = match (suffix, bits) {
                ("SFLOAT", 16) => ElementKind::Half,
                ("SFLOAT", 32) => ElementKind::F32,
                ("SFLOAT", 64) => ElementKind::F64,
                ("SNORM" | "SSCALED" | "SINT", 8) => ElementKind::I8,
                ("SNORM" | "SSCALED" | "SINT", 16) => ElementKind::I16,
                ("SINT", 32) => ElementKind::I32,
                ("SINT", 64) => ElementKind::I64,
                (_, 8) => ElementKind::U8,
                (_, 16) => ElementKind::U16,
                (_, 32) => ElementKind::U32,
                (_, 64) => ElementKind::U64,
                _ => panic!("unexpected format {name}"),
            };
            assert_eq!(descriptor.element_kind(), expected, "{name}");
        }
    }

    #[rstest]
    #[case(PixelFormat::Rgba16SfloatPack16, DecodeTransform::HalfToFloat)]
    #[case(PixelFormat::R16SfloatPack16, DecodeTransform::HalfToFloat)]
    #[case(PixelFormat::R16UnormPack16, DecodeTransform::None)]
    #[case(PixelFormat::Rgba32SfloatPack32, DecodeTransform::None)]
    #[case(PixelFormat::Rgba8UnormPack8, DecodeTransform::None)]
    fn decode_transforms(#[case] format: PixelFormat, #[case] expected: DecodeTransform) {
        assert_eq!(lookup(format).unwrap().decode_transform(), expected);
    }

    #[test]
    fn element_kinds() {
        for kind in ElementKind::all_values() {
            assert!(matches!(kind.size(), 1 | 2 | 4 | 8));
            if *kind != ElementKind::Half {
                assert_eq!(kind.array_kind(), *kind);
            }
        }
        assert_eq!(ElementKind::Half.array_kind(), ElementKind::F32);
        assert_eq!(ElementKind::I16.array_kind(), ElementKind::I16);
    }
}
