//! Array to texture conversion.

use crate::array::TexelArray;
use crate::error::{TexArrayError, TexArrayResult};
use bytemuck::{Pod, Zeroable};
use core::convert::identity;
use ndarray::{ArrayViewD, Axis};
use texarray_common::catalog::lookup;
use texarray_common::half::encode_half;
use texarray_common::{ElementKind, Extent, PixelFormat};
use texarray_dds::{TexelCoord, Texture};
use tracing::debug;

/// Encodes a `(rows, cols, channels)` array into a new single image texture of `format`.
///
/// The texture is `cols` texels wide and `rows` texels high, with one mip level, layer and
/// face. The array's element kind must be the one the format stores, except for half float
/// formats, which take [`f32`] arrays and round every element to the nearest half float.
/// Arrays of any memory layout are accepted.
///
/// # Errors
///
/// - [`TexArrayError::UnsupportedFormat`] if the format has no array representation
/// - [`TexArrayError::InvalidArrayRank`] if the array does not have 3 axes
/// - [`TexArrayError::FormatArrayMismatch`] if the element kind or channel count differ
///   from the format's
/// - [`TexArrayError::EmptyTexture`] if the array has no rows or cols
/// - [`TexArrayError::DimensionOverflow`] if rows or cols exceed [`u32::MAX`]
pub fn encode(array: &TexelArray<'_>, format: PixelFormat) -> TexArrayResult<Texture> {
    let descriptor = lookup(format)?;
    if array.ndim() != 3 {
        return Err(TexArrayError::InvalidArrayRank(array.ndim()));
    }

    let (rows, cols, channels) = (array.shape()[0], array.shape()[1], array.shape()[2]);
    let expected_kind = descriptor.element_kind().array_kind();
    if array.element_kind() != expected_kind || channels != descriptor.channel_count() {
        return Err(TexArrayError::FormatArrayMismatch {
            format,
            expected_kind,
            expected_channels: descriptor.channel_count(),
            actual_kind: array.element_kind(),
            actual_channels: channels,
        });
    }

    if rows == 0 || cols == 0 {
        return Err(TexArrayError::EmptyTexture);
    }
    let (Ok(width), Ok(height)) = (u32::try_from(cols), u32::try_from(rows)) else {
        return Err(TexArrayError::DimensionOverflow { rows, cols });
    };

    debug!(%format, rows, cols, channels, "Encoding array into texture");
    let mut texture = Texture::create(format, Extent::new(width, height, 1), 1, 1, 1)?;
    match array {
        TexelArray::F32(elements) if descriptor.element_kind() == ElementKind::Half => {
            store_texels(&mut texture, format, &elements.view(), encode_half)?
        }
        TexelArray::U8(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::I8(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::U16(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::I16(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::U32(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::I32(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::U64(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::I64(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::F32(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
        TexelArray::F64(elements) => store_texels(&mut texture, format, &elements.view(), identity)?,
    }
    Ok(texture)
}

/// Stores every texel of a `(rows, cols, channels)` array into level 0 of `texture`.
fn store_texels<A: Copy, E: Pod>(
    texture: &mut Texture,
    format: PixelFormat,
    array: &ArrayViewD<'_, A>,
    convert: impl Fn(A) -> E,
) -> TexArrayResult<()> {
    match array.len_of(Axis(2)) {
        1 => store_channels::<A, E, 1>(texture, array, convert),
        2 => store_channels::<A, E, 2>(texture, array, convert),
        3 => store_channels::<A, E, 3>(texture, array, convert),
        4 => store_channels::<A, E, 4>(texture, array, convert),
        _ => Err(TexArrayError::UnsupportedFormat(format)),
    }
}

fn store_channels<A: Copy, E: Pod, const N: usize>(
    texture: &mut Texture,
    array: &ArrayViewD<'_, A>,
    convert: impl Fn(A) -> E,
) -> TexArrayResult<()>
where
    [E; N]: Pod,
{
    let cols = array.len_of(Axis(1));
    // Lanes along the channel axis come in row-major order of (row, col).
    for (index, lane) in array.lanes(Axis(2)).into_iter().enumerate() {
        let mut texel = [E::zeroed(); N];
        for (channel, &element) in texel.iter_mut().zip(lane.iter()) {
            *channel = convert(element);
        }

        let coord = TexelCoord::new((index % cols) as u32, (index / cols) as u32, 0);
        texture.store(coord, 0, 0, 0, texel)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;
    use ndarray::{Array3, ArrayD, IxDyn, ShapeBuilder};

    fn array3<T: Element>(array: Array3<T>) -> TexelArray<'static> {
        TexelArray::from(array.into_dyn())
    }

    #[test]
    fn stores_texels_row_major() {
        let array = Array3::from_shape_fn((3, 2, 4), |(row, col, channel)| {
            (row * 100 + col * 10 + channel) as u16
        });
        let texture = encode(&array3(array), PixelFormat::Rgba16UintPack16).unwrap();

        assert_eq!(texture.extent(), Extent::new(2, 3, 1));
        assert_eq!(texture.levels(), 1);
        assert_eq!(
            texture.load::<[u16; 4]>(TexelCoord::new(1, 2, 0), 0, 0, 0),
            Ok([210, 211, 212, 213])
        );
        assert_eq!(
            texture.load::<[u16; 4]>(TexelCoord::new(0, 1, 0), 0, 0, 0),
            Ok([100, 101, 102, 103])
        );
    }

    #[test]
    fn accepts_any_memory_layout() {
        let standard = Array3::from_shape_fn((2, 3, 2), |(row, col, channel)| {
            (row * 6 + col * 2 + channel) as i32
        });
        let mut fortran = Array3::zeros((2, 3, 2).f());
        fortran.assign(&standard);

        let from_standard = encode(&array3(standard), PixelFormat::Rg32SintPack32).unwrap();
        let from_fortran = encode(&array3(fortran), PixelFormat::Rg32SintPack32).unwrap();
        assert_eq!(from_standard.data(), from_fortran.data());
    }

    #[test]
    fn single_channel_formats_use_the_same_path() {
        let array = Array3::from_shape_vec((2, 2, 1), vec![1i8, -2, 3, -4]).unwrap();
        let texture = encode(&array3(array), PixelFormat::R8SintPack8).unwrap();
        assert_eq!(texture.data(), &[1, 0xFE, 3, 0xFC]);
    }

    #[test]
    fn f32_arrays_round_to_half_floats() {
        let array = Array3::from_shape_vec((1, 1, 4), vec![1.0f32, -2.0, 65520.0, 1.0e-8]).unwrap();
        let texture = encode(&array3(array), PixelFormat::Rgba16SfloatPack16).unwrap();
        assert_eq!(
            texture.load::<[u16; 4]>(TexelCoord::new(0, 0, 0), 0, 0, 0),
            Ok([0x3C00, 0xC000, 0x7C00, 0x0000])
        );
    }

    #[test]
    fn decode_then_encode_reproduces_texel_data() {
        let mut source = Texture::create_2d(PixelFormat::Bgra8SrgbPack8, 3, 2).unwrap();
        for (index, byte) in source.data_mut().iter_mut().enumerate() {
            *byte = index as u8;
        }

        let array = decode(&source).unwrap();
        let encoded = encode(&array, PixelFormat::Bgra8SrgbPack8).unwrap();
        assert_eq!(encoded.data(), source.data());
    }

    #[rstest]
    #[case(&[4, 4])]
    #[case(&[2, 2, 2, 4])]
    #[case(&[16])]
    fn rejects_arrays_without_three_axes(#[case] shape: &[usize]) {
        let array = TexelArray::from(ArrayD::<u8>::zeros(IxDyn(shape)));
        assert!(matches!(
            encode(&array, PixelFormat::Rgba8UnormPack8),
            Err(TexArrayError::InvalidArrayRank(ndim)) if ndim == shape.len()
        ));
    }

    #[test]
    fn rejects_element_kind_mismatch() {
        let array = array3(Array3::<u16>::zeros((2, 2, 4)));
        assert!(matches!(
            encode(&array, PixelFormat::Rgba8UnormPack8),
            Err(TexArrayError::FormatArrayMismatch {
                expected_kind: ElementKind::U8,
                actual_kind: ElementKind::U16,
                ..
            })
        ));
    }

    #[test]
    fn rejects_channel_count_mismatch() {
        let array = array3(Array3::<u8>::zeros((2, 2, 3)));
        assert!(matches!(
            encode(&array, PixelFormat::Rgba8UnormPack8),
            Err(TexArrayError::FormatArrayMismatch {
                expected_channels: 4,
                actual_channels: 3,
                ..
            })
        ));
    }

    #[test]
    fn half_formats_only_take_f32_arrays() {
        let array = array3(Array3::<f64>::zeros((1, 1, 1)));
        assert!(matches!(
            encode(&array, PixelFormat::R16SfloatPack16),
            Err(TexArrayError::FormatArrayMismatch {
                expected_kind: ElementKind::F32,
                ..
            })
        ));
    }

    #[test]
    fn rejects_unsupported_formats_before_shape() {
        let array = TexelArray::from(ArrayD::<u8>::zeros(IxDyn(&[4])));
        assert!(matches!(
            encode(&array, PixelFormat::RgbaBpUnormBlock16),
            Err(TexArrayError::UnsupportedFormat(PixelFormat::RgbaBpUnormBlock16))
        ));
    }

    #[rstest]
    #[case((0, 4, 1))]
    #[case((4, 0, 1))]
    fn rejects_empty_arrays(#[case] shape: (usize, usize, usize)) {
        let array = array3(Array3::<u8>::zeros(shape));
        assert!(matches!(
            encode(&array, PixelFormat::R8UnormPack8),
            Err(TexArrayError::EmptyTexture)
        ));
    }
}
