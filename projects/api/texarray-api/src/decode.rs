//! Texture to array conversion.

use crate::array::{Element, TexelArray};
use crate::error::{TexArrayError, TexArrayResult};
use core::mem::size_of;
use ndarray::{ArrayD, ArrayViewD, CowArray, IxDyn};
use texarray_common::catalog::lookup;
use texarray_common::half::decode_half_slice;
use texarray_common::ElementKind;
use texarray_dds::Texture;
use tracing::trace;

/// Decodes the first image of `texture` into a `(rows, cols, channels)` array.
///
/// Only mip level 0 of layer 0 and face 0 is decoded, and of volume textures only the first
/// depth slice. Rows is the texture's height, cols its width, and channels the channel count
/// of its pixel format.
///
/// The returned array borrows the texture's storage, except for half float formats. Those are
/// widened into an owned [`f32`] array. Call [`TexelArray::into_owned`] to detach a view.
///
/// # Errors
///
/// - [`TexArrayError::EmptyTexture`] if the texture has no storage
/// - [`TexArrayError::UnsupportedFormat`] if the format has no array representation
/// - [`TexArrayError::BufferLength`] if the image is smaller than its shape
/// - [`TexArrayError::Reinterpret`] if the image cannot be viewed as the element type
pub fn decode(texture: &Texture) -> TexArrayResult<TexelArray<'_>> {
    if texture.is_empty() {
        return Err(TexArrayError::EmptyTexture);
    }

    let format = texture.format();
    let descriptor = lookup(format)?;
    let extent = texture.extent();
    let shape = [
        extent.height as usize,
        extent.width as usize,
        descriptor.channel_count(),
    ];

    let image = texture.image_data(0, 0, 0)?;
    let expected = shape
        .iter()
        .try_fold(descriptor.element_kind().size(), |total, &axis| {
            total.checked_mul(axis)
        })
        .ok_or(TexArrayError::BufferLength {
            expected: usize::MAX,
            actual: image.len(),
        })?;
    if image.len() < expected {
        return Err(TexArrayError::BufferLength {
            expected,
            actual: image.len(),
        });
    }

    let bytes = &image[..expected];
    trace!(%format, ?shape, kind = %descriptor.element_kind(), "Decoding texture");
    match descriptor.element_kind() {
        ElementKind::U8 => view::<u8>(bytes, &shape),
        ElementKind::I8 => view::<i8>(bytes, &shape),
        ElementKind::U16 => view::<u16>(bytes, &shape),
        ElementKind::I16 => view::<i16>(bytes, &shape),
        ElementKind::U32 => view::<u32>(bytes, &shape),
        ElementKind::I32 => view::<i32>(bytes, &shape),
        ElementKind::F32 => view::<f32>(bytes, &shape),
        ElementKind::U64 => view::<u64>(bytes, &shape),
        ElementKind::I64 => view::<i64>(bytes, &shape),
        ElementKind::F64 => view::<f64>(bytes, &shape),
        ElementKind::Half => {
            let halves: &[u16] = bytemuck::try_cast_slice(bytes)?;
            let floats = ArrayD::from_shape_vec(IxDyn(&shape), decode_half_slice(halves))
                .map_err(|_| TexArrayError::BufferLength {
                    expected,
                    actual: bytes.len(),
                })?;
            Ok(TexelArray::F32(CowArray::from(floats)))
        }
    }
}

/// Views `bytes` as an array of `T` without copying.
fn view<'a, T: Element>(bytes: &'a [u8], shape: &[usize]) -> TexArrayResult<TexelArray<'a>> {
    let elements: &[T] = bytemuck::try_cast_slice(bytes)?;
    let view = ArrayViewD::from_shape(IxDyn(shape), elements).map_err(|_| {
        TexArrayError::BufferLength {
            expected: shape.iter().product::<usize>() * size_of::<T>(),
            actual: bytes.len(),
        }
    })?;
    Ok(TexelArray::from_view(view))
}
