//! Typed arrays of texel data.
//!
//! A [`TexelArray`] holds one `ndarray` array of a single element type. Arrays produced by
//! [`decode`] borrow the texture they were decoded from where possible; [`TexelArray::into_owned`]
//! detaches them.
//!
//! [`decode`]: crate::decode::decode

use bytemuck::Pod;
use ndarray::{ArrayD, ArrayViewD, CowArray, IxDyn};
use texarray_common::ElementKind;

mod private {
    pub trait Sealed {}
}

/// A numeric type that can be the element type of a [`TexelArray`].
///
/// Implemented for every integer type from 8 to 64 bits, [`f32`] and [`f64`].
pub trait Element: Pod + Send + Sync + private::Sealed {
    /// The element kind of this type.
    const KIND: ElementKind;

    /// Wraps an array of this type.
    fn wrap(array: CowArray<'_, Self, IxDyn>) -> TexelArray<'_>;

    /// Returns the array held by `array` if it holds elements of this type.
    fn unwrap<'a, 'b>(array: &'b TexelArray<'a>) -> Option<&'b CowArray<'a, Self, IxDyn>>;
}

macro_rules! texel_array {
    ($($variant:ident => $type:ty),* $(,)?) => {
        /// An N-dimensional array of texel data with a runtime element type.
        ///
        /// Arrays exchanged with textures have the shape `(rows, cols, channels)`, where rows
        /// is the texture's height and cols its width. Half float textures are represented as
        /// [`TexelArray::F32`].
        #[derive(Debug, Clone, PartialEq)]
        pub enum TexelArray<'a> {
            $(
                #[doc = concat!("Array of [`", stringify!($type), "`].")]
                $variant(CowArray<'a, $type, IxDyn>),
            )*
        }

        $(
            impl private::Sealed for $type {}

            impl Element for $type {
                const KIND: ElementKind = ElementKind::$variant;

                #[inline]
                fn wrap(array: CowArray<'_, Self, IxDyn>) -> TexelArray<'_> {
                    TexelArray::$variant(array)
                }

                #[inline]
                fn unwrap<'a, 'b>(array: &'b TexelArray<'a>) -> Option<&'b CowArray<'a, Self, IxDyn>> {
                    match array {
                        TexelArray::$variant(array) => Some(array),
                        _ => None,
                    }
                }
            }
        )*

        impl<'a> TexelArray<'a> {
            /// The element kind of the array.
            pub fn element_kind(&self) -> ElementKind {
                match self {
                    $(TexelArray::$variant(_) => ElementKind::$variant,)*
                }
            }

            /// The length of each axis.
            pub fn shape(&self) -> &[usize] {
                match self {
                    $(TexelArray::$variant(array) => array.shape(),)*
                }
            }

            /// Whether the array borrows its elements instead of owning them.
            pub fn is_view(&self) -> bool {
                match self {
                    $(TexelArray::$variant(array) => array.is_view(),)*
                }
            }

            /// Converts the array into one that owns its elements, copying them if it borrows.
            pub fn into_owned(self) -> TexelArray<'static> {
                match self {
                    $(TexelArray::$variant(array) => {
                        TexelArray::$variant(CowArray::from(array.into_owned()))
                    })*
                }
            }
        }
    };
}

texel_array! {
    U8 => u8,
    I8 => i8,
    U16 => u16,
    I16 => i16,
    U32 => u32,
    I32 => i32,
    U64 => u64,
    I64 => i64,
    F32 => f32,
    F64 => f64,
}

impl<'a> TexelArray<'a> {
    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A view of the array if its elements are of type `T`.
    pub fn as_array<T: Element>(&self) -> Option<ArrayViewD<'_, T>> {
        T::unwrap(self).map(|array| array.view())
    }

    /// Wraps a view of elements of type `T`. No elements are copied.
    #[inline]
    pub fn from_view<T: Element>(view: ArrayViewD<'a, T>) -> Self {
        T::wrap(CowArray::from(view))
    }
}

impl<T: Element> From<ArrayD<T>> for TexelArray<'static> {
    #[inline]
    fn from(array: ArrayD<T>) -> Self {
        T::wrap(CowArray::from(array))
    }
}
