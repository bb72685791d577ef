//! File I/O implementation using lightweight-mmap.

use crate::array::TexelArray;
use crate::decode::decode;
use crate::encode::encode;
use crate::error::{TexArrayError, TexArrayResult};
use crate::file_io::FileIoError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;
use texarray_common::PixelFormat;
use texarray_dds::{dds_file_size, write_dds, Texture};
use tracing::debug;

/// Reads the DDS file at `path` into a new [`Texture`].
///
/// The file is memory-mapped only while it is parsed; the texture owns a copy of its images.
/// To view the texture as an array without copying, pass it to [`decode`].
///
/// # Errors
///
/// - [`TexArrayError::FileNotFound`] if `path` is not a file or cannot be opened for reading
/// - [`TexArrayError::EmptyTexture`] if the file is empty
/// - [`TexArrayError::Container`] if the file is not a valid DDS file
/// - [`TexArrayError::Io`] if the file cannot be mapped or does not fit in memory
pub fn open_texture(path: &Path) -> TexArrayResult<Texture> {
    if !path.is_file() {
        return Err(TexArrayError::FileNotFound(path.to_path_buf()));
    }

    let Ok(handle) = ReadOnlyFileHandle::open(path) else {
        return Err(TexArrayError::FileNotFound(path.to_path_buf()));
    };
    let file_size = handle.size()?;
    let Ok(size) = usize::try_from(file_size) else {
        return Err(FileIoError::FileTooLarge(file_size as u64).into());
    };
    if size == 0 {
        return Err(TexArrayError::EmptyTexture);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    let texture = Texture::from_dds(mapping.as_slice())?;
    debug!(
        path = %path.display(),
        format = %texture.format(),
        extent = ?texture.extent(),
        levels = texture.levels(),
        "Opened texture"
    );
    Ok(texture)
}

/// Loads the first image of the DDS file at `path` as an owned `(rows, cols, channels)` array.
///
/// See [`decode`] for how texels map onto the array.
///
/// # Errors
///
/// Any error of [`open_texture`] or [`decode`].
pub fn load(path: &Path) -> TexArrayResult<TexelArray<'static>> {
    let texture = open_texture(path)?;
    let array = decode(&texture)?.into_owned();
    debug!(
        path = %path.display(),
        kind = %array.element_kind(),
        shape = ?array.shape(),
        "Loaded array"
    );
    Ok(array)
}

/// Saves a `(rows, cols, channels)` array as a DDS file of `format` at `path`.
///
/// The array is validated and encoded in memory first; no file is created if that fails.
/// An existing file at `path` is replaced. The parent directory must exist.
///
/// # Errors
///
/// Any error of [`encode`], or [`TexArrayError::Io`] if the file cannot be created or mapped.
pub fn save(path: &Path, array: &TexelArray<'_>, format: PixelFormat) -> TexArrayResult<()> {
    let texture = encode(array, format)?;
    let file_size = dds_file_size(&texture);
    let Ok(preallocated_size) = i64::try_from(file_size) else {
        return Err(FileIoError::FileTooLarge(file_size as u64).into());
    };

    let handle = ReadWriteFileHandle::create_preallocated(path, preallocated_size)?;
    let mut mapping = ReadWriteMmap::new(&handle, 0, file_size)?;
    write_dds(&texture, mapping.as_mut_slice())?;
    debug!(path = %path.display(), %format, file_size, "Saved array");
    Ok(())
}
