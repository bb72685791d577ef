//! Common test imports and utilities for DDS tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::dds::*;
pub use crate::error::*;

// Common DDS test data helpers
use crate::dds::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Total size of DDS header + DX10 header (used in tests)
pub const DDS_DX10_TOTAL_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

/// Helper function to create a basic DDS header with common fields
fn create_dds_header_base(data: &mut [u8], width: u32, height: u32, mipmap_count: u32) {
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

    unsafe {
        // DDS magic
        writer.write_u32_at(DDS_MAGIC, 0);
        // Set header size (dwSize field at offset 4)
        writer.write_u32_at(DDS_HEADER_STRUCT_SIZE, DDS_SIZE_OFFSET as isize);

        // Set flags to include required fields
        let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | DDSD_LINEARSIZE;
        if mipmap_count > 1 {
            flags |= DDSD_MIPMAPCOUNT;
        }
        writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);

        // Set dimensions
        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);

        // Set mipmap count if more than 1
        if mipmap_count > 1 {
            writer.write_u32_at(mipmap_count, DDS_MIPMAP_COUNT_OFFSET as isize);
        }
        writer.write_u32_at(DDS_PIXELFORMAT_STRUCT_SIZE, DDS_PIXELFORMAT_OFFSET as isize);
    }
}

/// Creates DDS headers with an extension header of the given FOURCC and format value.
fn create_extension_dds(fourcc: &[u8; 4], format_value: u32, width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    let mut data = vec![0u8; DDS_DX10_TOTAL_HEADER_SIZE];
    create_dds_header_base(&mut data, width, height, mipmap_count);
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(fourcc);
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(format_value, DX10_FORMAT_OFFSET as isize);
        writer.write_u32_at(D3D10_RESOURCE_DIMENSION_TEXTURE2D, DX10_RESOURCE_DIMENSION_OFFSET as isize);
        writer.write_u32_at(1, DX10_ARRAY_SIZE_OFFSET as isize);
    }
    data
}

/// Creates the headers of a DDS file with a DX10 header holding `dxgi_format`.
pub fn create_dx10_dds(dxgi_format: u32, width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    create_extension_dds(b"DX10", dxgi_format, width, height, mipmap_count)
}

/// Creates the headers of a DDS file with a VKF1 header holding the raw pixel format value.
pub fn create_vkf1_dds(format_value: u32, width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    create_extension_dds(b"VKF1", format_value, width, height, mipmap_count)
}

/// Sets the cube map flag and array size of headers made by [`create_dx10_dds`].
pub fn set_dx10_layout(data: &mut [u8], misc_flag: u32, array_size: u32) {
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(misc_flag, DX10_MISC_FLAG_OFFSET as isize);
        writer.write_u32_at(array_size, DX10_ARRAY_SIZE_OFFSET as isize);
    }
}

/// Creates the header of a legacy DDS file with the given FOURCC.
pub fn create_fourcc_dds(fourcc: &[u8; 4], width: u32, height: u32, mipmap_count: u32) -> Vec<u8> {
    let mut data = vec![0u8; DDS_HEADER_SIZE];
    create_dds_header_base(&mut data, width, height, mipmap_count);
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(fourcc);
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
    }
    data
}

/// Creates the header of a legacy DDS file described by pixel format flags and bit masks.
///
/// `masks` are the red, green, blue and alpha masks. A non-zero alpha mask also sets
/// `DDPF_ALPHAPIXELS`.
pub fn create_masked_dds(flags: u32, bit_count: u32, masks: [u32; 4], width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; DDS_HEADER_SIZE];
    create_dds_header_base(&mut data, width, height, 1);
    let flags = if masks[3] != 0 { flags | DDPF_ALPHAPIXELS } else { flags };
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(flags, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(bit_count, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
        writer.write_u32_at(masks[0], DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[1], DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[2], DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[3], DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);
    }
    data
}
