use super::constants::*;

/// Determines if the given data likely represents a DDS texture.
/// This is done by checking the 'MAGIC' header, 'DDS ' at offset 0 and minimum size.
/// For more accurate checking including header validation, use [`parse_dds_header`].
///
/// [`parse_dds_header`]: crate::dds::parse_dds::parse_dds_header
#[inline(always)]
pub fn likely_dds(data: &[u8]) -> bool {
    data.len() >= DDS_HEADER_SIZE && has_dds_magic(data)
}

/// Checks only the 'DDS ' magic at offset 0.
#[inline(always)]
pub(crate) fn has_dds_magic(data: &[u8]) -> bool {
    // from_le_bytes ensures correct reading on all platforms since DDS is little-endian.
    data.len() >= 4 && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == DDS_MAGIC
}
