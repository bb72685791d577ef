/// Shared constants between modules.
pub mod constants;

/// Mapping between DXGI formats and pixel formats.
pub mod dxgi;

/// Determine if a file is a DDS file.
pub mod likely_dds;

/// Read the headers and image data of a DDS file.
pub mod parse_dds;

/// Write a texture as a DDS file.
pub mod write_dds;

pub use likely_dds::likely_dds;
pub use parse_dds::*;
pub use write_dds::*;
