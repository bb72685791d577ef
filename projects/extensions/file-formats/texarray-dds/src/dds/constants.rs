//! DDS format constants and definitions
#![allow(dead_code)]

/// Magic header for DDS files
pub(crate) const DDS_MAGIC: u32 = 0x44445320_u32.to_be();

/// Value of the `dwSize` field of every valid DDS header.
pub(crate) const DDS_HEADER_STRUCT_SIZE: u32 = 124;
/// Value of the `dwSize` field of every valid DDS pixel format.
pub(crate) const DDS_PIXELFORMAT_STRUCT_SIZE: u32 = 32;

/// Offset of the FOURCC header used in DX9 and below.
pub(crate) const FOURCC_OFFSET: usize = 0x54;

pub(crate) const FOURCC_DXT1: u32 = 0x31545844_u32.to_le(); // 'DXT1'
pub(crate) const FOURCC_DXT2: u32 = 0x32545844_u32.to_le(); // 'DXT2'
pub(crate) const FOURCC_DXT3: u32 = 0x33545844_u32.to_le(); // 'DXT3'
pub(crate) const FOURCC_DXT4: u32 = 0x34545844_u32.to_le(); // 'DXT4'
pub(crate) const FOURCC_DXT5: u32 = 0x35545844_u32.to_le(); // 'DXT5'
pub(crate) const FOURCC_ATI1: u32 = 0x31495441_u32.to_le(); // 'ATI1'
pub(crate) const FOURCC_ATI2: u32 = 0x32495441_u32.to_le(); // 'ATI2'
pub(crate) const FOURCC_BC4U: u32 = 0x55344342_u32.to_le(); // 'BC4U'
pub(crate) const FOURCC_BC4S: u32 = 0x53344342_u32.to_le(); // 'BC4S'
pub(crate) const FOURCC_BC5U: u32 = 0x55354342_u32.to_le(); // 'BC5U'
pub(crate) const FOURCC_BC5S: u32 = 0x53354342_u32.to_le(); // 'BC5S'
pub(crate) const FOURCC_DX10: u32 = 0x30315844_u32.to_le(); // 'DX10'
/// Same layout as the DX10 extension header, but the format field holds a pixel format
/// wire value rather than a DXGI format.
pub(crate) const FOURCC_VKF1: u32 = 0x31464B56_u32.to_le(); // 'VKF1'

// Legacy D3DFMT values stored directly in the FOURCC field.
pub(crate) const D3DFMT_A16B16G16R16: u32 = 36;
pub(crate) const D3DFMT_Q16W16V16U16: u32 = 110;
pub(crate) const D3DFMT_R16F: u32 = 111;
pub(crate) const D3DFMT_G16R16F: u32 = 112;
pub(crate) const D3DFMT_A16B16G16R16F: u32 = 113;
pub(crate) const D3DFMT_R32F: u32 = 114;
pub(crate) const D3DFMT_G32R32F: u32 = 115;
pub(crate) const D3DFMT_A32B32G32R32F: u32 = 116;

// Size of the regular DDS header
pub(crate) const DDS_HEADER_SIZE: usize = 0x80;
pub(crate) const DX10_HEADER_SIZE: usize = 20;

// DDS header field offsets
pub(crate) const DDS_SIZE_OFFSET: usize = 0x04;
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_PITCH_OR_LINEAR_SIZE_OFFSET: usize = 0x14;
pub(crate) const DDS_DEPTH_OFFSET: usize = 0x18;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
pub(crate) const DDS_CAPS_OFFSET: usize = 0x6C;
pub(crate) const DDS_CAPS2_OFFSET: usize = 0x70;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

// DX10 extension header offsets
pub(crate) const DX10_FORMAT_OFFSET: usize = 0x80;
pub(crate) const DX10_RESOURCE_DIMENSION_OFFSET: usize = 0x84;
pub(crate) const DX10_MISC_FLAG_OFFSET: usize = 0x88;
pub(crate) const DX10_ARRAY_SIZE_OFFSET: usize = 0x8C;
pub(crate) const DX10_MISC_FLAGS2_OFFSET: usize = 0x90;

// DDS header flags
pub(crate) const DDSD_CAPS: u32 = 0x1;
pub(crate) const DDSD_HEIGHT: u32 = 0x2;
pub(crate) const DDSD_WIDTH: u32 = 0x4;
pub(crate) const DDSD_PITCH: u32 = 0x8;
pub(crate) const DDSD_PIXELFORMAT: u32 = 0x1000;
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_LINEARSIZE: u32 = 0x80000;
pub(crate) const DDSD_DEPTH: u32 = 0x800000;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_ALPHA: u32 = 0x2;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_RGB: u32 = 0x40;
pub(crate) const DDPF_YUV: u32 = 0x200;
pub(crate) const DDPF_LUMINANCE: u32 = 0x20000;

// DDS caps
pub(crate) const DDSCAPS_COMPLEX: u32 = 0x8;
pub(crate) const DDSCAPS_TEXTURE: u32 = 0x1000;
pub(crate) const DDSCAPS_MIPMAP: u32 = 0x400000;
pub(crate) const DDSCAPS2_CUBEMAP: u32 = 0x200;
pub(crate) const DDSCAPS2_CUBEMAP_ALLFACES: u32 = 0xFC00;
pub(crate) const DDSCAPS2_VOLUME: u32 = 0x200000;

// DX10 resource dimensions and flags
pub(crate) const D3D10_RESOURCE_DIMENSION_TEXTURE1D: u32 = 2;
pub(crate) const D3D10_RESOURCE_DIMENSION_TEXTURE2D: u32 = 3;
pub(crate) const D3D10_RESOURCE_DIMENSION_TEXTURE3D: u32 = 4;
pub(crate) const DDS_RESOURCE_MISC_TEXTURECUBE: u32 = 0x4;

// Common pixel format bit masks (verified with TexConv)
// R8G8B8A8_UNORM: R=byte0, G=byte1, B=byte2, A=byte3 (0xAABBGGRR)
pub(crate) const RGBA8888_RED_MASK: u32 = 0x000000FF;
pub(crate) const RGBA8888_GREEN_MASK: u32 = 0x0000FF00;
pub(crate) const RGBA8888_BLUE_MASK: u32 = 0x00FF0000;
pub(crate) const RGBA8888_ALPHA_MASK: u32 = 0xFF000000;

// B8G8R8A8_UNORM: R=byte2, G=byte1, B=byte0, A=byte3 (0xAAGGRRBB)
pub(crate) const BGRA8888_RED_MASK: u32 = 0x00FF0000;
pub(crate) const BGRA8888_GREEN_MASK: u32 = 0x0000FF00;
pub(crate) const BGRA8888_BLUE_MASK: u32 = 0x000000FF;
pub(crate) const BGRA8888_ALPHA_MASK: u32 = 0xFF000000;

// 16-bit packed formats
pub(crate) const R5G6B5_RED_MASK: u32 = 0xF800;
pub(crate) const R5G6B5_GREEN_MASK: u32 = 0x07E0;
pub(crate) const R5G6B5_BLUE_MASK: u32 = 0x001F;
pub(crate) const A1R5G5B5_RED_MASK: u32 = 0x7C00;
pub(crate) const A1R5G5B5_GREEN_MASK: u32 = 0x03E0;
pub(crate) const A1R5G5B5_BLUE_MASK: u32 = 0x001F;
pub(crate) const A1R5G5B5_ALPHA_MASK: u32 = 0x8000;

// G16R16_UNORM
pub(crate) const G16R16_RED_MASK: u32 = 0x0000FFFF;
pub(crate) const G16R16_GREEN_MASK: u32 = 0xFFFF0000;
