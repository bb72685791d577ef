//! Storage geometry of every [`PixelFormat`].
//!
//! Unlike the [`catalog`](crate::catalog), this covers all formats, including block
//! compressed and packed ones, so that containers can size and walk texture storage for
//! any texture they read, even ones that can never become arrays.

use crate::pixel_format::PixelFormat;

/// Width, height and depth of a texture, mip level or compression block, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Number of texels along the X axis.
    pub width: u32,
    /// Number of texels along the Y axis.
    pub height: u32,
    /// Number of texels along the Z axis. 1 for 2D textures.
    pub depth: u32,
}

impl Extent {
    /// Creates an [`Extent`] from its three dimensions.
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Returns `true` if any dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.depth == 0
    }

    /// Extent of mip level `level`, halving each dimension per level and clamping to 1.
    #[inline]
    pub const fn mip_level(&self, level: u32) -> Self {
        const fn shrink(value: u32, level: u32) -> u32 {
            if level >= u32::BITS {
                return 1;
            }
            let value = value >> level;
            if value == 0 {
                1
            } else {
                value
            }
        }

        Self::new(
            shrink(self.width, level),
            shrink(self.height, level),
            shrink(self.depth, level),
        )
    }
}

const TEXEL: Extent = Extent::new(1, 1, 1);

impl PixelFormat {
    /// Number of bytes occupied by one block of this format.
    ///
    /// For uncompressed formats a block is a single texel. Returns 0 for
    /// [`PixelFormat::Undefined`].
    pub const fn block_size(self) -> u32 {
        match self.raw() {
            0 => 0,
            // RG4
            1 => 1,
            // 4/5/6-bit packed 16-bit words
            2..=8 => 2,
            // R8, RG8, RGB8, BGR8, RGBA8, BGRA8
            9..=15 => 1,
            16..=22 => 2,
            23..=36 => 3,
            37..=50 => 4,
            // RGBA8 PACK32, RGB10A2, BGR10A2
            51..=69 => 4,
            // 16-bit channels
            70..=76 => 2,
            77..=83 => 4,
            84..=90 => 6,
            91..=97 => 8,
            // 32-bit channels
            98..=100 => 4,
            101..=103 => 8,
            104..=106 => 12,
            107..=109 => 16,
            // 64-bit channels
            110..=112 => 8,
            113..=115 => 16,
            116..=118 => 24,
            119..=121 => 32,
            // RG11B10, RGB9E5
            122..=123 => 4,
            // D16, D24, D32, S8, D16S8, D24S8, D32S8
            124 => 2,
            125..=126 => 4,
            127 => 1,
            128..=129 => 4,
            130 => 8,
            // DXT1
            131..=134 => 8,
            // DXT3, DXT5
            135..=138 => 16,
            // ATI1N, ATI2N
            139..=140 => 8,
            141..=142 => 16,
            // BC6H, BC7
            143..=146 => 16,
            // ETC2 RGB and punchthrough alpha, then ETC2 RGBA
            147..=150 => 8,
            151..=152 => 16,
            // EAC R, EAC RG
            153..=154 => 8,
            155..=156 => 16,
            // ASTC
            157..=184 => 16,
            // PVRTC1, PVRTC2
            185..=192 => 32,
            193..=196 => 8,
            // ETC1, ATC, ATCA, ATCI
            197..=198 => 8,
            199..=200 => 16,
            // L8, A8, LA8, L16, A16, LA16
            201..=202 => 1,
            203..=205 => 2,
            206 => 4,
            // BGRX8
            207..=208 => 4,
            // RG3B2
            _ => 1,
        }
    }

    /// Extent of one block of this format, in texels.
    pub const fn block_extent(self) -> Extent {
        match self.raw() {
            131..=156 | 197..=200 => Extent::new(4, 4, 1),
            157..=184 => {
                // ASTC comes in UNORM/SRGB pairs, one pair per footprint.
                const ASTC_FOOTPRINTS: [(u32, u32); 14] = [
                    (4, 4),
                    (5, 4),
                    (5, 5),
                    (6, 5),
                    (6, 6),
                    (8, 5),
                    (8, 6),
                    (8, 8),
                    (10, 5),
                    (10, 6),
                    (10, 8),
                    (10, 10),
                    (12, 10),
                    (12, 12),
                ];
                let (width, height) = ASTC_FOOTPRINTS[((self.raw() - 157) / 2) as usize];
                Extent::new(width, height, 1)
            }
            185..=186 | 189..=190 => Extent::new(8, 8, 1),
            187..=188 | 191..=192 => Extent::new(16, 8, 1),
            193..=194 => Extent::new(4, 4, 1),
            195..=196 => Extent::new(8, 4, 1),
            _ => TEXEL,
        }
    }

    /// Returns `true` if a block of this format spans more than one texel.
    #[inline]
    pub const fn is_compressed(self) -> bool {
        let extent = self.block_extent();
        extent.width != 1 || extent.height != 1 || extent.depth != 1
    }

    /// Returns `true` for depth and/or stencil formats.
    #[inline]
    pub const fn is_depth_stencil(self) -> bool {
        matches!(self.raw(), 124..=130)
    }

    /// Number of bytes needed to store an image of the given extent in this format.
    ///
    /// Partial blocks at the edges count as whole blocks. Returns [`None`] on overflow.
    pub const fn image_size(self, extent: Extent) -> Option<usize> {
        let block = self.block_extent();
        let blocks_x = extent.width.div_ceil(block.width) as usize;
        let blocks_y = extent.height.div_ceil(block.height) as usize;
        let blocks_z = extent.depth.div_ceil(block.depth) as usize;

        let Some(blocks) = blocks_x.checked_mul(blocks_y) else {
            return None;
        };
        let Some(blocks) = blocks.checked_mul(blocks_z) else {
            return None;
        };
        blocks.checked_mul(self.block_size() as usize)
    }

    /// Number of bytes in one row of blocks for an image of the given width.
    pub const fn row_pitch(self, width: u32) -> usize {
        let block = self.block_extent();
        width.div_ceil(block.width) as usize * self.block_size() as usize
    }
}
