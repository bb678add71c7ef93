/// Texture parameters: filter mode.
///
/// Filtering considers mipmaps if available, and applies to both minification and magnification.
#[repr(i32)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    #[default]
    Point = 0,      // No filter, just pixel approximation.
    Bilinear,       // Linear filtering.
    Trilinear,      // Linear filtering with mipmaps.
    Anisotropic4x,  // Anisotropic filtering 4x.
    Anisotropic8x,  // Anisotropic filtering 8x.
    Anisotropic16x, // Anisotropic filtering 16x.
}

/// Texture parameters: wrap mode.
#[repr(i32)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureWrap {
    Repeat = 0,   // Repeats texture in tiled mode.
    #[default]
    Clamp,        // Clamps texture to edge pixel in tiled mode.
    MirrorRepeat, // Mirrors and repeats the texture in tiled mode.
    MirrorClamp,  // Mirrors and clamps to border the texture in tiled mode.
}

/// Cubemap layouts. Only carried through to engines, never interpreted here.
#[repr(i32)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubemapLayout {
    #[default]
    AutoDetect = 0,   // Automatically detect layout type.
    LineVertical,     // Faces in a vertical line.
    LineHorizontal,   // Faces in a horizontal line.
    CrossThreeByFour, // 3x4 cross with cubemap faces.
    CrossFourByThree, // 4x3 cross with cubemap faces.
    Panorama,         // Panorama image (equirectangular map).
}

/// Pixel formats understood by the engine.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    UncompressedGrayscale = 1, // 8 bit per pixel (no alpha).
    UncompressedGrayAlpha,     // 8*2 bpp (2 channels).
    UncompressedR5G6B5,        // 16 bpp.
    UncompressedR8G8B8,        // 24 bpp.
    UncompressedR5G5B5A1,      // 16 bpp (1 bit alpha).
    UncompressedR4G4B4A4,      // 16 bpp (4 bit alpha).
    UncompressedR8G8B8A8,      // 32 bpp.
    UncompressedR32,           // 32 bpp (1 channel, float).
    UncompressedR32G32B32,     // 32*3 bpp (3 channels, float).
    UncompressedR32G32B32A32,  // 32*4 bpp (4 channels, float).
    UncompressedR16,           // 16 bpp (1 channel, half float).
    UncompressedR16G16B16,     // 16*3 bpp (3 channels, half float).
    UncompressedR16G16B16A16,  // 16*4 bpp (4 channels, half float).
    CompressedDxt1Rgb,         // 4 bpp (no alpha).
    CompressedDxt1Rgba,        // 4 bpp (1 bit alpha).
    CompressedDxt3Rgba,        // 8 bpp.
    CompressedDxt5Rgba,        // 8 bpp.
    CompressedEtc1Rgb,         // 4 bpp.
    CompressedEtc2Rgb,         // 4 bpp.
    CompressedEtc2EacRgba,     // 8 bpp.
    CompressedPvrtRgb,         // 4 bpp.
    CompressedPvrtRgba,        // 4 bpp.
    CompressedAstc4x4Rgba,     // 8 bpp.
    CompressedAstc8x8Rgba,     // 2 bpp.
}

impl PixelFormat {
    /// Bytes used by a single pixel. None for block-compressed formats.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        use PixelFormat::*;
        match self {
            UncompressedGrayscale => Some(1),
            UncompressedGrayAlpha | UncompressedR5G6B5 | UncompressedR5G5B5A1
            | UncompressedR4G4B4A4 | UncompressedR16 => Some(2),
            UncompressedR8G8B8 => Some(3),
            UncompressedR8G8B8A8 | UncompressedR32 => Some(4),
            UncompressedR16G16B16 => Some(6),
            UncompressedR16G16B16A16 => Some(8),
            UncompressedR32G32B32 => Some(12),
            UncompressedR32G32B32A32 => Some(16),
            _ => None,
        }
    }
}
