mod error;
mod format;
mod opts;
#[cfg(feature = "sdl")]
mod sdl;

use error::Result;
pub use error::TextureError;
pub use format::{CubemapLayout, PixelFormat, TextureFilter, TextureWrap};
pub use opts::TextureOptions;
#[cfg(feature = "sdl")]
pub use sdl::SdlTextureEngine;

use crate::shared::Rectangle;

/// Bytes per pixel of tightly packed RGBA8 data.
const RGBA8_PIXEL_SIZE: usize = 4;

/// The rendering engine that owns GPU textures.
///
/// Implementations upload image descriptions and change sampling parameters. Failures are
/// returned as-is to the caller of the texture helpers.
pub trait TextureEngine {
    /// Uploads the image to the GPU and returns the handle to the new texture.
    fn load_texture_from_image(&mut self, image: &Image<'_>) -> Result<Texture2D>;

    /// Changes the filter mode of a loaded texture.
    fn set_texture_filter(&mut self, texture: &Texture2D, filter: TextureFilter) -> Result<()>;

    /// Changes the wrap mode of a loaded texture.
    fn set_texture_wrap(&mut self, texture: &Texture2D, wrap: TextureWrap) -> Result<()>;
}

/// Pixel data in CPU memory, borrowed for the duration of an upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image<'a> {
    width: i32,
    height: i32,
    mipmaps: i32,
    format: PixelFormat,
    data: &'a [u8],
}

impl<'a> Image<'a> {
    /// Describes a single-level image, checking the buffer length for uncompressed formats.
    pub fn new(width: i32, height: i32, format: PixelFormat, data: &'a [u8]) -> Result<Self> {
        if let Some(pixel_size) = format.bytes_per_pixel() {
            let expected = buffer_len(width, height, pixel_size)?;
            if data.len() != expected {
                return Err(TextureError::InvalidBufferSize(expected, data.len()));
            }
        }

        Ok(Self {
            width,
            height,
            mipmaps: 1,
            format,
            data,
        })
    }

    /// Describes tightly packed, row-major RGBA8 pixels.
    pub fn rgba8(width: i32, height: i32, data: &'a [u8]) -> Result<Self> {
        Self::new(width, height, PixelFormat::UncompressedR8G8B8A8, data)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn mipmaps(&self) -> i32 {
        self.mipmaps
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// Handle to a texture stored in GPU memory.
///
/// The engine that created it owns the resource. Copying the handle does not copy the texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture2D {
    pub id: u32,             // Engine texture id.
    pub width: i32,          // Texture base width.
    pub height: i32,         // Texture base height.
    pub mipmaps: i32,        // Mipmap levels, 1 by default.
    pub format: PixelFormat, // Data format.
}

impl Texture2D {
    /// Uploads RGBA8 pixels as a texture with point filtering, clamped to the edge.
    ///
    /// `data` must hold exactly `width * height * 4` bytes. It is only read during the call.
    pub fn from_data<E>(engine: &mut E, width: i32, height: i32, data: &[u8]) -> Result<Self>
    where
        E: TextureEngine + ?Sized,
    {
        Self::from_data_with(engine, width, height, data, &TextureOptions::default())
    }

    /// Uploads RGBA8 pixels as a texture, then applies the sampling options.
    pub fn from_data_with<E>(
        engine: &mut E,
        width: i32,
        height: i32,
        data: &[u8],
        options: &TextureOptions,
    ) -> Result<Self>
    where
        E: TextureEngine + ?Sized,
    {
        let image = Image::rgba8(width, height, data)?;
        let texture = engine.load_texture_from_image(&image)?;
        log::debug!(
            "Loaded texture {} ({}x{}, {:?}).",
            texture.id,
            texture.width,
            texture.height,
            texture.format
        );

        engine.set_texture_filter(&texture, options.filter)?;
        engine.set_texture_wrap(&texture, options.wrap)?;
        log::trace!(
            "Texture {} set to {:?} / {:?}.",
            texture.id,
            options.filter,
            options.wrap
        );

        Ok(texture)
    }

    /// Uploads RGBA8 pixels read from a raw pointer.
    ///
    /// # Safety
    ///
    /// `data` must be valid for reads of `width * height * 4` bytes for the duration of the call.
    pub unsafe fn from_ptr<E>(
        engine: &mut E,
        width: i32,
        height: i32,
        data: *const u8,
    ) -> Result<Self>
    where
        E: TextureEngine + ?Sized,
    {
        if data.is_null() {
            return Err(TextureError::NullData);
        }

        let len = buffer_len(width, height, RGBA8_PIXEL_SIZE)?;
        // SAFETY: non-null, u8 has no alignment requirement, and the caller vouches for `len` bytes.
        let pixels = unsafe { std::slice::from_raw_parts(data, len) };
        Self::from_data(engine, width, height, pixels)
    }

    /// Uploads RGBA8 pixels found at a native memory address.
    ///
    /// # Safety
    ///
    /// Same contract as [`Texture2D::from_ptr`], for the pointer at `address`.
    pub unsafe fn from_address<E>(
        engine: &mut E,
        width: i32,
        height: i32,
        address: usize,
    ) -> Result<Self>
    where
        E: TextureEngine + ?Sized,
    {
        let data = std::ptr::with_exposed_provenance::<u8>(address);
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_ptr(engine, width, height, data) }
    }

    /// Area covering the whole texture, in pixels.
    #[allow(clippy::cast_precision_loss)]
    pub fn source_rectangle(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

/// Length in bytes of a tightly packed buffer.
fn buffer_len(width: i32, height: i32, pixel_size: usize) -> Result<usize> {
    let invalid = || TextureError::InvalidDimensions(width, height);
    let w = usize::try_from(width).map_err(|_| invalid())?;
    let h = usize::try_from(height).map_err(|_| invalid())?;

    w.checked_mul(h)
        .and_then(|pixels| pixels.checked_mul(pixel_size))
        .ok_or_else(invalid)
}
