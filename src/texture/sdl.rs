use std::collections::HashMap;

use sdl3::pixels::PixelFormat as SdlPixelFormat;
use sdl3::render::{ScaleMode, Texture, TextureCreator};
use sdl3::video::WindowContext;

use super::error::Result;
use super::{Image, PixelFormat, Texture2D, TextureEngine, TextureError, TextureFilter, TextureWrap};

/// Texture engine backed by an SDL3 renderer.
///
/// Textures live as long as the texture creator they were made with and are released when the
/// engine is dropped.
pub struct SdlTextureEngine<'r> {
    creator: &'r TextureCreator<WindowContext>, // Creates textures for the window's renderer.
    textures: HashMap<u32, Texture<'r>>,        // Maps texture id => SDL texture.
    next_id: u32,                               // Next id to hand out, 0 is never used.
}

impl<'r> SdlTextureEngine<'r> {
    /// Creates a new engine that uploads through `creator`.
    pub fn new(creator: &'r TextureCreator<WindowContext>) -> Self {
        Self {
            creator,
            textures: HashMap::new(),
            next_id: 1,
        }
    }

    /// Obtains the SDL texture behind a handle, used for drawing.
    pub fn texture(&self, id: u32) -> Option<&Texture<'r>> {
        self.textures.get(&id)
    }

    /// Releases the SDL texture behind a handle. Returns false if the handle was unknown.
    pub fn unload(&mut self, texture: &Texture2D) -> bool {
        let removed = self.textures.remove(&texture.id).is_some();
        if removed {
            log::debug!("Unloaded texture {}.", texture.id);
        }
        removed
    }

    /// Obtains the SDL texture behind a handle, or an error if the handle is unknown.
    fn texture_mut(&mut self, texture: &Texture2D) -> Result<&mut Texture<'r>> {
        self.textures
            .get_mut(&texture.id)
            .ok_or_else(|| TextureError::Engine(format!("Unknown texture id {}", texture.id)))
    }
}

impl TextureEngine for SdlTextureEngine<'_> {
    fn load_texture_from_image(&mut self, image: &Image<'_>) -> Result<Texture2D> {
        if image.format() != PixelFormat::UncompressedR8G8B8A8 {
            return Err(TextureError::Unsupported(format!("{:?}", image.format())));
        }

        let width = u32::try_from(image.width())
            .map_err(|_| TextureError::InvalidDimensions(image.width(), image.height()))?;
        let height = u32::try_from(image.height())
            .map_err(|_| TextureError::InvalidDimensions(image.width(), image.height()))?;

        let mut texture = self
            .creator
            .create_texture_static(SdlPixelFormat::RGBA32, width, height)
            .map_err(|why| TextureError::Engine(why.to_string()))?;
        texture
            .update(None, image.data(), width as usize * 4)
            .map_err(|why| TextureError::Engine(why.to_string()))?;

        let id = allocate_id(&mut self.next_id)?;
        self.textures.insert(id, texture);

        Ok(Texture2D {
            id,
            width: image.width(),
            height: image.height(),
            mipmaps: image.mipmaps(),
            format: image.format(),
        })
    }

    fn set_texture_filter(&mut self, texture: &Texture2D, filter: TextureFilter) -> Result<()> {
        let mode = match filter {
            TextureFilter::Point => ScaleMode::Nearest,
            TextureFilter::Bilinear => ScaleMode::Linear,
            other => {
                log::warn!("SDL renderer has no {other:?} filter.");
                return Err(TextureError::Unsupported(format!("{other:?}")));
            }
        };

        self.texture_mut(texture)?.set_scale_mode(mode);
        Ok(())
    }

    fn set_texture_wrap(&mut self, texture: &Texture2D, wrap: TextureWrap) -> Result<()> {
        // SDL renderer textures always clamp to the edge.
        self.texture_mut(texture)?;
        match wrap {
            TextureWrap::Clamp => Ok(()),
            other => {
                log::warn!("SDL renderer has no {other:?} wrap mode.");
                Err(TextureError::Unsupported(format!("{other:?}")))
            }
        }
    }
}

/// Hands out the id in `next_id` and advances it, failing once ids run out.
fn allocate_id(next_id: &mut u32) -> Result<u32> {
    let id = *next_id;
    *next_id = id
        .checked_add(1)
        .ok_or_else(|| TextureError::Engine("Texture ids exhausted".to_string()))?;
    Ok(id)
}
