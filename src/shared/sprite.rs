use crate::shared::Rectangle;
use crate::texture::Texture2D;

/// A region of a texture, such as a single frame from an atlas.
///
/// The texture handle is copied, not owned. Releasing the GPU resource is up to the engine that
/// created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    texture: Texture2D,   // Handle to the source texture.
    rectangle: Rectangle, // Visible area, in texture pixels.
}

impl Sprite {
    /// Creates a new sprite from a texture and the region to show.
    pub fn new(texture: Texture2D, rectangle: Rectangle) -> Self {
        Self { texture, rectangle }
    }

    /// Creates a sprite that shows the entire texture.
    pub fn whole(texture: Texture2D) -> Self {
        Self::new(texture, texture.source_rectangle())
    }

    /// Handle of the texture the region is taken from.
    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    /// Visible region, in texture pixels.
    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::PixelFormat;

    fn atlas() -> Texture2D {
        Texture2D {
            id: 3,
            width: 64,
            height: 32,
            mipmaps: 1,
            format: PixelFormat::UncompressedR8G8B8A8,
        }
    }

    #[test]
    fn sprite_keeps_region() {
        let frame = Rectangle::new(16.0, 0.0, 16.0, 16.0);
        let sprite = Sprite::new(atlas(), frame);
        assert_eq!(sprite.texture().id, 3);
        assert_eq!(*sprite.rectangle(), frame);
    }

    #[test]
    fn whole_covers_texture() {
        let sprite = Sprite::whole(atlas());
        assert_eq!(*sprite.rectangle(), Rectangle::new(0.0, 0.0, 64.0, 32.0));
    }
}
