use super::{TextureFilter, TextureWrap};

/// Sampling parameters applied to a texture right after it is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureOptions {
    /// Filter used when the texture is scaled.
    pub(crate) filter: TextureFilter,
    /// Wrap mode used outside of the [0, 1] texture coordinates.
    pub(crate) wrap: TextureWrap,
}

impl TextureOptions {
    /// Creates options for pixel-exact sprites: point filtering, clamped to the edge.
    pub fn new() -> Self {
        Self {
            filter: TextureFilter::Point,
            wrap: TextureWrap::Clamp,
        }
    }

    /// Sets the filter mode.
    pub fn filter(mut self, filter: TextureFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the wrap mode.
    pub fn wrap(mut self, wrap: TextureWrap) -> Self {
        self.wrap = wrap;
        self
    }
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let opts = TextureOptions::default();
        assert_eq!(opts.filter, TextureFilter::Point);
        assert_eq!(opts.wrap, TextureWrap::Clamp);

        let opts = opts
            .filter(TextureFilter::Bilinear)
            .wrap(TextureWrap::MirrorRepeat);
        assert_eq!(opts.filter, TextureFilter::Bilinear);
        assert_eq!(opts.wrap, TextureWrap::MirrorRepeat);
    }
}
