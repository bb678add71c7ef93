/// Result type for texture actions.
pub(crate) type Result<T> = std::result::Result<T, TextureError>;

/// Error codes for creating and configuring textures.
#[derive(Debug, PartialEq)]
pub enum TextureError {
    InvalidDimensions(i32, i32),     // Width or height is negative.
    InvalidBufferSize(usize, usize), // Pixel buffer length, expected and got.
    NullData,                        // Pixel data pointer is null.
    Unsupported(String),             // Mode not supported by the engine.
    Engine(String),                  // Engine failed to perform the action.
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::InvalidDimensions(width, height) => {
                write!(f, "Invalid Texture Dimensions, got {width}x{height}")
            }
            TextureError::InvalidBufferSize(expected, got) => {
                write!(
                    f,
                    "Invalid Pixel Buffer Size, expected {expected} bytes, got {got}"
                )
            }
            TextureError::NullData => write!(f, "Pixel Data is null"),
            TextureError::Unsupported(what) => write!(f, "Unsupported: {what}"),
            TextureError::Engine(why) => write!(f, "Engine Error: {why}"),
        }
    }
}

impl std::error::Error for TextureError {}
