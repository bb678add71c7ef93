mod rectangle;
mod sprite;

pub use rectangle::Rectangle;
pub use sprite::Sprite;
