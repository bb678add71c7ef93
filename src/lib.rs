//! Value types and helpers for 2D games built on a native graphics engine.
//!
//! Geometry (`Point`, `Vec2f`, `Rectangle`), atlas sprites, random draws, and RGBA8 texture
//! uploads through a [`TextureEngine`]. Enable the `sdl` feature for an SDL3-backed engine.

mod point;
mod random;
pub mod shared;
pub mod texture;
mod vec2f;

pub use point::{NumberFormat, Point, PointDisplay};
pub use random::RandomExt;
pub use shared::{Rectangle, Sprite};
pub use texture::{Image, Texture2D, TextureEngine, TextureError, TextureOptions};
pub use vec2f::Vec2f;
