#![allow(dead_code)]
use raykit::texture::{TextureFilter, TextureWrap};
use raykit::{Image, Texture2D, TextureEngine, TextureError};

/// Installs a test logger once, so `RUST_LOG` works while debugging tests.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Calls made against the recording engine, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load {
        width: i32,
        height: i32,
        mipmaps: i32,
        data: Vec<u8>,
    },
    Filter(u32, TextureFilter),
    Wrap(u32, TextureWrap),
}

/// Engine double that hands out sequential ids and records every call.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<Call>,
    pub fail_load: Option<String>,   // Makes the next uploads fail with this reason.
    pub fail_filter: Option<String>, // Makes filter changes fail with this reason.
    next_id: u32,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter most recently set on the texture.
    pub fn filter_of(&self, id: u32) -> Option<TextureFilter> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Filter(tid, filter) if *tid == id => Some(*filter),
            _ => None,
        })
    }

    /// Wrap mode most recently set on the texture.
    pub fn wrap_of(&self, id: u32) -> Option<TextureWrap> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Wrap(tid, wrap) if *tid == id => Some(*wrap),
            _ => None,
        })
    }
}

impl TextureEngine for RecordingEngine {
    fn load_texture_from_image(&mut self, image: &Image<'_>) -> Result<Texture2D, TextureError> {
        if let Some(why) = &self.fail_load {
            return Err(TextureError::Engine(why.clone()));
        }

        self.calls.push(Call::Load {
            width: image.width(),
            height: image.height(),
            mipmaps: image.mipmaps(),
            data: image.data().to_vec(),
        });

        self.next_id += 1;
        Ok(Texture2D {
            id: self.next_id,
            width: image.width(),
            height: image.height(),
            mipmaps: image.mipmaps(),
            format: image.format(),
        })
    }

    fn set_texture_filter(
        &mut self,
        texture: &Texture2D,
        filter: TextureFilter,
    ) -> Result<(), TextureError> {
        if let Some(why) = &self.fail_filter {
            return Err(TextureError::Engine(why.clone()));
        }

        self.calls.push(Call::Filter(texture.id, filter));
        Ok(())
    }

    fn set_texture_wrap(&mut self, texture: &Texture2D, wrap: TextureWrap) -> Result<(), TextureError> {
        self.calls.push(Call::Wrap(texture.id, wrap));
        Ok(())
    }
}

/// Tightly packed RGBA8 pixels of a single colour.
pub fn solid(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
    rgba.iter().copied().cycle().take(width * height * 4).collect()
}
