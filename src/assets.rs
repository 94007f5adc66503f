//! Face image loading.
//!
//! Images live in the asset directory as `image0` (the tile back) and
//! `image1..imageN`. Missing files are not fatal: the renderer falls back to
//! generated colours so the game stays playable without artwork.

use crate::domain::FaceId;
use macroquad::prelude::*;
use std::path::Path;

const EXTENSIONS: [&str; 2] = ["png", "bmp"];

/// Loaded textures, indexed by face number (index 0 is the back)
pub struct FaceTextures {
    textures: Vec<Option<Texture2D>>,
}

impl FaceTextures {
    /// Textures with nothing loaded; every tile draws with fallback colours
    pub fn empty(face_count: usize) -> Self {
        Self {
            textures: vec![None; face_count + 1],
        }
    }

    /// Load the back and `face_count` faces from `dir`
    pub async fn load(dir: impl AsRef<Path>, face_count: usize) -> Self {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            log::warn!("asset directory {} not found, using plain colours", dir.display());
            return Self::empty(face_count);
        }

        let mut textures = Vec::with_capacity(face_count + 1);
        for n in 0..=face_count {
            textures.push(load_image_n(dir, n).await);
        }

        let loaded = textures.iter().flatten().count();
        if loaded < textures.len() {
            log::warn!(
                "{} of {} images missing in {}, using plain colours for those",
                textures.len() - loaded,
                textures.len(),
                dir.display()
            );
        } else {
            log::info!("loaded {loaded} images from {}", dir.display());
        }
        Self { textures }
    }

    pub fn back(&self) -> Option<&Texture2D> {
        self.textures.first().and_then(Option::as_ref)
    }

    pub fn face(&self, face: FaceId) -> Option<&Texture2D> {
        self.textures.get(face.index()).and_then(Option::as_ref)
    }
}

async fn load_image_n(dir: &Path, n: usize) -> Option<Texture2D> {
    for ext in EXTENSIONS {
        let path = dir.join(format!("image{n}.{ext}"));
        let Some(path) = path.to_str() else {
            continue;
        };
        match load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Linear);
                return Some(texture);
            }
            Err(err) => log::trace!("{path}: {err}"),
        }
    }
    None
}

/// Stable fallback colour for a face, spread around the hue wheel
pub fn fallback_color(face: FaceId, face_count: usize) -> Color {
    let hue = (face.index().saturating_sub(1)) as f32 / face_count.max(1) as f32;
    macroquad::color::hsl_to_rgb(hue, 0.65, 0.55)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_colors_are_distinct() {
        let colors: Vec<Color> = (1..=8).map(|n| fallback_color(FaceId(n), 8)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_empty_has_no_textures() {
        let textures = FaceTextures::empty(4);
        assert!(textures.back().is_none());
        assert!(textures.face(FaceId(4)).is_none());
        assert!(textures.face(FaceId(9)).is_none());
    }
}
