use std::fs;
use std::path::{Path, PathBuf};

use image::ImageReader;
use thiserror::Error;
use tracing::debug;

use crate::asset_keys::{validate_asset_key, AssetKeyError};

use super::geometry::Rect;
use super::sprite::Sprite;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset name '{name}': {source}")]
    InvalidKey {
        name: String,
        #[source]
        source: AssetKeyError,
    },
    #[error("cannot read asset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot load image {path}: {source}")]
    DecodeImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot load sound {path}: {source}")]
    DecodeSound {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Which pixels of a loaded image become transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    None,
    Rgb([u8; 3]),
    /// Whatever color the top-left pixel has.
    Corner,
}

#[derive(Debug, Clone)]
pub struct AssetLoader {
    data_dir: PathBuf,
}

impl AssetLoader {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn resolve(&self, name: &str) -> Result<PathBuf, AssetError> {
        validate_asset_key(name).map_err(|source| AssetError::InvalidKey {
            name: name.to_string(),
            source,
        })?;
        Ok(self.data_dir.join(name))
    }

    /// Decodes an image asset and returns it with a rect of its size at the origin.
    pub fn load_image(&self, name: &str, color_key: ColorKey) -> Result<(Sprite, Rect), AssetError> {
        let path = self.resolve(name)?;
        let reader = ImageReader::open(&path).map_err(|source| AssetError::Read {
            path: path.clone(),
            source,
        })?;
        let decoded = reader
            .with_guessed_format()
            .map_err(|source| AssetError::Read {
                path: path.clone(),
                source,
            })?
            .decode()
            .map_err(|source| AssetError::DecodeImage {
                path: path.clone(),
                source,
            })?;

        let sprite = Sprite::from_image(decoded.to_rgba8());
        let sprite = match color_key {
            ColorKey::None => sprite,
            ColorKey::Rgb(key) => sprite.with_color_key(key),
            ColorKey::Corner => sprite.with_corner_color_key(),
        };
        let rect = Rect::new(0, 0, sprite.width() as i32, sprite.height() as i32);
        debug!(
            asset = name,
            width = sprite.width(),
            height = sprite.height(),
            "image_loaded"
        );
        Ok((sprite, rect))
    }

    pub fn read_bytes(&self, name: &str) -> Result<(PathBuf, Vec<u8>), AssetError> {
        let path = self.resolve(name)?;
        let bytes = fs::read(&path).map_err(|source| AssetError::Read {
            path: path.clone(),
            source,
        })?;
        Ok((path, bytes))
    }
}
