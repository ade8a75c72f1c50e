//! Image decoding for texture assets.
//!
//! The registry consumes decoded pixels through the [`ImageCodec`] trait so
//! that tests can feed it synthetic images. [`FileImageCodec`] is the real
//! implementation on top of the `image` crate.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::GenericImageView;

use crate::data_structures::texture::DecodedImage;

/// Decodes an image asset into raw pixels.
///
/// Implementations must return rows bottom-up (flip-on-load), so that UV
/// origin sits at the bottom-left the way the shading pipeline samples.
pub trait ImageCodec {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage>;
}

/// File-based codec resolving relative paths against an asset root.
pub struct FileImageCodec {
    asset_root: PathBuf,
}

impl FileImageCodec {
    /// Codec rooted at the given directory. Absolute asset paths bypass the
    /// root.
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.asset_root.join(path)
        }
    }
}

impl Default for FileImageCodec {
    fn default() -> Self {
        Self::new("assets")
    }
}

impl ImageCodec for FileImageCodec {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage> {
        let resolved = self.resolve(path);
        let img = image::open(&resolved)
            .with_context(|| format!("could not load image {}", resolved.display()))?;
        // The pipeline samples with the origin at the bottom-left.
        let img = img.flipv();

        let channels = img.color().channel_count();
        let (width, height) = img.dimensions();
        let pixels = match channels {
            3 => img.to_rgb8().into_raw(),
            4 => img.to_rgba8().into_raw(),
            // Unsupported layouts are passed through untouched; the registry
            // rejects them by channel count.
            _ => img.as_bytes().to_vec(),
        };

        Ok(DecodedImage {
            pixels,
            width,
            height,
            channels,
        })
    }
}
