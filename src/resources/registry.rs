//! The bounded texture-slot registry.
//!
//! At scene-load time every texture asset is decoded, uploaded to GPU
//! storage and registered under a tag in the next free slot. The table is
//! capped at [`MAX_TEXTURE_SLOTS`] and slots are handed out in strict load
//! order starting at 0, matching the texture units the shading pipeline
//! samples from. Per-draw code resolves tags back to slots through
//! [`TextureRegistry::find_slot`].

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data_structures::texture::{DecodedImage, TextureHandle, TextureRecord};
use crate::resources::codec::ImageCodec;

/// Number of texture units the shading pipeline exposes.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// GPU-resident texture storage.
///
/// The registry drives this seam for uploads at load time, slot binding
/// once after all loads, and handle release at teardown. Implementations
/// are expected to generate mipmaps at upload.
pub trait TextureStorage {
    /// Upload pixels and mint a handle for them. Only 3- and 4-channel
    /// images reach this method; the registry filters everything else.
    fn upload(&mut self, image: &DecodedImage, label: &str) -> TextureHandle;

    /// Bind a previously uploaded handle to a texture unit.
    fn bind(&mut self, slot: u32, handle: TextureHandle);

    /// Free the GPU resources behind a handle. The handle is dead afterwards.
    fn release(&mut self, handle: TextureHandle);
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("could not decode image {path:?}: {cause}")]
    Decode { path: PathBuf, cause: anyhow::Error },
    #[error("image {path:?} has {channels} channels, only 3 and 4 are handled")]
    UnsupportedChannels { path: PathBuf, channels: u8 },
    #[error("texture registry is full, all 16 slots are taken")]
    CapacityExceeded,
}

/// Bounded tag-to-slot texture table.
///
/// Records are immutable once created and live until [`teardown`]
/// (`TextureRegistry::teardown`). Lookups scan in registration order and
/// return the first match, so a duplicated tag shadows later registrations
/// with the same tag.
#[derive(Default)]
pub struct TextureRegistry {
    records: Vec<TextureRecord>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(MAX_TEXTURE_SLOTS),
        }
    }

    /// Decode an asset and register it under `tag` in the next free slot.
    ///
    /// Returns the assigned slot. On any failure the table is left exactly
    /// as it was: a full table fails with [`RegistryError::CapacityExceeded`]
    /// before anything is decoded, a decode failure or unsupported channel
    /// count consumes no slot and uploads nothing.
    pub fn load(
        &mut self,
        codec: &dyn ImageCodec,
        storage: &mut dyn TextureStorage,
        path: &Path,
        tag: &str,
    ) -> Result<u32, RegistryError> {
        // Checked up front so a full table can never write past its end.
        if self.records.len() >= MAX_TEXTURE_SLOTS {
            return Err(RegistryError::CapacityExceeded);
        }

        let image = codec.decode(path).map_err(|cause| {
            log::warn!("could not load image {:?}: {}", path, cause);
            RegistryError::Decode {
                path: path.to_path_buf(),
                cause,
            }
        })?;

        if image.channels != 3 && image.channels != 4 {
            log::warn!(
                "not handling image {:?} with {} channels",
                path,
                image.channels
            );
            return Err(RegistryError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels: image.channels,
            });
        }

        if self.find_slot(tag).is_some() {
            log::warn!(
                "texture tag {:?} is already registered; draws using it will keep \
                 resolving to the first registration",
                tag
            );
        }

        let handle = storage.upload(&image, tag);
        let slot = self.records.len() as u32;
        log::info!(
            "loaded image {:?}, width: {}, height: {}, channels: {}, slot: {}",
            path,
            image.width,
            image.height,
            image.channels,
            slot
        );
        self.records.push(TextureRecord {
            tag: tag.to_string(),
            handle,
            slot,
        });

        Ok(slot)
    }

    /// GPU handle of the first registration with this tag.
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.records.iter().find(|r| r.tag == tag).map(|r| r.handle)
    }

    /// Slot index of the first registration with this tag. `None` is the
    /// only miss signal; slot 0 is a valid hit.
    pub fn find_slot(&self, tag: &str) -> Option<u32> {
        self.records.iter().find(|r| r.tag == tag).map(|r| r.slot)
    }

    /// Bind every registered handle to its texture unit, in registration
    /// order. Idempotent; only storage binding state changes.
    pub fn bind_all(&self, storage: &mut dyn TextureStorage) {
        for record in &self.records {
            storage.bind(record.slot, record.handle);
        }
    }

    /// Release every GPU handle and reset the table to empty.
    ///
    /// Call once at session end, never while slots are bound for an
    /// in-progress draw. Subsequent lookups return `None`.
    pub fn teardown(&mut self, storage: &mut dyn TextureStorage) {
        for record in self.records.drain(..) {
            storage.release(record.handle);
        }
    }

    pub fn records(&self) -> &[TextureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
