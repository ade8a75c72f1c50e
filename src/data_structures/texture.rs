//! Texture records and decoded image data.
//!
//! The texture registry owns one [`TextureRecord`] per loaded asset. Records
//! are created at load time, immutable afterwards, and destroyed only when
//! the registry tears down.

/// Opaque identifier of a GPU-resident texture.
///
/// Handles are minted by a [`TextureStorage`](crate::resources::registry::TextureStorage)
/// implementation at upload time and mean nothing outside of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(u64);

impl TextureHandle {
    /// Wrap a backend-assigned id. Only storage backends should mint
    /// handles.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A registered texture: its lookup tag, GPU handle and slot index.
///
/// `slot` is assigned in strict load order starting at 0. Tags are not
/// required to be unique; lookups return the first record in registration
/// order, so a duplicate tag shadows every later registration with the
/// same tag.
#[derive(Clone, Debug)]
pub struct TextureRecord {
    pub tag: String,
    pub handle: TextureHandle,
    pub slot: u32,
}

/// Raw pixels produced by an image codec.
///
/// Rows are ordered bottom-up (flip-on-load), matching the UV origin the
/// shading pipeline expects. `channels` is whatever the source file carried;
/// the registry only uploads 3- and 4-channel data.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}
