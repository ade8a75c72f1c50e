/*!
 * This module contains all logic for getting textures and materials into the
 * scene's registries: image decoding, the bounded texture-slot registry and
 * the unbounded material library.
 */
pub mod codec;
pub mod materials;
pub mod registry;

pub use codec::{FileImageCodec, ImageCodec};
pub use materials::MaterialLibrary;
pub use registry::{MAX_TEXTURE_SLOTS, RegistryError, TextureRegistry, TextureStorage};
