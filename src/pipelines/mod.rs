//! wgpu-backed uniform and texture state.
//!
//! The rest of the crate talks to the shading pipeline through the
//! [`ShaderBridge`](crate::bridge::ShaderBridge) and
//! [`TextureStorage`](crate::resources::registry::TextureStorage) seams.
//! This module is the real implementation of both on top of `wgpu`: uniform
//! state lives in two GPU buffers kept current on every push, textures are
//! uploaded once with a full mip chain and tracked by opaque handle.

pub mod bridge;
pub mod uniform;

pub use bridge::WgpuBridge;
pub use uniform::{LightsUniform, SceneUniform};
