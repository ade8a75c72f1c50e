//! tableau
//!
//! A small engine for preparing and drawing a static composite 3D scene:
//! a fixed set of primitive meshes positioned, textured, and lit to
//! resemble table-top objects. The crate owns the scene's resource and
//! state registry: bounded texture-slot allocation, tag-addressed
//! materials, and the per-draw protocol that pushes transform, texture,
//! overlay, material and UV-scale uniforms into a shading pipeline before
//! each draw call. Mesh tessellation, shader compilation and window setup
//! stay outside, behind small trait seams.
//!
//! High-level modules
//! - `binder`: per-draw render state pushes (transform, color, texture, material)
//! - `bridge`: the named-uniform setter seam towards the shading pipeline
//! - `data_structures`: records, draw descriptors and transform composition
//! - `meshes`: the primitive draw seam towards mesh storage
//! - `pipelines`: wgpu-backed uniform buffers and texture storage
//! - `resources`: image decoding, the texture registry and the material library
//! - `scene`: one-time scene preparation and the sequential draw loop
//!

pub mod binder;
pub mod bridge;
pub mod data_structures;
pub mod meshes;
pub mod pipelines;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
