//! The named-uniform seam towards the shading pipeline.
//!
//! Uniform state is process-wide shared mutable state: whatever was pushed
//! last is what the next draw reads. The engine writes it exclusively through
//! [`StateBinder`](crate::binder::StateBinder), draws read it through the
//! mesh library, and the two are never interleaved within one draw.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Named-uniform setters the shading pipeline exposes.
///
/// One setter per uniform type the scene pushes. Implementations keep the
/// last pushed value per name; nothing resets between draws.
pub trait ShaderBridge {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    /// Bind a sampler uniform to a texture unit index.
    fn set_sampler(&mut self, name: &str, slot: u32);
}
