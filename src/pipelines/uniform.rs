//! Raw uniform buffer layouts shared with the shaders.

use wgpu::util::DeviceExt;

use crate::scene::lighting::MAX_POINT_LIGHTS;

/// Per-draw scene state: model transform, flat color, texturing flags and
/// slots, UV scale and the current material.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub model: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub material_diffuse: [f32; 3],
    pub material_shininess: f32,
    pub material_specular: [f32; 3],
    pub use_lighting: u32,
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub use_texture_overlay: u32,
    pub object_texture: u32,
    pub overlay_texture: u32,
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    pub _padding: [u32; 2],
}

impl Default for SceneUniform {
    fn default() -> Self {
        Self {
            model: cgmath::Matrix4::from_scale(1.0f32).into(),
            object_color: [1.0, 1.0, 1.0, 1.0],
            material_diffuse: [0.0; 3],
            material_shininess: 0.0,
            material_specular: [0.0; 3],
            use_lighting: 0,
            uv_scale: [1.0, 1.0],
            use_texture: 0,
            use_texture_overlay: 0,
            object_texture: 0,
            overlay_texture: 0,
            _padding: [0; 2],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightUniform {
    pub direction: [f32; 3],
    pub active: u32,
    pub ambient: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    pub _padding0: u32,
    pub diffuse: [f32; 3],
    pub _padding1: u32,
    pub specular: [f32; 3],
    pub _padding2: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 3],
    pub active: u32,
    pub ambient: [f32; 3],
    pub _padding0: u32,
    pub diffuse: [f32; 3],
    pub _padding1: u32,
    pub specular: [f32; 3],
    pub _padding2: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightUniform {
    pub ambient: [f32; 3],
    pub constant: f32,
    pub diffuse: [f32; 3],
    pub linear: f32,
    pub specular: [f32; 3],
    pub quadratic: f32,
    pub cut_off: f32,
    pub outer_cut_off: f32,
    pub active: u32,
    pub _padding: u32,
}

/// The whole light rig as one uniform block.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub directional: DirectionalLightUniform,
    pub point_lights: [PointLightUniform; MAX_POINT_LIGHTS],
    pub spot: SpotLightUniform,
}

pub fn mk_scene_buffer(device: &wgpu::Device, uniform: SceneUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Scene Uniform Buffer"),
        contents: bytemuck::cast_slice(&[uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_lights_buffer(device: &wgpu::Device, uniform: LightsUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Lights Uniform Buffer"),
        contents: bytemuck::cast_slice(&[uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}
