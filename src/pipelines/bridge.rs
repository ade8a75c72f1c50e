//! The wgpu implementation of the uniform and texture seams.

use std::collections::HashMap;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

use crate::binder::{
    COLOR_UNIFORM, MATERIAL_DIFFUSE_UNIFORM, MATERIAL_SHININESS_UNIFORM,
    MATERIAL_SPECULAR_UNIFORM, MODEL_UNIFORM, OVERLAY_UNIFORM, TEXTURE_UNIFORM,
    USE_LIGHTING_UNIFORM, USE_OVERLAY_UNIFORM, USE_TEXTURE_UNIFORM, UV_SCALE_UNIFORM,
};
use crate::bridge::ShaderBridge;
use crate::data_structures::texture::{DecodedImage, TextureHandle};
use crate::pipelines::uniform::{
    LightsUniform, SceneUniform, mk_lights_buffer, mk_scene_buffer,
};
use crate::resources::registry::{MAX_TEXTURE_SLOTS, TextureStorage};
use crate::scene::lighting::MAX_POINT_LIGHTS;

struct TextureEntry {
    #[allow(unused)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

/// Uniform and texture state on a wgpu device.
///
/// Every push mirrors into a CPU-side snapshot and is written straight
/// through to the matching uniform buffer, so whatever was pushed last is
/// what the next draw reads. Textures are uploaded once with a full mip
/// chain; binding only updates the slot table, the GPU resources stay put.
pub struct WgpuBridge {
    device: wgpu::Device,
    queue: wgpu::Queue,
    scene: SceneUniform,
    lights: LightsUniform,
    scene_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    textures: HashMap<TextureHandle, TextureEntry>,
    bound: [Option<TextureHandle>; MAX_TEXTURE_SLOTS],
    next_texture_id: u64,
}

impl WgpuBridge {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        let scene = SceneUniform::default();
        let lights = LightsUniform::default();
        let scene_buffer = mk_scene_buffer(&device, scene);
        let lights_buffer = mk_lights_buffer(&device, lights);
        Self {
            device,
            queue,
            scene,
            lights,
            scene_buffer,
            lights_buffer,
            textures: HashMap::new(),
            bound: [None; MAX_TEXTURE_SLOTS],
            next_texture_id: 0,
        }
    }

    /// Snapshot of the per-draw uniform state as last pushed.
    pub fn scene_uniform(&self) -> SceneUniform {
        self.scene
    }

    /// Snapshot of the light rig uniform state as last pushed.
    pub fn lights_uniform(&self) -> LightsUniform {
        self.lights
    }

    pub fn scene_buffer(&self) -> &wgpu::Buffer {
        &self.scene_buffer
    }

    pub fn lights_buffer(&self) -> &wgpu::Buffer {
        &self.lights_buffer
    }

    /// The handle bound to a texture unit, if any.
    pub fn bound_handle(&self, slot: u32) -> Option<TextureHandle> {
        self.bound.get(slot as usize).copied().flatten()
    }

    /// View of the texture bound to a unit, for bind group assembly.
    pub fn bound_view(&self, slot: u32) -> Option<&wgpu::TextureView> {
        let handle = self.bound_handle(slot)?;
        self.textures.get(&handle).map(|entry| &entry.view)
    }

    /// Sampler of the texture bound to a unit.
    pub fn bound_sampler(&self, slot: u32) -> Option<&wgpu::Sampler> {
        let handle = self.bound_handle(slot)?;
        self.textures.get(&handle).map(|entry| &entry.sampler)
    }

    fn write_scene(&self) {
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&[self.scene]));
    }

    fn write_lights(&self) {
        self.queue
            .write_buffer(&self.lights_buffer, 0, bytemuck::cast_slice(&[self.lights]));
    }
}

/// Split `pointLights[i].field` into the light index and field name.
fn point_light_field(name: &str) -> Option<(usize, &str)> {
    let rest = name.strip_prefix("pointLights[")?;
    let (index, field) = rest.split_once("].")?;
    let index = index.parse::<usize>().ok()?;
    (index < MAX_POINT_LIGHTS).then_some((index, field))
}

impl ShaderBridge for WgpuBridge {
    fn set_bool(&mut self, name: &str, value: bool) {
        let value = value as u32;
        match name {
            USE_TEXTURE_UNIFORM => {
                self.scene.use_texture = value;
                self.write_scene();
            }
            USE_OVERLAY_UNIFORM => {
                self.scene.use_texture_overlay = value;
                self.write_scene();
            }
            USE_LIGHTING_UNIFORM => {
                self.scene.use_lighting = value;
                self.write_scene();
            }
            "directionalLight.bActive" => {
                self.lights.directional.active = value;
                self.write_lights();
            }
            "spotLight.bActive" => {
                self.lights.spot.active = value;
                self.write_lights();
            }
            _ => match point_light_field(name) {
                Some((index, "bActive")) => {
                    self.lights.point_lights[index].active = value;
                    self.write_lights();
                }
                _ => log::warn!("unknown bool uniform {:?}", name),
            },
        }
    }

    fn set_int(&mut self, name: &str, value: i32) {
        // The shading pipeline has no plain int uniforms besides samplers;
        // route those and treat everything else as a flag push.
        match name {
            TEXTURE_UNIFORM | OVERLAY_UNIFORM if value >= 0 => {
                self.set_sampler(name, value as u32);
            }
            _ => self.set_bool(name, value != 0),
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        match name {
            MATERIAL_SHININESS_UNIFORM => {
                self.scene.material_shininess = value;
                self.write_scene();
            }
            "spotLight.constant" => {
                self.lights.spot.constant = value;
                self.write_lights();
            }
            "spotLight.linear" => {
                self.lights.spot.linear = value;
                self.write_lights();
            }
            "spotLight.quadratic" => {
                self.lights.spot.quadratic = value;
                self.write_lights();
            }
            "spotLight.cutOff" => {
                self.lights.spot.cut_off = value;
                self.write_lights();
            }
            "spotLight.outerCutOff" => {
                self.lights.spot.outer_cut_off = value;
                self.write_lights();
            }
            _ => log::warn!("unknown float uniform {:?}", name),
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        match name {
            UV_SCALE_UNIFORM => {
                self.scene.uv_scale = value.into();
                self.write_scene();
            }
            _ => log::warn!("unknown vec2 uniform {:?}", name),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        let value: [f32; 3] = value.into();
        match name {
            MATERIAL_DIFFUSE_UNIFORM => {
                self.scene.material_diffuse = value;
                self.write_scene();
            }
            MATERIAL_SPECULAR_UNIFORM => {
                self.scene.material_specular = value;
                self.write_scene();
            }
            "directionalLight.direction" => {
                self.lights.directional.direction = value;
                self.write_lights();
            }
            "directionalLight.ambient" => {
                self.lights.directional.ambient = value;
                self.write_lights();
            }
            "directionalLight.diffuse" => {
                self.lights.directional.diffuse = value;
                self.write_lights();
            }
            "directionalLight.specular" => {
                self.lights.directional.specular = value;
                self.write_lights();
            }
            "spotLight.ambient" => {
                self.lights.spot.ambient = value;
                self.write_lights();
            }
            "spotLight.diffuse" => {
                self.lights.spot.diffuse = value;
                self.write_lights();
            }
            "spotLight.specular" => {
                self.lights.spot.specular = value;
                self.write_lights();
            }
            _ => match point_light_field(name) {
                Some((index, field)) => {
                    let light = &mut self.lights.point_lights[index];
                    match field {
                        "position" => light.position = value,
                        "ambient" => light.ambient = value,
                        "diffuse" => light.diffuse = value,
                        "specular" => light.specular = value,
                        _ => {
                            log::warn!("unknown point light field {:?}", name);
                            return;
                        }
                    }
                    self.write_lights();
                }
                None => log::warn!("unknown vec3 uniform {:?}", name),
            },
        }
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        match name {
            COLOR_UNIFORM => {
                self.scene.object_color = value.into();
                self.write_scene();
            }
            _ => log::warn!("unknown vec4 uniform {:?}", name),
        }
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        match name {
            MODEL_UNIFORM => {
                self.scene.model = value.into();
                self.write_scene();
            }
            _ => log::warn!("unknown mat4 uniform {:?}", name),
        }
    }

    fn set_sampler(&mut self, name: &str, slot: u32) {
        match name {
            TEXTURE_UNIFORM => {
                self.scene.object_texture = slot;
                self.write_scene();
            }
            OVERLAY_UNIFORM => {
                self.scene.overlay_texture = slot;
                self.write_scene();
            }
            _ => log::warn!("unknown sampler uniform {:?}", name),
        }
    }
}

impl TextureStorage for WgpuBridge {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> TextureHandle {
        // wgpu has no 3-channel formats; expand RGB to opaque RGBA first.
        let rgba = match image.channels {
            4 => image.pixels.clone(),
            _ => {
                let mut rgba = Vec::with_capacity(image.pixels.len() / 3 * 4);
                for rgb in image.pixels.chunks_exact(3) {
                    rgba.extend_from_slice(rgb);
                    rgba.push(u8::MAX);
                }
                rgba
            }
        };

        let mip_level_count = 32 - image.width.max(image.height).max(1).leading_zeros();
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        // The mip chain is built on the CPU by successive halving; the
        // device never needs a render pass for uploads.
        let mut level_image = image::RgbaImage::from_raw(image.width, image.height, rgba)
            .expect("pixel buffer matches image dimensions");
        for level in 0..mip_level_count {
            let level_width = (image.width >> level).max(1);
            let level_height = (image.height >> level).max(1);
            if level > 0 {
                level_image = image::imageops::resize(
                    &level_image,
                    level_width,
                    level_height,
                    image::imageops::FilterType::Triangle,
                );
            }
            self.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &texture,
                    mip_level: level,
                    origin: wgpu::Origin3d::ZERO,
                },
                &level_image,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * level_width),
                    rows_per_image: Some(level_height),
                },
                wgpu::Extent3d {
                    width: level_width,
                    height: level_height,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        let handle = TextureHandle::from_raw(self.next_texture_id);
        self.next_texture_id += 1;
        self.textures.insert(
            handle,
            TextureEntry {
                texture,
                view,
                sampler,
            },
        );
        handle
    }

    fn bind(&mut self, slot: u32, handle: TextureHandle) {
        if slot as usize >= MAX_TEXTURE_SLOTS {
            log::warn!("cannot bind to texture unit {}, only {} exist", slot, MAX_TEXTURE_SLOTS);
            return;
        }
        if !self.textures.contains_key(&handle) {
            log::warn!("cannot bind unknown texture handle {:?}", handle);
            return;
        }
        self.bound[slot as usize] = Some(handle);
    }

    fn release(&mut self, handle: TextureHandle) {
        // Dropping the entry frees the GPU resources.
        if self.textures.remove(&handle).is_none() {
            log::warn!("released texture handle {:?} twice", handle);
        }
        for bound in self.bound.iter_mut() {
            if *bound == Some(handle) {
                *bound = None;
            }
        }
    }
}
