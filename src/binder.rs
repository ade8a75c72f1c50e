//! Per-draw render state binding.
//!
//! [`StateBinder`] translates the high-level state of one draw (transform
//! components, texture tags, material tag, UV scale, flat color) into the
//! uniform pushes the shading pipeline expects, immediately before the draw
//! is issued.
//!
//! The expected push sequence per draw is
//!
//! `set_transform -> (set_flat_color | set_texture [+ set_texture_overlay])
//!  -> set_uv_scale -> set_material -> draw`
//!
//! Nothing enforces this sequencing. Skipping a step carries the previous
//! draw's value forward for that uniform, and a flag that should not persist
//! into the next draw must be cleared explicitly. That caller contract is
//! the main ordering hazard of the whole subsystem.

use cgmath::{Vector2, Vector4};

use crate::bridge::ShaderBridge;
use crate::data_structures::transform::compose_model_matrix;
use crate::resources::materials::MaterialLibrary;
use crate::resources::registry::TextureRegistry;

// Uniform names shared with the shader sources.
pub const MODEL_UNIFORM: &str = "model";
pub const COLOR_UNIFORM: &str = "objectColor";
pub const TEXTURE_UNIFORM: &str = "objectTexture";
pub const OVERLAY_UNIFORM: &str = "overlayTexture";
pub const USE_TEXTURE_UNIFORM: &str = "bUseTexture";
pub const USE_OVERLAY_UNIFORM: &str = "bUseTextureOverlay";
pub const USE_LIGHTING_UNIFORM: &str = "bUseLighting";
pub const UV_SCALE_UNIFORM: &str = "UVscale";
pub const MATERIAL_DIFFUSE_UNIFORM: &str = "material.diffuseColor";
pub const MATERIAL_SPECULAR_UNIFORM: &str = "material.specularColor";
pub const MATERIAL_SHININESS_UNIFORM: &str = "material.shininess";

/// Pushes one draw's state into the shading pipeline.
///
/// Borrows the bridge plus both registries for the duration of a push
/// sequence; the single-threaded draw loop creates one per draw.
pub struct StateBinder<'a, B: ShaderBridge> {
    bridge: &'a mut B,
    textures: &'a TextureRegistry,
    materials: &'a MaterialLibrary,
}

impl<'a, B: ShaderBridge> StateBinder<'a, B> {
    pub fn new(
        bridge: &'a mut B,
        textures: &'a TextureRegistry,
        materials: &'a MaterialLibrary,
    ) -> Self {
        Self {
            bridge,
            textures,
            materials,
        }
    }

    /// Compose and push the model matrix for the next draw.
    ///
    /// The composition order (translation outermost, then Z, Y, X rotation,
    /// scale innermost) is fixed; see
    /// [`compose_model_matrix`](crate::data_structures::transform::compose_model_matrix).
    pub fn set_transform(
        &mut self,
        scale: cgmath::Vector3<f32>,
        x_rotation_deg: f32,
        y_rotation_deg: f32,
        z_rotation_deg: f32,
        position: cgmath::Vector3<f32>,
    ) {
        let model = compose_model_matrix(
            scale,
            x_rotation_deg,
            y_rotation_deg,
            z_rotation_deg,
            position,
        );
        self.bridge.set_mat4(MODEL_UNIFORM, model);
    }

    /// Push a flat color and disable texturing for the next draw.
    ///
    /// Mutually exclusive with [`set_texture`](Self::set_texture); whichever
    /// is pushed last wins.
    pub fn set_flat_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.bridge.set_bool(USE_TEXTURE_UNIFORM, false);
        self.bridge
            .set_vec4(COLOR_UNIFORM, Vector4::new(r, g, b, a));
    }

    /// Resolve `tag` and bind it as the base texture for the next draw.
    ///
    /// An unknown tag never pushes an invalid sampler index: it logs a
    /// warning and falls back to slot 0 as a visible placeholder, or, with
    /// an empty registry, disables texturing entirely.
    pub fn set_texture(&mut self, tag: &str) {
        match self.textures.find_slot(tag) {
            Some(slot) => {
                self.bridge.set_bool(USE_TEXTURE_UNIFORM, true);
                self.bridge.set_sampler(TEXTURE_UNIFORM, slot);
            }
            None if !self.textures.is_empty() => {
                log::warn!(
                    "texture tag {:?} is not registered, substituting slot 0",
                    tag
                );
                self.bridge.set_bool(USE_TEXTURE_UNIFORM, true);
                self.bridge.set_sampler(TEXTURE_UNIFORM, 0);
            }
            None => {
                log::warn!(
                    "texture tag {:?} is not registered and no textures are loaded, \
                     disabling texturing",
                    tag
                );
                self.bridge.set_bool(USE_TEXTURE_UNIFORM, false);
            }
        }
    }

    /// Bind or clear the overlay texture for the next draw.
    ///
    /// An empty tag disables the overlay and pushes no slot; whatever
    /// sampler index was bound last stays in place but is inert while the
    /// flag is off. An unknown tag also disables the overlay, with a
    /// warning.
    pub fn set_texture_overlay(&mut self, tag: &str) {
        if tag.is_empty() {
            self.bridge.set_bool(USE_OVERLAY_UNIFORM, false);
            return;
        }
        match self.textures.find_slot(tag) {
            Some(slot) => {
                self.bridge.set_bool(USE_OVERLAY_UNIFORM, true);
                self.bridge.set_sampler(OVERLAY_UNIFORM, slot);
            }
            None => {
                log::warn!(
                    "overlay texture tag {:?} is not registered, disabling the overlay",
                    tag
                );
                self.bridge.set_bool(USE_OVERLAY_UNIFORM, false);
            }
        }
    }

    /// Push the UV scale, applied identically to base and overlay
    /// coordinates.
    pub fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.bridge.set_vec2(UV_SCALE_UNIFORM, Vector2::new(u, v));
    }

    /// Resolve `tag` and push its material properties.
    ///
    /// A no-op while the library is empty. On a miss against a non-empty
    /// library the previously pushed material stays in place and a warning
    /// is logged.
    pub fn set_material(&mut self, tag: &str) {
        if self.materials.is_empty() {
            return;
        }
        match self.materials.lookup(tag) {
            Some(material) => {
                self.bridge
                    .set_vec3(MATERIAL_DIFFUSE_UNIFORM, material.diffuse);
                self.bridge
                    .set_vec3(MATERIAL_SPECULAR_UNIFORM, material.specular);
                self.bridge
                    .set_float(MATERIAL_SHININESS_UNIFORM, material.shininess);
            }
            None => {
                log::warn!(
                    "material tag {:?} is not defined, keeping the previous material",
                    tag
                );
            }
        }
    }
}
