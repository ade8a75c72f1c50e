//! Scene preparation and the sequential draw loop.
//!
//! Preparation runs once to completion before any draw: every texture asset
//! is decoded and uploaded into a registry slot, slots are bound, materials
//! are defined and the light rig is applied. Rendering then walks the layout
//! strictly in order, one full state-push sequence followed by one draw,
//! with no overlap.

pub mod lighting;
pub mod tabletop;

use std::path::PathBuf;

use crate::binder::StateBinder;
use crate::bridge::ShaderBridge;
use crate::data_structures::layout::{Appearance, DrawDescriptor};
use crate::data_structures::material::Material;
use crate::meshes::MeshLibrary;
use crate::resources::codec::ImageCodec;
use crate::resources::materials::MaterialLibrary;
use crate::resources::registry::{TextureRegistry, TextureStorage};
use crate::scene::lighting::LightRig;

/// One texture asset to load at preparation time.
#[derive(Clone, Debug)]
pub struct TextureAsset {
    pub path: PathBuf,
    pub tag: String,
}

impl TextureAsset {
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
        }
    }
}

/// Everything that describes one static scene: assets to load, materials to
/// define, the light rig and the ordered draw layout.
#[derive(Clone, Debug, Default)]
pub struct SceneDefinition {
    pub texture_assets: Vec<TextureAsset>,
    pub materials: Vec<Material>,
    pub lights: LightRig,
    pub layout: Vec<DrawDescriptor>,
}

/// A prepared scene: populated registries ready to drive draws.
pub struct Scene {
    textures: TextureRegistry,
    materials: MaterialLibrary,
}

impl Scene {
    /// Load and bind every texture, define every material and apply the
    /// light rig.
    ///
    /// A texture that fails to load is logged and skipped; the scene
    /// continues with that tag unresolved and later draws fall back through
    /// the binder's placeholder path. Only the one-time preparation work
    /// happens here; no draws are issued.
    pub fn prepare<B>(
        definition: &SceneDefinition,
        codec: &dyn ImageCodec,
        bridge: &mut B,
    ) -> Self
    where
        B: ShaderBridge + TextureStorage,
    {
        let mut textures = TextureRegistry::new();
        for asset in &definition.texture_assets {
            if let Err(err) = textures.load(codec, bridge, &asset.path, &asset.tag) {
                log::warn!("skipping texture {:?}: {}", asset.tag, err);
            }
        }
        textures.bind_all(bridge);

        let mut materials = MaterialLibrary::new();
        for material in &definition.materials {
            materials.define(material.clone());
        }

        definition.lights.apply(bridge);

        Self {
            textures,
            materials,
        }
    }

    /// Draw the layout in order.
    ///
    /// Per descriptor the full push sequence runs before its draw: transform,
    /// then color or texture (plus overlay), UV scale, material. A descriptor
    /// that enabled the overlay gets the flag cleared again right after its
    /// draw so it cannot leak into the next one.
    pub fn render<B: ShaderBridge>(
        &self,
        layout: &[DrawDescriptor],
        bridge: &mut B,
        meshes: &mut dyn MeshLibrary,
    ) {
        for descriptor in layout {
            self.draw(descriptor, bridge, meshes);
        }
    }

    fn draw<B: ShaderBridge>(
        &self,
        descriptor: &DrawDescriptor,
        bridge: &mut B,
        meshes: &mut dyn MeshLibrary,
    ) {
        let mut binder = StateBinder::new(bridge, &self.textures, &self.materials);

        binder.set_transform(
            descriptor.scale,
            descriptor.rotation_deg.x,
            descriptor.rotation_deg.y,
            descriptor.rotation_deg.z,
            descriptor.position,
        );

        let overlaid = match &descriptor.appearance {
            Appearance::Flat { color } => {
                binder.set_flat_color(color.x, color.y, color.z, color.w);
                false
            }
            Appearance::Textured { texture, overlay } => {
                binder.set_texture(texture);
                if let Some(overlay) = overlay {
                    binder.set_texture_overlay(overlay);
                }
                overlay.is_some()
            }
        };

        binder.set_uv_scale(descriptor.uv_scale.x, descriptor.uv_scale.y);

        if let Some(material) = &descriptor.material {
            binder.set_material(material);
        }

        meshes.draw(descriptor.primitive);

        if overlaid {
            binder.set_texture_overlay("");
        }
    }

    /// Release every texture handle and empty the registry. Call once at
    /// session end, never while a draw is in flight.
    pub fn teardown(mut self, storage: &mut dyn TextureStorage) {
        self.textures.teardown(storage);
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }
}
