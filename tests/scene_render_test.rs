use std::cell::RefCell;
use std::rc::Rc;

use cgmath::Vector3;
use tableau::binder::{
    MODEL_UNIFORM, TEXTURE_UNIFORM, USE_LIGHTING_UNIFORM, USE_OVERLAY_UNIFORM,
};
use tableau::data_structures::layout::{Appearance, DrawDescriptor, Primitive};
use tableau::data_structures::material::Material;
use tableau::scene::lighting::LightRig;
use tableau::scene::{Scene, SceneDefinition, TextureAsset, tabletop};

use crate::common::test_utils::{Event, FakeBackend, RecordingMeshes, StubCodec, init_logs};

mod common;

fn small_definition() -> SceneDefinition {
    SceneDefinition {
        texture_assets: vec![
            TextureAsset::new("img0.png", "Wood"),
            TextureAsset::new("missing.png", "Ghost"),
            TextureAsset::new("img1.png", "Glass"),
        ],
        materials: vec![
            Material::new(
                "wood",
                Vector3::new(0.6, 0.35, 0.2),
                Vector3::new(0.2, 0.2, 0.2),
                8.0,
            ),
            Material::new(
                "glass",
                Vector3::new(0.4, 0.4, 0.5),
                Vector3::new(1.0, 1.0, 1.0),
                95.0,
            ),
        ],
        lights: LightRig::tabletop(),
        layout: vec![
            DrawDescriptor::new(Primitive::Box, Appearance::textured("Wood"))
                .scaled(30.0, 1.0, 10.0)
                .at(0.0, -0.5, 0.0)
                .material("wood"),
            DrawDescriptor::new(
                Primitive::Sphere,
                Appearance::textured_with_overlay("Glass", "Wood"),
            )
            .material("glass"),
            DrawDescriptor::new(Primitive::Torus, Appearance::flat(0.9, 0.9, 0.8, 1.0)),
        ],
    }
}

#[test]
fn prepare_loads_binds_defines_and_lights() {
    init_logs();
    let codec = StubCodec::with_images(2);
    let mut backend = FakeBackend::new();

    let definition = small_definition();
    let scene = Scene::prepare(&definition, &codec, &mut backend);

    // The broken asset is skipped; the ones around it keep their load order.
    assert_eq!(scene.textures().len(), 2);
    assert_eq!(scene.textures().find_slot("Wood"), Some(0));
    assert_eq!(scene.textures().find_slot("Glass"), Some(1));
    assert_eq!(scene.textures().find_slot("Ghost"), None);

    // Every registered slot was bound exactly once.
    assert_eq!(backend.storage.binds.len(), 2);

    assert_eq!(scene.materials().len(), 2);
    assert!(scene.materials().lookup("glass").is_some());

    // The light rig went out with lighting enabled.
    assert_eq!(backend.bridge.last_bool(USE_LIGHTING_UNIFORM), Some(true));
    assert_eq!(backend.bridge.last_bool("pointLights[4].bActive"), Some(true));
    assert!(backend.bridge.last_float("spotLight.cutOff").is_some());
}

#[test]
fn render_pushes_state_before_every_draw() {
    let codec = StubCodec::with_images(2);
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut backend = FakeBackend::with_log(log.clone());
    let mut meshes = RecordingMeshes::with_log(log.clone());

    let definition = small_definition();
    let scene = Scene::prepare(&definition, &codec, &mut backend);
    scene.render(&definition.layout, &mut backend, &mut meshes);

    let events = log.borrow().clone();
    let draw_positions: Vec<usize> = events
        .iter()
        .enumerate()
        .filter_map(|(i, e)| matches!(e, Event::Draw(_)).then_some(i))
        .collect();
    assert_eq!(draw_positions.len(), 3);

    // Each draw's push sequence sits strictly between the previous draw and
    // its own submission, starting with the model matrix.
    let mut start = 0;
    for &position in &draw_positions {
        let window = &events[start..position];
        assert!(
            window
                .iter()
                .any(|e| matches!(e, Event::Mat4(name, _) if name == MODEL_UNIFORM)),
            "draw at {position} got no transform push"
        );
        start = position + 1;
    }

    // The textured box resolved "Wood" to slot 0 before the first draw.
    let first_window = &events[..draw_positions[0]];
    assert!(
        first_window
            .iter()
            .any(|e| matches!(e, Event::Sampler(name, 0) if name == TEXTURE_UNIFORM))
    );
    assert!(matches!(events[draw_positions[0]], Event::Draw(Primitive::Box)));
    assert!(matches!(
        events[draw_positions[1]],
        Event::Draw(Primitive::Sphere)
    ));
    assert!(matches!(
        events[draw_positions[2]],
        Event::Draw(Primitive::Torus)
    ));
}

#[test]
fn overlay_flag_is_cleared_right_after_an_overlaid_draw() {
    let codec = StubCodec::with_images(2);
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut backend = FakeBackend::with_log(log.clone());
    let mut meshes = RecordingMeshes::with_log(log.clone());

    let definition = small_definition();
    let scene = Scene::prepare(&definition, &codec, &mut backend);
    scene.render(&definition.layout, &mut backend, &mut meshes);

    let events = log.borrow().clone();
    let sphere_draw = events
        .iter()
        .position(|e| matches!(e, Event::Draw(Primitive::Sphere)))
        .unwrap();

    // Enabled somewhere before the overlaid draw, disabled immediately after.
    assert!(events[..sphere_draw].iter().any(
        |e| matches!(e, Event::Bool(name, true) if name == USE_OVERLAY_UNIFORM)
    ));
    assert_eq!(
        events[sphere_draw + 1],
        Event::Bool(USE_OVERLAY_UNIFORM.to_string(), false)
    );

    // The untextured torus that follows never re-enables it.
    assert!(!events[sphere_draw + 2..].iter().any(
        |e| matches!(e, Event::Bool(name, true) if name == USE_OVERLAY_UNIFORM)
    ));
}

#[test]
fn teardown_releases_the_whole_registry() {
    let codec = StubCodec::with_images(2);
    let mut backend = FakeBackend::new();

    let definition = small_definition();
    let scene = Scene::prepare(&definition, &codec, &mut backend);
    scene.teardown(&mut backend);

    assert_eq!(backend.storage.released.len(), 2);
}

#[test]
fn tabletop_definition_is_self_consistent() {
    let definition = tabletop::definition();

    assert_eq!(definition.texture_assets.len(), 12);
    assert_eq!(definition.materials.len(), 6);
    assert!(!definition.layout.is_empty());

    // Every tag a descriptor references must resolve against the assets and
    // materials the same definition loads.
    for descriptor in &definition.layout {
        if let Appearance::Textured { texture, overlay } = &descriptor.appearance {
            assert!(
                definition.texture_assets.iter().any(|a| &a.tag == texture),
                "layout references unknown texture {texture:?}"
            );
            if let Some(overlay) = overlay {
                assert!(
                    definition.texture_assets.iter().any(|a| &a.tag == overlay),
                    "layout references unknown overlay {overlay:?}"
                );
            }
        }
        if let Some(material) = &descriptor.material {
            assert!(
                definition.materials.iter().any(|m| &m.tag == material),
                "layout references unknown material {material:?}"
            );
        }
    }

    // The rig fits the pipeline's point light slots.
    assert!(definition.lights.point_lights.len() <= tableau::scene::lighting::MAX_POINT_LIGHTS);
}
