//! The table-top still life shipped with the engine.
//!
//! A wooden table in front of a brick backdrop, carrying a glass candle
//! holder, a striped vase, a gold-leaf picture frame and a pumpkin. The
//! whole scene is plain data; callers are free to build their own
//! [`SceneDefinition`] instead.

use crate::data_structures::layout::{
    Appearance, BoxSide, CylinderParts, DrawDescriptor, Primitive,
};
use crate::data_structures::material::Material;
use crate::scene::lighting::LightRig;
use crate::scene::{SceneDefinition, TextureAsset};
use cgmath::Vector3;

const FRAME_GOLD: [f32; 4] = [0.65, 0.45, 0.20, 1.0];

/// The complete table-top scene definition.
pub fn definition() -> SceneDefinition {
    SceneDefinition {
        texture_assets: texture_assets(),
        materials: materials(),
        lights: LightRig::tabletop(),
        layout: layout(),
    }
}

fn texture_assets() -> Vec<TextureAsset> {
    vec![
        TextureAsset::new("textures/wood_cherry_seamless.jpg", "Wood Table"),
        TextureAsset::new("textures/ERainbowOverlay2.png", "Cylinder Overlay"),
        TextureAsset::new("textures/VaseStripes2.png", "Stripes2"),
        TextureAsset::new("textures/wood_black_seamless.jpg", "Black Wood"),
        TextureAsset::new("textures/transparent.png", "transparent"),
        TextureAsset::new("textures/GoldLeaves.png", "Gold Leaves"),
        TextureAsset::new("textures/GoldLeavesSides.png", "Gold Leaves2"),
        TextureAsset::new("textures/CandleHolder.png", "Candle Holder"),
        TextureAsset::new("textures/WetGlass.jpg", "Wet Glass"),
        TextureAsset::new("textures/pumpkin_texture3.jpg", "Pumpkin3"),
        TextureAsset::new("textures/Pumpkinbark.jpg", "Stem"),
        TextureAsset::new("textures/bricks_weathered_seamless2.jpg", "backdrop2"),
    ]
}

fn materials() -> Vec<Material> {
    vec![
        Material::new(
            "metal",
            Vector3::new(0.2, 0.2, 0.2),
            Vector3::new(0.7, 0.7, 0.7),
            42.0,
        ),
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
        Material::new(
            "gold",
            Vector3::new(0.3, 0.3, 0.2),
            Vector3::new(0.6, 0.5, 0.4),
            22.0,
        ),
        Material::new(
            "tile",
            Vector3::new(0.3, 0.2, 0.1),
            Vector3::new(0.4, 0.5, 0.6),
            25.0,
        ),
        Material::new(
            "backdrop",
            Vector3::new(0.4, 0.4, 0.4),
            Vector3::new(0.0, 0.0, 0.0),
            0.02,
        ),
    ]
}

fn layout() -> Vec<DrawDescriptor> {
    let mut layout = Vec::new();

    // Table surface.
    layout.push(
        DrawDescriptor::new(Primitive::Box, Appearance::textured("Wood Table"))
            .scaled(30.0, 1.0, 10.0)
            .at(0.0, -0.5, 0.0)
            .material("wood"),
    );

    // Brick backdrop behind the table.
    layout.push(
        DrawDescriptor::new(Primitive::Plane, Appearance::textured("backdrop2"))
            .scaled(20.0, 1.0, 10.0)
            .rotated(90.0, 0.0, 0.0)
            .at(0.0, 10.0, -5.0)
            .material("backdrop"),
    );

    // Candle holder: torus base, overlaid cylinder body, glass dome, knob.
    layout.push(
        DrawDescriptor::new(Primitive::Torus, Appearance::textured("Wet Glass"))
            .scaled(1.3, 1.35, 0.7)
            .rotated(90.0, 0.0, 0.0)
            .at(6.0, 0.2, 0.0)
            .uv(0.2, 0.2)
            .material("glass"),
    );
    layout.push(
        DrawDescriptor::new(
            Primitive::Cylinder(CylinderParts::SIDES_ONLY),
            Appearance::textured_with_overlay("Candle Holder", "Cylinder Overlay"),
        )
        .scaled(1.4, 1.6, 1.4)
        .rotated(0.0, -10.0, 0.0)
        .at(6.0, 0.3, 0.0)
        .uv(2.0, 1.0)
        .material("glass"),
    );
    layout.push(
        DrawDescriptor::new(Primitive::Sphere, Appearance::textured("Candle Holder"))
            .scaled(1.37, 1.37, 1.37)
            .rotated(15.0, 20.0, 90.0)
            .at(6.0, 2.0, 0.0)
            .uv(0.8, 0.8)
            .material("glass"),
    );
    layout.push(
        DrawDescriptor::new(Primitive::Sphere, Appearance::textured("Candle Holder"))
            .scaled(0.3, 0.5, 0.3)
            .at(6.0, 3.5, 0.0)
            .uv(0.8, 0.8)
            .material("glass"),
    );

    // Vase, drawn per cylinder part: striped sides, transparent top, dark
    // wooden base.
    layout.push(
        DrawDescriptor::new(
            Primitive::Cylinder(CylinderParts::SIDES_ONLY),
            Appearance::textured("Stripes2"),
        )
        .scaled(1.2, 7.0, 1.2)
        .at(2.0, 0.2, -0.8)
        .material("glass"),
    );
    layout.push(
        DrawDescriptor::new(
            Primitive::Cylinder(CylinderParts::TOP_ONLY),
            Appearance::textured("transparent"),
        )
        .scaled(1.2, 7.0, 1.2)
        .at(2.0, 0.2, -0.8),
    );
    layout.push(
        DrawDescriptor::new(
            Primitive::Cylinder(CylinderParts::BOTTOM_ONLY),
            Appearance::textured("Black Wood"),
        )
        .scaled(1.2, 7.0, 1.2)
        .at(2.0, 0.2, -0.8)
        .material("wood"),
    );

    // Picture inside the frame: a blank light-tan front, the other sides in
    // the frame's gold so they disappear from side and top views.
    let picture = DrawDescriptor::new(
        Primitive::BoxSide(BoxSide::Front),
        Appearance::flat(0.95, 0.90, 0.80, 1.0),
    )
    .scaled(4.0, 5.0, 0.1)
    .rotated(-20.0, 0.0, 0.0)
    .at(-2.0, 2.5, 0.0);
    layout.push(picture.clone());
    for side in [
        BoxSide::Back,
        BoxSide::Left,
        BoxSide::Right,
        BoxSide::Top,
        BoxSide::Bottom,
    ] {
        let mut hidden = picture.clone();
        hidden.primitive = Primitive::BoxSide(side);
        hidden.appearance = Appearance::flat(FRAME_GOLD[0], FRAME_GOLD[1], FRAME_GOLD[2], 1.0);
        layout.push(hidden);
    }

    // Back panel of the frame.
    layout.push(
        DrawDescriptor::new(
            Primitive::Box,
            Appearance::flat(FRAME_GOLD[0], FRAME_GOLD[1], FRAME_GOLD[2], 1.0),
        )
        .scaled(4.0, 5.0, 0.1)
        .rotated(-20.0, 0.0, 0.0)
        .at(-2.0, 2.5, -0.1)
        .material("wood"),
    );

    // Frame pieces in gold leaf.
    layout.push(
        DrawDescriptor::new(Primitive::Box, Appearance::textured("Gold Leaves"))
            .scaled(4.1, 0.7, 0.15)
            .rotated(-20.0, 0.0, 0.0)
            .at(-2.0, 4.6, -0.7)
            .uv(0.9, 0.3)
            .material("gold"),
    );
    layout.push(
        DrawDescriptor::new(Primitive::Box, Appearance::textured("Gold Leaves"))
            .scaled(4.1, 0.7, 0.15)
            .rotated(20.0, 0.0, 180.0)
            .at(-2.0, 0.5, 0.8)
            .uv(0.9, 0.3)
            .material("gold"),
    );
    layout.push(
        DrawDescriptor::new(Primitive::Box, Appearance::textured("Gold Leaves2"))
            .scaled(0.7, 3.8, 0.10)
            .rotated(20.0, 0.0, 180.0)
            .at(-3.7, 2.6, 0.05)
            .uv(0.3, 0.9)
            .material("gold"),
    );
    layout.push(
        DrawDescriptor::new(Primitive::Box, Appearance::textured("Gold Leaves2"))
            .scaled(0.7, 3.8, 0.10)
            .rotated(-20.0, 0.0, 0.0)
            .at(-0.3, 2.6, 0.05)
            .uv(0.3, 0.9)
            .material("gold"),
    );

    // Stand propping the frame up from behind.
    layout.push(
        DrawDescriptor::new(
            Primitive::Box,
            Appearance::flat(FRAME_GOLD[0], FRAME_GOLD[1], FRAME_GOLD[2], 1.0),
        )
        .scaled(0.7, 3.0, 0.1)
        .rotated(30.0, 0.0, 0.0)
        .at(-1.5, 1.5, -1.0)
        .material("wood"),
    );

    // Pumpkin: squashed sphere body with a tapered stem.
    layout.push(
        DrawDescriptor::new(Primitive::Sphere, Appearance::textured("Pumpkin3"))
            .scaled(2.1, 1.8, 1.5)
            .rotated(0.0, 0.0, -35.0)
            .at(-7.0, 1.4, -0.3)
            .material("glass"),
    );
    layout.push(
        DrawDescriptor::new(Primitive::TaperedCylinder, Appearance::textured("Stem"))
            .scaled(0.5, 0.7, 0.5)
            .rotated(0.0, 0.0, -10.0)
            .at(-7.1, 3.1, -0.3)
            .material("wood"),
    );

    layout
}
