//! Scene layout descriptors.
//!
//! A scene layout is an ordered list of [`DrawDescriptor`]s. Each descriptor
//! carries everything one draw needs: placement, appearance (flat color or
//! texture with an optional overlay), UV scale, an optional material tag and
//! the primitive to draw. The driver walks the list strictly in order, one
//! state-push sequence followed by one draw.

use cgmath::{Vector2, Vector3, Vector4};

/// One face of the unit box mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxSide {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

/// Which parts of the cylinder mesh to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CylinderParts {
    pub top: bool,
    pub bottom: bool,
    pub sides: bool,
}

impl CylinderParts {
    pub const ALL: Self = Self {
        top: true,
        bottom: true,
        sides: true,
    };
    pub const SIDES_ONLY: Self = Self {
        top: false,
        bottom: false,
        sides: true,
    };
    pub const TOP_ONLY: Self = Self {
        top: true,
        bottom: false,
        sides: false,
    };
    pub const BOTTOM_ONLY: Self = Self {
        top: false,
        bottom: true,
        sides: false,
    };
}

/// The primitive mesh a descriptor draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Plane,
    Box,
    BoxSide(BoxSide),
    Sphere,
    Cylinder(CylinderParts),
    Torus,
    TaperedCylinder,
}

/// How a descriptor colors its surface: an untextured flat color, or a base
/// texture with an optional overlay blended on top.
///
/// Flat color and texturing are mutually exclusive for a draw; whichever
/// state push happens last wins, and the driver pushes exactly one of them
/// per descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum Appearance {
    Flat {
        color: Vector4<f32>,
    },
    Textured {
        texture: String,
        overlay: Option<String>,
    },
}

impl Appearance {
    pub fn flat(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::Flat {
            color: Vector4::new(r, g, b, a),
        }
    }

    pub fn textured(tag: impl Into<String>) -> Self {
        Self::Textured {
            texture: tag.into(),
            overlay: None,
        }
    }

    pub fn textured_with_overlay(tag: impl Into<String>, overlay: impl Into<String>) -> Self {
        Self::Textured {
            texture: tag.into(),
            overlay: Some(overlay.into()),
        }
    }
}

/// One draw in a scene layout.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawDescriptor {
    pub scale: Vector3<f32>,
    /// Per-axis Euler rotation in degrees, applied in Z then Y then X order
    /// by [`transform::compose_model_matrix`](crate::data_structures::transform::compose_model_matrix).
    pub rotation_deg: Vector3<f32>,
    pub position: Vector3<f32>,
    pub appearance: Appearance,
    pub uv_scale: Vector2<f32>,
    pub material: Option<String>,
    pub primitive: Primitive,
}

impl DrawDescriptor {
    /// A unit descriptor at the origin, used as a starting point by layout
    /// builders.
    pub fn new(primitive: Primitive, appearance: Appearance) -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation_deg: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
            appearance,
            uv_scale: Vector2::new(1.0, 1.0),
            material: None,
            primitive,
        }
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vector3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x_deg: f32, y_deg: f32, z_deg: f32) -> Self {
        self.rotation_deg = Vector3::new(x_deg, y_deg, z_deg);
        self
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    pub fn uv(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Vector2::new(u, v);
        self
    }

    pub fn material(mut self, tag: impl Into<String>) -> Self {
        self.material = Some(tag.into());
        self
    }
}
