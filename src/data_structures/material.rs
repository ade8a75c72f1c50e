//! Surface material records.

use cgmath::Vector3;

/// A named set of surface properties: diffuse and specular reflectivity plus
/// a shininess exponent.
///
/// Materials are defined once during scene preparation and never change or
/// disappear during a session. The library stores them in definition order;
/// lookup returns the first record with a matching tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: impl Into<String>,
        diffuse: Vector3<f32>,
        specular: Vector3<f32>,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            diffuse,
            specular,
            shininess,
        }
    }
}
