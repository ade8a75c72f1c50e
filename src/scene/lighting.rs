//! Scene light rig: declarative light data and its uniform application.
//!
//! Lighting is configured once during preparation. The rig is plain data so
//! layouts can ship their own; [`LightRig::apply`] pushes it through the
//! shader bridge under the uniform names the shading pipeline expects
//! (`directionalLight.*`, `pointLights[i].*`, `spotLight.*`).

use cgmath::{Angle, Deg, Vector3};

use crate::binder::USE_LIGHTING_UNIFORM;
use crate::bridge::ShaderBridge;

/// Number of point light slots the shading pipeline exposes.
pub const MAX_POINT_LIGHTS: usize = 5;

/// A sun-like light shining along a fixed direction.
#[derive(Clone, Debug)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
}

/// An omnidirectional light at a fixed position.
#[derive(Clone, Debug)]
pub struct PointLight {
    pub position: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
}

/// A cone light. Position and direction are supplied by the viewer side of
/// the pipeline; the rig only owns color and falloff.
#[derive(Clone, Debug)]
pub struct SpotLight {
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
    /// Inner cone angle in degrees; pushed as its cosine.
    pub cut_off_deg: f32,
    /// Outer cone angle in degrees; pushed as its cosine.
    pub outer_cut_off_deg: f32,
}

/// The complete light configuration of a scene.
#[derive(Clone, Debug, Default)]
pub struct LightRig {
    pub directional: Option<DirectionalLight>,
    pub point_lights: Vec<PointLight>,
    pub spot: Option<SpotLight>,
}

impl LightRig {
    /// Push the whole rig into the shading pipeline and enable lighting.
    ///
    /// Point lights beyond [`MAX_POINT_LIGHTS`] have no uniform slot and are
    /// skipped with a warning.
    pub fn apply(&self, bridge: &mut dyn ShaderBridge) {
        bridge.set_bool(USE_LIGHTING_UNIFORM, true);

        if let Some(light) = &self.directional {
            bridge.set_vec3("directionalLight.direction", light.direction);
            bridge.set_vec3("directionalLight.ambient", light.ambient);
            bridge.set_vec3("directionalLight.diffuse", light.diffuse);
            bridge.set_vec3("directionalLight.specular", light.specular);
            bridge.set_bool("directionalLight.bActive", true);
        }

        if self.point_lights.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "light rig holds {} point lights, only the first {} have uniform slots",
                self.point_lights.len(),
                MAX_POINT_LIGHTS
            );
        }
        for (index, light) in self.point_lights.iter().take(MAX_POINT_LIGHTS).enumerate() {
            bridge.set_vec3(&format!("pointLights[{index}].position"), light.position);
            bridge.set_vec3(&format!("pointLights[{index}].ambient"), light.ambient);
            bridge.set_vec3(&format!("pointLights[{index}].diffuse"), light.diffuse);
            bridge.set_vec3(&format!("pointLights[{index}].specular"), light.specular);
            bridge.set_bool(&format!("pointLights[{index}].bActive"), true);
        }

        if let Some(light) = &self.spot {
            bridge.set_vec3("spotLight.ambient", light.ambient);
            bridge.set_vec3("spotLight.diffuse", light.diffuse);
            bridge.set_vec3("spotLight.specular", light.specular);
            bridge.set_float("spotLight.constant", light.constant);
            bridge.set_float("spotLight.linear", light.linear);
            bridge.set_float("spotLight.quadratic", light.quadratic);
            bridge.set_float("spotLight.cutOff", Deg(light.cut_off_deg).cos());
            bridge.set_float("spotLight.outerCutOff", Deg(light.outer_cut_off_deg).cos());
            bridge.set_bool("spotLight.bActive", true);
        }
    }

    /// The rig lighting the table-top scene: soft sunlight, a cluster of
    /// point lights above and behind the table, and a camera spot.
    pub fn tabletop() -> Self {
        Self {
            directional: Some(DirectionalLight {
                direction: Vector3::new(-0.1, -0.3, -0.2),
                ambient: Vector3::new(0.5, 0.5, 0.5),
                diffuse: Vector3::new(0.25, 0.25, 0.30),
                specular: Vector3::new(0.05, 0.05, 0.05),
            }),
            point_lights: vec![
                // directly above the scene
                PointLight {
                    position: Vector3::new(0.0, 5.0, 0.0),
                    ambient: Vector3::new(0.15, 0.15, 0.15),
                    diffuse: Vector3::new(0.5, 0.5, 0.5),
                    specular: Vector3::new(0.5, 0.5, 0.5),
                },
                PointLight {
                    position: Vector3::new(-3.0, 7.0, -3.0),
                    ambient: Vector3::new(0.05, 0.05, 0.05),
                    diffuse: Vector3::new(0.4, 0.3, 0.4),
                    specular: Vector3::new(0.2, 0.2, 0.2),
                },
                PointLight {
                    position: Vector3::new(-3.0, 7.0, 3.0),
                    ambient: Vector3::new(0.05, 0.05, 0.05),
                    diffuse: Vector3::new(0.4, 0.3, 0.4),
                    specular: Vector3::new(0.2, 0.3, 0.2),
                },
                PointLight {
                    position: Vector3::new(0.0, 2.0, -7.0),
                    ambient: Vector3::new(0.05, 0.05, 0.05),
                    diffuse: Vector3::new(0.5, 0.5, 0.5),
                    specular: Vector3::new(0.1, 0.1, 0.1),
                },
                PointLight {
                    position: Vector3::new(3.2, 6.0, 4.0),
                    ambient: Vector3::new(0.05, 0.05, 0.05),
                    diffuse: Vector3::new(0.5, 0.5, 0.5),
                    specular: Vector3::new(0.1, 0.1, 0.1),
                },
            ],
            spot: Some(SpotLight {
                ambient: Vector3::new(0.3, 0.3, 0.3),
                diffuse: Vector3::new(0.8, 0.8, 0.8),
                specular: Vector3::new(0.4, 0.4, 0.4),
                constant: 1.0,
                linear: 0.09,
                quadratic: 0.032,
                cut_off_deg: 42.5,
                outer_cut_off_deg: 48.0,
            }),
        }
    }
}
