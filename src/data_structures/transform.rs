//! Model matrix composition for scene objects.
//!
//! Objects in a layout describe their placement as separate scale, Euler
//! rotation and position components. This module owns the one function that
//! turns those components into a model matrix, so the composition order is
//! written down in exactly one place.

use cgmath::{Deg, Matrix4, Vector3};

/// Compose a model matrix from scale, per-axis Euler rotation (degrees) and
/// position.
///
/// The composition order is a hard contract:
///
/// `M = T(position) * Rz * Ry * Rx * S(scale)`
///
/// Translation is applied outermost and scale innermost, with the Z, Y and X
/// rotations in between, in that order. Callers rely on this order to predict
/// object orientation from Euler angles; reordering changes every rendered
/// frame.
pub fn compose_model_matrix(
    scale: Vector3<f32>,
    x_rotation_deg: f32,
    y_rotation_deg: f32,
    z_rotation_deg: f32,
    position: Vector3<f32>,
) -> Matrix4<f32> {
    let translation = Matrix4::from_translation(position);
    let rotation_x = Matrix4::from_angle_x(Deg(x_rotation_deg));
    let rotation_y = Matrix4::from_angle_y(Deg(y_rotation_deg));
    let rotation_z = Matrix4::from_angle_z(Deg(z_rotation_deg));
    let scale = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);

    translation * rotation_z * rotation_y * rotation_x * scale
}
