//! The primitive draw seam towards mesh storage.
//!
//! Tessellation and GPU draw submission live outside this crate. The draw
//! loop only needs to pick which pre-loaded primitive to submit, so this is
//! the whole interface.

use crate::data_structures::layout::{BoxSide, CylinderParts, Primitive};

/// Draw operations over the pre-tessellated primitive meshes.
///
/// Implementations read whatever uniform state was pushed last; the caller
/// guarantees a full state push happens before every draw.
pub trait MeshLibrary {
    fn draw_plane(&mut self);
    fn draw_box(&mut self);
    fn draw_box_side(&mut self, side: BoxSide);
    fn draw_sphere(&mut self);
    fn draw_cylinder(&mut self, parts: CylinderParts);
    fn draw_torus(&mut self);
    fn draw_tapered_cylinder(&mut self);

    /// Dispatch a layout primitive to the matching draw call.
    fn draw(&mut self, primitive: Primitive) {
        match primitive {
            Primitive::Plane => self.draw_plane(),
            Primitive::Box => self.draw_box(),
            Primitive::BoxSide(side) => self.draw_box_side(side),
            Primitive::Sphere => self.draw_sphere(),
            Primitive::Cylinder(parts) => self.draw_cylinder(parts),
            Primitive::Torus => self.draw_torus(),
            Primitive::TaperedCylinder => self.draw_tapered_cylinder(),
        }
    }
}
