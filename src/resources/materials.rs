//! The tag-addressed material library.

use crate::data_structures::material::Material;

/// Ordered, unbounded store of named materials.
///
/// Definition appends; there is no uniqueness enforcement, and lookup
/// returns the first record with a matching tag, so a later duplicate is
/// simply never reached.
#[derive(Default)]
pub struct MaterialLibrary {
    records: Vec<Material>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a material definition.
    pub fn define(&mut self, material: Material) {
        self.records.push(material);
    }

    /// First material defined under this tag, or `None` on a true miss.
    pub fn lookup(&self, tag: &str) -> Option<&Material> {
        self.records.iter().find(|m| m.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
