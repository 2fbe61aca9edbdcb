use crate::label::Label;

/// What the graphics hardware can do, as far as classification cares.
///
/// This is the only configuration lumen takes. Probe it once from the
/// graphics backend and pass it by reference to the functions that need it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Shadow maps can be rendered into and sampled from depth textures.
    /// Without this, basic shadow maps are packed into colour textures.
    pub supports_depth_textures: bool,
    /// Number of textures a single shader may sample.
    pub texture_units: u32,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            supports_depth_textures: true,
            texture_units: 16,
        }
    }
}

impl Capabilities {
    pub fn new(supports_depth_textures: bool, texture_units: u32) -> Self {
        Self {
            supports_depth_textures,
            texture_units,
        }
    }

    /// Returns true if a shader for `label` can bind all its textures.
    pub fn fits(&self, label: &impl Label) -> bool {
        label.texture_units_required() <= self.texture_units
    }
}
