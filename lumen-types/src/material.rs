//! Material property bundles and the material variants built out of them.
//!
//! Every axis is an independent immutable value. Modification goes through
//! the `with_*` functions which return a modified copy.

use glam::{Mat3, Vec3, Vec4};

use crate::{RawTexture2DHandle, RawTextureCubeHandle};

fn texture_count(present: bool) -> u32 {
    present as u32
}

/// Base colour of a surface, optionally blended with a texture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AlbedoProperties {
    pub color: Vec4,
    /// How much of the texture is mixed over the colour. 0 ignores the texture.
    pub mix: f32,
    pub texture: Option<RawTexture2DHandle>,
}

impl Default for AlbedoProperties {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            mix: 0.0,
            texture: None,
        }
    }
}

impl AlbedoProperties {
    pub fn colored(color: Vec4) -> Self {
        Self { color, ..Self::default() }
    }

    pub fn textured(texture: RawTexture2DHandle) -> Self {
        Self {
            mix: 1.0,
            texture: Some(texture),
            ..Self::default()
        }
    }

    pub fn with_color(self, color: Vec4) -> Self {
        Self { color, ..self }
    }

    pub fn with_mix(self, mix: f32) -> Self {
        Self { mix, ..self }
    }

    pub fn with_texture(self, texture: Option<RawTexture2DHandle>) -> Self {
        Self { texture, ..self }
    }

    pub fn texture_units_required(&self) -> u32 {
        texture_count(self.texture.is_some())
    }
}

/// Normal mapping of a surface. Per-vertex normals come from the mesh.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NormalProperties {
    pub texture: Option<RawTexture2DHandle>,
}

impl NormalProperties {
    pub fn mapped(texture: RawTexture2DHandle) -> Self {
        Self { texture: Some(texture) }
    }

    pub fn texture_units_required(&self) -> u32 {
        texture_count(self.texture.is_some())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpecularProperties {
    /// A colour of exactly zero disables specular highlights.
    pub color: Vec3,
    pub exponent: f32,
    pub texture: Option<RawTexture2DHandle>,
}

impl Default for SpecularProperties {
    fn default() -> Self {
        Self {
            color: Vec3::ZERO,
            exponent: 32.0,
            texture: None,
        }
    }
}

impl SpecularProperties {
    pub fn constant(color: Vec3, exponent: f32) -> Self {
        Self {
            color,
            exponent,
            texture: None,
        }
    }

    pub fn with_color(self, color: Vec3) -> Self {
        Self { color, ..self }
    }

    pub fn with_exponent(self, exponent: f32) -> Self {
        Self { exponent, ..self }
    }

    pub fn with_texture(self, texture: Option<RawTexture2DHandle>) -> Self {
        Self { texture, ..self }
    }

    pub fn texture_units_required(&self) -> u32 {
        texture_count(self.texture.is_some())
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct EmissiveProperties {
    /// An emission of exactly zero disables emission.
    pub emission: f32,
    pub texture: Option<RawTexture2DHandle>,
}

impl EmissiveProperties {
    pub fn constant(emission: f32) -> Self {
        Self { emission, texture: None }
    }

    pub fn with_emission(self, emission: f32) -> Self {
        Self { emission, ..self }
    }

    pub fn with_texture(self, texture: Option<RawTexture2DHandle>) -> Self {
        Self { texture, ..self }
    }

    pub fn texture_units_required(&self) -> u32 {
        texture_count(self.texture.is_some())
    }
}

/// Environment (cube map) reflections.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct EnvironmentProperties {
    pub texture: Option<RawTextureCubeHandle>,
    pub mix: f32,
    /// Read the reflection mix factor out of the specular map instead of
    /// using `mix` uniformly.
    pub mix_from_specular_map: bool,
}

impl EnvironmentProperties {
    pub fn reflective(texture: RawTextureCubeHandle, mix: f32) -> Self {
        Self {
            texture: Some(texture),
            mix,
            mix_from_specular_map: false,
        }
    }

    pub fn with_mix(self, mix: f32) -> Self {
        Self { mix, ..self }
    }

    pub fn with_mix_from_specular_map(self, mix_from_specular_map: bool) -> Self {
        Self {
            mix_from_specular_map,
            ..self
        }
    }

    pub fn texture_units_required(&self) -> u32 {
        texture_count(self.texture.is_some())
    }
}

/// How the opacity of a translucent surface is determined.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AlphaMode {
    /// Opacity is the given value.
    #[default]
    Constant,
    /// Opacity is `1 - dot(view, normal)`, scaled by the given value. Edges
    /// become more opaque than faces seen head on.
    OneMinusDot,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AlphaProperties {
    pub opacity: f32,
    pub mode: AlphaMode,
}

impl Default for AlphaProperties {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            mode: AlphaMode::Constant,
        }
    }
}

impl AlphaProperties {
    pub fn constant(opacity: f32) -> Self {
        Self {
            opacity,
            mode: AlphaMode::Constant,
        }
    }

    pub fn one_minus_dot(opacity: f32) -> Self {
        Self {
            opacity,
            mode: AlphaMode::OneMinusDot,
        }
    }

    pub fn texture_units_required(&self) -> u32 {
        0
    }
}

/// Refraction of whatever was rendered behind the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RefractiveProperties {
    pub scale: f32,
    /// Only refract pixels covered by the refracting object itself.
    pub masked: bool,
}

impl Default for RefractiveProperties {
    fn default() -> Self {
        Self {
            scale: 1.0,
            masked: false,
        }
    }
}

impl RefractiveProperties {
    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub fn with_masked(self, masked: bool) -> Self {
        Self { masked, ..self }
    }

    pub fn texture_units_required(&self) -> u32 {
        0
    }
}

/// The shared property axes of regular (non-refractive, non-specular-only)
/// materials.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SurfaceProperties {
    pub albedo: AlbedoProperties,
    pub normal: NormalProperties,
    pub specular: SpecularProperties,
    pub emissive: EmissiveProperties,
    pub environment: EnvironmentProperties,
}

impl SurfaceProperties {
    pub fn with_albedo(self, albedo: AlbedoProperties) -> Self {
        Self { albedo, ..self }
    }

    pub fn with_normal(self, normal: NormalProperties) -> Self {
        Self { normal, ..self }
    }

    pub fn with_specular(self, specular: SpecularProperties) -> Self {
        Self { specular, ..self }
    }

    pub fn with_emissive(self, emissive: EmissiveProperties) -> Self {
        Self { emissive, ..self }
    }

    pub fn with_environment(self, environment: EnvironmentProperties) -> Self {
        Self { environment, ..self }
    }

    /// Textures the material data references, regardless of what a mesh can use.
    pub fn texture_units_required(&self) -> u32 {
        self.albedo.texture_units_required()
            + self.normal.texture_units_required()
            + self.specular.texture_units_required()
            + self.emissive.texture_units_required()
            + self.environment.texture_units_required()
    }
}

/// Opaque material, written to depth as a solid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaterialOpaqueRegular {
    pub surface: SurfaceProperties,
    pub uv_matrix: Mat3,
}

impl Default for MaterialOpaqueRegular {
    fn default() -> Self {
        Self {
            surface: SurfaceProperties::default(),
            uv_matrix: Mat3::IDENTITY,
        }
    }
}

impl MaterialOpaqueRegular {
    pub fn new(surface: SurfaceProperties) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    pub fn with_surface(self, surface: SurfaceProperties) -> Self {
        Self { surface, ..self }
    }

    pub fn with_uv_matrix(self, uv_matrix: Mat3) -> Self {
        Self { uv_matrix, ..self }
    }
}

/// Opaque material whose depth is discarded wherever the albedo alpha falls
/// under `alpha_threshold` (foliage, fences).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaterialOpaqueAlphaDepth {
    pub surface: SurfaceProperties,
    pub uv_matrix: Mat3,
    pub alpha_threshold: f32,
}

impl Default for MaterialOpaqueAlphaDepth {
    fn default() -> Self {
        Self {
            surface: SurfaceProperties::default(),
            uv_matrix: Mat3::IDENTITY,
            alpha_threshold: 0.5,
        }
    }
}

impl MaterialOpaqueAlphaDepth {
    pub fn new(surface: SurfaceProperties, alpha_threshold: f32) -> Self {
        Self {
            surface,
            alpha_threshold,
            ..Self::default()
        }
    }

    pub fn with_surface(self, surface: SurfaceProperties) -> Self {
        Self { surface, ..self }
    }

    pub fn with_uv_matrix(self, uv_matrix: Mat3) -> Self {
        Self { uv_matrix, ..self }
    }

    pub fn with_alpha_threshold(self, alpha_threshold: f32) -> Self {
        Self {
            alpha_threshold,
            ..self
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaterialTranslucentRegular {
    pub surface: SurfaceProperties,
    pub alpha: AlphaProperties,
    pub uv_matrix: Mat3,
}

impl Default for MaterialTranslucentRegular {
    fn default() -> Self {
        Self {
            surface: SurfaceProperties::default(),
            alpha: AlphaProperties::default(),
            uv_matrix: Mat3::IDENTITY,
        }
    }
}

impl MaterialTranslucentRegular {
    pub fn new(surface: SurfaceProperties, alpha: AlphaProperties) -> Self {
        Self {
            surface,
            alpha,
            ..Self::default()
        }
    }

    pub fn with_surface(self, surface: SurfaceProperties) -> Self {
        Self { surface, ..self }
    }

    pub fn with_alpha(self, alpha: AlphaProperties) -> Self {
        Self { alpha, ..self }
    }

    pub fn with_uv_matrix(self, uv_matrix: Mat3) -> Self {
        Self { uv_matrix, ..self }
    }
}

/// Translucent material that only contributes specular highlights (glass,
/// water surfaces).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaterialTranslucentSpecularOnly {
    pub normal: NormalProperties,
    pub specular: SpecularProperties,
    pub alpha: AlphaProperties,
    pub uv_matrix: Mat3,
}

impl Default for MaterialTranslucentSpecularOnly {
    fn default() -> Self {
        Self {
            normal: NormalProperties::default(),
            specular: SpecularProperties::default(),
            alpha: AlphaProperties::default(),
            uv_matrix: Mat3::IDENTITY,
        }
    }
}

impl MaterialTranslucentSpecularOnly {
    pub fn new(normal: NormalProperties, specular: SpecularProperties, alpha: AlphaProperties) -> Self {
        Self {
            normal,
            specular,
            alpha,
            ..Self::default()
        }
    }

    pub fn with_uv_matrix(self, uv_matrix: Mat3) -> Self {
        Self { uv_matrix, ..self }
    }
}

/// Translucent material which distorts the scene rendered behind it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaterialTranslucentRefractive {
    pub normal: NormalProperties,
    pub refractive: RefractiveProperties,
    pub uv_matrix: Mat3,
}

impl Default for MaterialTranslucentRefractive {
    fn default() -> Self {
        Self {
            normal: NormalProperties::default(),
            refractive: RefractiveProperties::default(),
            uv_matrix: Mat3::IDENTITY,
        }
    }
}

impl MaterialTranslucentRefractive {
    pub fn new(normal: NormalProperties, refractive: RefractiveProperties) -> Self {
        Self {
            normal,
            refractive,
            ..Self::default()
        }
    }

    pub fn with_uv_matrix(self, uv_matrix: Mat3) -> Self {
        Self { uv_matrix, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_functions_copy() {
        let base = SurfaceProperties::default();
        let textured = base.with_albedo(AlbedoProperties::textured(RawTexture2DHandle::new(1)));
        assert_eq!(base.albedo.texture, None);
        assert_eq!(textured.albedo.texture, Some(RawTexture2DHandle::new(1)));
        assert_eq!(textured.albedo.mix, 1.0);
    }

    #[test]
    fn surface_texture_count() {
        let surface = SurfaceProperties::default()
            .with_albedo(AlbedoProperties::textured(RawTexture2DHandle::new(1)))
            .with_normal(NormalProperties::mapped(RawTexture2DHandle::new(2)))
            .with_environment(EnvironmentProperties::reflective(RawTextureCubeHandle::new(0), 0.5));
        assert_eq!(surface.texture_units_required(), 3);
    }
}
