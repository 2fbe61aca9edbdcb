use glam::{Mat4, Quat, Vec3};

use crate::{LightId, RawTexture2DHandle};

/// Size and bias parameters shared by all shadow map kinds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowMap {
    /// The shadow map is `2^size_exponent` pixels square.
    pub size_exponent: u8,
    pub depth_bias: f32,
    /// Lightness of a fully shadowed pixel.
    pub factor_min: f32,
    /// Lightness of a fully lit pixel.
    pub factor_max: f32,
}

impl Default for ShadowMap {
    fn default() -> Self {
        Self {
            size_exponent: 10,
            depth_bias: 0.001,
            factor_min: 0.2,
            factor_max: 1.0,
        }
    }
}

impl ShadowMap {
    /// Side length in pixels, or `None` if `size_exponent` does not fit a `u32`.
    pub fn size(&self) -> Option<u32> {
        1u32.checked_shl(u32::from(self.size_exponent))
    }
}

/// How a light's shadows are produced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shadow {
    /// Single depth comparison per pixel.
    Basic(ShadowMap),
    /// Variance shadow mapping with filtered moments.
    Variance {
        map: ShadowMap,
        minimum_variance: f32,
        light_bleed_reduction: f32,
    },
}

impl Shadow {
    pub fn map(&self) -> &ShadowMap {
        match self {
            Self::Basic(map) | Self::Variance { map, .. } => map,
        }
    }
}

/// A light projecting a texture (spot lights, flash lights) through a
/// projection matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectiveLight {
    pub position: Vec3,
    pub orientation: Quat,
    pub projection: Mat4,
    pub texture: RawTexture2DHandle,
    pub shadow: Option<Shadow>,
}

/// Light specific payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LightKind {
    /// Infinitely far away light (the sun).
    Directional { direction: Vec3 },
    /// Point light with a spherical area of influence.
    Spherical { position: Vec3, radius: f32, falloff: f32 },
    Projective(ProjectiveLight),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub id: LightId,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    pub fn directional(id: LightId, color: Vec3, intensity: f32, direction: Vec3) -> Self {
        Self {
            id,
            color,
            intensity,
            kind: LightKind::Directional { direction },
        }
    }

    pub fn spherical(id: LightId, color: Vec3, intensity: f32, position: Vec3, radius: f32, falloff: f32) -> Self {
        Self {
            id,
            color,
            intensity,
            kind: LightKind::Spherical {
                position,
                radius,
                falloff,
            },
        }
    }

    pub fn projective(id: LightId, color: Vec3, intensity: f32, projective: ProjectiveLight) -> Self {
        Self {
            id,
            color,
            intensity,
            kind: LightKind::Projective(projective),
        }
    }

    pub fn shadow(&self) -> Option<&Shadow> {
        match self.kind {
            LightKind::Projective(ProjectiveLight { ref shadow, .. }) => shadow.as_ref(),
            LightKind::Directional { .. } | LightKind::Spherical { .. } => None,
        }
    }

    /// Only projective lights with a shadow descriptor cast shadows.
    pub fn has_shadow(&self) -> bool {
        self.shadow().is_some()
    }
}
