use lumen_types::{Light, LightKind, Shadow};

use super::{Label, LabelTokens};
use crate::Capabilities;

/// Shading behaviour of a single light.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LightLabel {
    Directional,
    Spherical,
    Projective,
    /// Projective with a shadow map stored in a depth texture.
    ProjectiveShadowBasic,
    /// Projective with a shadow map packed into a colour texture, for
    /// hardware without depth texture support.
    ProjectiveShadowBasicPacked,
    ProjectiveShadowVariance,
}

impl LightLabel {
    pub const ALL: [Self; 6] = [
        Self::Directional,
        Self::Spherical,
        Self::Projective,
        Self::ProjectiveShadowBasic,
        Self::ProjectiveShadowBasicPacked,
        Self::ProjectiveShadowVariance,
    ];

    pub fn from_light(light: &Light, capabilities: &Capabilities) -> Self {
        match light.kind {
            LightKind::Directional { .. } => Self::Directional,
            LightKind::Spherical { .. } => Self::Spherical,
            LightKind::Projective(ref projective) => match projective.shadow {
                None => Self::Projective,
                Some(Shadow::Basic(_)) if capabilities.supports_depth_textures => Self::ProjectiveShadowBasic,
                Some(Shadow::Basic(_)) => Self::ProjectiveShadowBasicPacked,
                Some(Shadow::Variance { .. }) => Self::ProjectiveShadowVariance,
            },
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Directional => "LD",
            Self::Spherical => "LS",
            Self::Projective => "LP",
            Self::ProjectiveShadowBasic => "LPSB",
            Self::ProjectiveShadowBasicPacked => "LPSBP",
            Self::ProjectiveShadowVariance => "LPSV",
        }
    }

    /// The projected texture, plus the shadow map if there is one.
    pub const fn texture_units(self) -> u32 {
        match self {
            Self::Directional | Self::Spherical => 0,
            Self::Projective => 1,
            Self::ProjectiveShadowBasic | Self::ProjectiveShadowBasicPacked | Self::ProjectiveShadowVariance => 2,
        }
    }

    pub const fn has_shadow(self) -> bool {
        match self {
            Self::ProjectiveShadowBasic | Self::ProjectiveShadowBasicPacked | Self::ProjectiveShadowVariance => true,
            Self::Directional | Self::Spherical | Self::Projective => false,
        }
    }
}

impl Label for LightLabel {
    fn tokens(&self) -> LabelTokens {
        smallvec::smallvec![self.token()]
    }

    fn texture_units_required(&self) -> u32 {
        self.texture_units()
    }
}
