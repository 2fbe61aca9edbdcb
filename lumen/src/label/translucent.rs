use itertools::iproduct;
use lumen_types::{InstanceTranslucentLit, InstanceTranslucentUnlit, Light};

use super::{
    extend_tokens, rules, AlphaLabel, Label, LabelTokens, LightLabel, NormalLabel, RefractiveLabel, SpecularLabel,
    SurfaceLabel,
};
use crate::Capabilities;

/// Refraction samples whatever has been rendered behind the surface so far.
const SCENE_BACKGROUND_TEXTURES: u32 = 1;

/// Translucent surface drawn without lights.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TranslucentUnlitLabel {
    Regular {
        surface: SurfaceLabel,
        alpha: AlphaLabel,
    },
    Refractive {
        normal: NormalLabel,
        refractive: RefractiveLabel,
    },
}

impl TranslucentUnlitLabel {
    pub fn from_instance(instance: &InstanceTranslucentUnlit) -> Self {
        match instance {
            InstanceTranslucentUnlit::Regular(i) => {
                let surface = SurfaceLabel::from_properties(&i.mesh, &i.material.surface);
                Self::Regular {
                    surface,
                    alpha: AlphaLabel::from_properties(surface.normal, &i.material.alpha),
                }
            }
            InstanceTranslucentUnlit::Refractive(i) => Self::Refractive {
                normal: NormalLabel::from_properties(&i.mesh, &i.material.normal),
                refractive: RefractiveLabel::from_properties(&i.material.refractive),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Regular { surface, alpha } => surface.is_valid() && rules::alpha_is_valid(surface.normal, alpha),
            Self::Refractive { .. } => true,
        }
    }

    pub fn all() -> impl Iterator<Item = Self> + Clone {
        let regular =
            iproduct!(SurfaceLabel::all(), AlphaLabel::ALL).map(|(surface, alpha)| Self::Regular { surface, alpha });
        let refractive = iproduct!(NormalLabel::ALL, RefractiveLabel::ALL)
            .map(|(normal, refractive)| Self::Refractive { normal, refractive });
        regular.chain(refractive).filter(Self::is_valid)
    }
}

impl Label for TranslucentUnlitLabel {
    fn tokens(&self) -> LabelTokens {
        match self {
            Self::Regular { surface, alpha } => {
                let mut tokens: LabelTokens = smallvec::smallvec!["fwd", "TU"];
                extend_tokens(&mut tokens, surface);
                extend_tokens(&mut tokens, alpha);
                tokens
            }
            Self::Refractive { normal, refractive } => {
                let mut tokens: LabelTokens = smallvec::smallvec!["fwd", "TR"];
                extend_tokens(&mut tokens, normal);
                extend_tokens(&mut tokens, refractive);
                tokens
            }
        }
    }

    fn texture_units_required(&self) -> u32 {
        match self {
            Self::Regular { surface, alpha } => surface.texture_units_required() + alpha.texture_units(),
            Self::Refractive { normal, refractive } => {
                normal.texture_units() + refractive.texture_units() + SCENE_BACKGROUND_TEXTURES
            }
        }
    }
}

/// Translucent surface drawn once per light that reaches it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TranslucentLitLabel {
    Regular {
        light: LightLabel,
        surface: SurfaceLabel,
        alpha: AlphaLabel,
    },
    /// Only the specular highlight is drawn.
    SpecularOnly {
        light: LightLabel,
        normal: NormalLabel,
        specular: SpecularLabel,
        alpha: AlphaLabel,
    },
}

impl TranslucentLitLabel {
    pub fn from_instance(light: &Light, capabilities: &Capabilities, instance: &InstanceTranslucentLit) -> Self {
        let light = LightLabel::from_light(light, capabilities);
        match instance {
            InstanceTranslucentLit::Regular(i) => {
                let surface = SurfaceLabel::from_properties(&i.mesh, &i.material.surface);
                Self::Regular {
                    light,
                    surface,
                    alpha: AlphaLabel::from_properties(surface.normal, &i.material.alpha),
                }
            }
            InstanceTranslucentLit::SpecularOnly(i) => {
                let normal = NormalLabel::from_properties(&i.mesh, &i.material.normal);
                Self::SpecularOnly {
                    light,
                    normal,
                    specular: SpecularLabel::from_properties(&i.mesh, normal, &i.material.specular),
                    alpha: AlphaLabel::from_properties(normal, &i.material.alpha),
                }
            }
        }
    }

    pub fn light(&self) -> LightLabel {
        match *self {
            Self::Regular { light, .. } | Self::SpecularOnly { light, .. } => light,
        }
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Regular { surface, alpha, .. } => surface.is_valid() && rules::alpha_is_valid(surface.normal, alpha),
            Self::SpecularOnly {
                normal,
                specular,
                alpha,
                ..
            } => rules::specular_is_valid(normal, specular) && rules::alpha_is_valid(normal, alpha),
        }
    }

    pub fn all() -> impl Iterator<Item = Self> + Clone {
        let regular = iproduct!(LightLabel::ALL, SurfaceLabel::all(), AlphaLabel::ALL)
            .map(|(light, surface, alpha)| Self::Regular { light, surface, alpha });
        let specular_only = iproduct!(LightLabel::ALL, NormalLabel::ALL, SpecularLabel::ALL, AlphaLabel::ALL).map(
            |(light, normal, specular, alpha)| Self::SpecularOnly {
                light,
                normal,
                specular,
                alpha,
            },
        );
        regular.chain(specular_only).filter(Self::is_valid)
    }
}

impl Label for TranslucentLitLabel {
    fn tokens(&self) -> LabelTokens {
        match self {
            Self::Regular { light, surface, alpha } => {
                let mut tokens: LabelTokens = smallvec::smallvec!["fwd", "TL"];
                extend_tokens(&mut tokens, light);
                extend_tokens(&mut tokens, surface);
                extend_tokens(&mut tokens, alpha);
                tokens
            }
            Self::SpecularOnly {
                light,
                normal,
                specular,
                alpha,
            } => {
                let mut tokens: LabelTokens = smallvec::smallvec!["fwd", "TS"];
                extend_tokens(&mut tokens, light);
                extend_tokens(&mut tokens, normal);
                extend_tokens(&mut tokens, specular);
                extend_tokens(&mut tokens, alpha);
                tokens
            }
        }
    }

    fn texture_units_required(&self) -> u32 {
        match self {
            Self::Regular { light, surface, alpha } => {
                light.texture_units() + surface.texture_units_required() + alpha.texture_units()
            }
            Self::SpecularOnly {
                light,
                normal,
                specular,
                alpha,
            } => light.texture_units() + normal.texture_units() + specular.texture_units() + alpha.texture_units(),
        }
    }
}
