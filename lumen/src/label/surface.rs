use itertools::iproduct;
use lumen_types::{Mesh, SurfaceProperties};

use super::{
    extend_tokens, rules, AlbedoLabel, EmissiveLabel, EnvironmentLabel, Label, LabelTokens, NormalLabel,
    SpecularLabel,
};

/// The axes shared by every regular surface, in code order.
///
/// This is a building block of the role labels and has no prefix of its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceLabel {
    pub albedo: AlbedoLabel,
    pub normal: NormalLabel,
    pub specular: SpecularLabel,
    pub emissive: EmissiveLabel,
    pub environment: EnvironmentLabel,
}

impl SurfaceLabel {
    pub fn from_properties(mesh: &Mesh, surface: &SurfaceProperties) -> Self {
        let normal = NormalLabel::from_properties(mesh, &surface.normal);
        let specular = SpecularLabel::from_properties(mesh, normal, &surface.specular);
        Self {
            albedo: AlbedoLabel::from_properties(mesh, &surface.albedo),
            normal,
            specular,
            emissive: EmissiveLabel::from_properties(mesh, &surface.emissive),
            environment: EnvironmentLabel::from_properties(normal, specular, &surface.environment),
        }
    }

    pub fn is_valid(&self) -> bool {
        rules::specular_is_valid(self.normal, self.specular)
            && rules::environment_is_valid(self.normal, self.specular, self.environment)
    }

    /// Every valid surface label.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        iproduct!(
            AlbedoLabel::ALL,
            NormalLabel::ALL,
            SpecularLabel::ALL,
            EmissiveLabel::ALL,
            EnvironmentLabel::ALL
        )
        .map(|(albedo, normal, specular, emissive, environment)| Self {
            albedo,
            normal,
            specular,
            emissive,
            environment,
        })
        .filter(Self::is_valid)
    }
}

impl Label for SurfaceLabel {
    fn tokens(&self) -> LabelTokens {
        let mut tokens = LabelTokens::new();
        extend_tokens(&mut tokens, &self.albedo);
        extend_tokens(&mut tokens, &self.normal);
        extend_tokens(&mut tokens, &self.specular);
        extend_tokens(&mut tokens, &self.emissive);
        extend_tokens(&mut tokens, &self.environment);
        tokens
    }

    fn texture_units_required(&self) -> u32 {
        self.albedo.texture_units()
            + self.normal.texture_units()
            + self.specular.texture_units()
            + self.emissive.texture_units()
            + self.environment.texture_units()
    }
}
