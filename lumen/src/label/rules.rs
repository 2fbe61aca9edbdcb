//! Cross-axis validity predicates.
//!
//! These are the only place the relationships between axes are written down.
//! Label derivation, label enumeration and material validation all go through
//! them.

use lumen_types::EnvironmentProperties;

use super::{AlphaLabel, EnvironmentLabel, NormalLabel, SpecularLabel};

/// Specular highlights need a normal to reflect around.
pub fn specular_allowed(normal: NormalLabel) -> bool {
    normal != NormalLabel::None
}

/// Environment reflections need a normal to reflect around.
pub fn environment_allowed(normal: NormalLabel) -> bool {
    normal != NormalLabel::None
}

/// View dependent opacity is a dot product with the normal.
pub fn alpha_dot_allowed(normal: NormalLabel) -> bool {
    normal != NormalLabel::None
}

/// A specular map is only sampled if the specular label says so.
pub fn specular_map_available(specular: SpecularLabel) -> bool {
    specular == SpecularLabel::Mapped
}

/// The environment mix is read from the specular map only when it was asked
/// for and a specular map can actually be sampled.
pub fn samples_specular_map(environment: &EnvironmentProperties, specular_map_available: bool) -> bool {
    environment.mix_from_specular_map && specular_map_available
}

pub fn specular_is_valid(normal: NormalLabel, specular: SpecularLabel) -> bool {
    specular == SpecularLabel::None || specular_allowed(normal)
}

pub fn environment_is_valid(normal: NormalLabel, specular: SpecularLabel, environment: EnvironmentLabel) -> bool {
    match environment {
        EnvironmentLabel::None => true,
        EnvironmentLabel::Reflective => environment_allowed(normal),
        EnvironmentLabel::ReflectiveMapped => environment_allowed(normal) && specular_map_available(specular),
    }
}

pub fn alpha_is_valid(normal: NormalLabel, alpha: AlphaLabel) -> bool {
    match alpha {
        AlphaLabel::Constant => true,
        AlphaLabel::OneMinusDot => alpha_dot_allowed(normal),
    }
}
