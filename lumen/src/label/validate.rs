use lumen_types::{
    MaterialOpaqueAlphaDepth, MaterialOpaqueRegular, MaterialTranslucentRefractive, MaterialTranslucentRegular,
    MaterialTranslucentSpecularOnly, SurfaceProperties,
};
use thiserror::Error;

use super::rules;

/// Authoring mistakes in material data.
///
/// Classification accepts these materials and quietly drops the affected
/// feature, so validation is the place to catch them.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum MaterialValidationError {
    #[error("Alpha-to-depth material has no albedo texture to test against")]
    AlphaDepthWithoutAlbedoTexture,
    #[error("Environment mix is read from the specular map, but the material has no specular texture")]
    EnvironmentMappedWithoutSpecularTexture,
}

/// Material types which can be checked for authoring mistakes.
pub trait MaterialValidation {
    fn validate(&self) -> Result<(), MaterialValidationError>;
}

impl MaterialValidation for SurfaceProperties {
    fn validate(&self) -> Result<(), MaterialValidationError> {
        let environment = &self.environment;
        let has_specular_texture = self.specular.texture.is_some();
        if environment.mix_from_specular_map && !rules::samples_specular_map(environment, has_specular_texture) {
            return Err(MaterialValidationError::EnvironmentMappedWithoutSpecularTexture);
        }
        Ok(())
    }
}

impl MaterialValidation for MaterialOpaqueRegular {
    fn validate(&self) -> Result<(), MaterialValidationError> {
        self.surface.validate()
    }
}

impl MaterialValidation for MaterialOpaqueAlphaDepth {
    fn validate(&self) -> Result<(), MaterialValidationError> {
        if self.surface.albedo.texture.is_none() {
            return Err(MaterialValidationError::AlphaDepthWithoutAlbedoTexture);
        }
        self.surface.validate()
    }
}

impl MaterialValidation for MaterialTranslucentRegular {
    fn validate(&self) -> Result<(), MaterialValidationError> {
        self.surface.validate()
    }
}

impl MaterialValidation for MaterialTranslucentSpecularOnly {
    fn validate(&self) -> Result<(), MaterialValidationError> {
        Ok(())
    }
}

impl MaterialValidation for MaterialTranslucentRefractive {
    fn validate(&self) -> Result<(), MaterialValidationError> {
        Ok(())
    }
}
