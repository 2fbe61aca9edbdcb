use glam::{Mat3, Mat4};

use crate::{
    InstanceId, MaterialOpaqueAlphaDepth, MaterialOpaqueRegular, MaterialTranslucentRefractive,
    MaterialTranslucentRegular, MaterialTranslucentSpecularOnly, Mesh,
};

/// A mesh drawn with a material, placed in the world.
///
/// `transform` and `uv_matrix` default to identity. An instance with either
/// set is a "transformed instance".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Instance<M> {
    pub id: InstanceId,
    pub mesh: Mesh,
    pub material: M,
    /// Model -> World matrix
    pub transform: Mat4,
    /// Applied to texture coordinates after the material's own uv matrix.
    pub uv_matrix: Mat3,
}

impl<M> Instance<M> {
    pub fn new(id: InstanceId, mesh: Mesh, material: M) -> Self {
        Self {
            id,
            mesh,
            material,
            transform: Mat4::IDENTITY,
            uv_matrix: Mat3::IDENTITY,
        }
    }

    pub fn with_transform(self, transform: Mat4) -> Self {
        Self { transform, ..self }
    }

    pub fn with_uv_matrix(self, uv_matrix: Mat3) -> Self {
        Self { uv_matrix, ..self }
    }

    pub fn is_transformed(&self) -> bool {
        self.transform != Mat4::IDENTITY || self.uv_matrix != Mat3::IDENTITY
    }
}

/// Instances which are rendered in any order thanks to the depth test.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InstanceOpaque {
    Regular(Instance<MaterialOpaqueRegular>),
    AlphaDepth(Instance<MaterialOpaqueAlphaDepth>),
}

impl InstanceOpaque {
    pub fn id(&self) -> InstanceId {
        match self {
            Self::Regular(i) => i.id,
            Self::AlphaDepth(i) => i.id,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        match self {
            Self::Regular(i) => &i.mesh,
            Self::AlphaDepth(i) => &i.mesh,
        }
    }
}

impl From<Instance<MaterialOpaqueRegular>> for InstanceOpaque {
    fn from(instance: Instance<MaterialOpaqueRegular>) -> Self {
        Self::Regular(instance)
    }
}

impl From<Instance<MaterialOpaqueAlphaDepth>> for InstanceOpaque {
    fn from(instance: Instance<MaterialOpaqueAlphaDepth>) -> Self {
        Self::AlphaDepth(instance)
    }
}

/// Translucent instances which react to lights.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InstanceTranslucentLit {
    Regular(Instance<MaterialTranslucentRegular>),
    SpecularOnly(Instance<MaterialTranslucentSpecularOnly>),
}

impl InstanceTranslucentLit {
    pub fn id(&self) -> InstanceId {
        match self {
            Self::Regular(i) => i.id,
            Self::SpecularOnly(i) => i.id,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        match self {
            Self::Regular(i) => &i.mesh,
            Self::SpecularOnly(i) => &i.mesh,
        }
    }
}

impl From<Instance<MaterialTranslucentRegular>> for InstanceTranslucentLit {
    fn from(instance: Instance<MaterialTranslucentRegular>) -> Self {
        Self::Regular(instance)
    }
}

impl From<Instance<MaterialTranslucentSpecularOnly>> for InstanceTranslucentLit {
    fn from(instance: Instance<MaterialTranslucentSpecularOnly>) -> Self {
        Self::SpecularOnly(instance)
    }
}

/// Translucent instances drawn without lighting.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InstanceTranslucentUnlit {
    Regular(Instance<MaterialTranslucentRegular>),
    Refractive(Instance<MaterialTranslucentRefractive>),
}

impl InstanceTranslucentUnlit {
    pub fn id(&self) -> InstanceId {
        match self {
            Self::Regular(i) => i.id,
            Self::Refractive(i) => i.id,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        match self {
            Self::Regular(i) => &i.mesh,
            Self::Refractive(i) => &i.mesh,
        }
    }
}

impl From<Instance<MaterialTranslucentRegular>> for InstanceTranslucentUnlit {
    fn from(instance: Instance<MaterialTranslucentRegular>) -> Self {
        Self::Regular(instance)
    }
}

impl From<Instance<MaterialTranslucentRefractive>> for InstanceTranslucentUnlit {
    fn from(instance: Instance<MaterialTranslucentRefractive>) -> Self {
        Self::Refractive(instance)
    }
}
