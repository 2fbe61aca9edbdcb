use itertools::iproduct;
use lumen_types::{InstanceOpaque, Light};

use super::{extend_tokens, Label, LabelTokens, LightLabel, SurfaceLabel};
use crate::Capabilities;

fn surface_of(instance: &InstanceOpaque) -> SurfaceLabel {
    match instance {
        InstanceOpaque::Regular(i) => SurfaceLabel::from_properties(&i.mesh, &i.material.surface),
        InstanceOpaque::AlphaDepth(i) => SurfaceLabel::from_properties(&i.mesh, &i.material.surface),
    }
}

/// Opaque surface drawn in the forward pass without any light.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpaqueUnlitLabel {
    pub surface: SurfaceLabel,
}

impl OpaqueUnlitLabel {
    pub fn from_instance(instance: &InstanceOpaque) -> Self {
        Self {
            surface: surface_of(instance),
        }
    }

    pub fn all() -> impl Iterator<Item = Self> + Clone {
        SurfaceLabel::all().map(|surface| Self { surface })
    }
}

impl Label for OpaqueUnlitLabel {
    fn tokens(&self) -> LabelTokens {
        let mut tokens: LabelTokens = smallvec::smallvec!["fwd", "OU"];
        extend_tokens(&mut tokens, &self.surface);
        tokens
    }

    fn texture_units_required(&self) -> u32 {
        self.surface.texture_units_required()
    }
}

/// Opaque surface drawn additively once per light in the forward pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpaqueLitLabel {
    pub light: LightLabel,
    pub surface: SurfaceLabel,
}

impl OpaqueLitLabel {
    pub fn from_instance(light: &Light, capabilities: &Capabilities, instance: &InstanceOpaque) -> Self {
        Self {
            light: LightLabel::from_light(light, capabilities),
            surface: surface_of(instance),
        }
    }

    pub fn all() -> impl Iterator<Item = Self> + Clone {
        iproduct!(LightLabel::ALL, SurfaceLabel::all()).map(|(light, surface)| Self { light, surface })
    }
}

impl Label for OpaqueLitLabel {
    fn tokens(&self) -> LabelTokens {
        let mut tokens: LabelTokens = smallvec::smallvec!["fwd", "OL"];
        extend_tokens(&mut tokens, &self.light);
        extend_tokens(&mut tokens, &self.surface);
        tokens
    }

    fn texture_units_required(&self) -> u32 {
        self.light.texture_units() + self.surface.texture_units_required()
    }
}

/// Opaque surface written to the geometry buffer of a deferred light group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpaqueDeferredLabel {
    pub surface: SurfaceLabel,
}

impl OpaqueDeferredLabel {
    pub fn from_instance(instance: &InstanceOpaque) -> Self {
        Self {
            surface: surface_of(instance),
        }
    }

    pub fn all() -> impl Iterator<Item = Self> + Clone {
        SurfaceLabel::all().map(|surface| Self { surface })
    }
}

impl Label for OpaqueDeferredLabel {
    fn tokens(&self) -> LabelTokens {
        let mut tokens: LabelTokens = smallvec::smallvec!["def"];
        extend_tokens(&mut tokens, &self.surface);
        tokens
    }

    fn texture_units_required(&self) -> u32 {
        self.surface.texture_units_required()
    }
}

#[cfg(test)]
mod tests {
    use lumen_types::{
        glam::{Vec3, Vec4},
        AlbedoProperties, Instance, InstanceId, LightId, MaterialOpaqueRegular, Mesh, RawMeshHandle,
        RawTexture2DHandle, SpecularProperties, SurfaceProperties, VertexAttributes,
    };

    use super::*;
    use crate::{label::DepthLabel, util::typedefs::FastHashSet};

    fn instance() -> InstanceOpaque {
        let mesh = Mesh::new(
            RawMeshHandle::new(0),
            VertexAttributes::NORMAL | VertexAttributes::TEXTURE_COORDINATES,
        );
        let surface = SurfaceProperties::default()
            .with_albedo(AlbedoProperties::textured(RawTexture2DHandle::new(1)).with_color(Vec4::ONE))
            .with_specular(SpecularProperties::constant(Vec3::ONE, 8.0));
        Instance::new(InstanceId::new(1), mesh, MaterialOpaqueRegular::new(surface)).into()
    }

    #[test]
    fn golden_codes() {
        let sun = Light::directional(LightId::new(1), Vec3::ONE, 1.0, Vec3::NEG_Y);
        let caps = Capabilities::default();
        let instance = instance();

        assert_eq!(OpaqueUnlitLabel::from_instance(&instance).code().as_str(), "fwd_OU_BT_NV_SC");
        assert_eq!(
            OpaqueLitLabel::from_instance(&sun, &caps, &instance).code().as_str(),
            "fwd_OL_LD_BT_NV_SC"
        );
        assert_eq!(OpaqueDeferredLabel::from_instance(&instance).code().as_str(), "def_BT_NV_SC");
        assert_eq!(DepthLabel::from_instance(&instance).code().as_str(), "dep_DC");
    }

    #[test]
    fn enumeration_sizes() {
        assert_eq!(OpaqueUnlitLabel::all().count(), 90);
        assert_eq!(OpaqueDeferredLabel::all().count(), 90);
        assert_eq!(OpaqueLitLabel::all().count(), 6 * 90);
    }

    #[test]
    fn lit_codes_are_injective() {
        let mut codes = FastHashSet::default();
        for label in OpaqueLitLabel::all() {
            assert!(codes.insert(label.code()), "duplicate code for {label:?}");
            assert_eq!(
                label.texture_units_required(),
                label.light.texture_units_required() + label.surface.texture_units_required()
            );
        }
    }

    #[test]
    fn derived_label_is_enumerated() {
        let instance = instance();
        let unlit = OpaqueUnlitLabel::from_instance(&instance);
        assert!(OpaqueUnlitLabel::all().any(|l| l == unlit));
        let sun = Light::directional(LightId::new(1), Vec3::ONE, 1.0, Vec3::NEG_Y);
        let lit = OpaqueLitLabel::from_instance(&sun, &Capabilities::default(), &instance);
        assert!(OpaqueLitLabel::all().any(|l| l == lit));
    }
}
