use indexmap::IndexMap;
use lumen_types::{Light, LightId};

use super::{group_by, instance_count, InstanceGroups};
use crate::{
    label::{Label, OpaqueLitLabel, OpaqueUnlitLabel},
    scene::Scene,
    Capabilities,
};

/// Lit batches of a single light.
#[derive(Debug, Clone, PartialEq)]
pub struct LitBatches<'a> {
    pub light: &'a Light,
    pub batches: InstanceGroups<'a, OpaqueLitLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForwardBatches<'a> {
    pub unlit: InstanceGroups<'a, OpaqueUnlitLabel>,
    /// An instance visible under several lights is present under each of them,
    /// every light is a separate additive draw.
    pub lit: IndexMap<LightId, LitBatches<'a>>,
}

fn warn_unfit(label: &impl Label, capabilities: &Capabilities) {
    if !capabilities.fits(label) {
        log::warn!(
            "Shader {} needs {} texture units, only {} are available",
            label.code(),
            label.texture_units_required(),
            capabilities.texture_units
        );
    }
}

/// Groups the opaque instances of the forward passes by label.
pub fn batch_forward<'a>(scene: &'a Scene, capabilities: &Capabilities) -> ForwardBatches<'a> {
    profiling::scope!("batch_forward");

    let opaques = scene.opaques();
    let unlit = group_by(opaques.unlit.values(), OpaqueUnlitLabel::from_instance);
    unlit.keys().for_each(|label| warn_unfit(label, capabilities));

    let lit: IndexMap<_, _> = opaques
        .lit
        .iter()
        .map(|(&id, lit)| {
            let batches = group_by(lit.instances.values(), |instance| {
                OpaqueLitLabel::from_instance(&lit.light, capabilities, instance)
            });
            batches.keys().for_each(|label| warn_unfit(label, capabilities));
            (
                id,
                LitBatches {
                    light: &lit.light,
                    batches,
                },
            )
        })
        .collect();

    log::trace!(
        "Forward batching: {} unlit instances in {} batches, {} lit draws under {} lights",
        instance_count(&unlit),
        unlit.len(),
        lit.values().map(|l| instance_count(&l.batches)).sum::<usize>(),
        lit.len()
    );

    ForwardBatches { unlit, lit }
}

#[cfg(test)]
mod tests {
    use lumen_types::{
        glam::Vec3, Camera, Instance, InstanceId, InstanceOpaque, MaterialOpaqueRegular, Mesh, RawMeshHandle,
        SpecularProperties, SurfaceProperties, VertexAttributes,
    };

    use super::*;
    use crate::scene::SceneBuilder;

    fn instance(id: u64, specular: bool) -> InstanceOpaque {
        let mesh = Mesh::new(RawMeshHandle::new(id as usize), VertexAttributes::NORMAL);
        let mut surface = SurfaceProperties::default();
        if specular {
            surface = surface.with_specular(SpecularProperties::constant(Vec3::ONE, 16.0));
        }
        Instance::new(InstanceId::new(id), mesh, MaterialOpaqueRegular::new(surface)).into()
    }

    #[test]
    fn lit_instances_repeat_per_light() {
        let sun = Light::directional(LightId::new(1), Vec3::ONE, 1.0, Vec3::NEG_Y);
        let lamp = Light::spherical(LightId::new(2), Vec3::ONE, 1.0, Vec3::ZERO, 5.0, 1.0);
        let (a, b, c) = (instance(1, true), instance(2, false), instance(3, true));

        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_opaque_lit_visible_without_shadow(sun, a);
        builder.add_opaque_lit_visible_without_shadow(lamp, a);
        builder.add_opaque_lit_visible_without_shadow(sun, b);
        builder.add_opaque_unlit(c);
        let scene = builder.create();

        let batches = batch_forward(&scene, &Capabilities::default());
        assert_eq!(batches.unlit.len(), 1);
        assert_eq!(batches.unlit.values().next().unwrap(), &[&c]);

        let under_sun = &batches.lit[&sun.id];
        assert_eq!(under_sun.light, &sun);
        let codes: Vec<_> = under_sun.batches.keys().map(|l| l.code().to_string()).collect();
        assert_eq!(codes, ["fwd_OL_LD_BC_NV_SC", "fwd_OL_LD_BC_NV"]);

        let under_lamp = &batches.lit[&lamp.id];
        assert_eq!(under_lamp.batches.len(), 1);
        assert_eq!(under_lamp.batches.values().next().unwrap(), &[&a]);
    }

    #[test]
    fn repeated_calls_are_equal() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_opaque_unlit(instance(1, false));
        let scene = builder.create();
        let caps = Capabilities::new(false, 2);
        assert_eq!(batch_forward(&scene, &caps), batch_forward(&scene, &caps));
    }
}
