use indexmap::IndexMap;
use lumen_types::{Light, LightId};

use super::{group_by, instance_count, DepthBatches};
use crate::{label::DepthLabel, scene::Scene};

/// Depth batches of a single shadow map.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowBatch<'a> {
    pub light: &'a Light,
    pub batches: DepthBatches<'a>,
}

pub type ShadowBatches<'a> = IndexMap<LightId, ShadowBatch<'a>>;

/// Groups the shadow casters of every light by depth behaviour.
///
/// Only registered casters are considered, visibility has nothing to do with
/// casting a shadow.
pub fn batch_shadows(scene: &Scene) -> ShadowBatches<'_> {
    profiling::scope!("batch_shadows");

    scene
        .shadows()
        .casters
        .iter()
        .map(|(&id, casters)| {
            let batches = group_by(casters.instances.values(), DepthLabel::from_instance);
            log::trace!(
                "Shadow batching for {}: {} casters in {} batches",
                id,
                instance_count(&batches),
                batches.len()
            );
            (
                id,
                ShadowBatch {
                    light: &casters.light,
                    batches,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use lumen_types::{
        glam::{Mat4, Quat, Vec3},
        Camera, Instance, InstanceId, InstanceOpaque, MaterialOpaqueRegular, Mesh, ProjectiveLight, RawMeshHandle,
        RawTexture2DHandle, Shadow, ShadowMap, VertexAttributes,
    };

    use super::*;
    use crate::{batch::batch_depth, scene::SceneBuilder};

    fn spot(id: u64) -> Light {
        Light::projective(
            LightId::new(id),
            Vec3::ONE,
            1.0,
            ProjectiveLight {
                position: Vec3::Y,
                orientation: Quat::IDENTITY,
                projection: Mat4::IDENTITY,
                texture: RawTexture2DHandle::new(0),
                shadow: Some(Shadow::Basic(ShadowMap::default())),
            },
        )
    }

    fn instance(id: u64) -> InstanceOpaque {
        let mesh = Mesh::new(RawMeshHandle::new(0), VertexAttributes::NORMAL);
        Instance::new(InstanceId::new(id), mesh, MaterialOpaqueRegular::default()).into()
    }

    #[test]
    fn invisible_casters_are_only_in_shadows() {
        let light = spot(1);
        let (roof, wall) = (instance(1), instance(2));

        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_invisible_with_shadow(light, roof);
        builder.add_opaque_lit_visible_with_shadow(light, wall);
        let scene = builder.create();

        let shadows = batch_shadows(&scene);
        assert_eq!(shadows.len(), 1);
        assert_eq!(shadows[&light.id].light, &light);
        assert_eq!(shadows[&light.id].batches[&DepthLabel::Constant], [&roof, &wall]);

        let depth = batch_depth(&scene);
        assert_eq!(depth[&DepthLabel::Constant], [&wall]);
    }

    #[test]
    fn visible_without_shadow_casts_nothing() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_opaque_lit_visible_without_shadow(spot(1), instance(1));
        let scene = builder.create();
        assert!(batch_shadows(&scene).is_empty());
        assert_eq!(scene.shadow_lights().len(), 1);
    }
}
