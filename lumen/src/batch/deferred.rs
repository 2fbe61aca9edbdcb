use indexmap::IndexMap;
use lumen_types::{Light, LightId};

use super::{group_by, instance_count, InstanceGroups};
use crate::{label::OpaqueDeferredLabel, scene::Scene};

/// Geometry batches of a deferred light group, and the lights applied to the
/// resulting geometry buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredBatch<'a> {
    pub lights: &'a IndexMap<LightId, Light>,
    pub batches: InstanceGroups<'a, OpaqueDeferredLabel>,
}

pub type DeferredBatches<'a> = IndexMap<&'a str, DeferredBatch<'a>>;

pub fn batch_deferred(scene: &Scene) -> DeferredBatches<'_> {
    profiling::scope!("batch_deferred");

    scene
        .light_groups()
        .iter()
        .map(|(name, group)| {
            let batches = group_by(group.instances.values(), OpaqueDeferredLabel::from_instance);
            log::trace!(
                "Deferred batching for group {:?}: {} instances in {} batches, {} lights",
                name,
                instance_count(&batches),
                batches.len(),
                group.lights.len()
            );
            (
                name.as_str(),
                DeferredBatch {
                    lights: &group.lights,
                    batches,
                },
            )
        })
        .collect()
}
