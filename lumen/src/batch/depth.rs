use super::{group_by, instance_count, InstanceGroups};
use crate::{label::DepthLabel, scene::Scene};

pub type DepthBatches<'a> = InstanceGroups<'a, DepthLabel>;

/// Groups every visible opaque instance by its depth behaviour.
///
/// Lighting does not matter to a depth pass, so an instance lit by several
/// lights is only present once.
pub fn batch_depth(scene: &Scene) -> DepthBatches<'_> {
    profiling::scope!("batch_depth");

    let batches = group_by(scene.opaques().visible.values(), DepthLabel::from_instance);
    log::trace!(
        "Depth batching: {} instances in {} batches",
        instance_count(&batches),
        batches.len()
    );
    batches
}
