//! Grouping of a [`Scene`](crate::scene::Scene)'s instances by label, one
//! function per render pass.
//!
//! Batchers are pure: they borrow the scene, allocate fresh groupings on every
//! call and never cache anything. Calling one twice on the same scene gives
//! equal results. Within a group, instances keep their registration order, and
//! groups are ordered by the first instance that produced them.

use std::hash::Hash;

use indexmap::IndexMap;
use lumen_types::InstanceOpaque;

mod deferred;
mod depth;
mod forward;
mod shadow;
mod translucent;

pub use deferred::*;
pub use depth::*;
pub use forward::*;
pub use shadow::*;
pub use translucent::*;

/// Opaque instances grouped by label.
pub type InstanceGroups<'a, L> = IndexMap<L, Vec<&'a InstanceOpaque>>;

fn group_by<'a, L, I>(instances: I, mut label: impl FnMut(&InstanceOpaque) -> L) -> InstanceGroups<'a, L>
where
    L: Hash + Eq,
    I: IntoIterator<Item = &'a InstanceOpaque>,
{
    let mut groups = InstanceGroups::new();
    for instance in instances {
        groups.entry(label(instance)).or_insert_with(Vec::new).push(instance);
    }
    groups
}

fn instance_count<L>(groups: &InstanceGroups<'_, L>) -> usize {
    groups.values().map(Vec::len).sum()
}
