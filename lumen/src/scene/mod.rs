//! Per-frame collection of everything that is going to be drawn.
//!
//! A [`SceneBuilder`] accumulates instances and lights, checking on every call
//! that no instance is registered in two incompatible ways. [`SceneBuilder::create`]
//! consumes it and returns an immutable [`Scene`], which the functions in
//! [`crate::batch`] group for rendering.

use indexmap::IndexMap;
use lumen_types::{Camera, InstanceId, InstanceOpaque, InstanceTranslucentLit, InstanceTranslucentUnlit, Light, LightId};
use smallvec::SmallVec;

use crate::util::typedefs::SsoString;

mod builder;

pub use builder::*;

/// A light together with the opaque instances registered under it.
#[derive(Debug, Clone, PartialEq)]
pub struct LightInstances {
    pub light: Light,
    pub instances: IndexMap<InstanceId, InstanceOpaque>,
}

impl LightInstances {
    fn new(light: Light) -> Self {
        Self {
            light,
            instances: IndexMap::new(),
        }
    }
}

/// Opaque instances drawn by the forward passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneOpaques {
    /// Lit instances, per light they are visible under.
    pub lit: IndexMap<LightId, LightInstances>,
    pub unlit: IndexMap<InstanceId, InstanceOpaque>,
    /// Every instance in `lit` and `unlit`, once.
    pub visible: IndexMap<InstanceId, InstanceOpaque>,
}

/// Opaque instances drawn into shadow maps.
///
/// These need not be visible. An instance which is both visible and a caster
/// is present in both [`SceneOpaques`] and here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneShadows {
    pub casters: IndexMap<LightId, LightInstances>,
}

/// Lights reaching a single translucent instance. Usually only a few.
pub type TranslucentLights = SmallVec<[Light; 4]>;

/// One entry of the translucent draw sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneTranslucent {
    Lit {
        instance: InstanceTranslucentLit,
        lights: TranslucentLights,
    },
    Unlit(InstanceTranslucentUnlit),
}

impl SceneTranslucent {
    pub fn id(&self) -> InstanceId {
        match self {
            Self::Lit { instance, .. } => instance.id(),
            Self::Unlit(instance) => instance.id(),
        }
    }
}

/// Instances shaded together by a deferred pass, with the lights affecting them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneLightGroup {
    pub lights: IndexMap<LightId, Light>,
    pub instances: IndexMap<InstanceId, InstanceOpaque>,
}

/// Immutable snapshot produced by [`SceneBuilder::create`].
///
/// All maps iterate in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    camera: Camera,
    lights: IndexMap<LightId, Light>,
    shadow_lights: IndexMap<LightId, Light>,
    opaques: SceneOpaques,
    shadows: SceneShadows,
    translucents: Vec<SceneTranslucent>,
    light_groups: IndexMap<SsoString, SceneLightGroup>,
}

impl Scene {
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Every light registered through any entry point.
    pub fn lights(&self) -> &IndexMap<LightId, Light> {
        &self.lights
    }

    /// The subset of [`Scene::lights`] which has a shadow.
    pub fn shadow_lights(&self) -> &IndexMap<LightId, Light> {
        &self.shadow_lights
    }

    pub fn opaques(&self) -> &SceneOpaques {
        &self.opaques
    }

    pub fn shadows(&self) -> &SceneShadows {
        &self.shadows
    }

    /// Translucent instances in exactly the order they were added.
    pub fn translucents(&self) -> &[SceneTranslucent] {
        &self.translucents
    }

    pub fn light_groups(&self) -> &IndexMap<SsoString, SceneLightGroup> {
        &self.light_groups
    }
}
