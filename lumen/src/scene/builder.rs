use indexmap::IndexMap;
use lumen_types::{Camera, InstanceId, InstanceOpaque, InstanceTranslucentLit, InstanceTranslucentUnlit, Light, LightId};
use thiserror::Error;

use super::{LightInstances, Scene, SceneLightGroup, SceneOpaques, SceneShadows, SceneTranslucent};
use crate::util::typedefs::{FastHashMap, FastHashSet, SsoString};

/// An instance was registered in a way that contradicts an earlier registration.
///
/// These are programming errors in the caller. The plain `add_*` functions of
/// [`SceneBuilder`] panic with this error's message, the `try_add_*` functions
/// return it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneBuilderError {
    #[error("{0} is already registered as lit and cannot be unlit")]
    AlreadyLit(InstanceId),
    #[error("{0} is already registered as unlit and cannot be lit")]
    AlreadyUnlit(InstanceId),
    #[error("{0} is already registered as opaque and cannot be translucent")]
    AlreadyOpaque(InstanceId),
    #[error("{0} is already registered as translucent and cannot be opaque")]
    AlreadyTranslucent(InstanceId),
    #[error("{id} already belongs to light group {group:?}")]
    AlreadyGrouped { id: InstanceId, group: SsoString },
    #[error("{0} is already lit by the forward pass and cannot join a light group")]
    AlreadyForwardLit(InstanceId),
}

#[track_caller]
fn panic_on_error(result: Result<(), SceneBuilderError>) {
    if let Err(err) = result {
        panic!("{}", err);
    }
}

/// Single use accumulator for a [`Scene`].
///
/// Registering the same instance id twice in the same role is allowed and the
/// first registration wins. The same goes for lights. Registering an instance
/// in two incompatible roles is an error, detected at the offending call.
pub struct SceneBuilder {
    camera: Camera,

    lit: FastHashSet<InstanceId>,
    unlit: FastHashSet<InstanceId>,
    opaque: FastHashSet<InstanceId>,
    translucent: FastHashSet<InstanceId>,
    grouped: FastHashMap<InstanceId, SsoString>,

    lights: IndexMap<LightId, Light>,
    shadow_lights: IndexMap<LightId, Light>,
    opaques: SceneOpaques,
    shadows: SceneShadows,
    translucents: Vec<SceneTranslucent>,
    light_groups: IndexMap<SsoString, SceneLightGroup>,
}

impl SceneBuilder {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lit: FastHashSet::default(),
            unlit: FastHashSet::default(),
            opaque: FastHashSet::default(),
            translucent: FastHashSet::default(),
            grouped: FastHashMap::default(),
            lights: IndexMap::new(),
            shadow_lights: IndexMap::new(),
            opaques: SceneOpaques::default(),
            shadows: SceneShadows::default(),
            translucents: Vec::new(),
            light_groups: IndexMap::new(),
        }
    }

    fn check_lit(&self, id: InstanceId) -> Result<(), SceneBuilderError> {
        if self.unlit.contains(&id) {
            return Err(SceneBuilderError::AlreadyUnlit(id));
        }
        Ok(())
    }

    fn check_unlit(&self, id: InstanceId) -> Result<(), SceneBuilderError> {
        if self.lit.contains(&id) {
            return Err(SceneBuilderError::AlreadyLit(id));
        }
        Ok(())
    }

    fn check_opaque(&self, id: InstanceId) -> Result<(), SceneBuilderError> {
        if self.translucent.contains(&id) {
            return Err(SceneBuilderError::AlreadyTranslucent(id));
        }
        Ok(())
    }

    fn check_translucent(&self, id: InstanceId) -> Result<(), SceneBuilderError> {
        if self.opaque.contains(&id) {
            return Err(SceneBuilderError::AlreadyOpaque(id));
        }
        Ok(())
    }

    fn check_forward_lit(&self, id: InstanceId) -> Result<(), SceneBuilderError> {
        if let Some(group) = self.grouped.get(&id) {
            return Err(SceneBuilderError::AlreadyGrouped {
                id,
                group: group.clone(),
            });
        }
        Ok(())
    }

    fn check_grouped(&self, group: &str, id: InstanceId) -> Result<(), SceneBuilderError> {
        match self.grouped.get(&id) {
            Some(existing) if existing.as_str() != group => Err(SceneBuilderError::AlreadyGrouped {
                id,
                group: existing.clone(),
            }),
            Some(_) => Ok(()),
            None if self.lit.contains(&id) => Err(SceneBuilderError::AlreadyForwardLit(id)),
            None => Ok(()),
        }
    }

    fn register_light(&mut self, light: Light) {
        self.lights.entry(light.id).or_insert(light);
        if light.has_shadow() {
            self.shadow_lights.entry(light.id).or_insert(light);
        }
    }

    fn insert_visible_lit(&mut self, light: Light, instance: InstanceOpaque) {
        let id = instance.id();
        self.register_light(light);
        self.lit.insert(id);
        self.opaque.insert(id);
        self.opaques
            .lit
            .entry(light.id)
            .or_insert_with(|| LightInstances::new(light))
            .instances
            .entry(id)
            .or_insert(instance);
        self.opaques.visible.entry(id).or_insert(instance);
    }

    fn insert_caster(&mut self, light: Light, instance: InstanceOpaque) {
        if !light.has_shadow() {
            log::trace!("Light {} has no shadow, not registering caster {}", light.id, instance.id());
            return;
        }
        let id = instance.id();
        self.register_light(light);
        self.opaque.insert(id);
        self.shadows
            .casters
            .entry(light.id)
            .or_insert_with(|| LightInstances::new(light))
            .instances
            .entry(id)
            .or_insert(instance);
        log::trace!("Registered {} as shadow caster for {}", id, light.id);
    }

    /// Adds an opaque instance drawn without lights.
    #[track_caller]
    pub fn add_opaque_unlit(&mut self, instance: InstanceOpaque) {
        panic_on_error(self.try_add_opaque_unlit(instance))
    }

    pub fn try_add_opaque_unlit(&mut self, instance: InstanceOpaque) -> Result<(), SceneBuilderError> {
        let id = instance.id();
        self.check_unlit(id)?;
        self.check_opaque(id)?;

        self.unlit.insert(id);
        self.opaque.insert(id);
        self.opaques.unlit.entry(id).or_insert(instance);
        self.opaques.visible.entry(id).or_insert(instance);
        log::trace!("Registered {} as opaque unlit", id);
        Ok(())
    }

    /// Adds an opaque instance lit by `light`. The instance does not cast a
    /// shadow for `light`, even if the light has one.
    #[track_caller]
    pub fn add_opaque_lit_visible_without_shadow(&mut self, light: Light, instance: InstanceOpaque) {
        panic_on_error(self.try_add_opaque_lit_visible_without_shadow(light, instance))
    }

    pub fn try_add_opaque_lit_visible_without_shadow(
        &mut self,
        light: Light,
        instance: InstanceOpaque,
    ) -> Result<(), SceneBuilderError> {
        let id = instance.id();
        self.check_lit(id)?;
        self.check_opaque(id)?;
        self.check_forward_lit(id)?;

        self.insert_visible_lit(light, instance);
        log::trace!("Registered {} as opaque lit by {}", id, light.id);
        Ok(())
    }

    /// Adds an opaque instance lit by `light`, which also casts a shadow for
    /// `light` if the light has a shadow.
    #[track_caller]
    pub fn add_opaque_lit_visible_with_shadow(&mut self, light: Light, instance: InstanceOpaque) {
        panic_on_error(self.try_add_opaque_lit_visible_with_shadow(light, instance))
    }

    pub fn try_add_opaque_lit_visible_with_shadow(
        &mut self,
        light: Light,
        instance: InstanceOpaque,
    ) -> Result<(), SceneBuilderError> {
        let id = instance.id();
        self.check_lit(id)?;
        self.check_opaque(id)?;
        self.check_forward_lit(id)?;

        self.insert_visible_lit(light, instance);
        self.insert_caster(light, instance);
        log::trace!("Registered {} as opaque lit by {}", id, light.id);
        Ok(())
    }

    /// Adds an instance which is not drawn but casts a shadow for `light`.
    ///
    /// Does nothing if `light` has no shadow.
    #[track_caller]
    pub fn add_invisible_with_shadow(&mut self, light: Light, instance: InstanceOpaque) {
        panic_on_error(self.try_add_invisible_with_shadow(light, instance))
    }

    pub fn try_add_invisible_with_shadow(
        &mut self,
        light: Light,
        instance: InstanceOpaque,
    ) -> Result<(), SceneBuilderError> {
        self.check_opaque(instance.id())?;

        self.insert_caster(light, instance);
        Ok(())
    }

    /// Appends a translucent instance drawn without lights.
    #[track_caller]
    pub fn add_translucent_unlit(&mut self, instance: InstanceTranslucentUnlit) {
        panic_on_error(self.try_add_translucent_unlit(instance))
    }

    pub fn try_add_translucent_unlit(&mut self, instance: InstanceTranslucentUnlit) -> Result<(), SceneBuilderError> {
        let id = instance.id();
        self.check_unlit(id)?;
        self.check_translucent(id)?;

        self.unlit.insert(id);
        self.translucent.insert(id);
        self.translucents.push(SceneTranslucent::Unlit(instance));
        log::trace!("Appended {} as translucent unlit", id);
        Ok(())
    }

    /// Appends a translucent instance drawn once per light in `lights`.
    #[track_caller]
    pub fn add_translucent_lit(&mut self, instance: InstanceTranslucentLit, lights: &[Light]) {
        panic_on_error(self.try_add_translucent_lit(instance, lights))
    }

    pub fn try_add_translucent_lit(
        &mut self,
        instance: InstanceTranslucentLit,
        lights: &[Light],
    ) -> Result<(), SceneBuilderError> {
        let id = instance.id();
        self.check_lit(id)?;
        self.check_translucent(id)?;

        for &light in lights {
            self.register_light(light);
        }
        self.lit.insert(id);
        self.translucent.insert(id);
        self.translucents.push(SceneTranslucent::Lit {
            instance,
            lights: lights.iter().copied().collect(),
        });
        log::trace!("Appended {} as translucent lit by {} lights", id, lights.len());
        Ok(())
    }

    /// Adds `light` to the deferred light group `group`, creating the group if needed.
    pub fn add_light_group_light(&mut self, group: &str, light: Light) {
        self.register_light(light);
        self.light_groups
            .entry(SsoString::from(group))
            .or_default()
            .lights
            .entry(light.id)
            .or_insert(light);
        log::trace!("Added {} to light group {:?}", light.id, group);
    }

    /// Adds an opaque instance to the deferred light group `group`, creating the
    /// group if needed. The instance counts as lit, and is drawn by the group's
    /// deferred pass rather than the forward passes.
    #[track_caller]
    pub fn add_light_group_instance(&mut self, group: &str, instance: InstanceOpaque) {
        panic_on_error(self.try_add_light_group_instance(group, instance))
    }

    pub fn try_add_light_group_instance(
        &mut self,
        group: &str,
        instance: InstanceOpaque,
    ) -> Result<(), SceneBuilderError> {
        let id = instance.id();
        self.check_lit(id)?;
        self.check_opaque(id)?;
        self.check_grouped(group, id)?;

        let group = SsoString::from(group);
        self.lit.insert(id);
        self.opaque.insert(id);
        self.grouped.insert(id, group.clone());
        log::trace!("Added {} to light group {:?}", id, group);
        self.light_groups
            .entry(group)
            .or_default()
            .instances
            .entry(id)
            .or_insert(instance);
        Ok(())
    }

    pub fn create(self) -> Scene {
        profiling::scope!("SceneBuilder::create");

        log::debug!(
            "Created scene: {} lights ({} with shadows), {} visible opaque, {} shadow lists, {} translucent, {} light groups",
            self.lights.len(),
            self.shadow_lights.len(),
            self.opaques.visible.len(),
            self.shadows.casters.len(),
            self.translucents.len(),
            self.light_groups.len(),
        );

        Scene {
            camera: self.camera,
            lights: self.lights,
            shadow_lights: self.shadow_lights,
            opaques: self.opaques,
            shadows: self.shadows,
            translucents: self.translucents,
            light_groups: self.light_groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use lumen_types::{
        glam::{Mat4, Quat, Vec3},
        AlphaProperties, Instance, MaterialOpaqueRegular, MaterialTranslucentRegular, Mesh, ProjectiveLight,
        RawMeshHandle, RawTexture2DHandle, Shadow, ShadowMap, SurfaceProperties, VertexAttributes,
    };

    use super::*;

    fn mesh() -> Mesh {
        Mesh::new(RawMeshHandle::new(0), VertexAttributes::NORMAL)
    }

    fn opaque(id: u64) -> InstanceOpaque {
        Instance::new(InstanceId::new(id), mesh(), MaterialOpaqueRegular::default()).into()
    }

    fn translucent(id: u64) -> Instance<MaterialTranslucentRegular> {
        Instance::new(
            InstanceId::new(id),
            mesh(),
            MaterialTranslucentRegular::new(SurfaceProperties::default(), AlphaProperties::constant(0.5)),
        )
    }

    fn sun() -> Light {
        Light::directional(LightId::new(1), Vec3::ONE, 1.0, Vec3::NEG_Y)
    }

    fn spot() -> Light {
        Light::projective(
            LightId::new(2),
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

    #[test]
    fn lit_then_unlit_fails() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_opaque_lit_visible_without_shadow(sun(), opaque(1));
        assert_eq!(
            builder.try_add_opaque_unlit(opaque(1)),
            Err(SceneBuilderError::AlreadyLit(InstanceId::new(1)))
        );
        assert_eq!(
            builder.try_add_translucent_unlit(translucent(1).into()),
            Err(SceneBuilderError::AlreadyLit(InstanceId::new(1)))
        );
    }

    #[test]
    fn unlit_then_lit_fails() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_opaque_unlit(opaque(1));
        assert_eq!(
            builder.try_add_opaque_lit_visible_with_shadow(spot(), opaque(1)),
            Err(SceneBuilderError::AlreadyUnlit(InstanceId::new(1)))
        );
        assert_eq!(
            builder.try_add_light_group_instance("hall", opaque(1)),
            Err(SceneBuilderError::AlreadyUnlit(InstanceId::new(1)))
        );
    }

    #[test]
    fn failed_calls_leave_builder_untouched() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_opaque_unlit(opaque(1));
        let _ = builder.try_add_opaque_lit_visible_with_shadow(spot(), opaque(1));
        let scene = builder.create();
        assert!(scene.lights().is_empty());
        assert!(scene.opaques().lit.is_empty());
        assert!(scene.shadows().casters.is_empty());
    }

    #[test]
    fn opaque_and_translucent_are_exclusive() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_translucent_lit(translucent(1).into(), &[sun()]);
        assert_eq!(
            builder.try_add_opaque_lit_visible_without_shadow(sun(), opaque(1)),
            Err(SceneBuilderError::AlreadyTranslucent(InstanceId::new(1)))
        );
        assert_eq!(
            builder.try_add_invisible_with_shadow(spot(), opaque(1)),
            Err(SceneBuilderError::AlreadyTranslucent(InstanceId::new(1)))
        );

        builder.add_invisible_with_shadow(spot(), opaque(2));
        assert_eq!(
            builder.try_add_translucent_lit(translucent(2).into(), &[]),
            Err(SceneBuilderError::AlreadyOpaque(InstanceId::new(2)))
        );
    }

    #[test]
    fn caster_without_shadow_is_ignored() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_invisible_with_shadow(sun(), opaque(1));
        builder.add_translucent_unlit(translucent(1).into());
        let scene = builder.create();
        assert!(scene.shadows().casters.is_empty());
        assert!(scene.lights().is_empty());
        assert_eq!(scene.translucents().len(), 1);
    }

    #[test]
    fn shadow_lights_are_tracked() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_opaque_lit_visible_without_shadow(spot(), opaque(1));
        builder.add_opaque_lit_visible_without_shadow(sun(), opaque(1));
        let scene = builder.create();
        assert_eq!(scene.lights().keys().copied().collect::<Vec<_>>(), [LightId::new(2), LightId::new(1)]);
        assert_eq!(scene.shadow_lights().keys().copied().collect::<Vec<_>>(), [LightId::new(2)]);
        assert!(scene.shadows().casters.is_empty());
        assert_eq!(scene.opaques().visible.len(), 1);
        assert_eq!(scene.opaques().lit.len(), 2);
    }

    #[test]
    fn light_groups() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_light_group_light("hall", sun());
        builder.add_light_group_instance("hall", opaque(1));
        builder.add_light_group_instance("hall", opaque(1));
        assert_eq!(
            builder.try_add_light_group_instance("cellar", opaque(1)),
            Err(SceneBuilderError::AlreadyGrouped {
                id: InstanceId::new(1),
                group: SsoString::from("hall"),
            })
        );
        assert_eq!(
            builder.try_add_opaque_lit_visible_without_shadow(sun(), opaque(1)),
            Err(SceneBuilderError::AlreadyGrouped {
                id: InstanceId::new(1),
                group: SsoString::from("hall"),
            })
        );

        builder.add_opaque_lit_visible_without_shadow(sun(), opaque(2));
        assert_eq!(
            builder.try_add_light_group_instance("hall", opaque(2)),
            Err(SceneBuilderError::AlreadyForwardLit(InstanceId::new(2)))
        );

        let scene = builder.create();
        let hall = &scene.light_groups()["hall"];
        assert_eq!(hall.instances.len(), 1);
        assert_eq!(hall.lights.len(), 1);
        assert!(!scene.opaques().visible.contains_key(&InstanceId::new(1)));
    }

    #[test]
    #[should_panic(expected = "already registered as unlit")]
    fn plain_form_panics() {
        let mut builder = SceneBuilder::new(Camera::default());
        builder.add_translucent_unlit(translucent(1).into());
        builder.add_translucent_lit(translucent(1).into(), &[sun()]);
    }

    #[test]
    fn scene_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scene>();
    }
}
