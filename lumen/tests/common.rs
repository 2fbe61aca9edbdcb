//! Shared fixtures for the integration tests.

use glam::{Mat4, Quat, Vec3};
use lumen::types::{
    AlbedoProperties, AlphaProperties, Instance, InstanceId, InstanceOpaque, Light, LightId, MaterialOpaqueRegular,
    MaterialTranslucentRegular, Mesh, ProjectiveLight, RawMeshHandle, RawTexture2DHandle, Shadow, ShadowMap,
    SpecularProperties, SurfaceProperties, VertexAttributes,
};

pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

pub fn textured_mesh(idx: usize) -> Mesh {
    Mesh::new(
        RawMeshHandle::new(idx),
        VertexAttributes::NORMAL | VertexAttributes::TEXTURE_COORDINATES,
    )
}

pub fn textured_surface(texture: usize) -> SurfaceProperties {
    SurfaceProperties::default().with_albedo(AlbedoProperties::textured(RawTexture2DHandle::new(texture)))
}

pub fn shiny_surface() -> SurfaceProperties {
    SurfaceProperties::default().with_specular(SpecularProperties::constant(Vec3::ONE, 32.0))
}

pub fn opaque(id: u64, surface: SurfaceProperties) -> InstanceOpaque {
    Instance::new(InstanceId::new(id), textured_mesh(id as usize), MaterialOpaqueRegular::new(surface)).into()
}

pub fn translucent(id: u64) -> Instance<MaterialTranslucentRegular> {
    Instance::new(
        InstanceId::new(id),
        textured_mesh(id as usize),
        MaterialTranslucentRegular::new(SurfaceProperties::default(), AlphaProperties::constant(0.5)),
    )
    .with_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, -(id as f32))))
}

pub fn sun(id: u64) -> Light {
    Light::directional(LightId::new(id), Vec3::ONE, 1.0, Vec3::new(0.0, -1.0, -1.0).normalize())
}

/// Projective light casting basic shadows.
pub fn spot(id: u64) -> Light {
    Light::projective(
        LightId::new(id),
        Vec3::ONE,
        10.0,
        ProjectiveLight {
            position: Vec3::new(0.0, 10.0, 0.0),
            orientation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
            projection: Mat4::perspective_rh(1.0, 1.0, 0.1, 100.0),
            texture: RawTexture2DHandle::new(100),
            shadow: Some(Shadow::Basic(ShadowMap::default())),
        },
    )
}
