//! Type declarations for the lumen material classification crate.
//!
//! This is reexported in the lumen crate proper and includes all the "surface"
//! api arguments: handles, meshes, material property bundles, lights and
//! instances. None of these types carry any classification logic.

use std::{
    fmt::Debug,
    hash::Hash,
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

/// Reexport of the glam version lumen is using.
pub use glam;
use glam::{Mat4, Vec3A};

mod attribute;
mod instance;
mod light;
mod material;

pub use attribute::*;
pub use instance::*;
pub use light::*;
pub use material::*;

/// Non-owning resource handle.
///
/// lumen never owns GPU resources, it only needs to know that a resource
/// exists and to tell two resources apart.
pub struct RawResourceHandle<T> {
    /// Underlying value of the handle.
    pub idx: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawResourceHandle<T> {
    /// Creates a new handle with the given value
    pub const fn new(idx: usize) -> Self {
        Self {
            idx,
            _phantom: PhantomData,
        }
    }
}

// Need Debug/Copy/Clone impls that don't require T: Trait.
impl<T> Debug for RawResourceHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResourceHandle").field("idx", &self.idx).finish()
    }
}

impl<T> Copy for RawResourceHandle<T> {}

impl<T> Clone for RawResourceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for RawResourceHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}

impl<T> Eq for RawResourceHandle<T> {}

impl<T> Hash for RawResourceHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.idx.hash(state);
    }
}

/// Tag type for differentiating Meshes on the type level.
#[doc(hidden)]
pub struct MeshTag;
/// Tag type for differentiating Texture2Ds on the type level.
#[doc(hidden)]
pub struct Texture2DTag;
/// Tag type for differentiating TextureCubes on the type level.
#[doc(hidden)]
pub struct TextureCubeTag;

/// Non-owning handle to a Mesh
pub type RawMeshHandle = RawResourceHandle<MeshTag>;
/// Non-owning handle to a Texture2D
pub type RawTexture2DHandle = RawResourceHandle<Texture2DTag>;
/// Non-owning handle to a TextureCube
pub type RawTextureCubeHandle = RawResourceHandle<TextureCubeTag>;

macro_rules! identity {
    ($(#[$outer:meta])* pub struct $name:ident, $allocator:ident) => {
        $(#[$outer])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        static $allocator: AtomicU64 = AtomicU64::new(1 << 32);

        impl $name {
            /// Wraps a caller chosen identity.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Allocates an identity that no other call to `fresh` returns.
            ///
            /// Fresh identities start at 2^32 so they stay clear of small
            /// caller chosen values.
            pub fn fresh() -> Self {
                Self($allocator.fetch_add(1, Ordering::Relaxed))
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

identity! {
    /// Identity of an instance. The scene builder tracks instances by identity,
    /// two instances with the same id are the same instance.
    pub struct InstanceId, INSTANCE_ID_ALLOCATOR
}

identity! {
    /// Identity of a light. Batches are keyed by light identity.
    pub struct LightId, LIGHT_ID_ALLOCATOR
}

/// Describes how the camera should look at the scene.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Camera {
    pub projection: CameraProjection,
    /// View matrix
    pub view: Mat4,
}

/// Describes how the world should be projected into the camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CameraProjection {
    Orthographic {
        /// Size assumes the location is at the center of the camera area.
        size: Vec3A,
    },
    Perspective {
        /// Vertical field of view in degrees.
        vfov: f32,
        /// Near plane distance. All projection uses a infinite far plane.
        near: f32,
    },
    Raw(Mat4),
}

impl Default for CameraProjection {
    fn default() -> Self {
        Self::Perspective { vfov: 60.0, near: 0.1 }
    }
}
