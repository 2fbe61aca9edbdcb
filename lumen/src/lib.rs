//! Material variant classification and scene batching.
//!
//! lumen sits between an engine's scene description and a renderer. It does
//! three things:
//!
//! - [`label`]: derive, for every instance, a label naming exactly which
//!   rendering features its material and mesh support. Labels are batching
//!   keys and carry a stable code string usable as a shader permutation name.
//! - [`scene`]: collect instances and lights for one frame into an immutable
//!   [`Scene`](scene::Scene), enforcing that an instance is never both lit and
//!   unlit, nor both opaque and translucent.
//! - [`batch`]: group the scene's instances by label for each render pass.
//!
//! lumen does not touch the GPU. Meshes and textures are referenced through
//! the raw handles in [`types`].
//!
//! # Render order
//!
//! The batches are intended to be drawn in the order: shadow passes, depth
//! pass, opaque lit passes, opaque unlit pass, deferred light groups, then the
//! translucent pass in the scene's order.
//!
//! ```
//! use lumen::{batch, scene::SceneBuilder, types::*, Capabilities};
//!
//! let mesh = Mesh::new(RawMeshHandle::new(0), VertexAttributes::NORMAL);
//! let instance = Instance::new(InstanceId::fresh(), mesh, MaterialOpaqueRegular::default());
//!
//! let mut builder = SceneBuilder::new(Camera::default());
//! builder.add_opaque_unlit(instance.into());
//! let scene = builder.create();
//!
//! let forward = batch::batch_forward(&scene, &Capabilities::default());
//! assert_eq!(forward.unlit.len(), 1);
//! ```

pub use lumen_types as types;

pub mod batch;
mod capabilities;
pub mod label;
pub mod scene;
pub mod util;

pub use capabilities::*;
pub use label::{Label, MaterialValidation, MaterialValidationError};
pub use scene::{Scene, SceneBuilder, SceneBuilderError};
