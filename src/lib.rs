//! # lib3ds
//!
//! In-memory scene model for 3D Studio (.3ds) imports.
//!
//! This library holds what a .3ds importer produces and a renderer or
//! exporter consumes: materials, triangle meshes with smoothing groups and
//! material groups, named models and the scene that owns them. It does not
//! read or write files itself.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Strict tree ownership: scene → model → mesh → material group
//! - 16-bit index ceiling of the .3ds format surfaced as errors on growth
//! - Checked mesh construction through [`MeshBuilder`]
//! - Configurable integrity validation
//! - Bounding boxes, volumes and smoothing-group normals (`mesh-ops` feature)
//!
//! ## Example
//!
//! ```
//! use lib3ds::{Color, Material, MeshBuilder, Model, Scene, ValidationConfig};
//! use nalgebra::Vector3;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scene = Scene::new();
//! let mut red = Material::with_name("Red");
//! red.set_diffuse_color(Color::new(1.0, 0.0, 0.0));
//! scene.add_material(red);
//!
//! let mut builder = MeshBuilder::new();
//! builder.vertex(Vector3::new(0.0, 0.0, 0.0))?;
//! builder.vertex(Vector3::new(1.0, 0.0, 0.0))?;
//! builder.vertex(Vector3::new(0.0, 1.0, 0.0))?;
//! builder.smoothed_face(0, 1, 2, 1)?;
//! builder.material_group("Red", vec![0])?;
//!
//! let mut model = Model::with_name("Triangle");
//! model.add_tri_mesh(builder.build()?);
//! scene.add_model(model);
//!
//! scene.validate(&ValidationConfig::strict())?;
//! let group = scene.model(0).tri_mesh(0).mesh_material_group(0);
//! assert_eq!(group.resolve(&scene).map(|m| m.name()), Some("Red"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
#[cfg(feature = "mesh-ops")]
pub mod mesh_ops;
pub mod model;
pub mod validator;

pub use builder::MeshBuilder;
pub use config::ValidationConfig;
pub use error::{ElementKind, Error, Result};
pub use model::{
    Color, MAX_MESH_ELEMENTS, Material, MeshMaterialGroup, Model, Scene, TriangleMesh,
    lookup_material_by_name,
};
