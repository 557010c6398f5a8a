//! Data structures representing an imported .3ds scene

mod color;
mod material;
mod mesh;
mod scene;

pub use color::Color;
pub use material::Material;
pub use mesh::{MAX_MESH_ELEMENTS, MeshMaterialGroup, TriangleMesh};
pub use scene::{Model, Scene, lookup_material_by_name};
