//! Validation of scene integrity
//!
//! The scene model does not check anything on its accessors. This module
//! is the consumer-side check that a built scene honours its invariants:
//! - Face vertex indices reference existing vertices
//! - Smoothing group masks line up one per face
//! - Material group face indices reference existing faces
//! - Texture coordinate counts, when the configuration asks for it
//! - Transform matrices are finite
//! - Material names resolve and are unique, when the configuration asks for it

mod core;
mod material;

pub use self::core::{
    validate_face_indices, validate_material_group_faces, validate_mesh_with_context,
    validate_smoothing_groups, validate_tex_coords, validate_transform_matrix,
};
pub use material::{validate_duplicate_material_names, validate_material_references};

use crate::config::ValidationConfig;
use crate::error::Result;
use crate::model::{Model, Scene, TriangleMesh};

/// Validate a single mesh
pub fn validate_mesh(mesh: &TriangleMesh, config: &ValidationConfig) -> Result<()> {
    validate_mesh_with_context("", mesh, config)
}

/// Validate every mesh of a model
///
/// Errors name the model and the position of the offending mesh.
pub fn validate_model(model: &Model, config: &ValidationConfig) -> Result<()> {
    for (mesh_idx, mesh) in model.tri_meshes().iter().enumerate() {
        let context = format!("Model '{}' mesh {}", model.name(), mesh_idx);
        validate_mesh_with_context(&context, mesh, config)?;
    }
    Ok(())
}

/// Validate a complete scene
///
/// Checks material names first, then every model, then material references.
pub fn validate_scene(scene: &Scene, config: &ValidationConfig) -> Result<()> {
    validate_duplicate_material_names(scene, config)?;
    for model in scene.models() {
        validate_model(model, config)?;
    }
    validate_material_references(scene, config)?;
    Ok(())
}
