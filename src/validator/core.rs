//! Mesh geometry validation

use log::warn;

use crate::config::ValidationConfig;
use crate::error::{Error, Result};
use crate::model::TriangleMesh;

/// Validates that every face references existing vertices
pub fn validate_face_indices(context: &str, mesh: &TriangleMesh) -> Result<()> {
    let num_vertices = mesh.vertex_count();

    for (face_idx, face) in mesh.faces().enumerate() {
        for (corner, &v) in face.iter().enumerate() {
            if v >= num_vertices {
                return Err(Error::invalid_mesh_context(
                    context,
                    &format!(
                        "Face {} corner {} references vertex {} but the mesh has {} vertices. \
                         Face indices must be less than the vertex count.",
                        face_idx, corner, v, num_vertices
                    ),
                ));
            }
        }
    }

    Ok(())
}

/// Validates that smoothing group masks line up with faces
///
/// A mesh with no smoothing data at all is accepted unless the configuration
/// requires it.
pub fn validate_smoothing_groups(
    context: &str,
    mesh: &TriangleMesh,
    config: &ValidationConfig,
) -> Result<()> {
    let faces = mesh.face_count();
    let masks = mesh.smoothing_group_count();

    if masks == 0 && faces > 0 {
        if config.require_smoothing_groups() {
            return Err(Error::invalid_mesh_context(
                context,
                &format!("Mesh has {} face(s) but no smoothing groups.", faces),
            ));
        }
        return Ok(());
    }

    if masks != faces {
        return Err(Error::invalid_mesh_context(
            context,
            &format!(
                "Mesh has {} face(s) but {} smoothing group mask(s). \
                 Exactly one mask per face is required.",
                faces, masks
            ),
        ));
    }

    Ok(())
}

/// Validates that material groups only reference existing faces
pub fn validate_material_group_faces(context: &str, mesh: &TriangleMesh) -> Result<()> {
    let num_faces = mesh.face_count();

    for (group_idx, group) in mesh.mesh_material_groups().iter().enumerate() {
        if let Some(&bad) = group.faces.iter().find(|&&f| f >= num_faces) {
            return Err(Error::invalid_mesh_context(
                context,
                &format!(
                    "Material group {} ('{}') references face {} but the mesh has {} faces.",
                    group_idx, group.material_name, bad, num_faces
                ),
            ));
        }
    }

    Ok(())
}

/// Validates texture coordinate count against vertex count
pub fn validate_tex_coords(
    context: &str,
    mesh: &TriangleMesh,
    config: &ValidationConfig,
) -> Result<()> {
    let uvs = mesh.tex_coord_count();
    let vertices = mesh.vertex_count();

    if uvs == 0 || uvs == vertices {
        return Ok(());
    }

    if config.require_per_vertex_tex_coords() {
        return Err(Error::invalid_mesh_context(
            context,
            &format!(
                "Mesh has {} texture coordinate(s) for {} vertices.",
                uvs, vertices
            ),
        ));
    }

    warn!(
        "{}: {} texture coordinate(s) for {} vertices",
        display_context(context),
        uvs,
        vertices
    );
    Ok(())
}

/// Validates that the transform matrix has only finite entries
pub fn validate_transform_matrix(context: &str, mesh: &TriangleMesh) -> Result<()> {
    let matrix = mesh.matrix();
    if let Some((idx, value)) = matrix.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::invalid_mesh_context(
            context,
            &format!(
                "Transform matrix entry {} (row {}, column {}) is {}.",
                idx,
                idx % 4,
                idx / 4,
                value
            ),
        ));
    }
    Ok(())
}

/// Runs every mesh-level check
pub fn validate_mesh_with_context(
    context: &str,
    mesh: &TriangleMesh,
    config: &ValidationConfig,
) -> Result<()> {
    validate_face_indices(context, mesh)?;
    validate_smoothing_groups(context, mesh, config)?;
    validate_material_group_faces(context, mesh)?;
    validate_tex_coords(context, mesh, config)?;
    validate_transform_matrix(context, mesh)?;
    Ok(())
}

fn display_context(context: &str) -> &str {
    if context.is_empty() { "mesh" } else { context }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MeshMaterialGroup;
    use nalgebra::{Matrix4, Vector2, Vector3};

    fn triangle() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Vector3::new(0.0, 1.0, 0.0)).unwrap();
        mesh.add_smoothed_face(0, 1, 2, 1).unwrap();
        mesh
    }

    #[test]
    fn test_valid_triangle_passes() {
        let mesh = triangle();
        assert!(validate_mesh_with_context("", &mesh, &ValidationConfig::strict()).is_ok());
    }

    #[test]
    fn test_face_index_out_of_range() {
        let mut mesh = triangle();
        mesh.add_smoothed_face(0, 1, 3, 0).unwrap();
        let err = validate_face_indices("mesh 0", &mesh).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("mesh 0"));
        assert!(msg.contains("Face 1 corner 2 references vertex 3"));
    }

    #[test]
    fn test_smoothing_mismatch() {
        let mut mesh = triangle();
        mesh.add_face(2, 1, 0).unwrap();
        let err = validate_smoothing_groups("", &mesh, &ValidationConfig::new()).unwrap_err();
        assert!(err.to_string().contains("2 face(s) but 1 smoothing group mask(s)"));
    }

    #[test]
    fn test_missing_smoothing_depends_on_config() {
        let mut mesh = TriangleMesh::new();
        for _ in 0..3 {
            mesh.add_vertex(Vector3::zeros()).unwrap();
        }
        mesh.add_face(0, 1, 2).unwrap();
        assert!(validate_smoothing_groups("", &mesh, &ValidationConfig::new()).is_ok());
        assert!(validate_smoothing_groups("", &mesh, &ValidationConfig::strict()).is_err());
    }

    #[test]
    fn test_material_group_face_out_of_range() {
        let mut mesh = triangle();
        mesh.add_mesh_material_group(MeshMaterialGroup::with_faces("Red", vec![0, 1]));
        let err = validate_material_group_faces("", &mesh).unwrap_err();
        assert!(err.to_string().contains("references face 1"));
    }

    #[test]
    fn test_tex_coord_mismatch_depends_on_config() {
        let mut mesh = triangle();
        mesh.add_tex_coord(Vector2::new(0.0, 0.0)).unwrap();
        assert!(validate_tex_coords("", &mesh, &ValidationConfig::new()).is_ok());
        assert!(validate_tex_coords("", &mesh, &ValidationConfig::strict()).is_err());

        mesh.add_tex_coord(Vector2::new(1.0, 0.0)).unwrap();
        mesh.add_tex_coord(Vector2::new(0.0, 1.0)).unwrap();
        assert!(validate_tex_coords("", &mesh, &ValidationConfig::strict()).is_ok());
    }

    #[test]
    fn test_non_finite_matrix() {
        let mut mesh = triangle();
        let mut m = Matrix4::identity();
        m[(1, 3)] = f32::NAN;
        mesh.set_matrix(m);
        let err = validate_transform_matrix("", &mesh).unwrap_err();
        assert!(err.to_string().contains("row 1, column 3"));
    }
}
