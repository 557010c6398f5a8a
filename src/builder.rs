//! Checked construction of triangle meshes
//!
//! [`TriangleMesh`] stores whatever it is given. [`MeshBuilder`] is the
//! importer-facing way to fill one: it rejects face indices that point past
//! the current vertex list, keeps smoothing group masks from outrunning the
//! faces, and validates the finished mesh.

use log::debug;
use nalgebra::{Matrix4, Vector2, Vector3};

use crate::config::ValidationConfig;
use crate::error::{Error, Result};
use crate::model::{MeshMaterialGroup, TriangleMesh};
use crate::validator;

/// Builder for a [`TriangleMesh`]
///
/// # Example
///
/// ```
/// use lib3ds::MeshBuilder;
/// use nalgebra::Vector3;
///
/// # fn main() -> lib3ds::Result<()> {
/// let mut builder = MeshBuilder::new();
/// let a = builder.vertex(Vector3::new(0.0, 0.0, 0.0))?;
/// let b = builder.vertex(Vector3::new(1.0, 0.0, 0.0))?;
/// let c = builder.vertex(Vector3::new(0.0, 1.0, 0.0))?;
/// builder.smoothed_face(a, b, c, 1)?;
/// builder.material_group("Red", vec![0])?;
///
/// let mesh = builder.build()?;
/// assert_eq!(mesh.face_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    mesh: TriangleMesh,
    config: ValidationConfig,
}

impl MeshBuilder {
    /// Create a builder for an empty mesh with the lenient validation config
    pub fn new() -> Self {
        Self {
            mesh: TriangleMesh::new(),
            config: ValidationConfig::new(),
        }
    }

    /// Create a builder with pre-allocated capacity
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            mesh: TriangleMesh::with_capacity(vertices, faces),
            config: ValidationConfig::new(),
        }
    }

    /// Use a specific validation configuration for [`build`](Self::build)
    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a vertex and return its index
    pub fn vertex(&mut self, point: Vector3<f32>) -> Result<u16> {
        self.mesh.add_vertex(point)
    }

    /// Append a texture coordinate and return its index
    pub fn tex_coord(&mut self, uv: Vector2<f32>) -> Result<u16> {
        self.mesh.add_tex_coord(uv)
    }

    /// Append a face without a smoothing mask
    ///
    /// Masks for such faces can be supplied later with
    /// [`smoothing_groups`](Self::smoothing_groups).
    pub fn face(&mut self, v0: u16, v1: u16, v2: u16) -> Result<u16> {
        self.check_vertices(v0, v1, v2)?;
        self.mesh.add_face(v0, v1, v2)
    }

    /// Append a face together with its smoothing mask
    ///
    /// Rejected while earlier faces added with [`face`](Self::face) still lack
    /// their masks.
    pub fn smoothed_face(&mut self, v0: u16, v1: u16, v2: u16, mask: u32) -> Result<u16> {
        self.check_vertices(v0, v1, v2)?;
        self.mesh.add_smoothed_face(v0, v1, v2, mask)
    }

    /// Append smoothing masks for faces already added
    ///
    /// Nothing is appended if the masks would outnumber the faces.
    pub fn smoothing_groups<I>(&mut self, masks: I) -> Result<()>
    where
        I: IntoIterator<Item = u32>,
    {
        let masks: Vec<u32> = masks.into_iter().collect();
        let available = (self.mesh.face_count() as usize)
            .saturating_sub(self.mesh.smoothing_group_count() as usize);
        if masks.len() > available {
            return Err(Error::InvalidMesh(format!(
                "{} smoothing group mask(s) supplied but only {} face(s) lack one.",
                masks.len(),
                available
            )));
        }
        for mask in masks {
            self.mesh.add_smoothing_groups(mask)?;
        }
        Ok(())
    }

    /// Attach a material group covering existing faces
    pub fn material_group(&mut self, material_name: impl Into<String>, faces: Vec<u16>) -> Result<()> {
        let material_name = material_name.into();
        let num_faces = self.mesh.face_count();
        if let Some(&bad) = faces.iter().find(|&&f| f >= num_faces) {
            return Err(Error::InvalidMesh(format!(
                "Material group '{}' references face {} but only {} face(s) exist.",
                material_name, bad, num_faces
            )));
        }
        self.mesh
            .add_mesh_material_group(MeshMaterialGroup::with_faces(material_name, faces));
        Ok(())
    }

    /// Replace the mesh transform
    pub fn matrix(&mut self, matrix: Matrix4<f32>) -> &mut Self {
        self.mesh.set_matrix(matrix);
        self
    }

    /// Number of vertices added so far
    pub fn vertex_count(&self) -> u16 {
        self.mesh.vertex_count()
    }

    /// Number of faces added so far
    pub fn face_count(&self) -> u16 {
        self.mesh.face_count()
    }

    /// Validate and return the finished mesh
    pub fn build(self) -> Result<TriangleMesh> {
        validator::validate_mesh(&self.mesh, &self.config)?;
        debug!(
            "built mesh: {} vertices, {} tex coords, {} faces, {} material group(s)",
            self.mesh.vertex_count(),
            self.mesh.tex_coord_count(),
            self.mesh.face_count(),
            self.mesh.mesh_material_group_count()
        );
        Ok(self.mesh)
    }

    fn check_vertices(&self, v0: u16, v1: u16, v2: u16) -> Result<()> {
        let num_vertices = self.mesh.vertex_count();
        if let Some(bad) = [v0, v1, v2].into_iter().find(|&v| v >= num_vertices) {
            return Err(Error::InvalidMesh(format!(
                "Face ({}, {}, {}) references vertex {} but only {} vertices exist.",
                v0, v1, v2, bad, num_vertices
            )));
        }
        Ok(())
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}
