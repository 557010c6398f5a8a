//! Triangle meshes and their material groups

use log::warn;
use nalgebra::{Matrix4, Vector2, Vector3};

use super::material::Material;
use super::scene::Scene;
use crate::error::{ElementKind, Error, Result};

/// Maximum number of elements in any per-mesh sequence
///
/// The .3ds format addresses vertices and faces with 16-bit indices, so a mesh
/// holds at most this many vertices, texture coordinates, faces and smoothing
/// group masks.
pub const MAX_MESH_ELEMENTS: usize = u16::MAX as usize;

/// A subset of a mesh's faces that share one material
///
/// The material is referenced by name and resolved against the owning scene's
/// material list when needed. The name may not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeshMaterialGroup {
    /// Name of the material in the owning scene
    pub material_name: String,
    /// Indices of the faces using this material
    pub faces: Vec<u16>,
}

impl MeshMaterialGroup {
    /// Create a new empty material group
    pub fn new(material_name: impl Into<String>) -> Self {
        Self {
            material_name: material_name.into(),
            faces: Vec::new(),
        }
    }

    /// Create a material group covering the given faces
    pub fn with_faces(material_name: impl Into<String>, faces: Vec<u16>) -> Self {
        Self {
            material_name: material_name.into(),
            faces,
        }
    }

    /// Look up this group's material in a scene
    ///
    /// Returns `None` for a dangling reference; callers treat that as
    /// "no material".
    pub fn resolve<'a>(&self, scene: &'a Scene) -> Option<&'a Material> {
        scene.find_material(&self.material_name)
    }
}

/// Geometry of a single mesh
///
/// Vertices, texture coordinates, faces and smoothing groups are stored in
/// separate sequences, the way the .3ds format streams them. Faces are stored
/// flattened, three vertex indices per face. Smoothing group masks are
/// expected one per face but the counts are allowed to differ while the mesh
/// is being built.
///
/// Positional reads (`vertex`, `face`, ...) panic when the index is out of
/// range. Use the slice accessors for checked access.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Vector3<f32>>,
    tex_coords: Vec<Vector2<f32>>,
    faces: Vec<u16>,
    smoothing_groups: Vec<u32>,
    material_groups: Vec<MeshMaterialGroup>,
    matrix: Matrix4<f32>,
}

impl TriangleMesh {
    /// Create a new empty mesh with an identity transform
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            faces: Vec::new(),
            smoothing_groups: Vec::new(),
            material_groups: Vec::new(),
            matrix: Matrix4::identity(),
        }
    }

    /// Create a new mesh with pre-allocated capacity
    ///
    /// Capacities above [`MAX_MESH_ELEMENTS`] are clamped.
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        let vertices = vertices.min(MAX_MESH_ELEMENTS);
        let faces = faces.min(MAX_MESH_ELEMENTS);
        Self {
            vertices: Vec::with_capacity(vertices),
            tex_coords: Vec::new(),
            faces: Vec::with_capacity(faces * 3),
            smoothing_groups: Vec::with_capacity(faces),
            material_groups: Vec::new(),
            matrix: Matrix4::identity(),
        }
    }

    /// Local-to-model transform
    pub fn matrix(&self) -> Matrix4<f32> {
        self.matrix
    }

    /// Replace the local-to-model transform
    pub fn set_matrix(&mut self, matrix: Matrix4<f32>) {
        self.matrix = matrix;
    }

    /// Get a vertex position by index
    pub fn vertex(&self, index: u16) -> Vector3<f32> {
        self.vertices[index as usize]
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> u16 {
        self.vertices.len() as u16
    }

    /// All vertex positions in insertion order
    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, point: Vector3<f32>) -> Result<u16> {
        check_capacity(self.vertices.len(), ElementKind::Vertex)?;
        self.vertices.push(point);
        Ok(self.vertices.len() as u16 - 1)
    }

    /// Get a texture coordinate by index
    pub fn tex_coord(&self, index: u16) -> Vector2<f32> {
        self.tex_coords[index as usize]
    }

    /// Number of texture coordinates
    ///
    /// May differ from [`vertex_count`](Self::vertex_count); consumers indexing
    /// texture coordinates by vertex index must compare the two first.
    pub fn tex_coord_count(&self) -> u16 {
        self.tex_coords.len() as u16
    }

    /// All texture coordinates in insertion order
    pub fn tex_coords(&self) -> &[Vector2<f32>] {
        &self.tex_coords
    }

    /// Append a texture coordinate and return its index
    pub fn add_tex_coord(&mut self, uv: Vector2<f32>) -> Result<u16> {
        check_capacity(self.tex_coords.len(), ElementKind::TexCoord)?;
        self.tex_coords.push(uv);
        Ok(self.tex_coords.len() as u16 - 1)
    }

    /// Check if the mesh has texture coordinates
    pub fn has_tex_coords(&self) -> bool {
        !self.tex_coords.is_empty()
    }

    /// Get the three vertex indices of a face
    pub fn face(&self, index: u16) -> [u16; 3] {
        let base = index as usize * 3;
        let f = &self.faces[base..base + 3];
        [f[0], f[1], f[2]]
    }

    /// Number of faces
    pub fn face_count(&self) -> u16 {
        (self.faces.len() / 3) as u16
    }

    /// Iterate over all faces in insertion order
    pub fn faces(&self) -> impl ExactSizeIterator<Item = [u16; 3]> + '_ {
        self.faces.chunks_exact(3).map(|f| [f[0], f[1], f[2]])
    }

    /// Append a face and return its index
    ///
    /// The vertex indices are stored as given. Keeping them below
    /// [`vertex_count`](Self::vertex_count) is the caller's job; use
    /// [`MeshBuilder`](crate::MeshBuilder) for checked construction.
    pub fn add_face(&mut self, v0: u16, v1: u16, v2: u16) -> Result<u16> {
        check_capacity(self.faces.len() / 3, ElementKind::Face)?;
        self.faces.extend_from_slice(&[v0, v1, v2]);
        Ok(self.face_count() - 1)
    }

    /// Append a face together with its smoothing group mask
    ///
    /// Either both sequences grow or neither does. The mesh must already have
    /// one mask per face, otherwise the new mask would land on an earlier face
    /// and `Error::InvalidMesh` is returned.
    pub fn add_smoothed_face(&mut self, v0: u16, v1: u16, v2: u16, mask: u32) -> Result<u16> {
        check_capacity(self.faces.len() / 3, ElementKind::Face)?;
        check_capacity(self.smoothing_groups.len(), ElementKind::SmoothingGroup)?;
        if !self.has_consistent_smoothing_groups() {
            return Err(Error::InvalidMesh(format!(
                "Cannot add a smoothed face: {} face(s) but {} smoothing group mask(s). \
                 Supply the pending masks first.",
                self.faces.len() / 3,
                self.smoothing_groups.len()
            )));
        }
        self.faces.extend_from_slice(&[v0, v1, v2]);
        self.smoothing_groups.push(mask);
        Ok(self.face_count() - 1)
    }

    /// Append one smoothing group mask
    ///
    /// Expected once per face, in face order.
    pub fn add_smoothing_groups(&mut self, mask: u32) -> Result<u16> {
        check_capacity(self.smoothing_groups.len(), ElementKind::SmoothingGroup)?;
        self.smoothing_groups.push(mask);
        Ok(self.smoothing_groups.len() as u16 - 1)
    }

    /// Get the smoothing group mask at an index
    pub fn smoothing_groups(&self, index: u16) -> u32 {
        self.smoothing_groups[index as usize]
    }

    /// Number of smoothing group masks
    pub fn smoothing_group_count(&self) -> u16 {
        self.smoothing_groups.len() as u16
    }

    /// All smoothing group masks in insertion order
    pub fn smoothing_group_masks(&self) -> &[u32] {
        &self.smoothing_groups
    }

    /// Check that there is exactly one smoothing group mask per face
    ///
    /// [`add_smoothed_face`](Self::add_smoothed_face) requires this to hold.
    pub fn has_consistent_smoothing_groups(&self) -> bool {
        self.smoothing_groups.len() == self.faces.len() / 3
    }

    /// Attach a material group to this mesh
    pub fn add_mesh_material_group(&mut self, group: MeshMaterialGroup) {
        self.material_groups.push(group);
    }

    /// Get a material group by index
    pub fn mesh_material_group(&self, index: usize) -> &MeshMaterialGroup {
        &self.material_groups[index]
    }

    /// Number of material groups
    pub fn mesh_material_group_count(&self) -> usize {
        self.material_groups.len()
    }

    /// All material groups in insertion order
    pub fn mesh_material_groups(&self) -> &[MeshMaterialGroup] {
        &self.material_groups
    }

    /// Check if the mesh has no vertices and no faces
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

fn check_capacity(len: usize, kind: ElementKind) -> Result<()> {
    if len >= MAX_MESH_ELEMENTS {
        warn!("rejecting append: mesh already holds {} {}", len, kind);
        return Err(Error::overflow(kind, MAX_MESH_ELEMENTS));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Vector3::new(0.0, 1.0, 0.0)).unwrap();
        mesh.add_face(0, 1, 2).unwrap();
        mesh.add_smoothing_groups(1).unwrap();
        mesh
    }

    #[test]
    fn test_new_mesh_is_empty_with_identity_matrix() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.tex_coord_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.smoothing_group_count(), 0);
        assert_eq!(mesh.mesh_material_group_count(), 0);
        assert_eq!(mesh.matrix(), Matrix4::identity());
    }

    #[test]
    fn test_single_triangle() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0), [0, 1, 2]);
        assert_eq!(mesh.smoothing_groups(0), 1);
        assert!(mesh.has_consistent_smoothing_groups());
        assert_eq!(mesh.vertex(1), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_add_returns_index() {
        let mut mesh = TriangleMesh::new();
        assert_eq!(mesh.add_vertex(Vector3::zeros()).unwrap(), 0);
        assert_eq!(mesh.add_vertex(Vector3::zeros()).unwrap(), 1);
        assert_eq!(mesh.add_tex_coord(Vector2::zeros()).unwrap(), 0);
        assert_eq!(mesh.add_face(0, 1, 0).unwrap(), 0);
        assert_eq!(mesh.add_face(1, 0, 1).unwrap(), 1);
        assert_eq!(mesh.add_smoothing_groups(4).unwrap(), 0);
    }

    #[test]
    fn test_faces_iterator_matches_face() {
        let mut mesh = single_triangle();
        mesh.add_vertex(Vector3::new(1.0, 1.0, 0.0)).unwrap();
        mesh.add_face(1, 3, 2).unwrap();
        let faces: Vec<[u16; 3]> = mesh.faces().collect();
        assert_eq!(faces, vec![[0, 1, 2], [1, 3, 2]]);
        assert_eq!(mesh.faces().len(), mesh.face_count() as usize);
    }

    #[test]
    fn test_smoothing_count_may_lag_faces() {
        let mut mesh = single_triangle();
        mesh.add_face(2, 1, 0).unwrap();
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.smoothing_group_count(), 1);
        assert!(!mesh.has_consistent_smoothing_groups());
        mesh.add_smoothing_groups(0).unwrap();
        assert!(mesh.has_consistent_smoothing_groups());
    }

    #[test]
    fn test_add_smoothed_face_keeps_lockstep() {
        let mut mesh = TriangleMesh::new();
        for _ in 0..3 {
            mesh.add_vertex(Vector3::zeros()).unwrap();
        }
        assert_eq!(mesh.add_smoothed_face(0, 1, 2, 0b101).unwrap(), 0);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.smoothing_group_masks(), &[0b101]);
    }

    #[test]
    fn test_vertex_overflow_is_reported() {
        let mut mesh = TriangleMesh::with_capacity(MAX_MESH_ELEMENTS, 0);
        for i in 0..MAX_MESH_ELEMENTS {
            assert_eq!(mesh.add_vertex(Vector3::zeros()).unwrap() as usize, i);
        }
        assert_eq!(mesh.vertex_count(), u16::MAX);
        let err = mesh.add_vertex(Vector3::zeros()).unwrap_err();
        assert_eq!(err, Error::overflow(ElementKind::Vertex, MAX_MESH_ELEMENTS));
        assert_eq!(mesh.vertices().len(), MAX_MESH_ELEMENTS);
    }

    #[test]
    fn test_face_overflow_leaves_smoothing_untouched() {
        let mut mesh = TriangleMesh::new();
        for _ in 0..MAX_MESH_ELEMENTS {
            mesh.add_face(0, 0, 0).unwrap();
        }
        let err = mesh.add_smoothed_face(0, 0, 0, 1).unwrap_err();
        assert_eq!(err, Error::overflow(ElementKind::Face, MAX_MESH_ELEMENTS));
        assert_eq!(mesh.smoothing_group_count(), 0);
        assert_eq!(mesh.face_count(), u16::MAX);
    }

    #[test]
    fn test_smoothed_face_rejected_while_masks_pending() {
        let mut mesh = single_triangle();
        mesh.add_face(2, 1, 0).unwrap();

        let err = mesh.add_smoothed_face(0, 1, 2, 7).unwrap_err();
        assert!(matches!(err, Error::InvalidMesh(_)));
        assert!(err.to_string().contains("2 face(s) but 1 smoothing group mask(s)"));
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.smoothing_group_count(), 1);

        // Once the pending mask arrives, lockstep appends resume at the right index
        mesh.add_smoothing_groups(2).unwrap();
        assert_eq!(mesh.add_smoothed_face(0, 1, 2, 7).unwrap(), 2);
        assert_eq!(mesh.smoothing_group_masks(), &[1, 2, 7]);
    }

    #[test]
    fn test_tex_coord_overflow_is_reported() {
        let mut mesh = TriangleMesh::new();
        for _ in 0..MAX_MESH_ELEMENTS {
            mesh.add_tex_coord(Vector2::zeros()).unwrap();
        }
        let err = mesh.add_tex_coord(Vector2::zeros()).unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOverflow {
                kind: ElementKind::TexCoord,
                ..
            }
        ));
        assert_eq!(mesh.tex_coords().len(), MAX_MESH_ELEMENTS);
        assert_eq!(mesh.tex_coord_count(), u16::MAX);
    }

    #[test]
    fn test_smoothing_group_overflow_is_reported() {
        let mut mesh = TriangleMesh::new();
        for _ in 0..MAX_MESH_ELEMENTS {
            mesh.add_smoothing_groups(1).unwrap();
        }
        let err = mesh.add_smoothing_groups(1).unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOverflow {
                kind: ElementKind::SmoothingGroup,
                ..
            }
        ));
        assert_eq!(mesh.smoothing_group_masks().len(), MAX_MESH_ELEMENTS);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_material_groups_are_owned_in_order() {
        let mut mesh = single_triangle();
        mesh.add_mesh_material_group(MeshMaterialGroup::with_faces("Red", vec![0]));
        mesh.add_mesh_material_group(MeshMaterialGroup::new("Blue"));
        assert_eq!(mesh.mesh_material_group_count(), 2);
        assert_eq!(mesh.mesh_material_group(0).material_name, "Red");
        assert_eq!(mesh.mesh_material_group(0).faces, vec![0]);
        assert!(mesh.mesh_material_group(1).faces.is_empty());
    }

    #[test]
    fn test_set_matrix_replaces_whole_matrix() {
        let mut mesh = TriangleMesh::new();
        let m = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0));
        mesh.set_matrix(m);
        assert_eq!(mesh.matrix(), m);
        mesh.set_matrix(Matrix4::identity());
        assert_eq!(mesh.matrix(), Matrix4::identity());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_vertex_panics() {
        let mesh = single_triangle();
        let _ = mesh.vertex(3);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_face_panics() {
        let mesh = single_triangle();
        let _ = mesh.face(1);
    }
}
