//! Geometric operations on triangle meshes
//!
//! This module provides the geometry a consumer usually needs right after
//! import:
//! - Bounding boxes, local and after the mesh transform
//! - Volume computation
//! - Face normals and smoothing-group aware corner normals
//!
//! Operations skip faces whose indices are out of range instead of
//! panicking, so they are safe on meshes that have not been validated.

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};
use crate::model::{Scene, TriangleMesh};

/// An axis-aligned bounding box represented as (min_point, max_point)
pub type BoundingBox = (Point3<f32>, Point3<f32>);

fn bounds_of<I>(points: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = Point3<f32>>,
{
    let mut points = points.into_iter();
    let first = points.next()?;
    Some(points.fold((first, first), |(min, max), p| {
        (
            Point3::from(min.coords.inf(&p.coords)),
            Point3::from(max.coords.sup(&p.coords)),
        )
    }))
}

fn merge_bounds(a: BoundingBox, b: BoundingBox) -> BoundingBox {
    (
        Point3::from(a.0.coords.inf(&b.0.coords)),
        Point3::from(a.1.coords.sup(&b.1.coords)),
    )
}

/// Positions of the three corners of a face, if all indices are in range
fn face_corners(mesh: &TriangleMesh, face: [u16; 3]) -> Option<[Vector3<f32>; 3]> {
    let vertices = mesh.vertices();
    Some([
        *vertices.get(face[0] as usize)?,
        *vertices.get(face[1] as usize)?,
        *vertices.get(face[2] as usize)?,
    ])
}

/// Compute the axis-aligned bounding box of a mesh in its local space
///
/// # Arguments
/// * `mesh` - The mesh to compute the bounding box for
///
/// # Returns
/// A tuple of (min_point, max_point), or an error if the mesh has no vertices
pub fn compute_mesh_aabb(mesh: &TriangleMesh) -> Result<BoundingBox> {
    bounds_of(mesh.vertices().iter().map(|v| Point3::from(*v))).ok_or_else(|| {
        Error::EmptyGeometry("Cannot compute bounding box of mesh with no vertices".to_string())
    })
}

/// Apply the mesh transform to every vertex
pub fn transform_vertices(mesh: &TriangleMesh) -> Vec<Point3<f32>> {
    let matrix = mesh.matrix();
    mesh.vertices()
        .iter()
        .map(|v| matrix.transform_point(&Point3::from(*v)))
        .collect()
}

/// Compute the bounding box of a mesh after its transform is applied
///
/// Every vertex is transformed, so the box is exact rather than the bound of
/// a transformed local box.
pub fn compute_transformed_aabb(mesh: &TriangleMesh) -> Result<BoundingBox> {
    bounds_of(transform_vertices(mesh)).ok_or_else(|| {
        Error::EmptyGeometry("Cannot compute bounding box of mesh with no vertices".to_string())
    })
}

/// Compute a bounding box enclosing every mesh of the scene
///
/// Each mesh contributes its transformed bounds. Returns `None` when no
/// mesh has vertices.
pub fn compute_scene_aabb(scene: &Scene) -> Option<BoundingBox> {
    scene
        .meshes()
        .filter_map(|(_, mesh)| compute_transformed_aabb(mesh).ok())
        .reduce(merge_bounds)
}

/// Compute the signed volume of a mesh using the divergence theorem
///
/// For a closed mesh with counter-clockwise winding the result is positive.
/// Negative volume indicates inverted faces. Accumulation is done in `f64`.
pub fn compute_mesh_signed_volume(mesh: &TriangleMesh) -> f64 {
    let mut volume = 0.0_f64;
    for face in mesh.faces() {
        let Some([a, b, c]) = face_corners(mesh, face) else {
            continue;
        };
        let a = a.cast::<f64>();
        let b = b.cast::<f64>();
        let c = c.cast::<f64>();
        volume += a.dot(&b.cross(&c));
    }
    volume / 6.0
}

/// Compute the unsigned volume of a mesh
pub fn compute_mesh_volume(mesh: &TriangleMesh) -> f64 {
    compute_mesh_signed_volume(mesh).abs()
}

/// Calculate the unit normal of a triangle
///
/// Returns a zero vector for degenerate triangles.
///
/// # Example
/// ```
/// use lib3ds::mesh_ops::calculate_face_normal;
/// use nalgebra::Vector3;
///
/// let n = calculate_face_normal(
///     &Vector3::new(0.0, 0.0, 0.0),
///     &Vector3::new(1.0, 0.0, 0.0),
///     &Vector3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(n, Vector3::new(0.0, 0.0, 1.0));
/// ```
pub fn calculate_face_normal(
    v0: &Vector3<f32>,
    v1: &Vector3<f32>,
    v2: &Vector3<f32>,
) -> Vector3<f32> {
    (v1 - v0)
        .cross(&(v2 - v0))
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros)
}

/// Calculate the unit normal of every face, in face order
///
/// Faces with out-of-range indices get a zero normal.
pub fn calculate_face_normals(mesh: &TriangleMesh) -> Vec<Vector3<f32>> {
    mesh.faces()
        .map(|face| match face_corners(mesh, face) {
            Some([a, b, c]) => calculate_face_normal(&a, &b, &c),
            None => Vector3::zeros(),
        })
        .collect()
}

/// Calculate per-corner normals honouring smoothing groups
///
/// For each corner of each face, the normal is the area-weighted average of
/// the normals of every face that shares the corner's vertex and at least
/// one smoothing group bit with the face. A face with mask 0 is flat shaded.
/// If the mesh does not have exactly one mask per face, every face is flat
/// shaded.
///
/// # Returns
/// One `[normal; 3]` entry per face, in face order. Faces with out-of-range
/// indices get zero normals.
pub fn calculate_smoothed_normals(mesh: &TriangleMesh) -> Vec<[Vector3<f32>; 3]> {
    let faces: Vec<Option<[u16; 3]>> = mesh
        .faces()
        .map(|face| face_corners(mesh, face).map(|_| face))
        .collect();

    // Unnormalized cross products, magnitude is twice the face area
    let weighted: Vec<Vector3<f32>> = mesh
        .faces()
        .map(|face| match face_corners(mesh, face) {
            Some([a, b, c]) => (b - a).cross(&(c - a)),
            None => Vector3::zeros(),
        })
        .collect();

    let masks = mesh
        .has_consistent_smoothing_groups()
        .then(|| mesh.smoothing_group_masks());

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); mesh.vertices().len()];
    for (face_idx, face) in faces.iter().enumerate() {
        if let Some(face) = face {
            for &v in face {
                adjacency[v as usize].push(face_idx);
            }
        }
    }

    let unit = |n: Vector3<f32>| n.try_normalize(0.0).unwrap_or_else(Vector3::zeros);

    faces
        .iter()
        .enumerate()
        .map(|(face_idx, face)| {
            let Some(face) = face else {
                return [Vector3::zeros(); 3];
            };
            let mask = masks.map_or(0, |m| m[face_idx]);
            if mask == 0 {
                let n = unit(weighted[face_idx]);
                return [n; 3];
            }
            face.map(|v| {
                let sum = adjacency[v as usize]
                    .iter()
                    .filter(|&&other| masks.is_some_and(|m| m[other] & mask != 0))
                    .fold(Vector3::zeros(), |acc, &other| acc + weighted[other]);
                unit(sum)
            })
        })
        .collect()
}
