//! Shared scene fixtures for integration tests

#![allow(dead_code)]

use lib3ds::{Color, Material, MeshBuilder, MeshMaterialGroup, Model, Scene, TriangleMesh};
use nalgebra::Vector3;

/// Build the single-triangle mesh: three vertices, face (0, 1, 2), mask 1
pub fn single_triangle() -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0)).unwrap();
    mesh.add_vertex(Vector3::new(1.0, 0.0, 0.0)).unwrap();
    mesh.add_vertex(Vector3::new(0.0, 1.0, 0.0)).unwrap();
    mesh.add_face(0, 1, 2).unwrap();
    mesh.add_smoothing_groups(1).unwrap();
    mesh
}

/// Build a two-face quad through the builder, faces split between two materials
pub fn two_material_quad(first: &str, second: &str) -> TriangleMesh {
    let mut b = MeshBuilder::new();
    b.vertex(Vector3::new(0.0, 0.0, 0.0)).unwrap();
    b.vertex(Vector3::new(1.0, 0.0, 0.0)).unwrap();
    b.vertex(Vector3::new(1.0, 1.0, 0.0)).unwrap();
    b.vertex(Vector3::new(0.0, 1.0, 0.0)).unwrap();
    b.smoothed_face(0, 1, 2, 1).unwrap();
    b.smoothed_face(0, 2, 3, 1).unwrap();
    b.material_group(first, vec![0]).unwrap();
    b.material_group(second, vec![1]).unwrap();
    b.build().unwrap()
}

/// Build a material with a distinguishing diffuse color
pub fn material(name: &str, diffuse: Color) -> Material {
    let mut m = Material::with_name(name);
    m.set_diffuse_color(diffuse);
    m
}

/// A scene with materials Red and Blue, one quad model and one empty model
pub fn red_blue_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_material(material("Red", Color::new(1.0, 0.0, 0.0)));
    scene.add_material(material("Blue", Color::new(0.0, 0.0, 1.0)));

    let mut quad = Model::with_name("Quad");
    quad.add_tri_mesh(two_material_quad("Red", "Blue"));
    scene.add_model(quad);
    scene.add_model(Model::with_name("Empty"));
    scene
}

/// A material group that names a material not in `red_blue_scene`
pub fn dangling_group() -> MeshMaterialGroup {
    MeshMaterialGroup::with_faces("Green", vec![0])
}
