//! Example: Building and Inspecting a Scene
//!
//! This example builds the kind of scene an importer produces:
//! - Two named materials in the scene library
//! - A cube model whose faces are split into two material groups
//! - A translated copy of the cube
//!
//! It then validates the scene strictly and prints per-mesh geometry.
//!
//! Run with `RUST_LOG=debug` to see the construction log.

use lib3ds::{Color, Material, MeshBuilder, Model, Scene, ValidationConfig, mesh_ops};
use nalgebra::{Matrix4, Vector3};

fn unit_cube(builder: &mut MeshBuilder) -> lib3ds::Result<()> {
    for z in [0.0, 1.0] {
        for y in [0.0, 1.0] {
            for x in [0.0, 1.0] {
                builder.vertex(Vector3::new(x, y, z))?;
            }
        }
    }

    // Outward winding, smoothing group per side
    let faces: [[u16; 3]; 12] = [
        // bottom
        [0, 2, 3],
        [0, 3, 1],
        // top
        [4, 5, 7],
        [4, 7, 6],
        // front
        [0, 1, 5],
        [0, 5, 4],
        // back
        [2, 6, 7],
        [2, 7, 3],
        // left
        [0, 4, 6],
        [0, 6, 2],
        // right
        [1, 3, 7],
        [1, 7, 5],
    ];
    for (i, [a, b, c]) in faces.iter().enumerate() {
        builder.smoothed_face(*a, *b, *c, 1 << (i / 2))?;
    }

    builder.material_group("Steel", (0..4).collect())?;
    builder.material_group("Paint", (4..12).collect())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut scene = Scene::new();
    scene.set_background_color(Color::new(0.1, 0.1, 0.2));

    let mut steel = Material::with_name("Steel");
    steel.set_diffuse_color(Color::new(0.6, 0.6, 0.65));
    steel.set_shininess(0.8);
    scene.add_material(steel);

    let mut paint = Material::with_name("Paint");
    paint.set_diffuse_color(Color::new(0.8, 0.1, 0.1));
    paint.set_texture_map("paint.png");
    scene.add_material(paint);

    let mut cube = MeshBuilder::new();
    unit_cube(&mut cube)?;
    let mut model = Model::with_name("Cube");
    model.add_tri_mesh(cube.build()?);
    scene.add_model(model);

    let mut moved = MeshBuilder::new();
    unit_cube(&mut moved)?;
    moved.matrix(Matrix4::new_translation(&Vector3::new(3.0, 0.0, 0.0)));
    let mut model = Model::with_name("Moved Cube");
    model.add_tri_mesh(moved.build()?);
    scene.add_model(model);

    scene.validate(&ValidationConfig::strict())?;
    log::info!("Scene passed strict validation");

    println!("Scene:");
    println!("  Materials: {}", scene.material_count());
    println!("  Models: {}", scene.model_count());
    println!("  Faces: {}", scene.total_face_count());
    println!();

    for (model, mesh) in scene.meshes() {
        println!("Model '{}':", model.name());
        println!("  Vertices: {}", mesh.vertex_count());
        println!("  Faces: {}", mesh.face_count());
        println!("  Volume: {:.3}", mesh_ops::compute_mesh_volume(mesh));

        let (min, max) = mesh_ops::compute_transformed_aabb(mesh)?;
        println!(
            "  Bounds: ({:.1}, {:.1}, {:.1}) - ({:.1}, {:.1}, {:.1})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );

        for group in mesh.mesh_material_groups() {
            match group.resolve(&scene) {
                Some(material) => println!(
                    "  Group '{}': {} face(s), diffuse {:?}",
                    group.material_name,
                    group.faces.len(),
                    material.diffuse_color()
                ),
                None => println!("  Group '{}': unresolved", group.material_name),
            }
        }
        println!();
    }

    if let Some((min, max)) = mesh_ops::compute_scene_aabb(&scene) {
        println!("Scene extent: {:.1} x {:.1} x {:.1}", max.x - min.x, max.y - min.y, max.z - min.z);
    }

    Ok(())
}
