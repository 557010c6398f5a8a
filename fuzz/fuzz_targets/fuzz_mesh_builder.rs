#![no_main]

use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};
use libfuzzer_sys::fuzz_target;
use nalgebra::Vector3;

#[derive(Debug)]
struct FuzzMesh {
    vertices: Vec<(f32, f32, f32)>,
    faces: Vec<(u16, u16, u16, u32)>,
    extra_masks: Vec<u32>,
    group: Vec<u16>,
}

impl<'a> Arbitrary<'a> for FuzzMesh {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertex_count = u.int_in_range(0..=100)?;
        let mut vertices = Vec::new();
        for _ in 0..vertex_count {
            vertices.push((u.arbitrary()?, u.arbitrary()?, u.arbitrary()?));
        }

        // Indices are unconstrained, the builder has to reject the bad ones
        let face_count = u.int_in_range(0..=60)?;
        let mut faces = Vec::new();
        for _ in 0..face_count {
            faces.push((u.arbitrary()?, u.arbitrary()?, u.arbitrary()?, u.arbitrary()?));
        }

        Ok(FuzzMesh {
            vertices,
            faces,
            extra_masks: u.arbitrary()?,
            group: u.arbitrary()?,
        })
    }
}

fuzz_target!(|data: FuzzMesh| {
    let mut builder = lib3ds::MeshBuilder::new();

    for (x, y, z) in data.vertices.iter() {
        let _ = builder.vertex(Vector3::new(*x, *y, *z));
    }

    // Alternate between lockstep faces and faces whose masks arrive later
    let mut lockstep = Vec::new();
    for (i, (a, b, c, mask)) in data.faces.iter().enumerate() {
        if i % 2 == 0 {
            if let Ok(face) = builder.smoothed_face(*a, *b, *c, *mask) {
                lockstep.push((face, *mask));
            }
        } else {
            let _ = builder.face(*a, *b, *c);
        }
    }
    let _ = builder.smoothing_groups(data.extra_masks.iter().copied());
    let _ = builder.material_group("fuzz", data.group.clone());

    // Whatever the builder accepted must be safe to run geometry on
    if let Ok(mesh) = builder.build() {
        for (face, mask) in lockstep {
            assert_eq!(mesh.smoothing_groups(face), mask);
        }
        let _ = lib3ds::mesh_ops::compute_mesh_aabb(&mesh);
        let _ = lib3ds::mesh_ops::compute_mesh_signed_volume(&mesh);
        let _ = lib3ds::mesh_ops::calculate_smoothed_normals(&mesh);
    }
});
