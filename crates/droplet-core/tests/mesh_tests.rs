// Host-side tests for the rest sphere and normal recomputation.

use droplet_core::{compute_vertex_normals, BaseMesh, LiveMesh, Vertex};
use glam::Vec3;

#[test]
fn sphere_has_expected_counts() {
    let mesh = BaseMesh::sphere(1.0, 64, 64);
    assert_eq!(mesh.vertex_count(), 65 * 65);
    // Two triangles per quad, minus one per quad on each pole row
    assert_eq!(mesh.triangle_count(), 2 * 64 * 63);
    assert_eq!(mesh.indices().len(), mesh.triangle_count() * 3);
}

#[test]
fn sphere_indices_are_in_range_and_non_degenerate() {
    let mesh = BaseMesh::sphere(1.0, 16, 12);
    let n = mesh.vertex_count() as u32;
    for tri in mesh.indices().chunks_exact(3) {
        assert!(tri.iter().all(|&i| i < n), "index out of range in {tri:?}");
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.positions()[i as usize]);
        let area = (c - b).cross(a - b).length();
        assert!(area > 1e-6, "degenerate triangle {tri:?}");
    }
}

#[test]
fn sphere_vertices_lie_on_radius() {
    for radius in [0.5f32, 1.0, 2.5] {
        let mesh = BaseMesh::sphere(radius, 32, 24);
        for p in mesh.positions() {
            assert!(
                (p.length() - radius).abs() < 1e-5,
                "vertex {p} off radius {radius}"
            );
        }
    }
}

#[test]
fn sphere_starts_at_north_pole() {
    let mesh = BaseMesh::sphere(1.0, 8, 8);
    let first = mesh.positions()[0];
    assert!((first - Vec3::Y).length() < 1e-6);
    let last = *mesh.positions().last().unwrap();
    assert!((last + Vec3::Y).length() < 1e-6);
}

#[test]
fn rest_normals_point_outward() {
    let base = BaseMesh::sphere(1.0, 64, 64);
    let live = LiveMesh::from_base(&base);
    assert_eq!(live.normals().len(), base.vertex_count());
    for (p, n) in live.positions().iter().zip(live.normals()) {
        assert!((n.length() - 1.0).abs() < 1e-4, "normal {n} not unit");
        let radial = p.normalize();
        assert!(n.dot(radial) > 0.99, "normal {n} not radial at {p}");
    }
}

#[test]
fn unreferenced_vertex_keeps_radial_normal() {
    let positions = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(0.0, 0.0, -2.0)];
    let indices = [0u32, 1, 2];
    let mut normals = [Vec3::ZERO; 4];
    compute_vertex_normals(&positions, &indices, &mut normals);
    assert_eq!(normals[3], Vec3::NEG_Z);
    let expected = Vec3::ONE.normalize();
    for n in &normals[..3] {
        assert!((*n - expected).length() < 1e-6, "face normal {n}");
    }
}

#[test]
fn normals_are_area_weighted() {
    // Two triangles share vertex 0: a large one facing +z, a small one facing +x.
    let positions = [
        Vec3::ZERO,
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, 0.1, 0.0),
        Vec3::new(0.0, 0.0, 0.1),
    ];
    let indices = [0u32, 1, 2, 0, 3, 4];
    let mut normals = [Vec3::ZERO; 5];
    compute_vertex_normals(&positions, &indices, &mut normals);
    assert!(normals[0].z > 0.99, "shared normal {} should favor +z", normals[0]);
    assert!(normals[0].x > 0.0);
}

#[test]
fn flat_views_match_vec3_data() {
    let base = BaseMesh::sphere(1.0, 8, 6);
    let live = LiveMesh::from_base(&base);
    let floats = live.position_floats();
    assert_eq!(floats.len(), live.len() * 3);
    for (i, p) in live.positions().iter().enumerate() {
        assert_eq!(&floats[i * 3..i * 3 + 3], &p.to_array());
    }
    assert_eq!(live.normal_floats().len(), live.len() * 3);
}

#[test]
fn interleaved_vertices_are_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let base = BaseMesh::sphere(1.0, 8, 6);
    let live = LiveMesh::from_base(&base);
    let mut out = vec![Vertex::default(); 3];
    live.write_vertices(&mut out);
    assert_eq!(out.len(), live.len());
    assert_eq!(out[5].position, live.positions()[5].to_array());
    assert_eq!(out[5].normal, live.normals()[5].to_array());
    let bytes: &[u8] = bytemuck::cast_slice(&out[..]);
    assert_eq!(bytes.len(), live.len() * 24);
}
