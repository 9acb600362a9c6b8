//! Rest-shape sphere and the per-frame live copy that the deformer writes.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::PI;

/// Interleaved vertex layout handed to GPU hosts.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Fixed-topology rest geometry. Never modified after construction.
#[derive(Clone, Debug)]
pub struct BaseMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl BaseMesh {
    /// Latitude/longitude sphere centered at the origin.
    ///
    /// Rows run from the north pole (`+y`) to the south pole. Each row holds
    /// `width_segments + 1` vertices so the seam carries duplicated positions
    /// with distinct indices; the pole rows likewise repeat the pole point.
    /// Triangles that would collapse onto a pole are skipped.
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);

        let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            let theta = v * PI;
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let phi = u * 2.0 * PI;
                positions.push(Vec3::new(
                    -radius * phi.cos() * theta.sin(),
                    radius * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                ));
            }
        }

        let row = w + 1;
        let mut indices = Vec::with_capacity((w * (h - 1) * 6) as usize);
        for iy in 0..h {
            for ix in 0..w {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != h - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { positions, indices }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Displaced geometry for the current frame.
#[derive(Clone, Debug)]
pub struct LiveMesh {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) normals: Vec<Vec3>,
}

impl LiveMesh {
    /// Start from the undisplaced rest shape with matching normals.
    pub fn from_base(base: &BaseMesh) -> Self {
        let positions = base.positions().to_vec();
        let mut normals = vec![Vec3::ZERO; positions.len()];
        compute_vertex_normals(&positions, base.indices(), &mut normals);
        Self { positions, normals }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `[x, y, z, ...]` view of the positions.
    pub fn position_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions[..])
    }

    /// Flat `[x, y, z, ...]` view of the normals.
    pub fn normal_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals[..])
    }

    /// Interleave positions and normals into `out`, reusing its allocation.
    pub fn write_vertices(&self, out: &mut Vec<Vertex>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.normals)
                .map(|(p, n)| Vertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                }),
        );
    }
}

/// Area-weighted smooth normals.
///
/// Each triangle adds its unnormalized face normal to its three corners; the
/// sums are normalized afterwards. A vertex that no triangle references keeps
/// its radial direction.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32], normals: &mut [Vec3]) {
    debug_assert_eq!(positions.len(), normals.len());
    normals.fill(Vec3::ZERO);

    for tri in indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (a, b, c) = (positions[ia], positions[ib], positions[ic]);
        let face = (c - b).cross(a - b);
        normals[ia] += face;
        normals[ib] += face;
        normals[ic] += face;
    }

    for (n, p) in normals.iter_mut().zip(positions) {
        *n = n.try_normalize().unwrap_or_else(|| p.normalize_or_zero());
    }
}
