//! 3D simplex noise over a randomly filled permutation table.
//!
//! The table is filled with independent random bytes (with replacement), not a
//! shuffled identity. Some lattice hashes therefore repeat more often than in
//! textbook simplex noise; the avatar's motion was tuned against this table.

use rand::prelude::*;

// Skew/unskew factors for three dimensions
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

// Contribution radius (squared) of each simplex corner
const CORNER_FALLOFF: f64 = 0.6;

// Brings the summed corner contributions into roughly [-1, 1]
const OUTPUT_SCALE: f64 = 32.0;

// Midpoints of the cube edges
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Immutable gradient-noise field. Build once and share by reference.
#[derive(Clone)]
pub struct NoiseField {
    p: [u8; 256],
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl NoiseField {
    /// Fill the base table from `rng`, one uniform byte per slot.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut p = [0u8; 256];
        for slot in p.iter_mut() {
            *slot = rng.gen();
        }
        Self::from_permutation(p)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut StdRng::seed_from_u64(seed))
    }

    /// Seed from the thread-local generator (browser crypto on wasm).
    pub fn from_entropy() -> Self {
        Self::new(&mut thread_rng())
    }

    /// Build the wrapped lookup tables from an explicit base table.
    pub fn from_permutation(p: [u8; 256]) -> Self {
        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }
        Self {
            p,
            perm,
            perm_mod12,
        }
    }

    pub fn p(&self) -> &[u8; 256] {
        &self.p
    }

    pub fn perm(&self) -> &[u8; 512] {
        &self.perm
    }

    pub fn perm_mod12(&self) -> &[u8; 512] {
        &self.perm_mod12
    }

    /// Sample the field; the result lies in roughly [-1, 1].
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        // Which skewed cell contains the point
        let s = (x + y + z) * F3;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;
        let k = (z + s).floor() as i64;

        // Offset from the cell origin in unskewed space
        let t = (i + j + k) as f64 * G3;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);
        let z0 = z - (k as f64 - t);

        // Pick one of the six tetrahedra by ordering the offsets
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;

        let n0 = self.corner(self.gradient_index(ii, jj, kk), x0, y0, z0);
        let n1 = self.corner(self.gradient_index(ii + i1, jj + j1, kk + k1), x1, y1, z1);
        let n2 = self.corner(self.gradient_index(ii + i2, jj + j2, kk + k2), x2, y2, z2);
        let n3 = self.corner(self.gradient_index(ii + 1, jj + 1, kk + 1), x3, y3, z3);

        OUTPUT_SCALE * (n0 + n1 + n2 + n3)
    }

    // Indices stay below 512: each level adds at most 255 + 1 to a byte.
    #[inline]
    fn gradient_index(&self, i: usize, j: usize, k: usize) -> usize {
        let inner = self.perm[k] as usize;
        let mid = self.perm[j + inner] as usize;
        self.perm_mod12[i + mid] as usize
    }

    #[inline]
    fn corner(&self, gi: usize, x: f64, y: f64, z: f64) -> f64 {
        let t = CORNER_FALLOFF - x * x - y * y - z * z;
        if t < 0.0 {
            return 0.0;
        }
        let t2 = t * t;
        let g = GRAD3[gi];
        t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("p[..8]", &&self.p[..8])
            .finish_non_exhaustive()
    }
}
