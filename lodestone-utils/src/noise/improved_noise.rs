//! Classic improved Perlin noise over the fixed reference permutation table.
//!
//! This is the pinned gradient primitive for every Lodestone noise channel.
//! Downstream determinism (world snapshots, placement digests) is defined
//! relative to this exact table and gradient set: seed variation enters the
//! pipeline only through the coordinate offsets applied by
//! [`FractalNoise`](super::FractalNoise), never by reshuffling the table.

use crate::math::floor;
use crate::noise::GRADIENT;

/// Ken Perlin's reference permutation table (the 2002 `ImprovedNoise` set).
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209,
    76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198,
    173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44,
    154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79,
    113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12,
    191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29,
    24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Fixed-table 2-D Perlin noise sampler.
///
/// Like the 512-entry simplex tables in vanilla-style generators, the first
/// 256 entries are mirrored into the second half so lattice hashing never
/// needs a second wrap.
#[derive(Debug, Clone)]
pub struct ImprovedNoise {
    p: [u8; 512],
}

impl Default for ImprovedNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl ImprovedNoise {
    /// Build the doubled permutation table from the reference set.
    #[must_use]
    pub fn new() -> Self {
        let mut p = [0u8; 512];
        p[..256].copy_from_slice(&PERMUTATION);
        p[256..].copy_from_slice(&PERMUTATION);
        Self { p }
    }

    #[inline]
    const fn p(&self, index: usize) -> usize {
        self.p[index & 0x1FF] as usize
    }

    /// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(t: f64, a: f64, b: f64) -> f64 {
        a + t * (b - a)
    }

    /// Dot product of the hashed gradient vector and the offset vector.
    #[inline]
    fn grad(hash: usize, x: f64, z: f64) -> f64 {
        let g = &GRADIENT[hash & 7];
        f64::from(g[0]) * x + f64::from(g[1]) * z
    }

    /// Sample raw 2-D Perlin noise at the given coordinates.
    ///
    /// Returns a value nominally in `[-1, 1]`.
    #[must_use]
    pub fn get_value_2d(&self, x: f64, z: f64) -> f64 {
        let xi = floor(x);
        let zi = floor(z);
        let xf = x - f64::from(xi);
        let zf = z - f64::from(zi);
        let u = Self::fade(xf);
        let v = Self::fade(zf);

        let xi = (xi & 0xFF) as usize;
        let zi = (zi & 0xFF) as usize;
        let aa = self.p(self.p(xi) + zi);
        let ab = self.p(self.p(xi) + zi + 1);
        let ba = self.p(self.p(xi + 1) + zi);
        let bb = self.p(self.p(xi + 1) + zi + 1);

        let n00 = Self::grad(aa, xf, zf);
        let n10 = Self::grad(ba, xf - 1.0, zf);
        let n01 = Self::grad(ab, xf, zf - 1.0);
        let n11 = Self::grad(bb, xf - 1.0, zf - 1.0);

        Self::lerp(v, Self::lerp(u, n00, n10), Self::lerp(u, n01, n11))
    }

    /// Sample 2-D noise remapped to `[0, 1]`.
    ///
    /// The raw value can overshoot `[-1, 1]` slightly at diagonal gradients,
    /// so the remap clamps. Every downstream field (height, climate,
    /// vegetation) consumes this normalized form.
    #[must_use]
    pub fn get_normalized_2d(&self, x: f64, z: f64) -> f64 {
        (self.get_value_2d(x, z) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_deterministic() {
        let noise1 = ImprovedNoise::new();
        let noise2 = ImprovedNoise::new();

        for i in 0..10 {
            let x = f64::from(i) * 13.7;
            let z = f64::from(i) * 7.3;
            #[allow(clippy::float_cmp, reason = "identical inputs must produce identical outputs")]
            {
                assert_eq!(noise1.get_value_2d(x, z), noise2.get_value_2d(x, z));
            }
        }
    }

    #[test]
    fn normalized_value_stays_in_unit_range() {
        let noise = ImprovedNoise::new();

        for ix in -50..50 {
            for iz in -50..50 {
                let v = noise.get_normalized_2d(f64::from(ix) * 0.37, f64::from(iz) * 0.53);
                assert!((0.0..=1.0).contains(&v), "value {v} out of range");
            }
        }
    }

    #[test]
    fn noise_has_spatial_variation() {
        let noise = ImprovedNoise::new();

        let values: Vec<f64> = (0..20)
            .map(|i| noise.get_value_2d(f64::from(i) * 0.43, f64::from(i) * 0.29))
            .collect();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.01, "2D noise should have spatial variation");
    }

    #[test]
    fn lattice_points_are_zero() {
        // Classic Perlin is zero at integer lattice coordinates.
        let noise = ImprovedNoise::new();
        for i in -5..5 {
            let v = noise.get_value_2d(f64::from(i), f64::from(i * 3));
            assert!(v.abs() < 1e-12, "lattice value should be 0, got {v}");
        }
    }
}
