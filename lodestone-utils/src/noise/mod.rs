//! Noise generation primitives for terrain, climate, and vegetation fields.
//!
//! Two layers:
//!
//! - [`ImprovedNoise`] - classic improved Perlin noise over a fixed
//!   permutation table, the pinned gradient primitive for all channels
//! - [`FractalNoise`] - multi-octave accumulation over [`ImprovedNoise`],
//!   with the world-radius coordinate pre-transform applied per sample

mod fractal_noise;
mod improved_noise;

pub use fractal_noise::FractalNoise;
pub use improved_noise::ImprovedNoise;

/// 2-D gradient vectors shared by the Perlin lattice (the eight compass
/// directions; index is the low three bits of the lattice hash).
pub(crate) const GRADIENT: [[i32; 2]; 8] = [
    [1, 1],
    [-1, 1],
    [1, -1],
    [-1, -1],
    [1, 0],
    [-1, 0],
    [0, 1],
    [0, -1],
];
