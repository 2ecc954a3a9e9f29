//! Seed-derived noise-domain offsets.

/// Per-channel coordinate offsets derived once from the world seed.
///
/// The additive constants decorrelate the four noise domains; without them
/// every channel would sample the same lattice positions and height,
/// temperature, humidity, and vegetation would all move in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseOffsets {
    /// Height channel offset, the unshifted base.
    pub height: f64,
    /// Temperature channel offset.
    pub temperature: f64,
    /// Humidity channel offset.
    pub humidity: f64,
    /// Vegetation channel offset.
    pub vegetation: f64,
}

impl NoiseOffsets {
    /// Derive the four offsets from the world seed.
    ///
    /// The base is the integer quotient `seed / 10_000`; seeds within the
    /// same ten-thousand band share it. Negative seeds truncate toward zero.
    /// The 32-bit seed keeps every offset (and thus every transformed noise
    /// coordinate) inside the lattice range the primitive can address.
    #[must_use]
    pub const fn derive(seed: i32) -> Self {
        let base = (seed / 10_000) as f64;
        Self {
            height: base,
            temperature: base + 0.1234,
            humidity: base + 0.3456,
            vegetation: base + 0.5678,
        }
    }
}
