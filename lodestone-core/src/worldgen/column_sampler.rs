//! Per-column sampling of the height, climate, and vegetation fields.

use lodestone_utils::noise::FractalNoise;

use crate::config::WorldConfig;

use super::{Biome, NoiseOffsets};

/// Fully derived attributes of one terrain column.
///
/// A `Column` is a pure function of `(config, x, z)` - it is computed in one
/// pass and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Column x coordinate.
    pub x: i32,
    /// Column z coordinate.
    pub z: i32,
    /// Surface height in blocks, in `[0, max_spawn_height]`.
    pub height: i32,
    /// Temperature scalar in `[0, 1]`.
    pub temperature: f64,
    /// Humidity scalar in `[0, 1]`.
    pub humidity: f64,
    /// Vegetation score in `[0, 1]`, shared by the spawn decision and the
    /// trunk height.
    pub vegetation: f64,
    /// Classified biome.
    pub biome: Biome,
}

/// Holds the four wired fractal fields and samples columns from them.
#[derive(Debug, Clone)]
pub struct ColumnSampler {
    height: FractalNoise,
    temperature: FractalNoise,
    humidity: FractalNoise,
    vegetation: FractalNoise,
    max_spawn_height: i32,
    sea_level: i32,
    snow_line: i32,
}

impl ColumnSampler {
    /// Wire the four noise fields from the config and the seed-derived
    /// offsets.
    ///
    /// The per-axis offset signs differ between channels on purpose: the
    /// asymmetry decorrelates the x and z axes of temperature and humidity
    /// from each other and from height.
    #[must_use]
    pub fn new(config: &WorldConfig) -> Self {
        let offsets = NoiseOffsets::derive(config.seed);
        let radius = f64::from(config.world_radius);
        Self {
            height: FractalNoise::new(
                config.height.frequency,
                offsets.height,
                offsets.height,
                config.height.octaves,
                radius,
            ),
            temperature: FractalNoise::new(
                config.temperature.frequency,
                -offsets.temperature,
                offsets.temperature,
                config.temperature.octaves,
                radius,
            ),
            humidity: FractalNoise::new(
                config.humidity.frequency,
                offsets.humidity,
                -offsets.humidity,
                config.humidity.octaves,
                radius,
            ),
            vegetation: FractalNoise::new(
                config.vegetation.frequency,
                -offsets.vegetation,
                -offsets.vegetation,
                config.vegetation.octaves,
                radius,
            ),
            max_spawn_height: config.max_spawn_height,
            sea_level: config.sea_level,
            snow_line: config.snow_line,
        }
    }

    /// Surface height at `(x, z)`, in `[0, max_spawn_height]`.
    #[must_use]
    pub fn height(&self, x: i32, z: i32) -> i32 {
        let value = self.height.sample(f64::from(x), f64::from(z));
        (value * f64::from(self.max_spawn_height)).round() as i32
    }

    /// Temperature scalar at `(x, z)`.
    #[must_use]
    pub fn temperature(&self, x: i32, z: i32) -> f64 {
        self.temperature.sample(f64::from(x), f64::from(z))
    }

    /// Humidity scalar at `(x, z)`.
    #[must_use]
    pub fn humidity(&self, x: i32, z: i32) -> f64 {
        self.humidity.sample(f64::from(x), f64::from(z))
    }

    /// Vegetation score at `(x, z)`.
    #[must_use]
    pub fn vegetation(&self, x: i32, z: i32) -> f64 {
        self.vegetation.sample(f64::from(x), f64::from(z))
    }

    /// Compute the complete column at `(x, z)`.
    #[must_use]
    pub fn sample(&self, x: i32, z: i32) -> Column {
        let height = self.height(x, z);
        let temperature = self.temperature(x, z);
        let humidity = self.humidity(x, z);
        let vegetation = self.vegetation(x, z);
        let biome = Biome::classify(height, temperature, humidity, self.sea_level, self.snow_line);
        Column {
            x,
            z,
            height,
            temperature,
            humidity,
            vegetation,
            biome,
        }
    }
}
