//! World generation configuration.
//!
//! Every tunable the generator recognizes lives here: the seed, the height
//! thresholds, the traversal extent, the per-channel noise parameters, the
//! per-biome vegetation thresholds, and the grass tints. All of it is
//! serde-deserializable so hosts can override values from a config file
//! (the `lodestone` binary loads JSON5) instead of recompiling.

use serde::Deserialize;

use crate::error::WorldGenError;
use crate::worldgen::Rgb;

/// Frequency and octave count for one fractal noise channel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NoiseChannel {
    /// Frequency multiplier applied after world-radius normalization.
    pub frequency: f64,
    /// Number of fractal octaves, at least 1.
    pub octaves: u32,
}

/// Vegetation score thresholds for one biome.
///
/// Tufts spawn when the score falls *below* `tuft` on even-parity columns;
/// trees spawn when the score rises *above* their threshold on odd-parity
/// columns, rarer species checked first. `None` disables that class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct VegetationThresholds {
    /// Upper score bound for grass tufts.
    pub tuft: Option<f64>,
    /// Lower score bound for the rare tree species.
    pub rare_tree: Option<f64>,
    /// Lower score bound for the common tree species.
    pub tree: Option<f64>,
}

/// Per-biome vegetation thresholds. Underwater columns never spawn
/// vegetation, so they carry no entry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BiomeThresholds {
    /// Snowy: snowy pines only.
    pub snowy: VegetationThresholds,
    /// Taiga: tufts and pines.
    pub taiga: VegetationThresholds,
    /// Forest: tufts, birches (rare), oaks.
    pub forest: VegetationThresholds,
    /// Grassland: tufts, birches (rare), oaks.
    pub grassland: VegetationThresholds,
    /// Savannah: tufts and acacias.
    pub savannah: VegetationThresholds,
    /// Desert: cacti only.
    pub desert: VegetationThresholds,
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self {
            snowy: VegetationThresholds {
                tuft: None,
                rare_tree: None,
                tree: Some(0.7),
            },
            taiga: VegetationThresholds {
                tuft: Some(0.2),
                rare_tree: None,
                tree: Some(0.7),
            },
            forest: VegetationThresholds {
                tuft: Some(0.2),
                rare_tree: Some(0.9125),
                tree: Some(0.65),
            },
            grassland: VegetationThresholds {
                tuft: Some(0.35),
                rare_tree: Some(0.9375),
                tree: Some(0.75),
            },
            savannah: VegetationThresholds {
                tuft: Some(0.35),
                rare_tree: None,
                tree: Some(0.75),
            },
            desert: VegetationThresholds {
                tuft: None,
                rare_tree: None,
                tree: Some(0.75),
            },
        }
    }
}

/// Grass block tints per climate band. Forest and grassland share the mild
/// tint; desert surfaces are sand and carry no tint.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GrassTints {
    /// Snowy biome tint.
    pub snowy: Rgb,
    /// Taiga biome tint.
    pub taiga: Rgb,
    /// Forest and grassland tint.
    pub mild: Rgb,
    /// Savannah tint.
    pub savannah: Rgb,
}

impl Default for GrassTints {
    fn default() -> Self {
        Self {
            snowy: Rgb::new(0.78, 0.9, 0.85),
            taiga: Rgb::new(0.33, 0.47, 0.35),
            mild: Rgb::new(0.35, 0.68, 0.3),
            savannah: Rgb::new(0.75, 0.72, 0.33),
        }
    }
}

/// Complete configuration for one world generation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World seed, the sole root of all randomness. A 32-bit integer so the
    /// derived offsets stay well inside the noise lattice range.
    pub seed: i32,
    /// Height below which a column is underwater.
    pub sea_level: i32,
    /// Height above which cold, humid columns are snowy instead of taiga.
    pub snow_line: i32,
    /// Maximum surface height; normalizes the height field output.
    pub max_spawn_height: i32,
    /// Manhattan radius of the generated diamond region.
    pub max_load_radius: i32,
    /// Coordinate normalization divisor for all noise channels.
    pub world_radius: i32,
    /// Height channel noise parameters.
    pub height: NoiseChannel,
    /// Temperature channel noise parameters.
    pub temperature: NoiseChannel,
    /// Humidity channel noise parameters.
    pub humidity: NoiseChannel,
    /// Vegetation channel noise parameters. The very high frequency makes
    /// neighboring columns effectively independent.
    pub vegetation: NoiseChannel,
    /// Per-biome vegetation thresholds.
    pub thresholds: BiomeThresholds,
    /// Grass tint colors.
    pub tints: GrassTints,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            sea_level: 63,
            snow_line: 168,
            max_spawn_height: 256,
            max_load_radius: 128,
            world_radius: 6400,
            height: NoiseChannel {
                frequency: 12.0,
                octaves: 6,
            },
            temperature: NoiseChannel {
                frequency: 12.0,
                octaves: 4,
            },
            humidity: NoiseChannel {
                frequency: 12.0,
                octaves: 4,
            },
            vegetation: NoiseChannel {
                frequency: 300_000.0,
                octaves: 4,
            },
            thresholds: BiomeThresholds::default(),
            tints: GrassTints::default(),
        }
    }
}

impl WorldConfig {
    /// Parse an externally supplied seed string.
    ///
    /// Garbage input is a configuration error, never a degenerate world;
    /// that includes values outside the 32-bit seed range, which would
    /// otherwise push the derived offsets past the lattice coordinates the
    /// noise primitive can address.
    pub fn parse_seed(input: &str) -> Result<i32, WorldGenError> {
        input
            .trim()
            .parse()
            .map_err(|source| WorldGenError::InvalidSeed {
                input: input.to_owned(),
                source,
            })
    }

    /// Replace the seed, keeping every other option.
    #[must_use]
    pub const fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Check all option ranges before generation starts.
    pub fn validate(&self) -> Result<(), WorldGenError> {
        if self.max_load_radius < 0 {
            return Err(WorldGenError::InvalidConfig(format!(
                "max_load_radius must be non-negative, got {}",
                self.max_load_radius
            )));
        }
        if self.world_radius <= 0 {
            return Err(WorldGenError::InvalidConfig(format!(
                "world_radius must be positive, got {}",
                self.world_radius
            )));
        }
        if self.max_spawn_height <= 0 {
            return Err(WorldGenError::InvalidConfig(format!(
                "max_spawn_height must be positive, got {}",
                self.max_spawn_height
            )));
        }
        for (name, channel) in [
            ("height", self.height),
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("vegetation", self.vegetation),
        ] {
            if channel.octaves == 0 {
                return Err(WorldGenError::InvalidConfig(format!(
                    "{name} channel needs at least one octave"
                )));
            }
            if !channel.frequency.is_finite() || channel.frequency <= 0.0 {
                return Err(WorldGenError::InvalidConfig(format!(
                    "{name} channel frequency must be positive and finite, got {}",
                    channel.frequency
                )));
            }
        }
        Ok(())
    }
}
