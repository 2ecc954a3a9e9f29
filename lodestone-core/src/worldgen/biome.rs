//! Biome classification.

/// Temperature below which a column is cold (taiga or snowy).
const MIN_TEMP_MILD: f64 = 0.35;
/// Temperature above which a column is hot (savannah or desert).
const MAX_TEMP_MILD: f64 = 0.65;
/// Humidity split between the dry and humid variant of each band.
const HUMID_SPLIT: f64 = 0.5;

/// Discrete climate classification for one column. Exactly one per column,
/// no blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Below sea level.
    Underwater,
    /// Cold, humid, and above the snow line.
    Snowy,
    /// Cold.
    Taiga,
    /// Mild and humid.
    Forest,
    /// Mild and dry.
    Grassland,
    /// Hot and humid.
    Savannah,
    /// Hot and dry.
    Desert,
}

impl Biome {
    /// Classify a column from its height and climate.
    ///
    /// Evaluated as an ordered rule list; the first matching rule wins and
    /// the ordering is part of the contract. All comparisons are strict, so
    /// at `temperature == 0.65` with `humidity <= 0.5` no earlier rule
    /// matches and the column falls through to desert.
    #[must_use]
    pub fn classify(
        height: i32,
        temperature: f64,
        humidity: f64,
        sea_level: i32,
        snow_line: i32,
    ) -> Self {
        if height < sea_level {
            Self::Underwater
        } else if temperature < MIN_TEMP_MILD && humidity > HUMID_SPLIT && height > snow_line {
            Self::Snowy
        } else if temperature < MIN_TEMP_MILD {
            Self::Taiga
        } else if temperature < MAX_TEMP_MILD && humidity > HUMID_SPLIT {
            Self::Forest
        } else if temperature < MAX_TEMP_MILD {
            Self::Grassland
        } else if temperature > MAX_TEMP_MILD && humidity > HUMID_SPLIT {
            Self::Savannah
        } else {
            Self::Desert
        }
    }

    /// Stable lowercase name, for digests and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Underwater => "underwater",
            Self::Snowy => "snowy",
            Self::Taiga => "taiga",
            Self::Forest => "forest",
            Self::Grassland => "grassland",
            Self::Savannah => "savannah",
            Self::Desert => "desert",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEA: i32 = 63;
    const SNOW: i32 = 168;

    fn classify(height: i32, temperature: f64, humidity: f64) -> Biome {
        Biome::classify(height, temperature, humidity, SEA, SNOW)
    }

    #[test]
    fn below_sea_level_wins_over_everything() {
        assert_eq!(classify(62, 0.1, 0.9), Biome::Underwater);
        assert_eq!(classify(0, 0.9, 0.1), Biome::Underwater);
    }

    #[test]
    fn cold_humid_high_is_snowy() {
        assert_eq!(classify(169, 0.2, 0.8), Biome::Snowy);
    }

    #[test]
    fn cold_below_snow_line_is_taiga() {
        assert_eq!(classify(168, 0.2, 0.8), Biome::Taiga);
        assert_eq!(classify(100, 0.2, 0.3), Biome::Taiga);
    }

    #[test]
    fn mild_band_splits_on_humidity() {
        assert_eq!(classify(100, 0.5, 0.8), Biome::Forest);
        assert_eq!(classify(100, 0.5, 0.5), Biome::Grassland);
    }

    #[test]
    fn hot_band_splits_on_humidity() {
        assert_eq!(classify(100, 0.9, 0.8), Biome::Savannah);
        assert_eq!(classify(100, 0.9, 0.2), Biome::Desert);
    }

    #[test]
    fn exact_mild_boundary_falls_through_to_desert() {
        // temperature == 0.65 matches neither `< 0.65` nor `> 0.65`;
        // with humidity <= 0.5 every earlier rule misses.
        assert_eq!(classify(100, 0.65, 0.5), Biome::Desert);
        assert_eq!(classify(100, 0.65, 0.2), Biome::Desert);
    }

    #[test]
    fn exact_mild_boundary_with_humidity_is_savannah_free() {
        // temperature == 0.65 with high humidity skips forest (needs < 0.65)
        // and savannah (needs > 0.65) alike.
        assert_eq!(classify(100, 0.65, 0.9), Biome::Desert);
    }

    #[test]
    fn classifier_is_total() {
        // Sweep a coarse grid; every input must map to some biome.
        for h in (0..256).step_by(16) {
            for t in 0..=10 {
                for m in 0..=10 {
                    let _ = classify(h, f64::from(t) / 10.0, f64::from(m) / 10.0);
                }
            }
        }
    }
}
