//! Generation entry point: traversal, parallel column work, ordered emission.

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::config::WorldConfig;
use crate::error::WorldGenError;

use super::spawner::{BiomeSpawner, ColumnPlacements};
use super::{ColumnSampler, WorldBuilder, columns};

/// Counters reported after a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    /// Columns computed.
    pub columns: usize,
    /// Placements handed to the world builder.
    pub placements: usize,
}

/// Drives a full generation run for one world configuration.
///
/// Everything is passed in explicitly - the config and the output sink -
/// so there is no process-wide state anywhere in the pipeline.
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    config: WorldConfig,
    sampler: ColumnSampler,
    spawner: BiomeSpawner,
}

impl WorldGenerator {
    /// Validate the configuration and wire the samplers.
    pub fn new(config: WorldConfig) -> Result<Self, WorldGenError> {
        config.validate()?;
        let sampler = ColumnSampler::new(&config);
        let spawner = BiomeSpawner::new(&config);
        Ok(Self {
            config,
            sampler,
            spawner,
        })
    }

    /// The column sampler, for spawn-point probing and tests.
    #[must_use]
    pub const fn sampler(&self) -> &ColumnSampler {
        &self.sampler
    }

    /// The configuration this generator was built from.
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Generate the whole diamond region into `builder`.
    ///
    /// Columns are pure functions of `(config, x, z)`, so they are computed
    /// in parallel; the order-preserving collect keeps emission in
    /// quadrant-then-scan order, which keeps progressive loading viable for
    /// the consumer. Cancellation is checked per column and each column's
    /// batch is emitted atomically - a cancelled run never leaves a
    /// half-emitted column behind.
    #[tracing::instrument(level = "debug", skip_all, name = "generate_world")]
    pub fn generate(
        &self,
        builder: &mut dyn WorldBuilder,
        cancel: &CancellationToken,
    ) -> Result<GenerationSummary, WorldGenError> {
        let coords: Vec<(i32, i32)> = columns(self.config.max_load_radius).collect();
        log::info!(
            "generating {} columns (radius {}, seed {})",
            coords.len(),
            self.config.max_load_radius,
            self.config.seed
        );

        let batches: Vec<ColumnPlacements> = coords
            .par_iter()
            .map(|&(x, z)| {
                if cancel.is_cancelled() {
                    return ColumnPlacements::new();
                }
                let column = self.sampler.sample(x, z);
                self.spawner.spawn_column(&column)
            })
            .collect();

        if cancel.is_cancelled() {
            return Err(WorldGenError::Cancelled);
        }

        let mut summary = GenerationSummary {
            columns: coords.len(),
            placements: 0,
        };
        for batch in &batches {
            if cancel.is_cancelled() {
                return Err(WorldGenError::Cancelled);
            }
            for &placement in batch {
                builder.place(placement);
            }
            summary.placements += batch.len();
        }

        log::info!("emitted {} placements", summary.placements);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::super::CollectingBuilder;
    use super::*;

    fn generator(seed: i32, radius: i32) -> WorldGenerator {
        let config = WorldConfig {
            seed,
            max_load_radius: radius,
            ..WorldConfig::default()
        };
        WorldGenerator::new(config).expect("valid config")
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let config = WorldConfig {
            max_load_radius: -5,
            ..WorldConfig::default()
        };
        assert!(matches!(
            WorldGenerator::new(config),
            Err(WorldGenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn radius_zero_emits_only_the_origin_column() {
        let generator = generator(12_345_678, 0);
        let mut builder = CollectingBuilder::default();
        let summary = generator
            .generate(&mut builder, &CancellationToken::new())
            .expect("generation");

        assert_eq!(summary.columns, 1);
        assert!(!builder.placements.is_empty());
        for placement in &builder.placements {
            assert_eq!(placement.pos.x, 0);
            assert_eq!(placement.pos.z, 0);
        }

        // The origin column's surface block sits at the sampled height.
        let column = generator.sampler().sample(0, 0);
        assert!((0..=256).contains(&column.height));
        assert_eq!(builder.placements[0].pos.y, column.height);
    }

    #[test]
    fn pre_cancelled_run_emits_nothing() {
        let generator = generator(1, 8);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut builder = CollectingBuilder::default();
        let err = generator
            .generate(&mut builder, &cancel)
            .expect_err("should cancel");
        assert!(matches!(err, WorldGenError::Cancelled));
        assert!(builder.placements.is_empty());
    }

    #[test]
    fn summary_counts_match_the_builder() {
        let generator = generator(42, 6);
        let mut builder = CollectingBuilder::default();
        let summary = generator
            .generate(&mut builder, &CancellationToken::new())
            .expect("generation");

        assert_eq!(summary.columns, 85); // 2*6*6 + 2*6 + 1
        assert_eq!(summary.placements, builder.placements.len());
    }
}
