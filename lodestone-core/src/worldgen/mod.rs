//! World generation pipeline.
//!
//! Data flows strictly downward: the seed-derived [`NoiseOffsets`] feed the
//! four fractal fields in [`ColumnSampler`], whose output is classified into
//! a [`Biome`] and turned into block placements by the [`BiomeSpawner`],
//! driven over the diamond region by [`columns`] and orchestrated by
//! [`WorldGenerator`].

mod biome;
mod column_sampler;
mod generator;
mod offsets;
mod placement;
mod spawner;
mod traversal;

pub use biome::Biome;
pub use column_sampler::{Column, ColumnSampler};
pub use generator::{GenerationSummary, WorldGenerator};
pub use offsets::NoiseOffsets;
pub use placement::{BlockKind, BlockPlacement, CollectingBuilder, Rgb, WorldBuilder};
pub use spawner::{BiomeSpawner, ColumnPlacements, VegetationDecision, VegetationKind};
pub use traversal::columns;
