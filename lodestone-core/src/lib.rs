//! Deterministic voxel world generation.
//!
//! Given an integer seed, the pipeline computes a surface height, a climate
//! classification, and a vegetation decision for every column of a bounded
//! diamond region, then emits block placement records. The core never touches
//! an engine: callers hand in a [`worldgen::WorldBuilder`] sink and consume
//! the placements however they like.
//!
//! Everything is a pure function of `(config, x, z)` - re-running with the
//! same seed reproduces the world byte for byte.

pub mod config;
pub mod error;
pub mod worldgen;
