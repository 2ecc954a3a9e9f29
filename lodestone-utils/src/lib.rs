//! Shared utilities for the Lodestone world generator.
//!
//! Contains the math helpers and the noise primitives that `lodestone-core`
//! builds its terrain, climate, and vegetation fields from.

pub mod math;
pub mod noise;
