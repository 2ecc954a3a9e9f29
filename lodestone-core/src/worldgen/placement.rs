//! Block placement records and the output sink they are handed to.
//!
//! Placements are the only externally visible artifact of the generation
//! core. The core never instantiates renderable or physical objects; an
//! external world builder implements [`WorldBuilder`] and consumes the
//! records however it likes.

use glam::IVec3;
use serde::Deserialize;

/// Materials the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Deep underwater filler.
    Stone,
    /// Desert surface and subsurface.
    Sand,
    /// Subsurface hole plug and shallow underwater floor.
    Dirt,
    /// Tintable grass surface block.
    GrassBlock,
    /// Decorative grass tuft.
    GrassTuft,
    /// Cactus segment.
    Cactus,
    /// Oak trunk block.
    OakWood,
    /// Oak foliage top.
    OakCanopy,
    /// Birch trunk block.
    BirchWood,
    /// Birch foliage top.
    BirchCanopy,
    /// Acacia trunk block.
    AcaciaWood,
    /// Acacia foliage top.
    AcaciaCanopy,
    /// Pine trunk block.
    PineWood,
    /// Pine foliage top.
    PineCanopy,
    /// Snow-covered pine foliage top.
    SnowyPineCanopy,
}

impl BlockKind {
    /// Stable identifier, for digests and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stone => "stone",
            Self::Sand => "sand",
            Self::Dirt => "dirt",
            Self::GrassBlock => "grass_block",
            Self::GrassTuft => "grass_tuft",
            Self::Cactus => "cactus",
            Self::OakWood => "oak_wood",
            Self::OakCanopy => "oak_canopy",
            Self::BirchWood => "birch_wood",
            Self::BirchCanopy => "birch_canopy",
            Self::AcaciaWood => "acacia_wood",
            Self::AcaciaCanopy => "acacia_canopy",
            Self::PineWood => "pine_wood",
            Self::PineCanopy => "pine_canopy",
            Self::SnowyPineCanopy => "snowy_pine_canopy",
        }
    }
}

/// RGB tint applied to tintable surface blocks, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Rgb {
    /// Create a tint from its components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// One emitted block instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPlacement {
    /// World position.
    pub pos: IVec3,
    /// Material kind.
    pub kind: BlockKind,
    /// Optional tint; grass surface blocks carry their biome tint.
    pub tint: Option<Rgb>,
}

impl BlockPlacement {
    /// An untinted placement.
    #[must_use]
    pub const fn new(pos: IVec3, kind: BlockKind) -> Self {
        Self {
            pos,
            kind,
            tint: None,
        }
    }

    /// A tinted placement.
    #[must_use]
    pub const fn tinted(pos: IVec3, kind: BlockKind, tint: Rgb) -> Self {
        Self {
            pos,
            kind,
            tint: Some(tint),
        }
    }
}

/// Output sink for generated placements.
///
/// The generator emits each column's placements as one uninterrupted batch,
/// so a builder never observes a half-emitted column even when the run is
/// cancelled.
pub trait WorldBuilder {
    /// Accept one placement.
    fn place(&mut self, placement: BlockPlacement);
}

/// [`WorldBuilder`] that collects every placement in emission order.
///
/// Used by tests and the command-line entry point; engine integrations
/// substitute their own sink.
#[derive(Debug, Default)]
pub struct CollectingBuilder {
    /// Collected placements.
    pub placements: Vec<BlockPlacement>,
}

impl WorldBuilder for CollectingBuilder {
    fn place(&mut self, placement: BlockPlacement) {
        self.placements.push(placement);
    }
}
