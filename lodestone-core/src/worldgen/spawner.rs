//! Per-biome surface, subsurface, and vegetation rules.
//!
//! For every classified column the spawner emits one surface block, one
//! hole-plugging block below it (underwater columns emit a single floor
//! block instead), and optionally vegetation. Vegetation presence, species,
//! and trunk height are all driven by the column's single vegetation score,
//! gated by a checkerboard parity filter that keeps tufts and trees from
//! forming dense uniform rows.

use glam::IVec3;
use smallvec::SmallVec;

use crate::config::{BiomeThresholds, GrassTints, VegetationThresholds, WorldConfig};

use super::{Biome, BlockKind, BlockPlacement, Column, Rgb};

/// Placement batch for one column. Stays inline for the common case of a
/// surface block, a plug, and a short tree.
pub type ColumnPlacements = SmallVec<[BlockPlacement; 6]>;

/// Vegetation category chosen for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VegetationKind {
    /// Nothing grows here.
    None,
    /// Decorative grass tuft.
    Tuft,
    /// Cactus column (desert).
    Cactus,
    /// Oak tree.
    Oak,
    /// Birch tree.
    Birch,
    /// Acacia tree.
    Acacia,
    /// Pine tree.
    Pine,
    /// Snow-covered pine tree.
    SnowyPine,
}

/// Outcome of the vegetation roll for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VegetationDecision {
    /// What grows here, if anything.
    pub kind: VegetationKind,
    /// Extra trunk blocks below the canopy, 0 to 2.
    pub trunk_extra: i32,
}

impl VegetationDecision {
    /// No vegetation.
    pub const NONE: Self = Self {
        kind: VegetationKind::None,
        trunk_extra: 0,
    };
}

/// Emits block placements for classified columns.
#[derive(Debug, Clone)]
pub struct BiomeSpawner {
    thresholds: BiomeThresholds,
    tints: GrassTints,
    sea_level: i32,
}

impl BiomeSpawner {
    /// Capture the per-biome rules from the config.
    #[must_use]
    pub const fn new(config: &WorldConfig) -> Self {
        Self {
            thresholds: config.thresholds,
            tints: config.tints,
            sea_level: config.sea_level,
        }
    }

    /// Emit all placements for one column, as a single atomic batch.
    #[must_use]
    pub fn spawn_column(&self, column: &Column) -> ColumnPlacements {
        let mut out = ColumnPlacements::new();
        let surface = IVec3::new(column.x, column.height, column.z);

        match column.biome {
            Biome::Underwater => {
                // The top two blocks below sea level stay dirt; anything
                // deeper is stone. Never any vegetation.
                let kind = if self.sea_level - column.height < 3 {
                    BlockKind::Dirt
                } else {
                    BlockKind::Stone
                };
                out.push(BlockPlacement::new(surface, kind));
                return out;
            }
            Biome::Desert => {
                out.push(BlockPlacement::new(surface, BlockKind::Sand));
                out.push(BlockPlacement::new(surface - IVec3::Y, BlockKind::Sand));
            }
            Biome::Snowy => Self::spawn_grass_surface(surface, self.tints.snowy, &mut out),
            Biome::Taiga => Self::spawn_grass_surface(surface, self.tints.taiga, &mut out),
            Biome::Forest | Biome::Grassland => {
                Self::spawn_grass_surface(surface, self.tints.mild, &mut out);
            }
            Biome::Savannah => Self::spawn_grass_surface(surface, self.tints.savannah, &mut out),
        }

        let decision = self.decide_vegetation(column);
        Self::emit_vegetation(column, decision, &mut out);
        out
    }

    /// Tinted grass block plus the dirt plug one below.
    fn spawn_grass_surface(surface: IVec3, tint: Rgb, out: &mut ColumnPlacements) {
        out.push(BlockPlacement::tinted(surface, BlockKind::GrassBlock, tint));
        out.push(BlockPlacement::new(surface - IVec3::Y, BlockKind::Dirt));
    }

    /// Roll the vegetation decision for a column.
    ///
    /// The parity of `|x + z|` alternates which class is eligible: tufts on
    /// even columns, trees on odd ones. On tree columns the rarer species is
    /// checked before the common one, so its narrower score window wins.
    #[must_use]
    pub fn decide_vegetation(&self, column: &Column) -> VegetationDecision {
        let Some(thresholds) = self.thresholds_for(column.biome) else {
            return VegetationDecision::NONE;
        };
        let score = column.vegetation;
        let (rare, common) = Self::species(column.biome);

        let kind = if (column.x + column.z).abs() % 2 == 0 {
            match thresholds.tuft {
                Some(bound) if score < bound => VegetationKind::Tuft,
                _ => VegetationKind::None,
            }
        } else {
            Self::pick_tree(rare, thresholds.rare_tree, score)
                .or_else(|| Self::pick_tree(common, thresholds.tree, score))
                .unwrap_or(VegetationKind::None)
        };

        VegetationDecision {
            kind,
            trunk_extra: Self::trunk_extra(score),
        }
    }

    /// Extra trunk height from the vegetation score: `floor(score * 100) mod 3`.
    ///
    /// The same score already decided whether the tree exists at all; the
    /// thresholds were tuned against that coupling, so it stays.
    #[must_use]
    pub fn trunk_extra(score: f64) -> i32 {
        (score * 100.0).floor() as i32 % 3
    }

    fn pick_tree(
        kind: Option<VegetationKind>,
        bound: Option<f64>,
        score: f64,
    ) -> Option<VegetationKind> {
        match (kind, bound) {
            (Some(kind), Some(bound)) if score > bound => Some(kind),
            _ => None,
        }
    }

    /// The rare and common tree species of a biome.
    const fn species(biome: Biome) -> (Option<VegetationKind>, Option<VegetationKind>) {
        match biome {
            Biome::Underwater => (None, None),
            Biome::Snowy => (None, Some(VegetationKind::SnowyPine)),
            Biome::Taiga => (None, Some(VegetationKind::Pine)),
            Biome::Forest | Biome::Grassland => {
                (Some(VegetationKind::Birch), Some(VegetationKind::Oak))
            }
            Biome::Savannah => (None, Some(VegetationKind::Acacia)),
            Biome::Desert => (None, Some(VegetationKind::Cactus)),
        }
    }

    const fn thresholds_for(&self, biome: Biome) -> Option<&VegetationThresholds> {
        match biome {
            Biome::Underwater => None,
            Biome::Snowy => Some(&self.thresholds.snowy),
            Biome::Taiga => Some(&self.thresholds.taiga),
            Biome::Forest => Some(&self.thresholds.forest),
            Biome::Grassland => Some(&self.thresholds.grassland),
            Biome::Savannah => Some(&self.thresholds.savannah),
            Biome::Desert => Some(&self.thresholds.desert),
        }
    }

    /// Stack the trunk upward from one above the surface, canopy on top.
    fn emit_vegetation(column: &Column, decision: VegetationDecision, out: &mut ColumnPlacements) {
        let mut pos = IVec3::new(column.x, column.height + 1, column.z);

        let (wood, canopy) = match decision.kind {
            VegetationKind::None => return,
            VegetationKind::Tuft => {
                out.push(BlockPlacement::new(pos, BlockKind::GrassTuft));
                return;
            }
            VegetationKind::Cactus => (BlockKind::Cactus, BlockKind::Cactus),
            VegetationKind::Oak => (BlockKind::OakWood, BlockKind::OakCanopy),
            VegetationKind::Birch => (BlockKind::BirchWood, BlockKind::BirchCanopy),
            VegetationKind::Acacia => (BlockKind::AcaciaWood, BlockKind::AcaciaCanopy),
            VegetationKind::Pine => (BlockKind::PineWood, BlockKind::PineCanopy),
            VegetationKind::SnowyPine => (BlockKind::PineWood, BlockKind::SnowyPineCanopy),
        };

        for _ in 0..decision.trunk_extra {
            out.push(BlockPlacement::new(pos, wood));
            pos.y += 1;
        }
        out.push(BlockPlacement::new(pos, canopy));
    }
}
