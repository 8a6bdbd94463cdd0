use hexgrid_core::{EdgeType, HexGrid, TileId};

use crate::config::SearchConfig;

/// Rules deciding which edges a search may cross and what they cost.
pub trait Traversal {
    /// Whether a path may step from `from` into its neighbor `to`.
    fn can_traverse(&self, grid: &HexGrid, from: TileId, to: TileId) -> bool;

    /// Cost of stepping from `from` into its neighbor `to`. Must be >= 1.
    ///
    /// Priorities index the search's bucket queue directly, so costs and
    /// estimates should stay small. A step whose accumulated cost would
    /// overflow `u32` is treated as impassable.
    fn cost(&self, _grid: &HexGrid, _from: TileId, _to: TileId) -> u32 {
        1
    }

    /// Estimate of the remaining cost from `from` to `goal`.
    ///
    /// Must never overestimate the true cost (admissible). It need not be
    /// consistent: an expanded tile that is later reached more cheaply is
    /// queued again.
    fn estimate(&self, grid: &HexGrid, from: TileId, goal: TileId) -> u32 {
        grid.distance(from, goal)
    }
}

/// The default terrain rules: obstacles are impassable, cliffs and wall
/// boundaries optionally so. Every step costs 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainRules {
    config: SearchConfig,
}

impl TerrainRules {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for TerrainRules {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl From<SearchConfig> for TerrainRules {
    fn from(config: SearchConfig) -> Self {
        Self::new(config)
    }
}

impl Traversal for TerrainRules {
    fn can_traverse(&self, grid: &HexGrid, from: TileId, to: TileId) -> bool {
        let (a, b) = (grid.tile(from), grid.tile(to));
        if b.has_obstacle() {
            return false;
        }
        if self.config.block_cliffs && grid.edge_type(from, to) == EdgeType::Cliff {
            return false;
        }
        if self.config.respect_walls && a.is_walled() != b.is_walled() {
            return false;
        }
        true
    }

    fn estimate(&self, grid: &HexGrid, from: TileId, goal: TileId) -> u32 {
        if self.config.use_heuristic {
            grid.distance(from, goal)
        } else {
            0
        }
    }
}
