//! Shortest-path search on hexagonal grids.
//!
//! This crate builds on [`hexgrid_core`] and provides:
//!
//! - [`BucketQueue`], a monotonic priority queue for small integer
//!   priorities with in-place priority decrease
//! - [`PathSearch`], a reusable best-first search (Dijkstra guided by the
//!   admissible hex-distance heuristic) that can be driven to completion or
//!   one expansion at a time for visualization
//!
//! Terrain constraints are expressed through the [`Traversal`] trait.
//! [`TerrainRules`] is the default: obstacles are impassable, and cliffs and
//! wall boundaries are blocked as configured by [`SearchConfig`].
//!
//! ```
//! use hexgrid_core::HexGrid;
//! use hexgrid_paths::PathSearch;
//!
//! let mut grid = HexGrid::new(5, 5);
//! let start = grid.offset_id(0, 0).unwrap();
//! let goal = grid.offset_id(4, 4).unwrap();
//! grid.set_obstacle(grid.offset_id(2, 2).unwrap(), true);
//!
//! let mut search = PathSearch::new();
//! let path = search.find_path(&grid, start, goal).unwrap().unwrap();
//! assert_eq!(path.len() - 1, 6);
//! ```

mod bucket;
mod config;
mod error;
mod search;
mod traits;

pub use bucket::BucketQueue;
pub use config::SearchConfig;
pub use error::SearchError;
pub use search::{Expansions, PathSearch, SearchId, SearchState, Step, UNREACHABLE};
pub use traits::{TerrainRules, Traversal};
