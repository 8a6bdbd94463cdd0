//! **hexgrid-core** — hexagonal grid topology.
//!
//! This crate provides the foundational types used by the *hexgrid*
//! pathfinding engine: axial coordinates and their distance metric, the six
//! hex directions, elevation-based edge classification, and the
//! [`HexGrid`] tile arena with its fixed, symmetric adjacency.

pub mod coord;
pub mod direction;
pub mod edge;
pub mod error;
pub mod grid;
pub mod metrics;

pub use coord::AxialCoord;
pub use direction::HexDirection;
pub use edge::EdgeType;
pub use error::GridError;
pub use grid::{HexGrid, Tile, TileId};
pub use metrics::{INNER_RADIUS, OUTER_RADIUS, center_of};
