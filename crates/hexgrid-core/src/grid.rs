//! The [`HexGrid`] type — a fixed arena of hex [`Tile`]s and their adjacency.
//!
//! Tiles are addressed by [`TileId`], a stable index into the arena. Neighbor
//! links are stored as ids, one slot per [`HexDirection`], and are only ever
//! written in pairs so that `a.neighbor(d) == b` implies
//! `b.neighbor(d.opposite()) == a`.

use crate::coord::AxialCoord;
use crate::direction::HexDirection;
use crate::edge::EdgeType;
use crate::error::GridError;

// ---------------------------------------------------------------------------
// TileId
// ---------------------------------------------------------------------------

/// Stable index of a tile inside its [`HexGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub usize);

impl TileId {
    /// The underlying arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for TileId {
    fn from(i: usize) -> Self {
        Self(i)
    }
}

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A single grid cell: its position, terrain and links to adjacent tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    coord: AxialCoord,
    elevation: i32,
    obstacle: bool,
    walled: bool,
    neighbors: [Option<TileId>; 6],
}

impl Tile {
    fn new(coord: AxialCoord) -> Self {
        Self {
            coord,
            elevation: 0,
            obstacle: false,
            walled: false,
            neighbors: [None; 6],
        }
    }

    #[inline]
    pub fn coord(&self) -> AxialCoord {
        self.coord
    }

    #[inline]
    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    /// Whether the tile is blocked and can never be entered.
    #[inline]
    pub fn has_obstacle(&self) -> bool {
        self.obstacle
    }

    #[inline]
    pub fn is_walled(&self) -> bool {
        self.walled
    }

    /// The adjacent tile in direction `dir`, or `None` at the grid boundary.
    #[inline]
    pub fn neighbor(&self, dir: HexDirection) -> Option<TileId> {
        self.neighbors[dir.index()]
    }

    pub fn set_elevation(&mut self, elevation: i32) {
        self.elevation = elevation;
    }

    pub fn set_obstacle(&mut self, obstacle: bool) {
        self.obstacle = obstacle;
    }

    pub fn set_walled(&mut self, walled: bool) {
        self.walled = walled;
    }
}

// ---------------------------------------------------------------------------
// HexGrid
// ---------------------------------------------------------------------------

/// A rectangular arrangement of hex tiles in row-major order.
///
/// Odd rows are staggered half a cell to the right. The adjacency graph is
/// built once by [`HexGrid::new`] and never changes; only terrain attributes
/// are mutable afterwards.
#[derive(Debug, Clone)]
pub struct HexGrid {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl HexGrid {
    /// Build a `width` × `height` grid of flat, open tiles.
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = Self {
            tiles: Vec::with_capacity(width * height),
            width,
            height,
        };
        for row in 0..height {
            for col in 0..width {
                grid.push_tile(col, row);
            }
        }
        log::debug!("built {}x{} hex grid ({} tiles)", width, height, grid.len());
        grid
    }

    /// Create the tile at (`col`, `row`) and link it to the neighbors that
    /// already exist (west, and the row below).
    fn push_tile(&mut self, col: usize, row: usize) {
        let id = TileId(self.tiles.len());
        self.tiles
            .push(Tile::new(AxialCoord::from_offset(col as i32, row as i32)));

        if col > 0 {
            self.link(id, HexDirection::W, TileId(id.0 - 1));
        }
        if row > 0 {
            let below = id.0 - self.width;
            if row & 1 == 0 {
                self.link(id, HexDirection::SE, TileId(below));
                if col > 0 {
                    self.link(id, HexDirection::SW, TileId(below - 1));
                }
            } else {
                self.link(id, HexDirection::SW, TileId(below));
                if col + 1 < self.width {
                    self.link(id, HexDirection::SE, TileId(below + 1));
                }
            }
        }
    }

    /// Link `a` to `b` in direction `dir` and `b` back to `a`.
    fn link(&mut self, a: TileId, dir: HexDirection, b: TileId) {
        self.tiles[a.0].neighbors[dir.index()] = Some(b);
        self.tiles[b.0].neighbors[dir.opposite().index()] = Some(a);
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `id` addresses a tile of this grid.
    #[inline]
    pub fn contains(&self, id: TileId) -> bool {
        id.0 < self.tiles.len()
    }

    /// The tile with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this grid.
    #[inline]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.0]
    }

    /// Mutable access to a tile's terrain.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this grid.
    #[inline]
    pub fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id.0]
    }

    /// The tile with the given id, or `None` if it is not part of the grid.
    #[inline]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    /// Id of the tile at offset position (`col`, `row`).
    pub fn offset_id(&self, col: i32, row: i32) -> Option<TileId> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(TileId(row * self.width + col))
    }

    /// Like [`offset_id`](Self::offset_id), but reports the miss as an error.
    pub fn try_offset(&self, col: i32, row: i32) -> Result<TileId, GridError> {
        self.offset_id(col, row).ok_or(GridError::OffsetOutsideGrid {
            col,
            row,
            width: self.width,
            height: self.height,
        })
    }

    /// Id of the tile at an axial coordinate.
    pub fn find(&self, coord: AxialCoord) -> Option<TileId> {
        let (col, row) = coord.to_offset();
        self.offset_id(col, row)
    }

    /// The neighbor of `id` in direction `dir`, or `None` at the boundary.
    #[inline]
    pub fn neighbor(&self, id: TileId, dir: HexDirection) -> Option<TileId> {
        self.tile(id).neighbor(dir)
    }

    /// All linked neighbors of `id` with their directions.
    pub fn neighbors(&self, id: TileId) -> impl Iterator<Item = (HexDirection, TileId)> + '_ {
        let tile = self.tile(id);
        HexDirection::ALL
            .into_iter()
            .filter_map(move |dir| tile.neighbor(dir).map(|n| (dir, n)))
    }

    /// Classify the edge between two tiles by their elevations.
    #[inline]
    pub fn edge_type(&self, a: TileId, b: TileId) -> EdgeType {
        EdgeType::between(self.tile(a).elevation, self.tile(b).elevation)
    }

    /// Classify the edge leaving `id` in direction `dir`, if there is one.
    pub fn edge_type_toward(&self, id: TileId, dir: HexDirection) -> Option<EdgeType> {
        self.neighbor(id, dir).map(|n| self.edge_type(id, n))
    }

    /// Hex distance between two tiles.
    #[inline]
    pub fn distance(&self, a: TileId, b: TileId) -> u32 {
        self.tile(a).coord.distance_to(self.tile(b).coord)
    }

    /// Set a tile's elevation.
    pub fn set_elevation(&mut self, id: TileId, elevation: i32) {
        self.tile_mut(id).set_elevation(elevation);
    }

    /// Mark a tile as blocked or open.
    pub fn set_obstacle(&mut self, id: TileId, obstacle: bool) {
        self.tile_mut(id).set_obstacle(obstacle);
    }

    /// Mark a tile as walled or unwalled.
    pub fn set_walled(&mut self, id: TileId, walled: bool) {
        self.tile_mut(id).set_walled(walled);
    }

    /// Iterator over every tile id in row-major order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = TileId> {
        (0..self.tiles.len()).map(TileId)
    }

    /// Iterator over `(id, tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles.iter().enumerate().map(|(i, t)| (TileId(i), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn construction_is_row_major() {
        let g = HexGrid::new(4, 3);
        assert_eq!(g.len(), 12);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        let id = g.offset_id(2, 1).unwrap();
        assert_eq!(id, TileId(6));
        assert_eq!(g.tile(id).coord(), AxialCoord::from_offset(2, 1));
    }

    #[test]
    fn empty_grid() {
        let g = HexGrid::new(0, 5);
        assert!(g.is_empty());
        assert_eq!(g.offset_id(0, 0), None);
    }

    #[test]
    fn interior_tile_has_six_neighbors() {
        let g = HexGrid::new(5, 5);
        let id = g.offset_id(2, 2).unwrap();
        assert_eq!(g.neighbors(id).count(), 6);
    }

    #[test]
    fn corner_tile_reports_missing_neighbors() {
        let g = HexGrid::new(5, 5);
        let id = g.offset_id(0, 0).unwrap();
        assert_eq!(g.neighbor(id, HexDirection::W), None);
        assert_eq!(g.neighbor(id, HexDirection::SW), None);
        assert_eq!(g.neighbor(id, HexDirection::SE), None);
        assert_eq!(g.neighbor(id, HexDirection::E), g.offset_id(1, 0));
        assert_eq!(g.neighbor(id, HexDirection::NE), g.offset_id(0, 1));
        assert_eq!(g.neighbors(id).count(), 2);
    }

    #[test]
    fn row_parity_linking() {
        let g = HexGrid::new(5, 5);
        // Odd row: SW is straight below, SE is below and to the right.
        let odd = g.offset_id(2, 1).unwrap();
        assert_eq!(g.neighbor(odd, HexDirection::SW), g.offset_id(2, 0));
        assert_eq!(g.neighbor(odd, HexDirection::SE), g.offset_id(3, 0));
        // Even row: SE is straight below, SW is below and to the left.
        let even = g.offset_id(2, 2).unwrap();
        assert_eq!(g.neighbor(even, HexDirection::SE), g.offset_id(2, 1));
        assert_eq!(g.neighbor(even, HexDirection::SW), g.offset_id(1, 1));
    }

    #[test]
    fn linked_neighbors_match_coordinate_steps() {
        let g = HexGrid::new(6, 6);
        for id in g.ids() {
            for (dir, n) in g.neighbors(id) {
                assert_eq!(g.tile(id).coord().neighbor(dir), g.tile(n).coord());
            }
        }
    }

    #[test]
    fn find_by_coordinate() {
        let g = HexGrid::new(5, 5);
        let id = g.offset_id(3, 4).unwrap();
        assert_eq!(g.find(g.tile(id).coord()), Some(id));
        assert_eq!(g.find(AxialCoord::new(-5, 0)), None);
    }

    #[test]
    fn try_offset_reports_error() {
        let g = HexGrid::new(3, 2);
        assert!(g.try_offset(2, 1).is_ok());
        let err = g.try_offset(3, 0).unwrap_err();
        assert_eq!(
            err,
            GridError::OffsetOutsideGrid {
                col: 3,
                row: 0,
                width: 3,
                height: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "offset position (3, 0) is outside the 3x2 grid"
        );
    }

    #[test]
    fn edge_types_follow_elevation() {
        let mut g = HexGrid::new(3, 1);
        let (a, b, c) = (TileId(0), TileId(1), TileId(2));
        g.set_elevation(b, 1);
        g.set_elevation(c, 3);
        assert_eq!(g.edge_type(a, a), EdgeType::Flat);
        assert_eq!(g.edge_type(a, b), EdgeType::Slope);
        assert_eq!(g.edge_type(b, c), EdgeType::Cliff);
        assert_eq!(g.edge_type_toward(b, HexDirection::E), Some(EdgeType::Cliff));
        assert_eq!(g.edge_type_toward(a, HexDirection::W), None);
    }

    #[test]
    fn terrain_setters() {
        let mut g = HexGrid::new(2, 2);
        let id = TileId(3);
        g.set_obstacle(id, true);
        g.set_walled(id, true);
        g.tile_mut(id).set_elevation(-2);
        let t = g.tile(id);
        assert!(t.has_obstacle());
        assert!(t.is_walled());
        assert_eq!(t.elevation(), -2);
        assert_eq!(g.get(TileId(4)), None);
        assert!(!g.contains(TileId(4)));
    }

    #[test]
    fn distance_between_tiles() {
        let g = HexGrid::new(5, 5);
        let a = g.offset_id(0, 0).unwrap();
        let b = g.offset_id(4, 4).unwrap();
        assert_eq!(g.distance(a, b), 6);
        assert_eq!(g.distance(b, a), 6);
    }

    proptest! {
        #[test]
        fn neighbor_links_are_symmetric(w in 1usize..12, h in 1usize..12) {
            let g = HexGrid::new(w, h);
            for id in g.ids() {
                for (dir, n) in g.neighbors(id) {
                    prop_assert_eq!(g.neighbor(n, dir.opposite()), Some(id));
                }
            }
        }
    }
}
