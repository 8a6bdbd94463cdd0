//! Shared model for the terminal pathfinding demo.
//!
//! Demonstrates: random terrain (hills, obstacles, a walled keep), stepwise
//! search with per-expansion rendering, and search restarts superseding the
//! previous run.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use hexgrid_core::{HexGrid, TileId};
use hexgrid_paths::{PathSearch, SearchError, SearchState, Step};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const WIDTH: usize = 32;
pub const HEIGHT: usize = 16;

const OBSTACLE_CHANCE: f64 = 0.12;
const HILLS: usize = 4;

// Colours
const COL_OPEN: Color = Color::DarkGrey;
const COL_OBSTACLE: Color = Color::Grey;
const COL_WALLED: Color = Color::DarkYellow;
const COL_VISITED: Color = Color::DarkCyan;
const COL_PATH: Color = Color::Cyan;
const COL_ENDPOINT: Color = Color::Yellow;

/// What a single tile looks like on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
}

/// The demo model: a grid, its search engine and the progress seen so far.
pub struct Demo {
    grid: HexGrid,
    search: PathSearch,
    rng: StdRng,
    visited: Vec<bool>,
    endpoints: Option<(TileId, TileId)>,
}

impl Demo {
    /// Build a demo with terrain generated from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = HexGrid::new(WIDTH, HEIGHT);
        generate_terrain(&mut grid, &mut rng);
        let visited = vec![false; grid.len()];
        Self {
            grid,
            search: PathSearch::new(),
            rng,
            visited,
            endpoints: None,
        }
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn search(&self) -> &PathSearch {
        &self.search
    }

    /// Start a search between two random open tiles, cancelling any search
    /// still in progress.
    ///
    /// Returns `Ok(None)` and leaves the current search alone when fewer than
    /// two tiles are open.
    pub fn restart(&mut self) -> Result<Option<(TileId, TileId)>, SearchError> {
        let open: Vec<TileId> = self
            .grid
            .ids()
            .filter(|&id| !self.grid.tile(id).has_obstacle())
            .collect();
        if open.len() < 2 {
            return Ok(None);
        }
        let i = self.rng.random_range(0..open.len());
        // Draw from the remaining tiles so the goal differs from the start.
        let mut j = self.rng.random_range(0..open.len() - 1);
        if j >= i {
            j += 1;
        }
        let (start, goal) = (open[i], open[j]);
        self.start_search(start, goal)?;
        Ok(Some((start, goal)))
    }

    /// Start a search between two chosen tiles.
    pub fn start_search(&mut self, start: TileId, goal: TileId) -> Result<(), SearchError> {
        self.search.begin(&self.grid, start, goal)?;
        self.visited.fill(false);
        self.endpoints = Some((start, goal));
        Ok(())
    }

    /// Advance the search by one expansion.
    pub fn tick(&mut self) -> Step {
        let step = self.search.step(&self.grid);
        if let Step::Expanded(id) | Step::Found(id) = step {
            self.visited[id.index()] = true;
        }
        step
    }

    /// Whether the current search has finished.
    pub fn is_done(&self) -> bool {
        matches!(
            self.search.state(),
            SearchState::Succeeded | SearchState::Exhausted
        )
    }

    /// One-line summary of the current search.
    pub fn status(&self) -> String {
        match self.search.state() {
            SearchState::Idle => "idle".to_string(),
            SearchState::Running => format!(
                "searching: {} expanded, {} in frontier",
                self.search.expanded(),
                self.search.frontier_len()
            ),
            SearchState::Succeeded => format!(
                "found a path of {} steps after {} expansions",
                self.search.path().map_or(0, |p| p.len() - 1),
                self.search.expanded()
            ),
            SearchState::Exhausted => format!(
                "goal unreachable ({} tiles explored)",
                self.search.expanded()
            ),
        }
    }

    /// How tile `id` should be drawn in the current state.
    pub fn glyph(&self, id: TileId) -> Glyph {
        if let Some((start, goal)) = self.endpoints {
            if id == start {
                return Glyph { ch: 'S', fg: COL_ENDPOINT };
            }
            if id == goal {
                return Glyph { ch: 'G', fg: COL_ENDPOINT };
            }
        }
        if self.search.path().is_some_and(|p| p.contains(&id)) {
            return Glyph { ch: 'o', fg: COL_PATH };
        }
        let tile = self.grid.tile(id);
        if tile.has_obstacle() {
            return Glyph { ch: '#', fg: COL_OBSTACLE };
        }
        if self.visited[id.index()] {
            return Glyph { ch: '*', fg: COL_VISITED };
        }
        let ch = match tile.elevation() {
            0 => '.',
            e @ 1..=9 => char::from_digit(e as u32, 10).unwrap_or('+'),
            _ => '+',
        };
        let fg = if tile.is_walled() { COL_WALLED } else { COL_OPEN };
        Glyph { ch, fg }
    }

    /// Draw the grid and status line at the top-left of `out`.
    ///
    /// Odd rows are indented by one column so the stagger is visible.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for row in 0..self.grid.height() {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            if row % 2 == 1 {
                queue!(out, Print(' '))?;
            }
            for col in 0..self.grid.width() {
                let Some(id) = self.grid.offset_id(col as i32, row as i32) else {
                    continue;
                };
                let g = self.glyph(id);
                queue!(out, SetForegroundColor(g.fg), Print(g.ch), Print(' '))?;
            }
        }
        queue!(
            out,
            ResetColor,
            cursor::MoveTo(0, self.grid.height() as u16 + 1),
            Print(format!("{:<60}", self.status()))
        )?;
        out.flush()
    }
}

/// Scatter hills, obstacles and a walled keep over `grid`.
pub fn generate_terrain(grid: &mut HexGrid, rng: &mut impl Rng) {
    let ids: Vec<TileId> = grid.ids().collect();

    // Hills: elevation falls off by one per step from each peak.
    for _ in 0..HILLS {
        let peak = TileId(rng.random_range(0..grid.len()));
        let height = rng.random_range(2..5);
        for &id in &ids {
            let d = grid.distance(peak, id) as i32;
            let e = height - d;
            if e > grid.tile(id).elevation() {
                grid.set_elevation(id, e);
            }
        }
    }

    // Keep: a walled disc around a random center.
    let center = TileId(rng.random_range(0..grid.len()));
    for &id in &ids {
        if grid.distance(center, id) <= 2 {
            grid.set_walled(id, true);
        }
    }

    for &id in &ids {
        if rng.random_bool(OBSTACLE_CHANCE) {
            grid.set_obstacle(id, true);
        }
    }
}
