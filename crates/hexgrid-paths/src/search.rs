//! Incremental best-first search over a [`HexGrid`].
//!
//! [`PathSearch`] owns the per-tile search state and the frontier queue so that
//! repeated searches allocate nothing after warm-up. A search is started with
//! [`begin`](PathSearch::begin) and advanced one expansion at a time with
//! [`step`](PathSearch::step), which lets a caller render progress between
//! expansions. Starting a new search supersedes the previous one.

use hexgrid_core::{HexGrid, TileId};

use crate::bucket::BucketQueue;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::traits::{TerrainRules, Traversal};

/// Sentinel distance for tiles not reached by the current search.
pub const UNREACHABLE: u32 = u32::MAX;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-tile search node
// ---------------------------------------------------------------------------

/// Transient search fields of one tile. Only meaningful when `generation`
/// matches the search's current generation; any other node counts as
/// unreached.
#[derive(Clone)]
struct Node {
    distance: u32,
    heuristic: u32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Node {
    #[inline]
    fn priority(&self) -> u32 {
        self.distance.saturating_add(self.heuristic)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            heuristic: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Public state types
// ---------------------------------------------------------------------------

/// Identifies one search started by [`PathSearch::begin`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchId(u32);

/// Lifecycle of a [`PathSearch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// No search has been started, or the last one was cancelled.
    Idle,
    /// The frontier is non-empty and the goal has not been dequeued yet.
    Running,
    /// The goal was reached; the path is available.
    Succeeded,
    /// The frontier ran dry without reaching the goal.
    Exhausted,
}

/// Outcome of a single [`PathSearch::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A tile was dequeued and its neighbors relaxed.
    Expanded(TileId),
    /// The goal was dequeued; the search succeeded.
    Found(TileId),
    /// The frontier is empty; the goal is unreachable.
    Exhausted,
    /// No search is running.
    Idle,
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable shortest-path search engine for hex grids.
///
/// The frontier is ordered by `distance + estimate`, where the estimate comes
/// from the [`Traversal`] rules (hex distance to the goal by default). At most
/// one search is active at a time.
pub struct PathSearch<T: Traversal = TerrainRules> {
    rules: T,
    nodes: Vec<Node>,
    generation: u32,
    frontier: BucketQueue,
    state: SearchState,
    start: TileId,
    goal: TileId,
    path: Vec<TileId>,
    expanded: usize,
}

impl Default for PathSearch<TerrainRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSearch<TerrainRules> {
    /// Create a search using the default terrain rules.
    pub fn new() -> Self {
        Self::with_rules(TerrainRules::default())
    }

    /// Create a search using terrain rules built from `config`.
    pub fn with_config(config: SearchConfig) -> Self {
        Self::with_rules(TerrainRules::new(config))
    }
}

impl<T: Traversal> PathSearch<T> {
    /// Create a search using custom traversal rules.
    pub fn with_rules(rules: T) -> Self {
        Self {
            rules,
            nodes: Vec::new(),
            generation: 0,
            frontier: BucketQueue::new(),
            state: SearchState::Idle,
            start: TileId(0),
            goal: TileId(0),
            path: Vec::new(),
            expanded: 0,
        }
    }

    /// The traversal rules in use.
    #[inline]
    pub fn rules(&self) -> &T {
        &self.rules
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Id of the active or last finished search, `None` when idle.
    pub fn current(&self) -> Option<SearchId> {
        match self.state {
            SearchState::Idle => None,
            _ => Some(SearchId(self.generation)),
        }
    }

    /// Whether `id` still names the latest search.
    pub fn is_current(&self, id: SearchId) -> bool {
        self.current() == Some(id)
    }

    /// Start and goal of the active or last finished search.
    pub fn endpoints(&self) -> Option<(TileId, TileId)> {
        self.current().map(|_| (self.start, self.goal))
    }

    /// Number of tiles waiting in the frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of tiles dequeued by the current search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The path from start to goal, inclusive, once the search succeeded.
    pub fn path(&self) -> Option<&[TileId]> {
        match self.state {
            SearchState::Succeeded => Some(&self.path),
            _ => None,
        }
    }

    /// Best known distance from the start to `id` in the current search.
    pub fn distance_at(&self, id: TileId) -> Option<u32> {
        if self.state == SearchState::Idle {
            return None;
        }
        let node = self.nodes.get(id.index())?;
        (node.generation == self.generation && node.distance != UNREACHABLE)
            .then_some(node.distance)
    }

    /// Start a new search from `start` to `goal`, superseding any search in
    /// progress.
    ///
    /// When `start == goal` the search succeeds immediately with a
    /// single-tile path.
    pub fn begin(
        &mut self,
        grid: &HexGrid,
        start: TileId,
        goal: TileId,
    ) -> Result<SearchId, SearchError> {
        if !grid.contains(start) {
            return Err(SearchError::StartOutsideGrid {
                tile: start.index(),
                len: grid.len(),
            });
        }
        if !grid.contains(goal) {
            return Err(SearchError::GoalOutsideGrid {
                tile: goal.index(),
                len: grid.len(),
            });
        }

        if self.state == SearchState::Running {
            log::debug!(
                "search {} superseded after {} expansions",
                self.generation,
                self.expanded
            );
        }
        self.reset(grid);
        self.start = start;
        self.goal = goal;
        let id = SearchId(self.generation);

        let heuristic = self.rules.estimate(grid, start, goal);
        let node = &mut self.nodes[start.index()];
        node.generation = self.generation;
        node.distance = 0;
        node.heuristic = heuristic;
        node.parent = NO_PARENT;

        if start == goal {
            self.path.push(start);
            self.state = SearchState::Succeeded;
            log::debug!("search {}: start is the goal", self.generation);
            return Ok(id);
        }

        node.open = true;
        self.frontier.insert(start.index(), node.priority());
        self.state = SearchState::Running;

        log::debug!(
            "search {}: {} -> {}",
            self.generation,
            grid.tile(start).coord(),
            grid.tile(goal).coord()
        );
        Ok(id)
    }

    /// Advance the running search by one expansion.
    pub fn step(&mut self, grid: &HexGrid) -> Step {
        if self.state != SearchState::Running {
            return Step::Idle;
        }
        debug_assert_eq!(grid.len(), self.nodes.len(), "grid changed mid-search");

        let Some(ci) = self.frontier.pop_min() else {
            self.state = SearchState::Exhausted;
            log::debug!(
                "search {}: goal unreachable after {} expansions",
                self.generation,
                self.expanded
            );
            return Step::Exhausted;
        };

        let current = TileId(ci);
        self.nodes[ci].open = false;
        self.expanded += 1;

        if current == self.goal {
            self.reconstruct();
            self.state = SearchState::Succeeded;
            log::debug!(
                "search {}: found path of {} tiles after {} expansions",
                self.generation,
                self.path.len(),
                self.expanded
            );
            return Step::Found(current);
        }

        let current_distance = self.nodes[ci].distance;
        log::trace!(
            "search {}: expand {} at distance {}",
            self.generation,
            grid.tile(current).coord(),
            current_distance
        );

        for (_, next) in grid.neighbors(current) {
            if !self.rules.can_traverse(grid, current, next) {
                continue;
            }
            let Some(tentative) = current_distance
                .checked_add(self.rules.cost(grid, current, next))
                .filter(|&d| d != UNREACHABLE)
            else {
                continue;
            };

            let ni = next.index();
            if self.nodes[ni].generation != self.generation {
                let heuristic = self.rules.estimate(grid, next, self.goal);
                let node = &mut self.nodes[ni];
                node.generation = self.generation;
                node.distance = tentative;
                node.heuristic = heuristic;
                node.parent = ci;
                node.open = true;
                self.frontier.insert(ni, node.priority());
            } else {
                let node = &mut self.nodes[ni];
                if tentative >= node.distance {
                    continue;
                }
                let old = node.priority();
                node.distance = tentative;
                node.parent = ci;
                if node.open {
                    self.frontier.decrease_priority(ni, old, node.priority());
                } else {
                    // Closed too early under an inconsistent estimate.
                    node.open = true;
                    self.frontier.insert(ni, node.priority());
                }
            }
        }

        Step::Expanded(current)
    }

    /// Drive the running search to completion and return its path, if any.
    pub fn run(&mut self, grid: &HexGrid) -> Option<&[TileId]> {
        while let Step::Expanded(_) = self.step(grid) {}
        self.path()
    }

    /// Iterator over the tiles dequeued by the running search, in order.
    ///
    /// The goal, when reached, is the last item.
    pub fn expansions<'a>(&'a mut self, grid: &'a HexGrid) -> Expansions<'a, T> {
        Expansions { search: self, grid }
    }

    /// Compute a shortest path from `start` to `goal`.
    ///
    /// Returns the full path (including both endpoints), or `Ok(None)` if the
    /// goal cannot be reached under the current terrain.
    pub fn find_path(
        &mut self,
        grid: &HexGrid,
        start: TileId,
        goal: TileId,
    ) -> Result<Option<Vec<TileId>>, SearchError> {
        self.begin(grid, start, goal)?;
        Ok(self.run(grid).map(<[TileId]>::to_vec))
    }

    /// Abandon the running search, if any.
    pub fn cancel(&mut self) {
        if self.state == SearchState::Running {
            log::debug!("search {} cancelled", self.generation);
        }
        self.frontier.clear();
        self.path.clear();
        self.state = SearchState::Idle;
    }

    /// Invalidate every node and clear the frontier for a new search.
    fn reset(&mut self, grid: &HexGrid) {
        self.frontier.clear();
        self.path.clear();
        self.expanded = 0;

        if self.nodes.len() != grid.len() {
            self.nodes.clear();
            self.nodes.resize(grid.len(), Node::default());
            self.generation = 0;
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for node in self.nodes.iter_mut() {
                *node = Node::default();
            }
            self.generation = 1;
        }
    }

    fn reconstruct(&mut self) {
        self.path.clear();
        let mut ci = self.goal.index();
        while ci != NO_PARENT {
            self.path.push(TileId(ci));
            ci = self.nodes[ci].parent;
        }
        self.path.reverse();
    }
}

/// Iterator returned by [`PathSearch::expansions`].
pub struct Expansions<'a, T: Traversal> {
    search: &'a mut PathSearch<T>,
    grid: &'a HexGrid,
}

impl<T: Traversal> Iterator for Expansions<'_, T> {
    type Item = TileId;

    fn next(&mut self) -> Option<TileId> {
        match self.search.step(self.grid) {
            Step::Expanded(id) | Step::Found(id) => Some(id),
            Step::Exhausted | Step::Idle => None,
        }
    }
}
