use thiserror::Error;

/// Reasons a search is refused before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start tile {tile} is outside the grid ({len} tiles)")]
    StartOutsideGrid { tile: usize, len: usize },
    #[error("goal tile {tile} is outside the grid ({len} tiles)")]
    GoalOutsideGrid { tile: usize, len: usize },
}
