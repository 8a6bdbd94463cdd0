use thiserror::Error;

/// Errors from fallible grid lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// An offset position fell outside the grid rectangle.
    #[error("offset position ({col}, {row}) is outside the {width}x{height} grid")]
    OffsetOutsideGrid {
        col: i32,
        row: i32,
        width: usize,
        height: usize,
    },
}
