/// Knobs for the default [`TerrainRules`](crate::TerrainRules).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Refuse to cross edges whose elevation difference is two or more.
    pub block_cliffs: bool,
    /// Refuse to step between a walled and an unwalled tile.
    pub respect_walls: bool,
    /// Order the frontier by distance plus hex distance to the goal. When
    /// off, the search degrades to plain Dijkstra.
    pub use_heuristic: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            block_cliffs: true,
            respect_walls: true,
            use_heuristic: true,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"block_cliffs": false}"#).unwrap();
        assert_eq!(
            cfg,
            SearchConfig {
                block_cliffs: false,
                ..SearchConfig::default()
            }
        );
    }
}
