//! Elevation-based edge classification.

use std::fmt;

/// How two adjacent tiles relate by elevation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeType {
    /// Same elevation.
    Flat,
    /// Elevations differ by exactly one.
    Slope,
    /// Elevations differ by two or more.
    Cliff,
}

impl EdgeType {
    /// Classify the edge between tiles at elevations `a` and `b`.
    #[inline]
    pub fn between(a: i32, b: i32) -> Self {
        match a.abs_diff(b) {
            0 => Self::Flat,
            1 => Self::Slope,
            _ => Self::Cliff,
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Slope => f.write_str("slope"),
            Self::Cliff => f.write_str("cliff"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(EdgeType::between(3, 3), EdgeType::Flat);
        assert_eq!(EdgeType::between(3, 4), EdgeType::Slope);
        assert_eq!(EdgeType::between(4, 3), EdgeType::Slope);
        assert_eq!(EdgeType::between(0, 2), EdgeType::Cliff);
        assert_eq!(EdgeType::between(-5, 5), EdgeType::Cliff);
    }

    #[test]
    fn extreme_elevations_do_not_overflow() {
        assert_eq!(EdgeType::between(i32::MIN, i32::MAX), EdgeType::Cliff);
    }
}
