//! World-plane hex dimensions.

/// Distance from a cell center to any of its corners.
pub const OUTER_RADIUS: f32 = 10.0;

/// Distance from a cell center to the middle of any edge (`√3/2` of the
/// outer radius).
pub const INNER_RADIUS: f32 = OUTER_RADIUS * 0.866_025_4;

/// World-plane center `(x, z)` of the cell at offset position (`col`, `row`).
///
/// Odd rows sit half a cell to the right of even rows.
pub fn center_of(col: i32, row: i32) -> (f32, f32) {
    let x = (col as f32 + row as f32 * 0.5 - row.div_euclid(2) as f32) * (INNER_RADIUS * 2.0);
    let z = row as f32 * (OUTER_RADIUS * 1.5);
    (x, z)
}
