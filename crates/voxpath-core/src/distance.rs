//! Distance terms shared by the goal heuristics

use std::f32::consts::SQRT_2;

/// Horizontal distance where cardinal steps cost 1 and diagonal steps √2.
///
/// Symmetric in its arguments and collapses to `|dx|` when one axis is
/// zero. Vertical movement is costed separately because the movement model
/// never mixes a vertical step into a diagonal one.
pub fn octile_xz(dx: f32, dz: f32) -> f32 {
    let dx = dx.abs();
    let dz = dz.abs();
    (dx - dz).abs() + dx.min(dz) * SQRT_2
}

/// Vertical distance to a block the agent interacts with while standing.
///
/// The cell directly below the target counts as zero: the target's
/// underside is adjacent at y-1, and that is the cell the agent's feet
/// occupy. Negative deltas are therefore shifted up one cell before taking
/// the absolute value.
pub fn adjusted_dy(dy: i32) -> i32 {
    if dy < 0 {
        (dy + 1).abs()
    } else {
        dy
    }
}
