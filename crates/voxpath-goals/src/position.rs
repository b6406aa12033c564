//! Goals anchored to fixed coordinates.
//!
//! All of these are plain value types: construct one, hand it to the
//! search, done. None of them override `has_changed`.

use voxpath_core::{adjusted_dy, octile_xz, BlockPos};

use crate::goal::Goal;

/// Reach one exact cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGoal {
    /// The cell to stand in.
    pub pos: BlockPos,
}

impl BlockGoal {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            pos: BlockPos::new(x, y, z),
        }
    }

    pub fn at(pos: BlockPos) -> Self {
        Self { pos }
    }
}

impl Goal for BlockGoal {
    fn heuristic(&self, node: BlockPos) -> f32 {
        let dx = (self.pos.x - node.x) as f32;
        let dy = (self.pos.y - node.y) as f32;
        let dz = (self.pos.z - node.z) as f32;
        octile_xz(dx, dz) + dy.abs()
    }

    fn is_end(&self, node: BlockPos) -> bool {
        node == self.pos
    }
}

/// Get within a straight-line radius of a cell. The boundary counts as
/// inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearGoal {
    /// Center of the acceptance sphere.
    pub pos: BlockPos,
    range_sq: f32,
}

impl NearGoal {
    pub fn new(pos: BlockPos, range: f32) -> Self {
        Self {
            pos,
            range_sq: range * range,
        }
    }
}

impl Goal for NearGoal {
    fn heuristic(&self, node: BlockPos) -> f32 {
        let dx = (self.pos.x - node.x) as f32;
        let dy = (self.pos.y - node.y) as f32;
        let dz = (self.pos.z - node.z) as f32;
        octile_xz(dx, dz) + dy.abs()
    }

    fn is_end(&self, node: BlockPos) -> bool {
        node.distance_sq(self.pos) as f32 <= self.range_sq
    }
}

/// Get within a radius of a column, measured in the horizontal plane only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearXZGoal {
    pub x: i32,
    pub z: i32,
    range_sq: f32,
}

impl NearXZGoal {
    pub fn new(x: i32, z: i32, range: f32) -> Self {
        Self {
            x,
            z,
            range_sq: range * range,
        }
    }
}

impl Goal for NearXZGoal {
    fn heuristic(&self, node: BlockPos) -> f32 {
        let dx = (self.x - node.x) as f32;
        let dz = (self.z - node.z) as f32;
        octile_xz(dx, dz)
    }

    fn is_end(&self, node: BlockPos) -> bool {
        let dx = (self.x - node.x) as f32;
        let dz = (self.z - node.z) as f32;
        dx * dx + dz * dz <= self.range_sq
    }
}

/// Reach a column: exact x and z, any altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XZGoal {
    pub x: i32,
    pub z: i32,
}

impl XZGoal {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl Goal for XZGoal {
    fn heuristic(&self, node: BlockPos) -> f32 {
        let dx = (self.x - node.x) as f32;
        let dz = (self.z - node.z) as f32;
        octile_xz(dx, dz)
    }

    fn is_end(&self, node: BlockPos) -> bool {
        node.x == self.x && node.z == self.z
    }
}

/// Reach an altitude: exact y, anywhere in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YGoal {
    pub y: i32,
}

impl YGoal {
    pub fn new(y: i32) -> Self {
        Self { y }
    }
}

impl Goal for YGoal {
    fn heuristic(&self, node: BlockPos) -> f32 {
        (self.y - node.y).abs() as f32
    }

    fn is_end(&self, node: BlockPos) -> bool {
        node.y == self.y
    }
}

/// Stand next to a cell without entering it. Useful for blocks that are
/// used rather than walked into, like chests.
///
/// Vertical distance is measured from the body, not the feet: a cell one
/// below the target counts as distance zero because the agent standing
/// there occupies the target cell, and a cell two below counts as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacentGoal {
    /// The cell to end up next to.
    pub pos: BlockPos,
}

impl AdjacentGoal {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            pos: BlockPos::new(x, y, z),
        }
    }

    pub fn at(pos: BlockPos) -> Self {
        Self { pos }
    }
}

impl Goal for AdjacentGoal {
    fn heuristic(&self, node: BlockPos) -> f32 {
        let dx = (node.x - self.pos.x) as f32;
        let dy = adjusted_dy(node.y - self.pos.y);
        let dz = (node.z - self.pos.z) as f32;
        octile_xz(dx, dz) + dy as f32
    }

    fn is_end(&self, node: BlockPos) -> bool {
        let dx = (node.x - self.pos.x).abs();
        let dy = adjusted_dy(node.y - self.pos.y);
        let dz = (node.z - self.pos.z).abs();
        dx + dy + dz == 1
    }
}
