//! Integer block coordinates

use std::ops::Add;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Coordinate of a single cell in the voxel grid.
///
/// Path search works in whole cells: a node is the cell the agent's feet
/// occupy. Continuous positions are floored into cells on the way in and
/// expanded back to corner/center points on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Convert a continuous position to the cell that contains it
    pub fn from_vec3(pos: Vec3) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
            z: pos.z.floor() as i32,
        }
    }

    /// The min corner of this cell as a continuous position
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// The center of this cell (+0.5 on every axis)
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }

    /// This cell translated by whole-cell deltas
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// The neighboring cell one step along `dir`
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy, dz) = dir.offset();
        self.offset(dx, dy, dz)
    }

    /// Squared Euclidean distance to another cell, in whole cells.
    ///
    /// Computed in 64-bit so distant goals cannot overflow.
    pub fn distance_sq(&self, other: BlockPos) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        let dz = (self.z - other.z) as i64;
        dx * dx + dy * dy + dz * dz
    }
}

impl Add<Direction> for BlockPos {
    type Output = BlockPos;

    fn add(self, dir: Direction) -> BlockPos {
        self.step(dir)
    }
}
