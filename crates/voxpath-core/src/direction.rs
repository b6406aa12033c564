//! Axis-aligned face directions

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the six axis-aligned face directions of a voxel cell.
///
/// The discriminants follow the face-index convention reported by block
/// raycasts: down, up, north, south, west, east, with north = -Z and
/// east = +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Direction {
    /// All six directions in face-index order
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Face index of this direction
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The direction pointing the opposite way
    pub fn opposite(&self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Whole-cell step along this direction
    pub fn offset(&self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Unit vector along this direction
    pub fn vec(&self) -> Vec3 {
        let (dx, dy, dz) = self.offset();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Classify an arbitrary vector into the face it points through.
    ///
    /// Checks the vertical sign first, then the Z sign, then the X sign, so
    /// a vector that is not perfectly axis-aligned still resolves to exactly
    /// one face. Face normals hit their own axis before the tie-break
    /// matters.
    pub fn from_vector(v: Vec3) -> Self {
        if v.y < 0.0 {
            Self::Down
        } else if v.y > 0.0 {
            Self::Up
        } else if v.z < 0.0 {
            Self::North
        } else if v.z > 0.0 {
            Self::South
        } else if v.x < 0.0 {
            Self::West
        } else {
            Self::East
        }
    }
}
