//! Face-center enumeration over block shapes
//!
//! Placing or breaking a block means aiming at a concrete point on one of
//! its faces. This module turns a block's shape boxes into the center
//! points of the faces pointing a given way, optionally restricted to the
//! top or bottom half (for slab-style placement).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use voxpath_core::Direction;

use crate::block::BlockShape;

/// Vertical half of a block face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Top,
    Bottom,
}

/// Center points of the shape faces whose outward normal is `normal`.
///
/// One point per shape box, as an offset from the block's min corner. A
/// `half` restriction clips each box to the upper or lower half of the cell
/// first; boxes emptied by the clip contribute nothing, so a bottom slab
/// has no `Top`-half face centers at all.
pub fn face_centers(shapes: &[BlockShape], normal: Direction, half: Option<Half>) -> Vec<Vec3> {
    let mut centers = Vec::new();
    for shape in shapes {
        let mut min = shape.min;
        let mut max = shape.max;
        match half {
            Some(Half::Top) => min.y = min.y.max(0.5),
            Some(Half::Bottom) => max.y = max.y.min(0.5),
            None => {}
        }
        if min.x >= max.x || min.y >= max.y || min.z >= max.z {
            continue;
        }

        // The face center is the box center projected onto the face plane
        let mut center = (min + max) * 0.5;
        match normal {
            Direction::Down => center.y = min.y,
            Direction::Up => center.y = max.y,
            Direction::North => center.z = min.z,
            Direction::South => center.z = max.z,
            Direction::West => center.x = min.x,
            Direction::East => center.x = max.x,
        }
        centers.push(center);
    }
    centers
}
