//! Block snapshots as supplied by the world

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One axis-aligned box of a block's collision shape, in block-local
/// coordinates.
///
/// A full cube spans (0,0,0)..(1,1,1); slabs, stairs and other partial
/// blocks are unions of several boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockShape {
    pub min: Vec3,
    pub max: Vec3,
}

impl BlockShape {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The full unit cube
    pub fn full_cube() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        }
    }
}

/// A point-in-time snapshot of a single block.
///
/// Only the shape list matters to the goal layer: an empty list means there
/// is nothing to click or look at in this cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    /// Collision boxes in block-local coordinates
    pub shapes: Vec<BlockShape>,
}

impl Block {
    /// A block with a single full-cube shape
    pub fn cube() -> Self {
        Self {
            shapes: vec![BlockShape::full_cube()],
        }
    }

    /// A block with no shape (air or a non-solid block)
    pub fn empty() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_fills_cell() {
        let block = Block::cube();
        assert_eq!(block.shapes.len(), 1);
        assert_eq!(block.shapes[0].min, Vec3::ZERO);
        assert_eq!(block.shapes[0].max, Vec3::ONE);
    }

    #[test]
    fn test_empty_block() {
        assert!(Block::empty().is_empty());
        assert!(!Block::cube().is_empty());
    }
}
