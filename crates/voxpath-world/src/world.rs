//! Read access to the voxel world

use glam::Vec3;

use voxpath_core::{BlockPos, Direction};

use crate::block::Block;

/// A block hit reported by a raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Cell of the block that was hit
    pub position: BlockPos,
    /// The face of that block the ray entered through
    pub face: Direction,
}

/// Read-only world queries, implemented by the surrounding engine.
///
/// Everything the goal layer learns about the world flows through these two
/// calls. Both are synchronous point-in-time reads with no consistency
/// guarantee beyond being valid at call time; an unloaded block or an empty
/// raycast is a negative result, never an error.
pub trait BlockWorld {
    /// The block occupying `pos`, or None if that cell is not available
    fn block_at(&self, pos: BlockPos) -> Option<Block>;

    /// Cast a ray from `origin` along `direction` (unit length) and report
    /// the first block surface it enters within `max_distance`
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

impl<W: BlockWorld + ?Sized> BlockWorld for &W {
    fn block_at(&self, pos: BlockPos) -> Option<Block> {
        (**self).block_at(pos)
    }

    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        (**self).raycast(origin, direction, max_distance)
    }
}
