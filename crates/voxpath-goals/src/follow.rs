//! Keeping up with a moving entity.

use tracing::debug;

use voxpath_core::{octile_xz, BlockPos};
use voxpath_world::TrackedEntity;

use crate::goal::Goal;

/// Stay within a radius of a moving entity.
///
/// The entity's cell is captured when the goal is created and the search
/// runs against that snapshot. Each `has_changed` poll re-reads the entity:
/// while it stays within range of the captured cell the goal reports no
/// change, and once it wanders out the goal re-targets to the entity's
/// current cell and reports true so the engine restarts. The goal owns its
/// accessor rather than borrowing live entity state, so the engine's
/// entity list can churn while a search is in flight.
pub struct FollowGoal<E: TrackedEntity> {
    entity: E,
    target: BlockPos,
    range_sq: f32,
}

impl<E: TrackedEntity> FollowGoal<E> {
    /// Follow `entity`, staying within `range` of it.
    pub fn new(entity: E, range: f32) -> Self {
        let target = entity.block_pos();
        Self {
            entity,
            target,
            range_sq: range * range,
        }
    }

    /// The cell the search is currently running toward.
    pub fn target(&self) -> BlockPos {
        self.target
    }
}

impl<E: TrackedEntity> Goal for FollowGoal<E> {
    fn heuristic(&self, node: BlockPos) -> f32 {
        let dx = (self.target.x - node.x) as f32;
        let dy = (self.target.y - node.y) as f32;
        let dz = (self.target.z - node.z) as f32;
        octile_xz(dx, dz) + dy.abs()
    }

    fn is_end(&self, node: BlockPos) -> bool {
        node.distance_sq(self.target) as f32 <= self.range_sq
    }

    fn has_changed(&mut self) -> bool {
        let current = self.entity.block_pos();
        if self.target.distance_sq(current) as f32 > self.range_sq {
            debug!("Follow target moved {:?} -> {:?}", self.target, current);
            self.target = current;
            return true;
        }
        false
    }
}
