//! Position access for moving entities

use glam::Vec3;

use voxpath_core::BlockPos;

/// Position accessor for an entity a goal follows.
///
/// Implementors are owned lookup handles (an entity id plus world access, a
/// shared cell, a channel-fed snapshot), never borrows of the live entity,
/// so a goal's lifetime does not pin the entity's.
pub trait TrackedEntity {
    /// The entity's current continuous position
    fn position(&self) -> Vec3;

    /// The cell the entity's feet currently occupy
    fn block_pos(&self) -> BlockPos {
        BlockPos::from_vec3(self.position())
    }
}
