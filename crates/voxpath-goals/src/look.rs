//! Standing where a block face can be seen.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use voxpath_core::{adjusted_dy, octile_xz, BlockPos, Direction};
use voxpath_world::{face_centers, BlockWorld};

use crate::goal::Goal;
use crate::place::EYE_HEIGHT;

/// Options for [`LookAtBlockGoal`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookOptions {
    /// Maximum distance from the eye to the observed point.
    pub reach: f32,
    /// Eye height above the cell the agent stands in.
    pub eye_height: f32,
}

impl Default for LookOptions {
    /// Reach 4.5 with the standard standing eye height.
    fn default() -> Self {
        Self {
            reach: 4.5,
            eye_height: EYE_HEIGHT,
        }
    }
}

/// Stand where some face of a target block is visible within reach.
///
/// The seeing counterpart of [`PlaceBlockGoal`](crate::place::PlaceBlockGoal):
/// instead of a neighbor face to click, the goal wants an unobstructed view
/// of the target block itself, the position a digging agent works from.
/// Faces are read live from the world on every `is_end` call, so a goal
/// whose target is mined away simply stops ending.
pub struct LookAtBlockGoal<W: BlockWorld> {
    pos: BlockPos,
    world: W,
    options: LookOptions,
}

impl<W: BlockWorld> LookAtBlockGoal<W> {
    pub fn new(pos: BlockPos, world: W, options: LookOptions) -> Self {
        Self {
            pos,
            world,
            options,
        }
    }

    /// The cell being looked at.
    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    /// Whether `eye` has an unobstructed line to some face point of the
    /// target block.
    fn sees_block(&self, eye: Vec3) -> bool {
        let block = match self.world.block_at(self.pos) {
            Some(block) => block,
            None => return false,
        };
        let center = self.pos.center();
        for dir in Direction::ALL {
            // Only faces the eye is on the outside of can be visible.
            if (eye - center).dot(dir.vec()) <= 0.0 {
                continue;
            }
            for offset in face_centers(&block.shapes, dir, None) {
                let target = self.pos.as_vec3() + offset;
                let delta = target - eye;
                if delta.length() > self.options.reach {
                    continue;
                }
                if let Some(hit) = self
                    .world
                    .raycast(eye, delta.normalize_or_zero(), self.options.reach)
                {
                    if hit.position == self.pos && hit.face == dir {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl<W: BlockWorld> Goal for LookAtBlockGoal<W> {
    fn heuristic(&self, node: BlockPos) -> f32 {
        let dx = (node.x - self.pos.x) as f32;
        let dy = adjusted_dy(node.y - self.pos.y);
        let dz = (node.z - self.pos.z) as f32;
        octile_xz(dx, dz) + dy as f32
    }

    fn is_end(&self, node: BlockPos) -> bool {
        if node == self.pos {
            return false;
        }
        let eye = node.as_vec3() + Vec3::new(0.5, self.options.eye_height, 0.5);
        self.sees_block(eye)
    }
}
