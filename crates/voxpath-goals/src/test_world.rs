//! In-memory world fixture for goal tests.

use std::cell::RefCell;
use std::collections::HashMap;

use glam::Vec3;

use voxpath_core::{BlockPos, Direction};
use voxpath_world::{Block, BlockWorld, RayHit};

/// Map-backed world standing in for the engine the goals normally query.
///
/// Mutation goes through `&self` so tests can edit the world while a goal
/// holds a reference to it, the same aliasing a live engine produces.
pub struct GridWorld {
    blocks: RefCell<HashMap<BlockPos, Block>>,
}

impl GridWorld {
    pub fn new() -> Self {
        Self {
            blocks: RefCell::new(HashMap::new()),
        }
    }

    pub fn set(&self, pos: BlockPos, block: Block) {
        self.blocks.borrow_mut().insert(pos, block);
    }

    pub fn remove(&self, pos: BlockPos) {
        self.blocks.borrow_mut().remove(&pos);
    }
}

impl BlockWorld for GridWorld {
    fn block_at(&self, pos: BlockPos) -> Option<Block> {
        self.blocks.borrow().get(&pos).cloned()
    }

    /// Grid march over the voxel lattice, reporting the first non-empty
    /// cell and the face the ray entered it through. The cell the ray
    /// starts inside is never reported.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        let mut cell = BlockPos::from_vec3(origin);
        let step_x = if dir.x > 0.0 { 1 } else { -1 };
        let step_y = if dir.y > 0.0 { 1 } else { -1 };
        let step_z = if dir.z > 0.0 { 1 } else { -1 };

        let t_delta_x = if dir.x != 0.0 {
            1.0 / dir.x.abs()
        } else {
            f32::INFINITY
        };
        let t_delta_y = if dir.y != 0.0 {
            1.0 / dir.y.abs()
        } else {
            f32::INFINITY
        };
        let t_delta_z = if dir.z != 0.0 {
            1.0 / dir.z.abs()
        } else {
            f32::INFINITY
        };

        let boundary = |coord: i32, pos: f32, positive: bool| -> f32 {
            if positive {
                coord as f32 + 1.0 - pos
            } else {
                pos - coord as f32
            }
        };
        let mut t_max_x = if dir.x != 0.0 {
            boundary(cell.x, origin.x, dir.x > 0.0) / dir.x.abs()
        } else {
            f32::INFINITY
        };
        let mut t_max_y = if dir.y != 0.0 {
            boundary(cell.y, origin.y, dir.y > 0.0) / dir.y.abs()
        } else {
            f32::INFINITY
        };
        let mut t_max_z = if dir.z != 0.0 {
            boundary(cell.z, origin.z, dir.z > 0.0) / dir.z.abs()
        } else {
            f32::INFINITY
        };

        loop {
            let face;
            let t;
            if t_max_x <= t_max_y && t_max_x <= t_max_z {
                cell.x += step_x;
                t = t_max_x;
                t_max_x += t_delta_x;
                face = if step_x > 0 {
                    Direction::West
                } else {
                    Direction::East
                };
            } else if t_max_y <= t_max_z {
                cell.y += step_y;
                t = t_max_y;
                t_max_y += t_delta_y;
                face = if step_y > 0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
            } else {
                cell.z += step_z;
                t = t_max_z;
                t_max_z += t_delta_z;
                face = if step_z > 0 {
                    Direction::North
                } else {
                    Direction::South
                };
            }
            if t > max_distance {
                return None;
            }
            if let Some(block) = self.blocks.borrow().get(&cell) {
                if !block.is_empty() {
                    return Some(RayHit {
                        position: cell,
                        face,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raycast_reports_entry_face() {
        let world = GridWorld::new();
        world.set(BlockPos::new(3, 0, 0), Block::cube());
        // Straight east, entering through the west face.
        let hit = world
            .raycast(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0), 10.0)
            .unwrap();
        assert_eq!(hit.position, BlockPos::new(3, 0, 0));
        assert_eq!(hit.face, Direction::West);
        // Straight down onto the top face.
        let hit = world
            .raycast(Vec3::new(3.5, 5.0, 0.5), Vec3::new(0.0, -1.0, 0.0), 10.0)
            .unwrap();
        assert_eq!(hit.face, Direction::Up);
    }

    #[test]
    fn test_raycast_respects_max_distance() {
        let world = GridWorld::new();
        world.set(BlockPos::new(6, 0, 0), Block::cube());
        let origin = Vec3::new(0.5, 0.5, 0.5);
        let east = Vec3::new(1.0, 0.0, 0.0);
        assert!(world.raycast(origin, east, 5.0).is_none());
        assert!(world.raycast(origin, east, 6.0).is_some());
    }

    #[test]
    fn test_raycast_skips_start_cell() {
        let world = GridWorld::new();
        world.set(BlockPos::new(0, 0, 0), Block::cube());
        world.set(BlockPos::new(2, 0, 0), Block::cube());
        let hit = world
            .raycast(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0), 10.0)
            .unwrap();
        assert_eq!(hit.position, BlockPos::new(2, 0, 0));
    }

    #[test]
    fn test_raycast_zero_direction() {
        let world = GridWorld::new();
        world.set(BlockPos::new(1, 0, 0), Block::cube());
        assert!(world
            .raycast(Vec3::new(0.5, 0.5, 0.5), Vec3::ZERO, 10.0)
            .is_none());
    }
}
