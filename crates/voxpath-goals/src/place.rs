//! Standing where a block can be placed.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use voxpath_core::{adjusted_dy, octile_xz, BlockPos, Direction};
use voxpath_world::{face_centers, BlockWorld, Half};

use crate::goal::Goal;

/// Eye height above the cell the agent's feet occupy.
pub const EYE_HEIGHT: f32 = 1.6;

/// Aiming constraint for placement and interaction goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Facing {
    /// Parse a facing name. Unknown names mean unconstrained and map to
    /// `None` rather than an error.
    pub fn from_name(name: &str) -> Option<Facing> {
        match name {
            "north" => Some(Self::North),
            "east" => Some(Self::East),
            "south" => Some(Self::South),
            "west" => Some(Self::West),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// The 90 degree wide horizontal bucket this facing accepts, counted
    /// clockwise from north. `Up` and `Down` have no bucket and never
    /// match a horizontal bearing.
    fn horizontal_bucket(&self) -> Option<u32> {
        match self {
            Self::North => Some(0),
            Self::East => Some(1),
            Self::South => Some(2),
            Self::West => Some(3),
            Self::Up | Self::Down => None,
        }
    }
}

fn facing_or_unconstrained<'de, D>(de: D) -> Result<Option<Facing>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = Option::<String>::deserialize(de)?;
    Ok(name.as_deref().and_then(Facing::from_name))
}

/// Options for [`PlaceBlockGoal`]. Every field has a workable default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementOptions {
    /// Maximum reach from the eye to the clicked point.
    pub range: f32,
    /// Faces of the anchor that may be placed against, tried in order.
    pub faces: Vec<Direction>,
    /// Required aiming direction. `None` accepts any.
    #[serde(deserialize_with = "facing_or_unconstrained")]
    pub facing: Option<Facing>,
    /// Constrain pitch as well as bearing.
    pub facing_3d: bool,
    /// Restrict clickable points to one vertical half of each face.
    pub half: Option<Half>,
    /// Require an unobstructed line of sight to the clicked point.
    pub los: bool,
}

impl Default for PlacementOptions {
    /// Range 5, all six faces in face-index order, no facing constraint,
    /// no half restriction, line of sight required.
    fn default() -> Self {
        Self {
            range: 5.0,
            faces: Direction::ALL.to_vec(),
            facing: None,
            facing_3d: false,
            half: None,
            los: true,
        }
    }
}

/// One way to click a placeable face: aim at `target` to click the face
/// of the block at `reference` that looks back at the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCandidate {
    /// Direction from the anchor to the reference block.
    pub direction: Direction,
    /// Continuous point to aim at, in world coordinates.
    pub target: Vec3,
    /// Cell of the block being clicked.
    pub reference: BlockPos,
}

/// Stand where a block can be placed into the anchor cell.
///
/// Every geometrically valid (face, aim point, reference block) candidate
/// is computed from a single read of world state when the goal is created
/// and then frozen, so `is_end` stays consistent for the lifetime of one
/// search. If the world changes underneath the goal, call
/// [`refresh`](Self::refresh) and restart the search; `has_changed` never
/// recomputes the set on its own.
pub struct PlaceBlockGoal<W: BlockWorld> {
    anchor: BlockPos,
    world: W,
    options: PlacementOptions,
    candidates: Vec<FaceCandidate>,
}

impl<W: BlockWorld> PlaceBlockGoal<W> {
    /// Goal to place a block into `anchor`, reading candidate faces from
    /// `world` as it is now.
    pub fn new(anchor: BlockPos, world: W, options: PlacementOptions) -> Self {
        let mut goal = Self {
            anchor,
            world,
            options,
            candidates: Vec::new(),
        };
        goal.refresh();
        goal
    }

    /// The cell the block is to be placed into.
    pub fn anchor(&self) -> BlockPos {
        self.anchor
    }

    pub fn options(&self) -> &PlacementOptions {
        &self.options
    }

    /// The frozen candidate list, in face order then shape order.
    pub fn candidates(&self) -> &[FaceCandidate] {
        &self.candidates
    }

    /// Recompute the candidate set from the world as it is now. Any search
    /// running against the old set must be restarted by the caller.
    pub fn refresh(&mut self) {
        self.candidates.clear();
        for &dir in &self.options.faces {
            let reference = self.anchor + dir;
            if let Some(block) = self.world.block_at(reference) {
                // The clicked face of the reference block looks back at
                // the anchor.
                for center in face_centers(&block.shapes, dir.opposite(), self.options.half) {
                    self.candidates.push(FaceCandidate {
                        direction: dir,
                        target: reference.as_vec3() + center,
                        reference,
                    });
                }
            }
        }
        debug!(
            "{} placement candidate(s) against {:?}",
            self.candidates.len(),
            self.anchor
        );
    }

    /// The first candidate reachable and visible from `eye`, if any.
    ///
    /// Candidates are tried in construction order and the first acceptable
    /// one wins, not the closest one.
    pub fn face_and_ref(&self, eye: Vec3) -> Option<&FaceCandidate> {
        for candidate in &self.candidates {
            let delta = candidate.target - eye;
            if delta.length() > self.options.range {
                continue;
            }
            let dir = delta.normalize_or_zero();
            if !self.check_facing(dir) {
                continue;
            }
            if !self.options.los {
                return Some(candidate);
            }
            if let Some(hit) = self.world.raycast(eye, dir, self.options.range) {
                if hit.position == candidate.reference
                    && hit.face == candidate.direction.opposite()
                {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Whether standing in `node` puts the agent's body inside the anchor
    /// cell. Covers the anchor itself and the cell directly below it.
    fn standing_in(&self, node: BlockPos) -> bool {
        let dx = (node.x - self.anchor.x).abs();
        let dy = adjusted_dy(node.y - self.anchor.y);
        let dz = (node.z - self.anchor.z).abs();
        dx + dy + dz < 1
    }

    /// Whether aiming along `dir` satisfies the configured facing.
    fn check_facing(&self, dir: Vec3) -> bool {
        let facing = match self.options.facing {
            Some(facing) => facing,
            None => return true,
        };
        if self.options.facing_3d {
            let pitch = dir
                .y
                .atan2((dir.x * dir.x + dir.z * dir.z).sqrt())
                .to_degrees();
            if pitch > 45.0 {
                return facing == Facing::Up;
            }
            if pitch < -45.0 {
                return facing == Facing::Down;
            }
        }
        let bearing = (dir.x.atan2(-dir.z).to_degrees() + 360.0) % 360.0;
        let bucket = ((bearing / 90.0 + 0.5).floor() as u32) % 4;
        facing.horizontal_bucket() == Some(bucket)
    }
}

impl<W: BlockWorld> Goal for PlaceBlockGoal<W> {
    fn heuristic(&self, node: BlockPos) -> f32 {
        let dx = (node.x - self.anchor.x) as f32;
        let dy = adjusted_dy(node.y - self.anchor.y);
        let dz = (node.z - self.anchor.z) as f32;
        octile_xz(dx, dz) + dy as f32
    }

    fn is_end(&self, node: BlockPos) -> bool {
        if self.standing_in(node) {
            return false;
        }
        let eye = node.as_vec3() + Vec3::new(0.5, EYE_HEIGHT, 0.5);
        self.face_and_ref(eye).is_some()
    }
}
