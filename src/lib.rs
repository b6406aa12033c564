//! Voxpath - goal types for A*-style path search over voxel worlds.
//!
//! Facade over the workspace crates: [`voxpath_core`] for coordinates and
//! distance metrics, [`voxpath_world`] for the collaborator contracts a
//! host engine implements, and [`voxpath_goals`] for the goal family the
//! search engine consumes.
//!
//! ```
//! use voxpath::{BlockGoal, Goal, BlockPos};
//!
//! let goal = BlockGoal::new(5, 64, -3);
//! assert!(goal.is_end(BlockPos::new(5, 64, -3)));
//! assert!(goal.heuristic(BlockPos::new(5, 64, -3)) == 0.0);
//! ```

pub use voxpath_core::{adjusted_dy, octile_xz, BlockPos, Direction, Vec3};
pub use voxpath_goals::{
    AdjacentGoal, AllOfGoal, AnyOfGoal, BlockGoal, FaceCandidate, Facing, FollowGoal, Goal,
    InvertGoal, LookAtBlockGoal, LookOptions, NearGoal, NearXZGoal, PlaceBlockGoal,
    PlacementOptions, XZGoal, YGoal, EYE_HEIGHT,
};
pub use voxpath_world::{
    face_centers, Block, BlockShape, BlockWorld, Half, RayHit, TrackedEntity,
};
