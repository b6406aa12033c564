//! Voxpath Goals - goal types consumed by a path search engine.
//!
//! A goal answers three questions about any cell the search visits: how
//! far the cell is estimated to be from success ([`Goal::heuristic`]),
//! whether the cell already is a success ([`Goal::is_end`]), and whether
//! the goal has drifted enough that the search should restart
//! ([`Goal::has_changed`]).
//!
//! The positional goals in [`position`] cover the common cases of walking
//! somewhere; [`composite`] combines goals with or, and, and not;
//! [`follow`] chases a moving entity; [`place`] and [`look`] end where a
//! block can be placed against or seen.

pub mod composite;
pub mod follow;
pub mod goal;
pub mod look;
pub mod place;
pub mod position;

#[cfg(test)]
mod test_world;

pub use composite::{AllOfGoal, AnyOfGoal, InvertGoal};
pub use follow::FollowGoal;
pub use goal::Goal;
pub use look::{LookAtBlockGoal, LookOptions};
pub use place::{FaceCandidate, Facing, PlaceBlockGoal, PlacementOptions, EYE_HEIGHT};
pub use position::{AdjacentGoal, BlockGoal, NearGoal, NearXZGoal, XZGoal, YGoal};

#[cfg(test)]
mod tests {
    use voxpath_core::BlockPos;

    use super::*;

    #[test]
    fn test_goals_compose_as_trait_objects() {
        let mut goal = AnyOfGoal::new();
        goal.push(Box::new(BlockGoal::new(5, 0, 0)));
        goal.push(Box::new(InvertGoal::new(NearGoal::new(
            BlockPos::new(0, 0, 0),
            10.0,
        ))));
        assert!(goal.is_end(BlockPos::new(5, 0, 0)));
        assert!(goal.is_end(BlockPos::new(20, 0, 0)));
        assert!(!goal.is_end(BlockPos::new(1, 0, 0)));
    }

    #[test]
    fn test_changed_propagates_through_boxes() {
        use std::cell::Cell;
        use std::rc::Rc;

        use glam::Vec3;
        use voxpath_world::TrackedEntity;

        #[derive(Clone)]
        struct Handle(Rc<Cell<Vec3>>);

        impl TrackedEntity for Handle {
            fn position(&self) -> Vec3 {
                self.0.get()
            }
        }

        let handle = Handle(Rc::new(Cell::new(Vec3::new(0.5, 0.5, 0.5))));
        let mut goal = AnyOfGoal::new();
        goal.push(Box::new(BlockGoal::new(100, 0, 0)));
        goal.push(Box::new(FollowGoal::new(handle.clone(), 2.0)));
        assert!(!goal.has_changed());
        handle.0.set(Vec3::new(8.5, 0.5, 0.5));
        assert!(goal.has_changed());
        assert!(goal.is_end(BlockPos::new(8, 0, 1)));
    }

    #[test]
    fn test_boxed_goal_forwards() {
        let mut boxed: Box<dyn Goal> = Box::new(BlockGoal::new(1, 2, 3));
        assert!(boxed.is_end(BlockPos::new(1, 2, 3)));
        assert!(!boxed.has_changed());
        assert!(boxed.heuristic(BlockPos::new(1, 2, 3)).abs() < 1e-6);
    }
}
