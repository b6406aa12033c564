//! The capability contract every goal variant implements.

use voxpath_core::BlockPos;

/// What a path search engine asks of a goal.
///
/// `heuristic` and `is_end` are called once per expanded node, often many
/// thousands of times per search, and must answer the same way when the
/// search revisits a node. `has_changed` is polled once per engine cycle
/// and is the only call allowed to mutate goal state; a goal stays confined
/// to the thread driving its search.
pub trait Goal {
    /// Estimated remaining cost from `node` to success. Guides the open
    /// list; may legitimately be negative for inverted goals.
    fn heuristic(&self, node: BlockPos) -> f32;

    /// Whether `node` already satisfies the goal.
    fn is_end(&self, node: BlockPos) -> bool;

    /// Whether the goal has drifted enough that an in-progress search
    /// should be thrown away and restarted. May re-target internal state;
    /// the default reports no change.
    fn has_changed(&mut self) -> bool {
        false
    }
}

impl<G: Goal + ?Sized> Goal for Box<G> {
    fn heuristic(&self, node: BlockPos) -> f32 {
        (**self).heuristic(node)
    }

    fn is_end(&self, node: BlockPos) -> bool {
        (**self).is_end(node)
    }

    fn has_changed(&mut self) -> bool {
        (**self).has_changed()
    }
}
