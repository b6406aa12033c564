//! Boolean combinators over other goals.
//!
//! `AnyOfGoal` and `AllOfGoal` own boxed children so goals of different
//! concrete types can be mixed freely; children are only ever appended and
//! keep their insertion order.

use voxpath_core::BlockPos;

use crate::goal::Goal;

/// Satisfied when any child goal is satisfied.
///
/// The heuristic is the cheapest child estimate, so the search steers
/// toward whichever child currently looks closest. With no children the
/// heuristic is `f32::MAX` and no node ever ends.
#[derive(Default)]
pub struct AnyOfGoal {
    goals: Vec<Box<dyn Goal>>,
}

impl AnyOfGoal {
    pub fn new() -> Self {
        Self { goals: Vec::new() }
    }

    /// Append a child goal. Children cannot be removed.
    pub fn push(&mut self, goal: Box<dyn Goal>) {
        self.goals.push(goal);
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl Goal for AnyOfGoal {
    fn heuristic(&self, node: BlockPos) -> f32 {
        self.goals
            .iter()
            .map(|goal| goal.heuristic(node))
            .fold(f32::MAX, f32::min)
    }

    fn is_end(&self, node: BlockPos) -> bool {
        self.goals.iter().any(|goal| goal.is_end(node))
    }

    fn has_changed(&mut self) -> bool {
        // Stops at the first changed child, so later children are not
        // polled (and not re-targeted) this cycle.
        self.goals.iter_mut().any(|goal| goal.has_changed())
    }
}

/// Satisfied only when every child goal is satisfied.
///
/// The heuristic is the most expensive child estimate. With no children
/// the heuristic is `f32::MIN` and every node ends.
#[derive(Default)]
pub struct AllOfGoal {
    goals: Vec<Box<dyn Goal>>,
}

impl AllOfGoal {
    pub fn new() -> Self {
        Self { goals: Vec::new() }
    }

    /// Append a child goal. Children cannot be removed.
    pub fn push(&mut self, goal: Box<dyn Goal>) {
        self.goals.push(goal);
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl Goal for AllOfGoal {
    fn heuristic(&self, node: BlockPos) -> f32 {
        self.goals
            .iter()
            .map(|goal| goal.heuristic(node))
            .fold(f32::MIN, f32::max)
    }

    fn is_end(&self, node: BlockPos) -> bool {
        self.goals.iter().all(|goal| goal.is_end(node))
    }

    fn has_changed(&mut self) -> bool {
        self.goals.iter_mut().any(|goal| goal.has_changed())
    }
}

/// Logical negation: end anywhere the inner goal would not.
///
/// The heuristic is the negated inner estimate, which rewards moving away
/// from whatever the inner goal wants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvertGoal<G: Goal> {
    goal: G,
}

impl<G: Goal> InvertGoal<G> {
    pub fn new(goal: G) -> Self {
        Self { goal }
    }

    pub fn inner(&self) -> &G {
        &self.goal
    }
}

impl<G: Goal> Goal for InvertGoal<G> {
    fn heuristic(&self, node: BlockPos) -> f32 {
        -self.goal.heuristic(node)
    }

    fn is_end(&self, node: BlockPos) -> bool {
        !self.goal.is_end(node)
    }

    fn has_changed(&mut self) -> bool {
        self.goal.has_changed()
    }
}
