use crate::{Behavior, WorldState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plan data extracted from a search: the behaviors along the path to a target state.
///
/// Steps are stored **last action first**, the order in which they are collected while walking
/// parent links back to the root. Use [`chronological`](PlanSpec::chronological) or
/// [`into_chronological`](PlanSpec::into_chronological) for execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSpec<B> {
    pub steps: Vec<B>,
}

impl<B> PlanSpec<B> {
    pub fn new(steps: Vec<B>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in stored order (last action first).
    pub fn iter(&self) -> core::slice::Iter<'_, B> {
        self.steps.iter()
    }

    /// Steps in execution order (first action first).
    pub fn chronological(&self) -> core::iter::Rev<core::slice::Iter<'_, B>> {
        self.steps.iter().rev()
    }

    pub fn into_chronological(mut self) -> Vec<B> {
        self.steps.reverse();
        self.steps
    }

    /// Re-run the plan forward from `initial`, returning the state it ends in.
    ///
    /// Returns `None` if any step is not runnable against the state it is replayed on.
    pub fn replay<S>(&self, initial: &S) -> Option<S>
    where
        S: WorldState,
        B: Behavior<S>,
    {
        let mut state = initial.duplicate();
        for step in self.chronological() {
            if !step.can_run(&state) {
                return None;
            }
            step.apply(&mut state);
        }
        Some(state)
    }
}

impl<B> Default for PlanSpec<B> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<'a, B> IntoIterator for &'a PlanSpec<B> {
    type Item = &'a B;
    type IntoIter = core::slice::Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
