use core::cmp::Ordering;

/// What the planner is trying to reach, and how to tell which states are closer to it.
///
/// `compare` is the primary search signal: a state ordering `Less` than another is considered
/// closer to satisfying the goal and is expanded first. No numeric heuristic is required.
pub trait Goal<S> {
    fn is_satisfied(&self, state: &S) -> bool;

    fn compare(&self, a: &S, b: &S) -> Ordering;
}

impl<S, G> Goal<S> for &G
where
    G: Goal<S> + ?Sized,
{
    fn is_satisfied(&self, state: &S) -> bool {
        (**self).is_satisfied(state)
    }

    fn compare(&self, a: &S, b: &S) -> Ordering {
        (**self).compare(a, b)
    }
}
