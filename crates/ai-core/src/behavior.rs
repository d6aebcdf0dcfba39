use std::rc::Rc;

/// A transition between world states.
///
/// Behaviors are consulted once per frontier state per tick: [`can_run`](Behavior::can_run)
/// gates the edge, [`apply`](Behavior::apply) mutates a duplicate of the state, and
/// [`cost`](Behavior::cost) prices the edge against the state it runs from. Costs must be
/// strictly positive.
pub trait Behavior<S> {
    /// Diagnostic label. Not used by the search itself.
    fn name(&self) -> &str;

    fn can_run(&self, _state: &S) -> bool {
        true
    }

    fn apply(&self, state: &mut S);

    fn cost(&self, state: &S) -> f32;
}

impl<S, B> Behavior<S> for &B
where
    B: Behavior<S> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn can_run(&self, state: &S) -> bool {
        (**self).can_run(state)
    }

    fn apply(&self, state: &mut S) {
        (**self).apply(state);
    }

    fn cost(&self, state: &S) -> f32 {
        (**self).cost(state)
    }
}

impl<S, B> Behavior<S> for Box<B>
where
    B: Behavior<S> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn can_run(&self, state: &S) -> bool {
        (**self).can_run(state)
    }

    fn apply(&self, state: &mut S) {
        (**self).apply(state);
    }

    fn cost(&self, state: &S) -> f32 {
        (**self).cost(state)
    }
}

impl<S, B> Behavior<S> for Rc<B>
where
    B: Behavior<S> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn can_run(&self, state: &S) -> bool {
        (**self).can_run(state)
    }

    fn apply(&self, state: &mut S) {
        (**self).apply(state);
    }

    fn cost(&self, state: &S) -> f32 {
        (**self).cost(state)
    }
}

/// Index of a behavior within its provider's slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BehaviorId(pub usize);

/// A finite, stably ordered set of behaviors.
///
/// The order is part of the planner's determinism contract: behaviors are evaluated in slice
/// order each tick, and search nodes refer back to their inbound behavior by [`BehaviorId`].
/// The slice must therefore not change for the lifetime of a planning session.
pub trait BehaviorProvider<S> {
    type Behavior: Behavior<S>;

    fn behaviors(&self) -> &[Self::Behavior];

    fn get(&self, id: BehaviorId) -> Option<&Self::Behavior> {
        self.behaviors().get(id.0)
    }
}

impl<S, B> BehaviorProvider<S> for Vec<B>
where
    B: Behavior<S>,
{
    type Behavior = B;

    fn behaviors(&self) -> &[B] {
        self
    }
}

impl<S, B, const N: usize> BehaviorProvider<S> for [B; N]
where
    B: Behavior<S>,
{
    type Behavior = B;

    fn behaviors(&self) -> &[B] {
        self
    }
}

impl<S, B> BehaviorProvider<S> for &[B]
where
    B: Behavior<S>,
{
    type Behavior = B;

    fn behaviors(&self) -> &[B] {
        self
    }
}
