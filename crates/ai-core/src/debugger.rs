/// Observer hooks fired by the planner while it steps.
///
/// Debuggers exist for visibility only and must not be used to steer planning. Every method
/// defaults to a no-op.
pub trait PlannerDebugger<S, B> {
    /// A tick is starting, before any behavior is evaluated.
    fn on_tick_start(&mut self) {}

    /// Called for every behavior, before the runnability check.
    fn on_behavior_start(&mut self, _behavior: &B) {}

    /// Called for every behavior whose evaluation completed without error.
    fn on_behavior_end(&mut self, _behavior: &B) {}

    /// The tick finished. `has_more_work` is false once the frontier is exhausted.
    fn on_tick_end(&mut self, _has_more_work: bool) {}

    /// A world state was indexed and enqueued for the first time.
    ///
    /// Not called when a cheaper route to an already known state is found.
    fn on_state_discovered(&mut self, _state: &S) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullDebugger;

impl<S, B> PlannerDebugger<S, B> for NullDebugger {}

impl<S, B, D> PlannerDebugger<S, B> for &mut D
where
    D: PlannerDebugger<S, B> + ?Sized,
{
    fn on_tick_start(&mut self) {
        (**self).on_tick_start();
    }

    fn on_behavior_start(&mut self, behavior: &B) {
        (**self).on_behavior_start(behavior);
    }

    fn on_behavior_end(&mut self, behavior: &B) {
        (**self).on_behavior_end(behavior);
    }

    fn on_tick_end(&mut self, has_more_work: bool) {
        (**self).on_tick_end(has_more_work);
    }

    fn on_state_discovered(&mut self, state: &S) {
        (**self).on_state_discovered(state);
    }
}
