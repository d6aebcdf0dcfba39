use core::fmt::Debug;

use ai_core::{Behavior, PlannerDebugger};

use crate::trace::{
    TraceEvent, TraceSink, TAG_BEHAVIOR_END, TAG_BEHAVIOR_START, TAG_STATE_DISCOVERED,
    TAG_TICK_END, TAG_TICK_START,
};

/// Records planner hooks as [`TraceEvent`]s into a [`TraceSink`].
///
/// Ticks are numbered from 1 in the order this debugger observes them.
#[derive(Debug, Default)]
pub struct TraceDebugger<K> {
    sink: K,
    tick: u64,
    behavior_index: u64,
    discovered_this_tick: u64,
    discovered: u64,
}

impl<K> TraceDebugger<K>
where
    K: TraceSink,
{
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            tick: 0,
            behavior_index: 0,
            discovered_this_tick: 0,
            discovered: 0,
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Ticks started so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// States discovered so far, across all ticks.
    pub fn discovered(&self) -> u64 {
        self.discovered
    }
}

impl<S, B, K> PlannerDebugger<S, B> for TraceDebugger<K>
where
    S: Debug,
    B: Behavior<S>,
    K: TraceSink,
{
    fn on_tick_start(&mut self) {
        self.tick += 1;
        self.behavior_index = 0;
        self.discovered_this_tick = 0;
        self.sink.emit(TraceEvent::new(self.tick, TAG_TICK_START));
    }

    fn on_behavior_start(&mut self, behavior: &B) {
        self.sink.emit(
            TraceEvent::new(self.tick, TAG_BEHAVIOR_START)
                .with_detail(behavior.name())
                .with_a(self.behavior_index),
        );
    }

    fn on_behavior_end(&mut self, behavior: &B) {
        self.sink.emit(
            TraceEvent::new(self.tick, TAG_BEHAVIOR_END)
                .with_detail(behavior.name())
                .with_a(self.behavior_index),
        );
        self.behavior_index += 1;
    }

    fn on_tick_end(&mut self, has_more_work: bool) {
        self.sink.emit(
            TraceEvent::new(self.tick, TAG_TICK_END)
                .with_a(u64::from(has_more_work))
                .with_b(self.discovered_this_tick),
        );
    }

    fn on_state_discovered(&mut self, state: &S) {
        self.discovered_this_tick += 1;
        self.discovered += 1;
        self.sink.emit(
            TraceEvent::new(self.tick, TAG_STATE_DISCOVERED)
                .with_detail(format!("{state:?}"))
                .with_a(self.discovered_this_tick)
                .with_b(self.discovered),
        );
    }
}

/// Forwards planner hooks to `tracing` at `TRACE` level under the `ai_goap::debugger` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDebugger {
    tick: u64,
}

impl TracingDebugger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, B> PlannerDebugger<S, B> for TracingDebugger
where
    S: Debug,
    B: Behavior<S>,
{
    fn on_tick_start(&mut self) {
        self.tick += 1;
        tracing::trace!(target: "ai_goap::debugger", tick = self.tick, "tick start");
    }

    fn on_behavior_start(&mut self, behavior: &B) {
        tracing::trace!(
            target: "ai_goap::debugger",
            tick = self.tick,
            behavior = behavior.name(),
            "behavior start"
        );
    }

    fn on_behavior_end(&mut self, behavior: &B) {
        tracing::trace!(
            target: "ai_goap::debugger",
            tick = self.tick,
            behavior = behavior.name(),
            "behavior end"
        );
    }

    fn on_tick_end(&mut self, has_more_work: bool) {
        tracing::trace!(target: "ai_goap::debugger", tick = self.tick, has_more_work, "tick end");
    }

    fn on_state_discovered(&mut self, state: &S) {
        tracing::trace!(
            target: "ai_goap::debugger",
            tick = self.tick,
            state = ?state,
            "state discovered"
        );
    }
}
