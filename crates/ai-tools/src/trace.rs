#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A small, allocation-friendly trace event.
///
/// This is intentionally "dumb data" so it can be recorded while a planner steps and rendered
/// later by tooling. The meaning of `a`/`b` depends on the tag; see the constants below.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    pub detail: Option<String>,
    pub a: u64,
    pub b: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            tag: tag.into(),
            detail: None,
            a: 0,
            b: 0,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_a(mut self, a: u64) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: u64) -> Self {
        self.b = b;
        self
    }
}

/// Tick started.
pub const TAG_TICK_START: &str = "goap.tick.start";
/// `detail` = behavior name, `a` = position within the tick.
pub const TAG_BEHAVIOR_START: &str = "goap.behavior.start";
/// `detail` = behavior name, `a` = position within the tick.
pub const TAG_BEHAVIOR_END: &str = "goap.behavior.end";
/// `detail` = state (`Debug`), `a` = discoveries this tick, `b` = discoveries overall.
pub const TAG_STATE_DISCOVERED: &str = "goap.state.discovered";
/// `a` = 1 if more work remains, `b` = discoveries this tick.
pub const TAG_TICK_END: &str = "goap.tick.end";

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

impl<T> TraceSink for &mut T
where
    T: TraceSink + ?Sized,
{
    fn emit(&mut self, event: TraceEvent) {
        (**self).emit(event);
    }
}

impl<T> TraceSink for Box<T>
where
    T: TraceSink + ?Sized,
{
    fn emit(&mut self, event: TraceEvent) {
        (**self).emit(event);
    }
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// Events carrying `tag`, in emission order.
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a TraceEvent> + 'a {
        self.events.iter().filter(move |e| e.tag == tag)
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
