use ai_core::{Behavior, PlannerDebugger};
use ai_tools::{
    TraceDebugger, TraceLog, TracingDebugger, TAG_BEHAVIOR_END, TAG_BEHAVIOR_START,
    TAG_STATE_DISCOVERED, TAG_TICK_END, TAG_TICK_START,
};

struct Named(&'static str);

impl Behavior<i32> for Named {
    fn name(&self) -> &str {
        self.0
    }

    fn apply(&self, state: &mut i32) {
        *state += 1;
    }

    fn cost(&self, _state: &i32) -> f32 {
        1.0
    }
}

fn drive<D: PlannerDebugger<i32, Named>>(debugger: &mut D) {
    let behaviors = [Named("inc"), Named("dec")];
    for tick in 0..2 {
        debugger.on_tick_start();
        for b in &behaviors {
            debugger.on_behavior_start(b);
            if tick == 0 {
                debugger.on_state_discovered(&7);
            }
            debugger.on_behavior_end(b);
        }
        debugger.on_tick_end(tick == 0);
    }
}

#[test]
fn trace_debugger_records_hooks_as_events() {
    let mut debugger = TraceDebugger::new(TraceLog::default());
    drive(&mut debugger);

    assert_eq!(debugger.ticks(), 2);
    assert_eq!(debugger.discovered(), 2);

    let log = debugger.into_sink();
    assert_eq!(log.with_tag(TAG_TICK_START).count(), 2);
    assert_eq!(log.with_tag(TAG_BEHAVIOR_START).count(), 4);
    assert_eq!(log.with_tag(TAG_BEHAVIOR_END).count(), 4);

    let names: Vec<&str> = log
        .with_tag(TAG_BEHAVIOR_START)
        .filter(|e| e.tick == 2)
        .filter_map(|e| e.detail.as_deref())
        .collect();
    assert_eq!(names, vec!["inc", "dec"]);

    let positions: Vec<u64> = log.with_tag(TAG_BEHAVIOR_END).map(|e| e.a).collect();
    assert_eq!(positions, vec![0, 1, 0, 1]);

    let discovered: Vec<_> = log.with_tag(TAG_STATE_DISCOVERED).collect();
    assert_eq!(discovered.len(), 2);
    assert_eq!(discovered[0].detail.as_deref(), Some("7"));
    assert_eq!((discovered[1].a, discovered[1].b), (2, 2));

    let ends: Vec<(u64, u64, u64)> = log
        .with_tag(TAG_TICK_END)
        .map(|e| (e.tick, e.a, e.b))
        .collect();
    assert_eq!(ends, vec![(1, 1, 2), (2, 0, 0)]);
}

#[test]
fn tracing_debugger_accepts_hooks_without_subscriber() {
    let mut debugger = TracingDebugger::new();
    drive(&mut debugger);
}
