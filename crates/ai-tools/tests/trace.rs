use std::cell::RefCell;
use std::rc::Rc;

use ai_tools::{NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};

#[derive(Clone, Default)]
struct RcSink(Rc<RefCell<Vec<TraceEvent>>>);

impl TraceSink for RcSink {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

#[test]
fn event_builder_sets_fields() {
    let event = TraceEvent::new(1, "test")
        .with_detail("chop_wood")
        .with_a(10)
        .with_b(20);

    assert_eq!(event.tick, 1);
    assert_eq!(event.tag, "test");
    assert_eq!(event.detail.as_deref(), Some("chop_wood"));
    assert_eq!(event.a, 10);
    assert_eq!(event.b, 20);
}

#[test]
fn vec_sink_and_trace_log_collect_in_order() {
    let mut sink = VecTraceSink::default();
    sink.emit(TraceEvent::new(1, "first"));
    sink.emit(TraceEvent::new(2, "second"));
    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.events[1].tag, "second");

    let mut log = TraceLog::default();
    log.emit(TraceEvent::new(1, "a"));
    log.emit(TraceEvent::new(1, "b"));
    log.emit(TraceEvent::new(2, "a"));
    let ticks: Vec<u64> = log.with_tag("a").map(|e| e.tick).collect();
    assert_eq!(ticks, vec![1, 2]);
}

fn send<K: TraceSink>(mut sink: K, event: TraceEvent) {
    sink.emit(event);
}

#[test]
fn boxed_and_borrowed_sinks_forward() {
    let handle = RcSink::default();
    let shared = handle.0.clone();

    let mut boxed: Box<dyn TraceSink> = Box::new(handle);
    boxed.emit(TraceEvent::new(3, "boxed"));
    send(&mut boxed, TraceEvent::new(4, "borrowed"));

    let events = shared.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].tag, "boxed");
    assert_eq!(events[1].tick, 4);
}

#[test]
fn null_sink_discards() {
    let mut sink = NullTraceSink;
    sink.emit(TraceEvent::new(1, "ignored"));
}
