#![cfg(feature = "serde")]

use ai_tools::{TraceEvent, TraceLog, TAG_BEHAVIOR_START, TAG_TICK_END, TAG_TICK_START};

#[test]
fn trace_log_json_roundtrip() {
    let log = TraceLog {
        events: vec![
            TraceEvent::new(1, TAG_TICK_START),
            TraceEvent::new(1, TAG_BEHAVIOR_START).with_detail("make_axe"),
            TraceEvent::new(1, TAG_TICK_END).with_a(1).with_b(2),
        ],
    };

    let json = serde_json::to_string(&log).expect("serialize");
    let roundtrip: TraceLog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, log);
}
