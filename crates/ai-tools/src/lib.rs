//! Tooling for observing the planner.
//!
//! This crate is intentionally lightweight: it records planner hooks as plain trace events or
//! forwards them to `tracing`. Rendering and inspection belong in dedicated adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod debugger;
pub mod trace;

pub use debugger::{TraceDebugger, TracingDebugger};
pub use trace::{
    NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink, TAG_BEHAVIOR_END,
    TAG_BEHAVIOR_START, TAG_STATE_DISCOVERED, TAG_TICK_END, TAG_TICK_START,
};
