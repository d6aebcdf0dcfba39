//! Umbrella crate that re-exports the planner building blocks.
//!
//! - `core`: world state, behavior, goal and debugger contracts plus [`PlanSpec`](ai_core::PlanSpec).
//! - `goap`: the incremental planning engine.
//! - `tools`: trace sinks and ready-made debuggers.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "goap")]
#[cfg_attr(docsrs, doc(cfg(feature = "goap")))]
pub use ai_goap as goap;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ai_tools as tools;

/// The names most callers need to set up and drive a session.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use ai_core::{Behavior, BehaviorProvider, Goal, PlanSpec, PlannerDebugger, WorldState};

    #[cfg(feature = "goap")]
    pub use ai_goap::{Engine, EngineConfig, PlanError, Session, SessionStatus};

    #[cfg(feature = "tools")]
    pub use ai_tools::{TraceDebugger, TraceLog, TracingDebugger};
}
