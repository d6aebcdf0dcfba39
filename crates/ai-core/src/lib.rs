//! Engine-agnostic planning contracts.
//!
//! The planner in `ai-goap` treats world states, behaviors and goals as external capabilities.
//! This crate defines those capabilities plus the serializable plan output.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod debugger;
pub mod goal;
pub mod plan;
pub mod world;

pub use behavior::{Behavior, BehaviorId, BehaviorProvider};
pub use debugger::{NullDebugger, PlannerDebugger};
pub use goal::Goal;
pub use plan::PlanSpec;
pub use world::WorldState;
