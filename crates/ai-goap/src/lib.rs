//! Incremental, resumable goal-oriented planner.
//!
//! A [`Session`] owns a search graph seeded with an initial world state. Each
//! [`Engine::step`] expands the current frontier state against every behavior, relaxes cheaper
//! routes to known states, prunes branches that cannot beat the best solution, and moves on to
//! the next most promising state. [`Engine::extract_plan`] walks parent links back to the root.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
mod frontier;
pub mod graph;
pub mod node;
pub mod session;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{PlanError, Result};
pub use graph::SearchGraph;
pub use node::{Node, NodeArena, NodeId};
pub use session::{Session, SessionStatus};
