#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Once a goal-satisfying state is known, index but never enqueue successors whose cost
    /// exceeds it.
    ///
    /// Without this, sessions over unbounded state spaces never exhaust their frontier.
    pub branch_and_bound: bool,

    /// Tick budget for [`Engine::run`](crate::Engine::run) and [`Engine::plan`](crate::Engine::plan).
    /// [`Engine::step`](crate::Engine::step) is never budgeted.
    pub max_ticks: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            branch_and_bound: true,
            max_ticks: 4096,
        }
    }
}
