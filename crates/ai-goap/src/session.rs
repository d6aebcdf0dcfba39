use ai_core::{BehaviorProvider, Goal, WorldState};

use crate::node::NodeId;
use crate::{Result, SearchGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// A frontier state is waiting to be expanded and no solution is known yet.
    Active,
    /// A goal-satisfying state is known. Stepping continues to look for a cheaper one.
    Solved,
    /// The frontier is empty. Terminal.
    Exhausted,
}

/// A planning session: the search graph plus the frontier state the next tick will expand.
///
/// Sessions are created by [`Engine::start`](crate::Engine::start) and advanced with
/// [`Engine::step`](crate::Engine::step). Dropping the session is the only cancellation there is.
#[derive(Debug)]
pub struct Session<S, P, G> {
    pub(crate) graph: SearchGraph<S, P, G>,
    pub(crate) current: Option<NodeId>,
    pub(crate) last_expanded: NodeId,
    pub(crate) ticks: u64,
}

impl<S, P, G> Session<S, P, G>
where
    S: WorldState,
    P: BehaviorProvider<S>,
    G: Goal<S>,
{
    pub(crate) fn new(graph: SearchGraph<S, P, G>) -> Self {
        let root = graph.root();
        Self {
            graph,
            current: Some(root),
            last_expanded: root,
            ticks: 0,
        }
    }

    pub fn graph(&self) -> &SearchGraph<S, P, G> {
        &self.graph
    }

    pub fn goal(&self) -> &G {
        self.graph.goal()
    }

    pub fn status(&self) -> SessionStatus {
        if self.current.is_none() {
            SessionStatus::Exhausted
        } else if self.graph.best_solution().is_some() {
            SessionStatus::Solved
        } else {
            SessionStatus::Active
        }
    }

    /// True once the frontier is exhausted and no further ticks will do any work.
    pub fn is_done(&self) -> bool {
        self.current.is_none()
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn initial_state(&self) -> &S {
        self.graph.nodes()[self.graph.root()].state()
    }

    pub fn current_node(&self) -> Option<NodeId> {
        self.current
    }

    /// The state the next tick will expand. `None` once exhausted.
    pub fn current_state(&self) -> Option<&S> {
        self.current.map(|id| self.graph.nodes()[id].state())
    }

    /// The most promising open state, i.e. the one expanded after the current tick.
    pub fn highest_priority(&self) -> Option<&S> {
        self.graph
            .peek_frontier()
            .map(|id| self.graph.nodes()[id].state())
    }

    pub fn open_set_size(&self) -> usize {
        self.graph.open_len()
    }

    pub fn closed_set_size(&self) -> usize {
        self.graph.closed_len()
    }

    pub fn best_solution(&self) -> Option<&S> {
        self.graph
            .best_solution()
            .map(|id| self.graph.nodes()[id].state())
    }

    pub fn best_cost(&self) -> Result<Option<f32>> {
        self.graph
            .best_solution()
            .map(|id| self.graph.cost(id))
            .transpose()
    }

    /// The node a plan is extracted for: the best solution if one was ever found, otherwise the
    /// current state, otherwise the last state expanded before the frontier ran dry.
    pub fn target_node(&self) -> NodeId {
        self.graph
            .best_solution()
            .or(self.current)
            .unwrap_or(self.last_expanded)
    }

    pub fn best_world_state(&self) -> &S {
        self.graph.nodes()[self.target_node()].state()
    }
}
