use ai_core::{
    Behavior, BehaviorId, BehaviorProvider, Goal, NullDebugger, PlanSpec, PlannerDebugger,
    WorldState,
};
use tracing::{debug, trace};

use crate::node::{edge_cost, NodeId};
use crate::{EngineConfig, PlanError, Result, SearchGraph, Session, SessionStatus};

/// Drives planning sessions one tick at a time.
///
/// The engine holds configuration only; all search state lives in the [`Session`] it is handed,
/// so one engine can advance any number of independent sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Open a session positioned at `initial`.
    ///
    /// An initial state that already satisfies the goal is recorded as the best solution at
    /// cost 0; the first tick then prunes every successor and the plan comes out empty.
    pub fn start<S, P, G>(&self, initial: S, provider: P, goal: G) -> Session<S, P, G>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        G: Goal<S>,
    {
        let mut graph = SearchGraph::new(initial, provider, goal);
        let root = graph.root();
        if graph.goal.is_satisfied(graph.nodes[root].state()) {
            graph.best = Some(root);
            debug!("initial state already satisfies the goal");
        }
        Session::new(graph)
    }

    /// Expand the current state against every behavior, then advance to the next frontier state.
    ///
    /// Returns `Ok(false)` once the frontier is exhausted (and for any tick after that).
    pub fn step<S, P, G>(&self, session: &mut Session<S, P, G>) -> Result<bool>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        G: Goal<S>,
    {
        self.step_observed(session, &mut NullDebugger)
    }

    pub fn step_observed<S, P, G, D>(
        &self,
        session: &mut Session<S, P, G>,
        debugger: &mut D,
    ) -> Result<bool>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        G: Goal<S>,
        D: PlannerDebugger<S, P::Behavior> + ?Sized,
    {
        let Some(current) = session.current else {
            return Ok(false);
        };

        debugger.on_tick_start();

        let behavior_count = session.graph.provider.behaviors().len();
        for idx in 0..behavior_count {
            debugger.on_behavior_start(&session.graph.provider.behaviors()[idx]);
            self.expand(&mut session.graph, current, BehaviorId(idx), debugger)?;
            debugger.on_behavior_end(&session.graph.provider.behaviors()[idx]);
        }

        let graph = &mut session.graph;
        graph.close(current);
        session.last_expanded = current;
        session.current = graph.pop_frontier();
        session.ticks += 1;

        let has_more_work = session.current.is_some();
        debug!(
            tick = session.ticks,
            open = graph.open_len(),
            closed = graph.closed_len(),
            nodes = graph.len(),
            solved = graph.best.is_some(),
            has_more_work,
            "planner tick"
        );
        if !has_more_work {
            debug!(tick = session.ticks, "frontier exhausted");
        }

        debugger.on_tick_end(has_more_work);
        Ok(has_more_work)
    }

    /// Step until the frontier is exhausted or `max_ticks` ticks have run in this call.
    pub fn run<S, P, G>(&self, session: &mut Session<S, P, G>) -> Result<SessionStatus>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        G: Goal<S>,
    {
        self.run_observed(session, &mut NullDebugger)
    }

    pub fn run_observed<S, P, G, D>(
        &self,
        session: &mut Session<S, P, G>,
        debugger: &mut D,
    ) -> Result<SessionStatus>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        G: Goal<S>,
        D: PlannerDebugger<S, P::Behavior> + ?Sized,
    {
        for _ in 0..self.config.max_ticks {
            if !self.step_observed(session, debugger)? {
                break;
            }
        }
        Ok(session.status())
    }

    /// Plan from `initial` in one call, within the configured tick budget.
    ///
    /// Returns `Ok(None)` when no goal-satisfying state was found.
    pub fn plan<S, P, G>(
        &self,
        initial: S,
        provider: P,
        goal: G,
    ) -> Result<Option<PlanSpec<P::Behavior>>>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        P::Behavior: Clone,
        G: Goal<S>,
    {
        let mut session = self.start(initial, provider, goal);
        self.run(&mut session)?;
        match session.graph.best_solution() {
            Some(best) => Ok(Some(self.plan_for(&session, best))),
            None => Ok(None),
        }
    }

    /// Behaviors leading to the best solution, or to the session's current (or final) state when
    /// no solution was found. Steps are returned last action first.
    pub fn extract_plan<S, P, G>(&self, session: &Session<S, P, G>) -> Result<PlanSpec<P::Behavior>>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        P::Behavior: Clone,
        G: Goal<S>,
    {
        Ok(self.plan_for(session, session.target_node()))
    }

    /// Behaviors leading to an arbitrary indexed state, last action first.
    pub fn extract_plan_to<S, P, G>(
        &self,
        session: &Session<S, P, G>,
        state: &S,
    ) -> Result<PlanSpec<P::Behavior>>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        P::Behavior: Clone,
        G: Goal<S>,
    {
        let target = session.graph.node_for(state).ok_or(PlanError::NoPlan)?;
        Ok(self.plan_for(session, target))
    }

    fn plan_for<S, P, G>(&self, session: &Session<S, P, G>, target: NodeId) -> PlanSpec<P::Behavior>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        P::Behavior: Clone,
        G: Goal<S>,
    {
        let behaviors = session.graph.provider.behaviors();
        let steps = session
            .graph
            .nodes
            .path_to_root(target)
            .into_iter()
            .map(|id| behaviors[id.0].clone())
            .collect();
        PlanSpec::new(steps)
    }

    /// Evaluate one behavior against the state at `current`.
    fn expand<S, P, G, D>(
        &self,
        graph: &mut SearchGraph<S, P, G>,
        current: NodeId,
        behavior_id: BehaviorId,
        debugger: &mut D,
    ) -> Result<()>
    where
        S: WorldState,
        P: BehaviorProvider<S>,
        G: Goal<S>,
        D: PlannerDebugger<S, P::Behavior> + ?Sized,
    {
        let (next, new_cost) = {
            let behavior = &graph.provider.behaviors()[behavior_id.0];
            let state = graph.nodes[current].state();
            if !behavior.can_run(state) {
                trace!(behavior = behavior.name(), "behavior not runnable");
                return Ok(());
            }

            let mut next = state.duplicate();
            if next.shares_storage_with(state) {
                return Err(PlanError::CloneViolation);
            }
            let step_cost = edge_cost(behavior, state)?;
            behavior.apply(&mut next);
            (next, graph.cost(current)? + step_cost)
        };

        if self.config.branch_and_bound {
            if let Some(best) = graph.best {
                let best_cost = graph.cost(best)?;
                if new_cost > best_cost {
                    // Keep the record for later relaxation, but never expand it.
                    graph.index_node(next, behavior_id, current);
                    trace!(
                        behavior = behavior_id.0,
                        cost = new_cost,
                        best = best_cost,
                        "pruned successor"
                    );
                    return Ok(());
                }
            }
        }

        if graph.goal.is_satisfied(&next) {
            let improves = match graph.best {
                Some(best) => new_cost < graph.cost(best)?,
                None => true,
            };
            if improves {
                let id = match graph.node_for(&next) {
                    Some(id) => {
                        if new_cost < graph.cost(id)? {
                            graph.reparent(id, current, behavior_id)?;
                        }
                        id
                    }
                    None => graph.index_node(next, behavior_id, current),
                };
                graph.best = Some(id);
                graph.close(id);
                debug!(cost = new_cost, nodes = graph.len(), "best solution improved");
                return Ok(());
            }
        }

        match graph.node_for(&next) {
            Some(id) => {
                let known_cost = graph.cost(id)?;
                if new_cost < known_cost {
                    graph.reparent(id, current, behavior_id)?;
                    trace!(
                        behavior = behavior_id.0,
                        from = known_cost,
                        to = new_cost,
                        "relaxed known state"
                    );
                    if graph.frontier.contains(id) {
                        graph.enqueue(id, new_cost);
                        return Ok(());
                    }
                }
                if graph.frontier.contains(id) || graph.closed.contains(&id) {
                    return Ok(());
                }
                graph.enqueue(id, new_cost.min(known_cost));
            }
            None => {
                let id = graph.index_node(next, behavior_id, current);
                debugger.on_state_discovered(graph.nodes[id].state());
                graph.enqueue(id, new_cost);
            }
        }
        Ok(())
    }
}
