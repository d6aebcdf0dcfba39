use core::cmp::Ordering;
use core::fmt::Debug;
use std::collections::{BTreeSet, HashMap};

use ai_core::{Behavior, BehaviorId, BehaviorProvider, Goal, WorldState};

use crate::frontier::{Frontier, FrontierEntry};
use crate::node::{Node, NodeArena, NodeId};
use crate::{PlanError, Result};

/// The shared, mutable state of one planning session.
///
/// Holds every node discovered so far, the open frontier, the closed set, a state → node index
/// covering open and closed states alike, and the cheapest goal-satisfying node seen. A graph is
/// owned by exactly one [`Session`](crate::Session); independent sessions never share one.
pub struct SearchGraph<S, P, G> {
    pub(crate) provider: P,
    pub(crate) goal: G,
    pub(crate) nodes: NodeArena<S>,
    pub(crate) index: HashMap<S, NodeId>,
    pub(crate) frontier: Frontier,
    pub(crate) closed: BTreeSet<NodeId>,
    pub(crate) best: Option<NodeId>,
}

/// Frontier order: goal closeness first, then cheaper best-known cost, then insertion order.
///
/// Entries carry the cost as of their push. Any route change that lowers an open node's cost
/// pushes a fresh entry, so the live entry's snapshot is always the best-known cost.
fn frontier_order<S, G>(
    goal: &G,
    nodes: &NodeArena<S>,
    a: &FrontierEntry,
    b: &FrontierEntry,
) -> Ordering
where
    G: Goal<S>,
{
    goal.compare(nodes[a.node].state(), nodes[b.node].state())
        .then_with(|| a.cost.total_cmp(&b.cost))
        .then(a.seq.cmp(&b.seq))
}

impl<S, P, G> SearchGraph<S, P, G>
where
    S: WorldState,
    P: BehaviorProvider<S>,
    G: Goal<S>,
{
    /// Seed a graph with `initial` as its root (cost 0), indexed and enqueued.
    pub fn new(initial: S, provider: P, goal: G) -> Self {
        let mut index = HashMap::new();
        index.insert(initial.duplicate(), NodeId::ROOT);

        let mut graph = Self {
            provider,
            goal,
            nodes: NodeArena::with_root(initial),
            index,
            frontier: Frontier::default(),
            closed: BTreeSet::new(),
            best: None,
        };
        graph.enqueue(NodeId::ROOT, 0.0);
        graph
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn goal(&self) -> &G {
        &self.goal
    }

    pub fn root(&self) -> NodeId {
        self.nodes.root()
    }

    pub fn nodes(&self) -> &NodeArena<S> {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id)
    }

    pub fn node_for(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    /// Number of indexed states. The initial state is always one of them.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn best_solution(&self) -> Option<NodeId> {
        self.best
    }

    pub fn open_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    pub fn is_open(&self, state: &S) -> bool {
        self.node_for(state).is_some_and(|id| self.frontier.contains(id))
    }

    pub fn is_closed(&self, state: &S) -> bool {
        self.node_for(state).is_some_and(|id| self.closed.contains(&id))
    }

    /// Current best-known cost from the root to `id`.
    pub fn cost(&self, id: NodeId) -> Result<f32> {
        self.nodes.cost(id, &self.provider)
    }

    /// Best-known cost from the root to `state`.
    pub fn best_known_cost(&self, state: &S) -> Result<f32> {
        let id = self.node_for(state).ok_or(PlanError::UnknownState)?;
        self.cost(id)
    }

    /// The open node that will be expanded next, without removing it.
    pub fn peek_frontier(&self) -> Option<NodeId> {
        let nodes = &self.nodes;
        let goal = &self.goal;
        self.frontier.peek(
            |e| nodes[e.node].generation() == e.generation,
            |a, b| frontier_order(goal, nodes, a, b),
        )
    }

    pub(crate) fn pop_frontier(&mut self) -> Option<NodeId> {
        let nodes = &self.nodes;
        let goal = &self.goal;
        self.frontier.pop(
            |e| nodes[e.node].generation() == e.generation,
            |a, b| frontier_order(goal, nodes, a, b),
        )
    }

    /// Queue `id` with `cost` as its priority snapshot. Re-queueing an open node is the lazy
    /// decrease-key: the newer entry wins and the old one goes stale.
    pub(crate) fn enqueue(&mut self, id: NodeId, cost: f32) {
        let nodes = &self.nodes;
        let goal = &self.goal;
        let generation = nodes[id].generation();
        self.frontier
            .push(id, cost, generation, |a, b| frontier_order(goal, nodes, a, b));
    }

    /// Index a newly discovered state under `parent`. Idempotent per state.
    pub(crate) fn index_node(&mut self, state: S, behavior: BehaviorId, parent: NodeId) -> NodeId {
        if let Some(id) = self.node_for(&state) {
            return id;
        }
        let key = state.duplicate();
        let id = self.nodes.insert(state, behavior, parent);
        self.index.insert(key, id);
        id
    }

    /// Move `id` onto a cheaper route under `parent`.
    ///
    /// Open descendants get a fresh frontier entry at their lowered cost; the entries they had
    /// go stale. `id` itself is left to the caller.
    pub(crate) fn reparent(
        &mut self,
        id: NodeId,
        parent: NodeId,
        behavior: BehaviorId,
    ) -> Result<()> {
        self.nodes.reparent(id, parent, behavior);
        for below in self.nodes.descendants(id) {
            if self.frontier.contains(below) {
                let cost = self.cost(below)?;
                self.nodes.touch(below);
                self.enqueue(below, cost);
            }
        }
        Ok(())
    }

    /// Take `id` out of the frontier for good.
    pub(crate) fn close(&mut self, id: NodeId) {
        self.frontier.remove(id);
        self.closed.insert(id);
    }
}

impl<S, P, G> SearchGraph<S, P, G>
where
    S: WorldState + Debug,
    P: BehaviorProvider<S>,
    G: Goal<S>,
{
    fn edge_label(&self, node: &Node<S>) -> &str {
        if node.is_root() {
            return "<root>";
        }
        node.behavior()
            .and_then(|b| self.provider.get(b))
            .map_or("<unknown>", |b| b.name())
    }

    /// One `behavior:cost` line per node from `id` up to the root, indented by depth.
    pub fn render_lineage(&self, id: NodeId) -> Result<String> {
        let mut out = String::new();
        let mut current = Some(id);
        let mut indent = 0;
        while let Some(node_id) = current {
            let node = self.node(node_id).ok_or(PlanError::UnknownState)?;
            let cost = self.cost(node_id)?;
            out.push_str(&format!(
                "{:indent$}{}:{} {:?}\n",
                "",
                self.edge_label(node),
                cost,
                node.state(),
                indent = indent
            ));
            current = node.parent();
            indent += 2;
        }
        Ok(out)
    }

    /// The whole graph as an indented tree, following child sets from the root.
    pub fn render_tree(&self) -> Result<String> {
        let mut out = String::new();
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            let mut markers = String::new();
            if self.best == Some(id) {
                markers.push_str(" [best]");
            }
            if self.closed.contains(&id) {
                markers.push_str(" [closed]");
            } else if self.frontier.contains(id) {
                markers.push_str(" [open]");
            }
            out.push_str(&format!(
                "{:indent$}{}:{} {:?}{}\n",
                "",
                self.edge_label(node),
                self.cost(id)?,
                node.state(),
                markers,
                indent = depth * 2
            ));
            for child in node.children().iter().rev() {
                stack.push((*child, depth + 1));
            }
        }
        Ok(out)
    }
}

impl<S, P, G> Debug for SearchGraph<S, P, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SearchGraph")
            .field("nodes", &self.nodes.len())
            .field("open", &self.frontier.len())
            .field("closed", &self.closed.len())
            .field("best", &self.best)
            .finish()
    }
}

impl<S, P, G> SearchGraph<S, P, G> {
    /// Open node ids in ascending id order. Diagnostics only.
    pub fn open_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.frontier.open_nodes()
    }

    /// Closed node ids in ascending id order. Diagnostics only.
    pub fn closed_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.closed.iter().copied()
    }
}
