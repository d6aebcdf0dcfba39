//! Search-graph vertices and the arena that owns them.
//!
//! Nodes refer to each other by [`NodeId`] rather than by reference, so a node can be re-parented
//! when a cheaper route to its state turns up without any aliasing between nodes.

use ai_core::{Behavior, BehaviorId, BehaviorProvider};

use crate::{PlanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// One vertex of the search graph.
///
/// The world state never changes and acts as the node's identity. The inbound behavior and the
/// parent link change together whenever a strictly cheaper route is found; children stay
/// attached across such moves and their costs follow implicitly.
#[derive(Debug, Clone)]
pub struct Node<S> {
    state: S,
    behavior: Option<BehaviorId>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    generation: u32,
}

impl<S> Node<S> {
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The behavior leading here from [`parent`](Node::parent). `None` only for the root.
    pub fn behavior(&self) -> Option<BehaviorId> {
        self.behavior
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Nodes currently parented to this one.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Bumped on every re-parent; frontier entries carrying an older value are stale.
    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }
}

/// Price a single edge, rejecting non-positive (and NaN) costs.
pub(crate) fn edge_cost<S, B>(behavior: &B, from: &S) -> Result<f32>
where
    B: Behavior<S>,
{
    let cost = behavior.cost(from);
    if cost > 0.0 {
        Ok(cost)
    } else {
        Err(PlanError::CostViolation {
            behavior: behavior.name().to_string(),
            cost,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> NodeArena<S> {
    pub(crate) fn with_root(state: S) -> Self {
        Self {
            nodes: vec![Node {
                state,
                behavior: None,
                parent: None,
                children: Vec::new(),
                generation: 0,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, root included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId::from_index(idx), node))
    }

    pub(crate) fn insert(&mut self, state: S, behavior: BehaviorId, parent: NodeId) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            state,
            behavior: Some(behavior),
            parent: Some(parent),
            children: Vec::new(),
            generation: 0,
        });
        self.add_child(parent, id);
        id
    }

    /// Move `id` under `new_parent`, reached via `behavior`.
    ///
    /// Detaches from the previous parent's child set and joins the new one. The node's own
    /// children are untouched; their costs are derived from the tree, so they pick up the change
    /// the next time they are priced.
    pub(crate) fn reparent(&mut self, id: NodeId, new_parent: NodeId, behavior: BehaviorId) {
        let old_parent = self.nodes[id.index()].parent;
        if let Some(old) = old_parent {
            self.remove_child(old, id);
        }

        let node = &mut self.nodes[id.index()];
        node.parent = Some(new_parent);
        node.behavior = Some(behavior);
        self.touch(id);

        self.add_child(new_parent, id);
    }

    /// Bump the generation of `id`, invalidating frontier entries pushed before now.
    pub(crate) fn touch(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.index()];
        node.generation = node.generation.wrapping_add(1);
    }

    /// Every node below `id` along the child sets, `id` itself excluded. Depth-first.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.index()]
            .children
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.index()].children.iter().rev().copied());
        }
        out
    }

    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) {
        let children = &mut self.nodes[parent.index()].children;
        if !children.contains(&child) {
            children.push(child);
        }
    }

    pub(crate) fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].children.retain(|c| *c != child);
    }

    /// Total cost from the root to `id`: the sum of every edge on the current parent chain, each
    /// priced against the state it leaves from.
    pub fn cost<P>(&self, id: NodeId, provider: &P) -> Result<f32>
    where
        P: BehaviorProvider<S> + ?Sized,
    {
        let mut total = 0.0;
        let mut current = id;
        loop {
            let node = &self.nodes[current.index()];
            let (Some(parent), Some(behavior)) = (node.parent, node.behavior) else {
                return Ok(total);
            };
            let from = &self.nodes[parent.index()].state;
            total += edge_cost(&provider.behaviors()[behavior.0], from)?;
            current = parent;
        }
    }

    /// Inbound behaviors from `id` back to the root, last edge first.
    pub fn path_to_root(&self, id: NodeId) -> Vec<BehaviorId> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(node) = self.nodes.get(current.index()) {
            let (Some(parent), Some(behavior)) = (node.parent, node.behavior) else {
                break;
            };
            path.push(behavior);
            current = parent;
        }
        path
    }
}

impl<S> core::ops::Index<NodeId> for NodeArena<S> {
    type Output = Node<S>;

    fn index(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.index()]
    }
}
