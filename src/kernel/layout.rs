//! Pane arrangement: a minimal tree of splits whose leaves are session ids.

use super::rich_text::RichText;
use super::session::{SessionId, SessionRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Children side by side.
    Horizontal,
    /// Children stacked top to bottom.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNode {
    pub id: SplitId,
    pub direction: SplitDirection,
    pub children: Vec<LayoutNode>,
    /// Relative sizes, one per child.
    pub sizes: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    Leaf(SessionId),
    Split(SplitNode),
}

/// Structure of a tree with split ids erased, for shape comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutShape {
    Leaf(SessionId),
    Split(SplitDirection, Vec<LayoutShape>),
}

impl LayoutNode {
    pub fn contains(&self, id: &SessionId) -> bool {
        match self {
            LayoutNode::Leaf(leaf) => leaf == id,
            LayoutNode::Split(split) => split.children.iter().any(|c| c.contains(id)),
        }
    }

    pub fn leaves(&self) -> Vec<&SessionId> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a SessionId>) {
        match self {
            LayoutNode::Leaf(id) => out.push(id),
            LayoutNode::Split(split) => {
                for child in &split.children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    pub fn first_leaf(&self) -> Option<&SessionId> {
        match self {
            LayoutNode::Leaf(id) => Some(id),
            LayoutNode::Split(split) => split.children.first().and_then(LayoutNode::first_leaf),
        }
    }

    pub fn shape(&self) -> LayoutShape {
        match self {
            LayoutNode::Leaf(id) => LayoutShape::Leaf(id.clone()),
            LayoutNode::Split(split) => LayoutShape::Split(
                split.direction,
                split.children.iter().map(LayoutNode::shape).collect(),
            ),
        }
    }

    /// No split has fewer than two children.
    pub fn is_minimal(&self) -> bool {
        match self {
            LayoutNode::Leaf(_) => true,
            LayoutNode::Split(split) => {
                split.children.len() >= 2
                    && split.sizes.len() == split.children.len()
                    && split.children.iter().all(LayoutNode::is_minimal)
            }
        }
    }

    /// Replaces the leaf `target` with `make()`. Returns whether it was found.
    fn replace_leaf(&mut self, target: &SessionId, make: &mut dyn FnMut() -> LayoutNode) -> bool {
        match self {
            LayoutNode::Leaf(id) if id == target => {
                *self = make();
                true
            }
            LayoutNode::Leaf(_) => false,
            LayoutNode::Split(split) => split
                .children
                .iter_mut()
                .any(|child| child.replace_leaf(target, &mut *make)),
        }
    }

    /// Drops the leaf `target` from every split and collapses single-child splits.
    /// Returns `None` if the whole node was the removed leaf.
    fn without_leaf(self, target: &SessionId) -> Option<LayoutNode> {
        match self {
            LayoutNode::Leaf(id) if &id == target => None,
            leaf @ LayoutNode::Leaf(_) => Some(leaf),
            LayoutNode::Split(split) => {
                let SplitNode {
                    id,
                    direction,
                    children,
                    sizes,
                } = split;
                let mut kept = Vec::with_capacity(children.len());
                let mut kept_sizes = Vec::with_capacity(children.len());
                for (child, size) in children.into_iter().zip(sizes) {
                    if let Some(child) = child.without_leaf(target) {
                        kept.push(child);
                        kept_sizes.push(size);
                    }
                }
                match kept.len() {
                    0 => None,
                    1 => kept.pop(),
                    _ => Some(LayoutNode::Split(SplitNode {
                        id,
                        direction,
                        children: kept,
                        sizes: kept_sizes,
                    })),
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct LayoutTree {
    root: LayoutNode,
    next_split: u64,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            root: LayoutNode::Leaf(SessionId::main()),
            next_split: 1,
        }
    }

    pub fn root(&self) -> &LayoutNode {
        &self.root
    }

    pub fn is_single_leaf(&self) -> bool {
        matches!(self.root, LayoutNode::Leaf(_))
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.root.contains(id)
    }

    pub fn leaves(&self) -> Vec<&SessionId> {
        self.root.leaves()
    }

    pub fn first_leaf(&self) -> Option<&SessionId> {
        self.root.first_leaf()
    }

    pub fn shape(&self) -> LayoutShape {
        self.root.shape()
    }

    /// Splits the pane showing `target`, placing a fresh session after it.
    ///
    /// Returns the new session id, or `None` (creating nothing) if `target` is not in the tree.
    pub fn split(
        &mut self,
        registry: &mut SessionRegistry,
        target: &SessionId,
        direction: SplitDirection,
        welcome: RichText,
    ) -> Option<SessionId> {
        if !self.root.contains(target) {
            tracing::warn!(session = %target, "split target not in layout");
            return None;
        }

        let new_id = registry.create_session(welcome);
        let split_id = SplitId(self.next_split);
        self.next_split += 1;

        let leaf_new = new_id.clone();
        let mut make = || {
            LayoutNode::Split(SplitNode {
                id: split_id,
                direction,
                children: vec![
                    LayoutNode::Leaf(target.clone()),
                    LayoutNode::Leaf(leaf_new.clone()),
                ],
                sizes: vec![50, 50],
            })
        };
        self.root.replace_leaf(target, &mut make);
        tracing::info!(session = %target, new = %new_id, ?direction, "pane split");
        Some(new_id)
    }

    /// Closes the pane showing `target` and drops its session.
    ///
    /// The last remaining pane is never closed; returns whether anything changed.
    pub fn close(&mut self, registry: &mut SessionRegistry, target: &SessionId) -> bool {
        if self.is_single_leaf() || !self.root.contains(target) {
            return false;
        }

        match self.root.clone().without_leaf(target) {
            Some(next) => {
                self.root = next;
                registry.remove(target);
                tracing::info!(session = %target, "pane closed");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
