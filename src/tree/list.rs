use std::borrow::Cow;

use crate::tree::kind::NodeKind;
use crate::tree::node::{NodeId, SyntaxNode, SyntaxTree};

/// Disambiguates among same-kind siblings: by zero-based ordinal, or by the
/// first entry whose resolved name matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Ordinal(usize),
    Name(String),
}

/// Ordered view over the nodes of one owning list (a parent's children or
/// the tree's root list). Filters preserve source order.
#[derive(Clone)]
pub struct NodeList<'t> {
    tree: &'t SyntaxTree,
    ids: Cow<'t, [NodeId]>,
}

impl<'t> NodeList<'t> {
    pub(crate) fn borrowed(tree: &'t SyntaxTree, ids: &'t [NodeId]) -> Self {
        Self {
            tree,
            ids: Cow::Borrowed(ids),
        }
    }

    pub(crate) fn owned(tree: &'t SyntaxTree, ids: Vec<NodeId>) -> Self {
        Self {
            tree,
            ids: Cow::Owned(ids),
        }
    }

    /// An empty list over the same tree.
    pub(crate) fn empty_like(&self) -> NodeList<'t> {
        NodeList::owned(self.tree, Vec::new())
    }

    /// A one-entry list holding `node`.
    pub(crate) fn from_node(node: SyntaxNode<'t>) -> NodeList<'t> {
        NodeList::owned(node.tree(), vec![node.id()])
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SyntaxNode<'t>> {
        self.ids.get(index).map(|&id| self.tree.node(id))
    }

    pub fn first(&self) -> Option<SyntaxNode<'t>> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = SyntaxNode<'t>> + '_ {
        let tree = self.tree;
        self.ids.iter().map(move |&id| tree.node(id))
    }

    /// Position of a node in this list, by identity.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.ids.iter().position(|&n| n == id)
    }

    /// All entries of the requested kind, source order preserved.
    pub fn of_kind(&self, kind: NodeKind) -> NodeList<'t> {
        let ids = self
            .ids
            .iter()
            .filter(|&&id| self.tree.data(id).kind == kind)
            .copied()
            .collect();
        NodeList::owned(self.tree, ids)
    }

    /// Zero-or-one entry matching kind plus guard: the ordinal-th same-kind
    /// entry, or the first same-kind entry whose name equals the guard.
    pub fn find(&self, kind: NodeKind, guard: &Guard) -> Option<SyntaxNode<'t>> {
        let mut same_kind = self.iter().filter(|n| n.kind() == kind);
        match guard {
            Guard::Ordinal(i) => same_kind.nth(*i),
            Guard::Name(name) => same_kind.find(|n| n.name() == name),
        }
    }

    /// Descend through a chain of kinds: filter this list by the first kind,
    /// follow only the first match through each intermediate kind, and
    /// return all matches of the terminal kind. Any empty intermediate step
    /// short-circuits to an empty result.
    pub fn get_children(&self, kinds: &[NodeKind]) -> NodeList<'t> {
        let Some((&last, rest)) = kinds.split_last() else {
            return NodeList::owned(self.tree, Vec::new());
        };

        let mut scope = self.clone();
        for &kind in rest {
            match scope.of_kind(kind).first() {
                Some(node) => scope = node.children(),
                None => return NodeList::owned(self.tree, Vec::new()),
            }
        }
        scope.of_kind(last)
    }

    /// Guarded counterpart of [`NodeList::get_children`]: every step,
    /// including the last, narrows to exactly one node.
    pub fn get_child(&self, steps: &[(NodeKind, Guard)]) -> Option<SyntaxNode<'t>> {
        let (&(last_kind, ref last_guard), rest) = steps.split_last()?;

        let mut scope = self.clone();
        for (kind, guard) in rest {
            scope = scope.find(*kind, guard)?.children();
        }
        scope.find(last_kind, last_guard)
    }
}

impl std::fmt::Debug for NodeList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl SyntaxTree {
    /// [`NodeList::get_children`] starting at the root list.
    pub fn get_children(&self, kinds: &[NodeKind]) -> NodeList<'_> {
        self.root_nodes().get_children(kinds)
    }

    /// [`NodeList::get_child`] starting at the root list.
    pub fn get_child_by_steps(&self, steps: &[(NodeKind, Guard)]) -> Option<SyntaxNode<'_>> {
        self.root_nodes().get_child(steps)
    }
}

impl<'t> SyntaxNode<'t> {
    /// [`NodeList::get_children`] over this node's children.
    pub fn get_children(&self, kinds: &[NodeKind]) -> NodeList<'t> {
        self.children().get_children(kinds)
    }

    /// [`NodeList::get_child`] over this node's children.
    pub fn get_child_by_steps(&self, steps: &[(NodeKind, Guard)]) -> Option<SyntaxNode<'t>> {
        self.children().get_child(steps)
    }
}
