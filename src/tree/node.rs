use crate::tree::kind::NodeKind;
use crate::tree::list::NodeList;
use crate::tree::trivia::Trivia;

/// Index of a node in its [`SyntaxTree`] arena. Stable for the lifetime of
/// the tree; node identity is id identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a node lives: owned by a parent's child list, or by the tree's
/// top-level root list. Exactly one variant holds for every node, enforced
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Owned by `parent`'s children.
    InTree(NodeId),
    /// Owned by the tree's root list.
    AtRoot,
}

/// Owned node payload inside the arena.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    /// The construct's own source slice, without surrounding trivia.
    pub(crate) source_text: String,
    /// Full span start, extended over attached leading trivia.
    pub(crate) start_offset: usize,
    /// Full span end, extended over attached trailing trivia.
    pub(crate) end_offset: usize,
    /// Resolved display name; `""` when no identifier concept applies.
    pub(crate) name: String,
    pub(crate) children: Vec<NodeId>,
    pub(crate) leading_trivia: Vec<Trivia>,
    pub(crate) trailing_trivia: Vec<Trivia>,
    pub(crate) location: Location,
}

/// An indexed, immutable syntax tree: arena of nodes plus the top-level root
/// list. All reads are borrowed views; nothing mutates after construction,
/// so `&SyntaxTree` is freely shareable across threads.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) roots: Vec<NodeId>,
}

impl SyntaxTree {
    /// The top-level root list.
    pub fn root_nodes(&self) -> NodeList<'_> {
        NodeList::borrowed(self, &self.roots)
    }

    /// View a node by id.
    pub fn node(&self, id: NodeId) -> SyntaxNode<'_> {
        debug_assert!(id.index() < self.nodes.len());
        SyntaxNode { tree: self, id }
    }

    /// Total number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate every node in the tree, pre-order from each root.
    pub fn iter_nodes(&self) -> impl Iterator<Item = SyntaxNode<'_>> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.data(id).children.iter().rev().copied());
        }
        order.into_iter().map(move |id| self.node(id))
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// A lightweight cursor over one node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    pub(crate) tree: &'t SyntaxTree,
    pub(crate) id: NodeId,
}

impl<'t> SyntaxNode<'t> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    /// Resolved display name; empty when no identifier concept applies.
    pub fn name(&self) -> &'t str {
        &self.data().name
    }

    /// The construct's own source slice, without surrounding trivia.
    pub fn source_text(&self) -> &'t str {
        &self.data().source_text
    }

    /// Full span start (includes attached leading trivia).
    pub fn start_offset(&self) -> usize {
        self.data().start_offset
    }

    /// Full span end (includes attached trailing trivia).
    pub fn end_offset(&self) -> usize {
        self.data().end_offset
    }

    pub fn children(&self) -> NodeList<'t> {
        NodeList::borrowed(self.tree, &self.data().children)
    }

    pub fn leading_trivia(&self) -> &'t [Trivia] {
        &self.data().leading_trivia
    }

    pub fn trailing_trivia(&self) -> &'t [Trivia] {
        &self.data().trailing_trivia
    }

    pub fn location(&self) -> Location {
        self.data().location
    }

    /// Parent node, `None` for nodes in the root list.
    pub fn parent(&self) -> Option<SyntaxNode<'t>> {
        match self.data().location {
            Location::InTree(parent) => Some(self.tree.node(parent)),
            Location::AtRoot => None,
        }
    }

    /// The list this node is owned by: the parent's children or the root list.
    pub fn owning_list(&self) -> NodeList<'t> {
        match self.data().location {
            Location::InTree(parent) => self.tree.node(parent).children(),
            Location::AtRoot => self.tree.root_nodes(),
        }
    }

    /// Next node in the owning list, by identity.
    pub fn next_sibling(&self) -> Option<SyntaxNode<'t>> {
        let list = self.owning_list();
        let pos = list.position_of(self.id)?;
        list.get(pos + 1)
    }

    /// Previous node in the owning list, by identity.
    pub fn prev_sibling(&self) -> Option<SyntaxNode<'t>> {
        let list = self.owning_list();
        let pos = list.position_of(self.id)?;
        pos.checked_sub(1).and_then(|p| list.get(p))
    }

    /// Zero-based ordinal of this node among same-kind entries of its owning
    /// list. Drives the `[i]` guard in derived paths.
    pub fn same_kind_ordinal(&self) -> usize {
        let kind = self.kind();
        self.owning_list()
            .iter()
            .take_while(|n| n.id != self.id)
            .filter(|n| n.kind() == kind)
            .count()
    }

    fn data(&self) -> &'t NodeData {
        self.tree.data(self.id)
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl Eq for SyntaxNode<'_> {}

impl std::fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("name", &self.name())
            .field("span", &(self.start_offset()..self.end_offset()))
            .finish()
    }
}
