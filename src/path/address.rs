//! Derived address strings for nodes.
//!
//! Both paths are recomputed on every call and never cached; the tree is
//! immutable, so concurrent derivation needs no synchronization. Evaluating
//! either string with [`crate::path::PathQuery`] against the unchanged tree
//! yields the originating node back.

use crate::path::vocab::keyword_for_kind;
use crate::tree::{Guard, SyntaxNode};

impl<'t> SyntaxNode<'t> {
    /// Positional address: one `keyword[i]` segment per step from the root,
    /// `i` being the zero-based ordinal among same-kind siblings at that
    /// level. The suffix is omitted when the ordinal is 0.
    pub fn full_path(&self) -> String {
        self.render_path(false)
    }

    /// Name-preferring address: a step whose node has a non-empty name
    /// renders `keyword[name]`; steps without a name, and steps whose name
    /// does not pick this node back out of its list, use the ordinal rule.
    pub fn alternative_path(&self) -> String {
        self.render_path(true)
    }

    fn render_path(&self, prefer_names: bool) -> String {
        let mut segments = Vec::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            segments.push(node.render_segment(prefer_names));
            current = node.parent();
        }
        segments.reverse();
        segments.join("/")
    }

    fn render_segment(&self, prefer_names: bool) -> String {
        let keyword = keyword_for_kind(self.kind());

        if prefer_names && !self.name().is_empty() {
            // A name guard selects the first same-kind match, so it is only
            // an address for this node if this node is that first match.
            let guard = Guard::Name(self.name().to_string());
            if self.owning_list().find(self.kind(), &guard).as_ref() == Some(self) {
                return format!("{keyword}[{}]", self.name());
            }
        }

        match self.same_kind_ordinal() {
            0 => keyword.to_string(),
            ordinal => format!("{keyword}[{ordinal}]"),
        }
    }
}
