//! Two-pass construction of the owned tree from a tree-sitter parse.
//!
//! Pass 1 mirrors the raw tree into the arena, classifying kinds, splicing
//! transparent wrappers, and attaching trivia runs. Pass 2 resolves display
//! names from already-built children; it never touches raw parser state.

use std::path::Path;

use crate::tree::errors::BuildError;
use crate::tree::kind::{classify_construct, is_transparent_construct, NodeKind};
use crate::tree::node::{Location, NodeData, NodeId, SyntaxTree};
use crate::tree::trivia::{classify_trivia, is_trivia_tag, Trivia};
use crate::ts::CSharpParser;

/// What to do when a raw tag falls outside the classification tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassificationMode {
    /// Fail the build with the offending tag and a source excerpt. Meant for
    /// development, to drive extending the tables.
    Strict,
    /// Map the gap to `Unknown` and continue.
    #[default]
    Lenient,
}

/// Build-time configuration.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub mode: ClassificationMode,
}

/// Parse C# source text and index it into an owned [`SyntaxTree`].
pub fn build_from_text(source: &str, options: &BuildOptions) -> Result<SyntaxTree, BuildError> {
    let mut parser = CSharpParser::new()?;
    let raw = parser.parse(source)?;
    build(source, &raw, options)
}

/// Read a file as UTF-8 and delegate to [`build_from_text`].
pub fn build_from_file(path: &Path, options: &BuildOptions) -> Result<SyntaxTree, BuildError> {
    let mut parser = CSharpParser::new()?;
    let (source, raw) = parser.parse_file(path)?;
    build(&source, &raw, options)
}

fn build(
    source: &str,
    raw: &tree_sitter::Tree,
    options: &BuildOptions,
) -> Result<SyntaxTree, BuildError> {
    let mut builder = TreeBuilder {
        source,
        mode: options.mode,
        nodes: Vec::new(),
    };
    let roots = builder.build_scope(raw.root_node(), None)?;
    let mut tree = SyntaxTree {
        nodes: builder.nodes,
        roots,
    };
    resolve_names(&mut tree);
    Ok(tree)
}

struct TreeBuilder<'s> {
    source: &'s str,
    mode: ClassificationMode,
    nodes: Vec<NodeData>,
}

impl TreeBuilder<'_> {
    /// Mirror the semantic children of `raw_parent`, attaching trivia runs
    /// as they are encountered. Returns the built child ids in source order.
    fn build_scope(
        &mut self,
        raw_parent: tree_sitter::Node<'_>,
        parent: Option<NodeId>,
    ) -> Result<Vec<NodeId>, BuildError> {
        let stream = effective_children(raw_parent);

        let mut children = Vec::new();
        // Trivia waiting to lead the next semantic node.
        let mut pending: Vec<tree_sitter::Node<'_>> = Vec::new();
        let mut prev: Option<(NodeId, usize)> = None;

        for raw in stream {
            if is_trivia_tag(raw.kind()) {
                match prev {
                    // Still on the previous node's line: trail it.
                    Some((prev_id, prev_end))
                        if pending.is_empty()
                            && !self.source[prev_end..raw.start_byte()].contains('\n') =>
                    {
                        self.attach_trailing(prev_id, raw)?;
                    }
                    _ => pending.push(raw),
                }
                continue;
            }

            let location = match parent {
                Some(id) => Location::InTree(id),
                None => Location::AtRoot,
            };
            let id = self.build_node(raw, location)?;
            for run in pending.drain(..) {
                self.attach_leading(id, run)?;
            }
            children.push(id);
            prev = Some((id, raw.end_byte()));
        }

        // Runs left at the end of a scope trail the enclosing node; at the
        // root, the last top-level node. A file holding nothing but trivia
        // has no node to own them and they are dropped.
        if !pending.is_empty() {
            let owner = parent.or(prev.map(|(id, _)| id));
            if let Some(owner) = owner {
                for run in pending {
                    self.attach_trailing(owner, run)?;
                }
            }
        }

        Ok(children)
    }

    fn build_node(
        &mut self,
        raw: tree_sitter::Node<'_>,
        location: Location,
    ) -> Result<NodeId, BuildError> {
        let tag = raw.kind();
        let kind = match classify_construct(tag) {
            Some(kind) => kind,
            None => match self.mode {
                ClassificationMode::Strict => {
                    return Err(BuildError::UnknownConstruct {
                        tag: tag.to_string(),
                        excerpt: self.excerpt(&raw),
                    })
                }
                ClassificationMode::Lenient => NodeKind::Unknown,
            },
        };

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            source_text: self.source[raw.byte_range()].to_string(),
            start_offset: raw.start_byte(),
            end_offset: raw.end_byte(),
            name: String::new(),
            children: Vec::new(),
            leading_trivia: Vec::new(),
            trailing_trivia: Vec::new(),
            location,
        });

        let children = self.build_scope(raw, Some(id))?;
        self.nodes[id.index()].children = children;
        Ok(id)
    }

    fn attach_leading(
        &mut self,
        id: NodeId,
        raw: tree_sitter::Node<'_>,
    ) -> Result<(), BuildError> {
        if let Some(trivia) = self.classify_run(raw)? {
            let data = &mut self.nodes[id.index()];
            data.start_offset = data.start_offset.min(raw.start_byte());
            data.leading_trivia.push(trivia);
        }
        Ok(())
    }

    fn attach_trailing(
        &mut self,
        id: NodeId,
        raw: tree_sitter::Node<'_>,
    ) -> Result<(), BuildError> {
        if let Some(trivia) = self.classify_run(raw)? {
            let data = &mut self.nodes[id.index()];
            data.end_offset = data.end_offset.max(raw.end_byte());
            data.trailing_trivia.push(trivia);
        }
        Ok(())
    }

    /// Classify one raw run. Trimmed-empty runs are discarded here, before
    /// classification is attempted.
    fn classify_run(&self, raw: tree_sitter::Node<'_>) -> Result<Option<Trivia>, BuildError> {
        let text = &self.source[raw.byte_range()];
        if text.trim().is_empty() {
            return Ok(None);
        }

        let tag = raw.kind();
        let kind = match classify_trivia(tag, text) {
            Some(kind) => kind,
            None => match self.mode {
                ClassificationMode::Strict => {
                    return Err(BuildError::UnknownTrivia {
                        tag: tag.to_string(),
                        excerpt: self.excerpt(&raw),
                    })
                }
                ClassificationMode::Lenient => crate::tree::trivia::TriviaKind::Unknown,
            },
        };
        Ok(Some(Trivia {
            kind,
            text: text.to_string(),
        }))
    }

    fn excerpt(&self, raw: &tree_sitter::Node<'_>) -> String {
        let text = &self.source[raw.byte_range()];
        let mut excerpt: String = text.chars().take(40).collect();
        if excerpt.len() < text.len() {
            excerpt.push_str("...");
        }
        excerpt
    }
}

/// Named children of `raw`, with transparent wrappers spliced out so the
/// owned tree matches the logical C# shape.
fn effective_children(raw: tree_sitter::Node<'_>) -> Vec<tree_sitter::Node<'_>> {
    let mut out = Vec::new();
    let mut cursor = raw.walk();
    for child in raw.named_children(&mut cursor) {
        if is_transparent_construct(child.kind()) {
            out.extend(effective_children(child));
        } else {
            out.push(child);
        }
    }
    out
}

/// Pass 2: resolve display names. Consults only children already present in
/// the arena, so any traversal order works.
fn resolve_names(tree: &mut SyntaxTree) {
    for index in 0..tree.nodes.len() {
        let name = match tree.nodes[index].kind {
            NodeKind::Identifier | NodeKind::QualifiedName | NodeKind::GenericName => {
                tree.nodes[index].source_text.clone()
            }
            NodeKind::UsingDirective | NodeKind::Namespace => {
                child_text(tree, index, NodeKind::QualifiedName, Pick::First)
                    .or_else(|| child_text(tree, index, NodeKind::Identifier, Pick::First))
                    .unwrap_or_default()
            }
            // Declared identifiers sit last at child level: initializers and
            // bodies are nested under EqualsValue / Block / other kinds.
            NodeKind::Class
            | NodeKind::Struct
            | NodeKind::Interface
            | NodeKind::Record
            | NodeKind::Enum
            | NodeKind::EnumMember
            | NodeKind::Method
            | NodeKind::Property
            | NodeKind::Constructor
            | NodeKind::Destructor
            | NodeKind::Parameter
            | NodeKind::VariableDeclaration => {
                child_text(tree, index, NodeKind::Identifier, Pick::Last).unwrap_or_default()
            }
            _ => String::new(),
        };
        tree.nodes[index].name = name;
    }
}

#[derive(Clone, Copy)]
enum Pick {
    First,
    Last,
}

fn child_text(tree: &SyntaxTree, index: usize, kind: NodeKind, pick: Pick) -> Option<String> {
    let mut matches = tree.nodes[index]
        .children
        .iter()
        .filter(|&&id| tree.data(id).kind == kind);
    let id = match pick {
        Pick::First => matches.next(),
        Pick::Last => matches.last(),
    }?;
    Some(tree.data(*id).source_text.clone())
}
