//! Treepath: indexed C# syntax trees with structural path addressing
//!
//! Converts a tree-sitter parse of C# source into an independent, owned,
//! addressable tree and provides a compact query language for locating
//! nodes structurally.
//!
//! # Architecture
//!
//! Raw tree-sitter nodes never leave the builder. The [`tree`] module owns
//! the classification tables and the two-pass build (structure, then display
//! names); the [`path`] module derives address strings and evaluates query
//! strings against the finished [`SyntaxTree`]. Trees are immutable after
//! construction, so queries, path derivation, and sibling navigation are
//! all safe from any number of threads.
//!
//! # Addresses
//!
//! Every node has two derived addresses: a positional `full_path` such as
//! `namespace/class/field[1]`, and a name-preferring `alternative_path`
//! such as `namespace[N]/class[C]/field[1]`. Both re-resolve to the node
//! they came from when evaluated against the unchanged tree.
//!
//! # Example
//!
//! ```no_run
//! use treepath::{build_from_text, BuildOptions};
//!
//! let tree = build_from_text(
//!     "using System;\nnamespace N { class C { int x; } }",
//!     &BuildOptions::default(),
//! )
//! .unwrap();
//!
//! match tree.get_child("namespace/class/field/vardeclaration/id") {
//!     Ok(Some(node)) => println!("{} at {}", node.name(), node.full_path()),
//!     Ok(None) => println!("no match"),
//!     Err(e) => eprintln!("bad query: {e}"),
//! }
//! ```

pub mod path;
pub mod tree;
pub mod ts;

// Re-exports
pub use path::{keyword_for_kind, kind_for_keyword, PathQuery, QueryError, Segment};
pub use tree::{
    build_from_file, build_from_text, BuildError, BuildOptions, ClassificationMode, Guard,
    Location, NodeId, NodeKind, NodeList, SyntaxNode, SyntaxTree, Trivia, TriviaKind,
};
pub use ts::{CSharpParser, ErrorNode, ParseError, ParsedSource};
