//! The owned, indexed syntax tree: kind and trivia classification, the node
//! arena, list filtering, and the two-pass builder.

pub mod builder;
pub mod errors;
pub mod kind;
pub mod list;
pub mod node;
pub mod trivia;

pub use builder::{build_from_file, build_from_text, BuildOptions, ClassificationMode};
pub use errors::BuildError;
pub use kind::{classify_construct, NodeKind};
pub use list::{Guard, NodeList};
pub use node::{Location, NodeId, SyntaxNode, SyntaxTree};
pub use trivia::{classify_trivia, Trivia, TriviaKind};
