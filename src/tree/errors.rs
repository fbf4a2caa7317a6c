use crate::ts::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("unmapped construct tag '{tag}' at: {excerpt}")]
    UnknownConstruct { tag: String, excerpt: String },

    #[error("unmapped trivia tag '{tag}' at: {excerpt}")]
    UnknownTrivia { tag: String, excerpt: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
