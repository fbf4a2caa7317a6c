//! The structural query engine: parse an address-like string into (kind,
//! guard) segments and evaluate it against a tree.

use std::fmt;

use crate::path::errors::QueryError;
use crate::path::vocab::{keyword_for_kind, kind_for_keyword};
use crate::tree::{Guard, NodeKind, NodeList, SyntaxNode, SyntaxTree};

/// One `keyword[guard]` step of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: NodeKind,
    pub guard: Option<Guard>,
}

/// A parsed structural query: an ordered sequence of segments, evaluated
/// left to right against an owning list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    pub segments: Vec<Segment>,
}

impl PathQuery {
    /// Parse a slash-separated query string.
    ///
    /// Fails with a typed [`QueryError`] on an empty query or segment, an
    /// unknown keyword, or an unclosed or malformed guard. Syntax failure is
    /// never conflated with "valid query, no match".
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        if input.trim().is_empty() {
            return Err(QueryError::Empty);
        }

        let segments = input
            .split('/')
            .enumerate()
            .map(|(index, raw)| parse_segment(index, raw.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    /// Evaluate against a scope. Every segment but the last narrows to the
    /// single child matching (kind, guard), where a missing guard means
    /// ordinal 0, and absence short-circuits to an empty result. The last
    /// segment returns all children of the final scope matching it.
    pub fn find_all<'t>(&self, scope: &NodeList<'t>) -> NodeList<'t> {
        let Some((last, rest)) = self.segments.split_last() else {
            return scope.empty_like();
        };

        let mut scope = scope.clone();
        for segment in rest {
            let guard = segment.guard.clone().unwrap_or(Guard::Ordinal(0));
            match scope.find(segment.kind, &guard) {
                Some(node) => scope = node.children(),
                None => return scope.empty_like(),
            }
        }

        match &last.guard {
            Some(guard) => match scope.find(last.kind, guard) {
                Some(node) => NodeList::from_node(node),
                None => scope.empty_like(),
            },
            None => scope.of_kind(last.kind),
        }
    }

    /// First match of [`PathQuery::find_all`], if any.
    pub fn find_first<'t>(&self, scope: &NodeList<'t>) -> Option<SyntaxNode<'t>> {
        self.find_all(scope).first()
    }
}

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keyword_for_kind(self.kind))?;
        match &self.guard {
            Some(Guard::Ordinal(i)) => write!(f, "[{i}]"),
            Some(Guard::Name(name)) => write!(f, "[{name}]"),
            None => Ok(()),
        }
    }
}

fn parse_segment(index: usize, raw: &str) -> Result<Segment, QueryError> {
    if raw.is_empty() {
        return Err(QueryError::EmptySegment { index });
    }

    let (keyword, guard) = match raw.find('[') {
        None => (raw, None),
        Some(open) => {
            let rest = &raw[open + 1..];
            let Some(close) = rest.find(']') else {
                return Err(QueryError::UnclosedGuard {
                    segment: raw.to_string(),
                });
            };
            if close + 1 != rest.len() {
                return Err(QueryError::MalformedGuard {
                    segment: raw.to_string(),
                });
            }
            (&raw[..open], Some(parse_guard(raw, &rest[..close])?))
        }
    };

    let kind = kind_for_keyword(keyword).ok_or_else(|| QueryError::UnknownKeyword {
        keyword: keyword.to_string(),
    })?;

    Ok(Segment { kind, guard })
}

fn parse_guard(segment: &str, guard: &str) -> Result<Guard, QueryError> {
    if guard.is_empty() {
        return Err(QueryError::MalformedGuard {
            segment: segment.to_string(),
        });
    }

    if guard.bytes().all(|b| b.is_ascii_digit()) {
        let ordinal = guard
            .parse::<usize>()
            .map_err(|_| QueryError::MalformedGuard {
                segment: segment.to_string(),
            })?;
        Ok(Guard::Ordinal(ordinal))
    } else {
        Ok(Guard::Name(guard.to_string()))
    }
}

impl SyntaxTree {
    /// Parse and evaluate a query at the root list, returning the first
    /// match. Syntax errors and lookup misses stay distinct.
    pub fn get_child(&self, path: &str) -> Result<Option<SyntaxNode<'_>>, QueryError> {
        Ok(PathQuery::parse(path)?.find_first(&self.root_nodes()))
    }

    /// Parse and evaluate a query at the root list, returning every match
    /// of the last segment.
    pub fn find_all(&self, path: &str) -> Result<NodeList<'_>, QueryError> {
        Ok(PathQuery::parse(path)?.find_all(&self.root_nodes()))
    }
}

impl<'t> SyntaxNode<'t> {
    /// Parse and evaluate a query over this node's children.
    pub fn get_child(&self, path: &str) -> Result<Option<SyntaxNode<'t>>, QueryError> {
        Ok(PathQuery::parse(path)?.find_first(&self.children()))
    }
}
