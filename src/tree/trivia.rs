use serde::Serialize;

/// Closed classification of non-semantic runs attached to nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TriviaKind {
    LineComment,
    BlockComment,
    DocComment,
    RegionDirective,
    EndRegionDirective,
    IfDirective,
    ElifDirective,
    ElseDirective,
    EndIfDirective,
    DisabledText,
    LineDirective,
    PragmaDirective,
    DefineDirective,
    UndefDirective,
    NullableDirective,
    WarningDirective,
    ErrorDirective,
    /// Run outside the table (lenient builds only).
    Unknown,
}

/// A single non-semantic run. Trimmed-empty runs are discarded before
/// classification and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
}

/// Trivia tags the classifier maps, paired with sample text where the tag
/// alone does not decide the kind.
pub const SUPPORTED_TRIVIA: &[&str] = &[
    "comment",
    "preproc_region",
    "preproc_endregion",
    "preproc_if",
    "preproc_elif",
    "preproc_else",
    "preproc_endif",
    "preproc_line",
    "preproc_pragma",
    "preproc_define",
    "preproc_undef",
    "preproc_nullable",
    "preproc_warning",
    "preproc_error",
    "disabled_text",
];

/// True for raw tags that are non-semantic runs rather than tree nodes.
///
/// The grammar surfaces comments and preprocessor directives as extra named
/// nodes; this predicate is how the builder partitions them out.
pub fn is_trivia_tag(tag: &str) -> bool {
    tag == "comment" || tag == "disabled_text" || tag.starts_with("preproc_")
}

/// Total lookup from a raw trivia run to a [`TriviaKind`].
///
/// The `comment` tag covers all three comment shapes, so it is refined by
/// the run's text. `None` is a classification gap, resolved by the builder's
/// [`crate::tree::ClassificationMode`].
pub fn classify_trivia(tag: &str, text: &str) -> Option<TriviaKind> {
    let kind = match tag {
        "comment" => {
            let t = text.trim_start();
            if t.starts_with("///") || t.starts_with("/**") {
                TriviaKind::DocComment
            } else if t.starts_with("//") {
                TriviaKind::LineComment
            } else {
                TriviaKind::BlockComment
            }
        }
        "preproc_region" => TriviaKind::RegionDirective,
        "preproc_endregion" => TriviaKind::EndRegionDirective,
        "preproc_if" => TriviaKind::IfDirective,
        "preproc_elif" => TriviaKind::ElifDirective,
        "preproc_else" => TriviaKind::ElseDirective,
        "preproc_endif" => TriviaKind::EndIfDirective,
        "preproc_line" => TriviaKind::LineDirective,
        "preproc_pragma" => TriviaKind::PragmaDirective,
        "preproc_define" => TriviaKind::DefineDirective,
        "preproc_undef" => TriviaKind::UndefDirective,
        "preproc_nullable" => TriviaKind::NullableDirective,
        "preproc_warning" => TriviaKind::WarningDirective,
        "preproc_error" => TriviaKind::ErrorDirective,
        "disabled_text" => TriviaKind::DisabledText,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_supported_tag() {
        for tag in SUPPORTED_TRIVIA {
            let kind = classify_trivia(tag, "// x");
            assert!(kind.is_some(), "no mapping for supported trivia tag {tag}");
            assert_ne!(kind, Some(TriviaKind::Unknown));
        }
    }

    #[test]
    fn comment_shape_refinement() {
        assert_eq!(
            classify_trivia("comment", "// note"),
            Some(TriviaKind::LineComment)
        );
        assert_eq!(
            classify_trivia("comment", "/// <summary>x</summary>"),
            Some(TriviaKind::DocComment)
        );
        assert_eq!(
            classify_trivia("comment", "/** docs */"),
            Some(TriviaKind::DocComment)
        );
        assert_eq!(
            classify_trivia("comment", "/* span */"),
            Some(TriviaKind::BlockComment)
        );
    }

    #[test]
    fn directive_tags() {
        assert_eq!(
            classify_trivia("preproc_region", "#region Internals"),
            Some(TriviaKind::RegionDirective)
        );
        assert_eq!(
            classify_trivia("preproc_pragma", "#pragma checksum \"a.cs\""),
            Some(TriviaKind::PragmaDirective)
        );
        assert_eq!(classify_trivia("preproc_nonsense", "#nonsense"), None);
    }

    #[test]
    fn trivia_partition_predicate() {
        assert!(is_trivia_tag("comment"));
        assert!(is_trivia_tag("preproc_endif"));
        assert!(is_trivia_tag("disabled_text"));
        assert!(!is_trivia_tag("identifier"));
        assert!(!is_trivia_tag("class_declaration"));
    }
}
