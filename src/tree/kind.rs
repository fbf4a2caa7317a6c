use serde::Serialize;

/// Closed classification of the C# constructs the index understands.
///
/// Every raw construct tag maps to exactly one variant; tags outside the
/// table resolve to [`NodeKind::Unknown`] or fail the build, depending on
/// [`crate::tree::ClassificationMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    // Top-level structure
    UsingDirective,
    Namespace,

    // Type declarations
    Class,
    Struct,
    Interface,
    Record,
    Enum,
    EnumMember,

    // Members
    Field,
    Method,
    Property,
    Constructor,
    Destructor,

    // Declaration plumbing
    VariableDeclaration,
    EqualsValue,
    Parameter,
    ParameterList,
    Argument,
    ArgumentList,
    Attribute,
    AttributeList,
    BaseList,
    Modifier,

    // Names and types
    Identifier,
    QualifiedName,
    GenericName,
    PredefinedType,

    // Statements
    Block,
    LocalDeclaration,
    ExpressionStatement,
    ReturnStatement,
    IfStatement,
    ForStatement,
    ForEachStatement,
    WhileStatement,

    // Expressions
    Invocation,
    MemberAccess,
    Assignment,
    Binary,
    Literal,

    /// Construct outside the table (lenient builds only).
    Unknown,
}

impl NodeKind {
    /// Every variant, for exhaustiveness checks over the keyword vocabulary.
    pub const ALL: [NodeKind; 41] = [
        NodeKind::UsingDirective,
        NodeKind::Namespace,
        NodeKind::Class,
        NodeKind::Struct,
        NodeKind::Interface,
        NodeKind::Record,
        NodeKind::Enum,
        NodeKind::EnumMember,
        NodeKind::Field,
        NodeKind::Method,
        NodeKind::Property,
        NodeKind::Constructor,
        NodeKind::Destructor,
        NodeKind::VariableDeclaration,
        NodeKind::EqualsValue,
        NodeKind::Parameter,
        NodeKind::ParameterList,
        NodeKind::Argument,
        NodeKind::ArgumentList,
        NodeKind::Attribute,
        NodeKind::AttributeList,
        NodeKind::BaseList,
        NodeKind::Modifier,
        NodeKind::Identifier,
        NodeKind::QualifiedName,
        NodeKind::GenericName,
        NodeKind::PredefinedType,
        NodeKind::Block,
        NodeKind::LocalDeclaration,
        NodeKind::ExpressionStatement,
        NodeKind::ReturnStatement,
        NodeKind::IfStatement,
        NodeKind::ForStatement,
        NodeKind::ForEachStatement,
        NodeKind::WhileStatement,
        NodeKind::Invocation,
        NodeKind::MemberAccess,
        NodeKind::Assignment,
        NodeKind::Binary,
        NodeKind::Literal,
        NodeKind::Unknown,
    ];
}

/// Construct tags the classifier maps. Kept alongside the table so tests can
/// verify the two never drift apart.
pub const SUPPORTED_CONSTRUCTS: &[&str] = &[
    "using_directive",
    "namespace_declaration",
    "file_scoped_namespace_declaration",
    "class_declaration",
    "struct_declaration",
    "interface_declaration",
    "record_declaration",
    "record_struct_declaration",
    "enum_declaration",
    "enum_member_declaration",
    "field_declaration",
    "event_field_declaration",
    "method_declaration",
    "local_function_statement",
    "property_declaration",
    "indexer_declaration",
    "constructor_declaration",
    "destructor_declaration",
    "variable_declaration",
    "equals_value_clause",
    "parameter",
    "parameter_list",
    "argument",
    "argument_list",
    "attribute",
    "attribute_list",
    "base_list",
    "modifier",
    "identifier",
    "qualified_name",
    "generic_name",
    "predefined_type",
    "block",
    "local_declaration_statement",
    "expression_statement",
    "return_statement",
    "if_statement",
    "for_statement",
    "foreach_statement",
    "while_statement",
    "invocation_expression",
    "member_access_expression",
    "assignment_expression",
    "binary_expression",
    "integer_literal",
    "real_literal",
    "string_literal",
    "verbatim_string_literal",
    "raw_string_literal",
    "interpolated_string_expression",
    "character_literal",
    "boolean_literal",
    "null_literal",
];

/// Wrapper tags the grammar inserts that the logical C# tree does not have.
/// The builder splices their children into the enclosing node instead of
/// classifying them.
pub const TRANSPARENT_CONSTRUCTS: &[&str] =
    &["declaration_list", "variable_declarator", "global_statement"];

/// Total lookup from a raw construct tag to a [`NodeKind`].
///
/// `None` is a classification gap, resolved by the builder's
/// [`crate::tree::ClassificationMode`]; the table itself never answers
/// [`NodeKind::Unknown`].
pub fn classify_construct(tag: &str) -> Option<NodeKind> {
    let kind = match tag {
        "using_directive" => NodeKind::UsingDirective,
        "namespace_declaration" | "file_scoped_namespace_declaration" => NodeKind::Namespace,
        "class_declaration" => NodeKind::Class,
        "struct_declaration" => NodeKind::Struct,
        "interface_declaration" => NodeKind::Interface,
        "record_declaration" | "record_struct_declaration" => NodeKind::Record,
        "enum_declaration" => NodeKind::Enum,
        "enum_member_declaration" => NodeKind::EnumMember,
        "field_declaration" | "event_field_declaration" => NodeKind::Field,
        "method_declaration" | "local_function_statement" => NodeKind::Method,
        "property_declaration" | "indexer_declaration" => NodeKind::Property,
        "constructor_declaration" => NodeKind::Constructor,
        "destructor_declaration" => NodeKind::Destructor,
        "variable_declaration" => NodeKind::VariableDeclaration,
        "equals_value_clause" => NodeKind::EqualsValue,
        "parameter" => NodeKind::Parameter,
        "parameter_list" => NodeKind::ParameterList,
        "argument" => NodeKind::Argument,
        "argument_list" => NodeKind::ArgumentList,
        "attribute" => NodeKind::Attribute,
        "attribute_list" => NodeKind::AttributeList,
        "base_list" => NodeKind::BaseList,
        "modifier" => NodeKind::Modifier,
        "identifier" => NodeKind::Identifier,
        "qualified_name" => NodeKind::QualifiedName,
        "generic_name" => NodeKind::GenericName,
        "predefined_type" => NodeKind::PredefinedType,
        "block" => NodeKind::Block,
        "local_declaration_statement" => NodeKind::LocalDeclaration,
        "expression_statement" => NodeKind::ExpressionStatement,
        "return_statement" => NodeKind::ReturnStatement,
        "if_statement" => NodeKind::IfStatement,
        "for_statement" => NodeKind::ForStatement,
        "foreach_statement" => NodeKind::ForEachStatement,
        "while_statement" => NodeKind::WhileStatement,
        "invocation_expression" => NodeKind::Invocation,
        "member_access_expression" => NodeKind::MemberAccess,
        "assignment_expression" => NodeKind::Assignment,
        "binary_expression" => NodeKind::Binary,
        "integer_literal" | "real_literal" | "string_literal" | "verbatim_string_literal"
        | "raw_string_literal" | "interpolated_string_expression" | "character_literal"
        | "boolean_literal" | "null_literal" => NodeKind::Literal,
        _ => return None,
    };
    Some(kind)
}

/// True for tags the builder splices instead of classifying.
pub fn is_transparent_construct(tag: &str) -> bool {
    TRANSPARENT_CONSTRUCTS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_supported_construct() {
        for tag in SUPPORTED_CONSTRUCTS {
            let kind = classify_construct(tag);
            assert!(kind.is_some(), "no mapping for supported tag {tag}");
            assert_ne!(
                kind,
                Some(NodeKind::Unknown),
                "table must never answer Unknown for {tag}"
            );
        }
    }

    #[test]
    fn unmapped_tag_is_a_gap_not_a_kind() {
        assert_eq!(classify_construct("lambda_expression"), None);
        assert_eq!(classify_construct(""), None);
    }

    #[test]
    fn transparent_tags_never_classify() {
        for tag in TRANSPARENT_CONSTRUCTS {
            assert!(is_transparent_construct(tag));
            assert_eq!(
                classify_construct(tag),
                None,
                "transparent tag {tag} must stay out of the kind table"
            );
        }
    }

    #[test]
    fn worked_example_tags() {
        assert_eq!(
            classify_construct("namespace_declaration"),
            Some(NodeKind::Namespace)
        );
        assert_eq!(
            classify_construct("field_declaration"),
            Some(NodeKind::Field)
        );
        assert_eq!(
            classify_construct("variable_declaration"),
            Some(NodeKind::VariableDeclaration)
        );
        assert_eq!(classify_construct("identifier"), Some(NodeKind::Identifier));
    }
}
