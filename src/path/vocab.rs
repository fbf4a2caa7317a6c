//! The kind <-> keyword vocabulary shared by derived paths and the query
//! language. Total and collision-free in both directions; the tests below
//! hold the two tables to that.

use crate::tree::NodeKind;

/// The query-language keyword bound to a kind.
pub fn keyword_for_kind(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::UsingDirective => "using",
        NodeKind::Namespace => "namespace",
        NodeKind::Class => "class",
        NodeKind::Struct => "struct",
        NodeKind::Interface => "interface",
        NodeKind::Record => "record",
        NodeKind::Enum => "enum",
        NodeKind::EnumMember => "enummember",
        NodeKind::Field => "field",
        NodeKind::Method => "method",
        NodeKind::Property => "property",
        NodeKind::Constructor => "constructor",
        NodeKind::Destructor => "destructor",
        NodeKind::VariableDeclaration => "vardeclaration",
        NodeKind::EqualsValue => "equalsvalue",
        NodeKind::Parameter => "parameter",
        NodeKind::ParameterList => "parameterlist",
        NodeKind::Argument => "argument",
        NodeKind::ArgumentList => "argumentlist",
        NodeKind::Attribute => "attribute",
        NodeKind::AttributeList => "attributelist",
        NodeKind::BaseList => "baselist",
        NodeKind::Modifier => "modifier",
        NodeKind::Identifier => "id",
        NodeKind::QualifiedName => "qualifiedname",
        NodeKind::GenericName => "genericname",
        NodeKind::PredefinedType => "predefinedtype",
        NodeKind::Block => "block",
        NodeKind::LocalDeclaration => "localdeclaration",
        NodeKind::ExpressionStatement => "expressionstatement",
        NodeKind::ReturnStatement => "return",
        NodeKind::IfStatement => "if",
        NodeKind::ForStatement => "for",
        NodeKind::ForEachStatement => "foreach",
        NodeKind::WhileStatement => "while",
        NodeKind::Invocation => "invocation",
        NodeKind::MemberAccess => "memberaccess",
        NodeKind::Assignment => "assignment",
        NodeKind::Binary => "binary",
        NodeKind::Literal => "literal",
        NodeKind::Unknown => "unknown",
    }
}

/// Resolve a query keyword back to its kind.
pub fn kind_for_keyword(keyword: &str) -> Option<NodeKind> {
    let kind = match keyword {
        "using" => NodeKind::UsingDirective,
        "namespace" => NodeKind::Namespace,
        "class" => NodeKind::Class,
        "struct" => NodeKind::Struct,
        "interface" => NodeKind::Interface,
        "record" => NodeKind::Record,
        "enum" => NodeKind::Enum,
        "enummember" => NodeKind::EnumMember,
        "field" => NodeKind::Field,
        "method" => NodeKind::Method,
        "property" => NodeKind::Property,
        "constructor" => NodeKind::Constructor,
        "destructor" => NodeKind::Destructor,
        "vardeclaration" => NodeKind::VariableDeclaration,
        "equalsvalue" => NodeKind::EqualsValue,
        "parameter" => NodeKind::Parameter,
        "parameterlist" => NodeKind::ParameterList,
        "argument" => NodeKind::Argument,
        "argumentlist" => NodeKind::ArgumentList,
        "attribute" => NodeKind::Attribute,
        "attributelist" => NodeKind::AttributeList,
        "baselist" => NodeKind::BaseList,
        "modifier" => NodeKind::Modifier,
        "id" => NodeKind::Identifier,
        "qualifiedname" => NodeKind::QualifiedName,
        "genericname" => NodeKind::GenericName,
        "predefinedtype" => NodeKind::PredefinedType,
        "block" => NodeKind::Block,
        "localdeclaration" => NodeKind::LocalDeclaration,
        "expressionstatement" => NodeKind::ExpressionStatement,
        "return" => NodeKind::ReturnStatement,
        "if" => NodeKind::IfStatement,
        "for" => NodeKind::ForStatement,
        "foreach" => NodeKind::ForEachStatement,
        "while" => NodeKind::WhileStatement,
        "invocation" => NodeKind::Invocation,
        "memberaccess" => NodeKind::MemberAccess,
        "assignment" => NodeKind::Assignment,
        "binary" => NodeKind::Binary,
        "literal" => NodeKind::Literal,
        "unknown" => NodeKind::Unknown,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn total_and_round_trips_for_every_kind() {
        for kind in NodeKind::ALL {
            let keyword = keyword_for_kind(kind);
            assert!(!keyword.is_empty());
            assert_eq!(
                kind_for_keyword(keyword),
                Some(kind),
                "keyword '{keyword}' does not resolve back to {kind:?}"
            );
        }
    }

    #[test]
    fn collision_free() {
        let keywords: HashSet<_> = NodeKind::ALL.iter().map(|&k| keyword_for_kind(k)).collect();
        assert_eq!(keywords.len(), NodeKind::ALL.len());
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert_eq!(kind_for_keyword("classes"), None);
        assert_eq!(kind_for_keyword(""), None);
        assert_eq!(kind_for_keyword("Class"), None);
    }
}
