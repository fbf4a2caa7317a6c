//! Round-trip obligations: every derived address resolves back to its
//! originating node, and query text survives render/re-parse.

use proptest::prelude::*;
use treepath::{build_from_text, BuildOptions, Guard, NodeKind, PathQuery, Segment, SyntaxTree};

const SOURCE: &str = r#"
using System;

namespace Fleet
{
    class Truck
    {
        int axles;
        int wheels;
        int wheels2;

        void Load(int pallets, int weight)
        {
            int remaining = pallets;
        }

        void Load2() { }
    }

    class Trailer
    {
        int axles;
    }
}
"#;

fn build() -> SyntaxTree {
    build_from_text(SOURCE, &BuildOptions::default()).unwrap()
}

#[test]
fn every_full_path_resolves_to_its_node() {
    let tree = build();
    for node in tree.iter_nodes() {
        let path = node.full_path();
        let resolved = tree.get_child(&path).unwrap();
        assert_eq!(resolved, Some(node), "{path}");
    }
}

#[test]
fn every_alternative_path_resolves_to_its_node() {
    let tree = build();
    for node in tree.iter_nodes() {
        let path = node.alternative_path();
        let resolved = tree.get_child(&path).unwrap();
        assert_eq!(resolved, Some(node), "{path}");
    }
}

#[test]
fn ordinal_suffix_rules() {
    let tree = build();
    let methods = tree.get_children(&[NodeKind::Namespace, NodeKind::Class, NodeKind::Method]);
    assert_eq!(methods.len(), 2);
    assert!(methods.get(0).unwrap().full_path().ends_with("/method"));
    assert!(methods.get(1).unwrap().full_path().ends_with("/method[1]"));
}

#[test]
fn paths_are_recomputed_not_cached() {
    // Two calls on the same node agree; distinct nodes of the same kind and
    // level differ only in the guard.
    let tree = build();
    let classes = tree.get_children(&[NodeKind::Namespace, NodeKind::Class]);
    let truck = classes.get(0).unwrap();
    let trailer = classes.get(1).unwrap();
    assert_eq!(truck.full_path(), truck.full_path());
    assert_eq!(truck.full_path(), "namespace/class");
    assert_eq!(trailer.full_path(), "namespace/class[1]");
    assert_eq!(trailer.alternative_path(), "namespace[Fleet]/class[Trailer]");
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    let guard = prop_oneof![
        Just(None),
        (0usize..64).prop_map(|i| Some(Guard::Ordinal(i))),
        "[A-Za-z_][A-Za-z0-9_]{0,8}".prop_map(|name| Some(Guard::Name(name))),
    ];
    (prop::sample::select(NodeKind::ALL.to_vec()), guard)
        .prop_map(|(kind, guard)| Segment { kind, guard })
}

proptest! {
    #[test]
    fn query_text_round_trips(segments in prop::collection::vec(segment_strategy(), 1..6)) {
        let query = PathQuery { segments };
        let rendered = query.to_string();
        let reparsed = PathQuery::parse(&rendered).unwrap();
        prop_assert_eq!(reparsed, query);
    }
}
