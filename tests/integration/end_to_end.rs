//! Build a realistic source file and check structure, names, trivia
//! attachment, and the container invariants in one place.

use treepath::{
    build_from_file, build_from_text, BuildOptions, Guard, Location, NodeKind, SyntaxTree,
    TriviaKind,
};

const INVENTORY: &str = r#"// Inventory service sample used across the integration suite.
using System;
using System.Text;

namespace Acme.Inventory
{
    /// <summary>Tracks a single stocked item.</summary>
    public class Item
    {
        int count;
        int reserved; // held for pending orders
        string label;

        public Item(int count)
        {
            this.count = count;
        }

        int Available(int floor)
        {
            return count - reserved - floor;
        }
    }

    public class Warehouse
    {
        int capacity = 100;
    }
}
"#;

fn build() -> SyntaxTree {
    build_from_text(INVENTORY, &BuildOptions::default()).unwrap()
}

#[test]
fn top_level_shape() {
    let tree = build();
    let roots = tree.root_nodes();
    assert_eq!(roots.len(), 3);
    assert_eq!(roots.get(0).unwrap().kind(), NodeKind::UsingDirective);
    assert_eq!(roots.get(0).unwrap().name(), "System");
    assert_eq!(roots.get(1).unwrap().name(), "System.Text");
    assert_eq!(roots.get(2).unwrap().kind(), NodeKind::Namespace);
    assert_eq!(roots.get(2).unwrap().name(), "Acme.Inventory");
}

#[test]
fn queries_locate_members() {
    let tree = build();

    let id = tree
        .get_child("namespace/class/field/vardeclaration/id")
        .unwrap()
        .expect("first field identifier");
    assert_eq!(id.name(), "count");

    let warehouse = tree
        .get_child("namespace/class[Warehouse]")
        .unwrap()
        .expect("class by name guard");
    assert_eq!(warehouse.kind(), NodeKind::Class);

    let capacity = warehouse
        .get_child("field/vardeclaration")
        .unwrap()
        .expect("relative query");
    assert_eq!(capacity.name(), "capacity");

    let second_using = tree.get_child("using[1]").unwrap().expect("using ordinal");
    assert_eq!(second_using.name(), "System.Text");
}

#[test]
fn kind_chain_returns_all_terminal_matches() {
    let tree = build();
    let fields = tree.get_children(&[NodeKind::Namespace, NodeKind::Class, NodeKind::Field]);
    assert_eq!(fields.len(), 3);
    let declared: Vec<_> = fields
        .iter()
        .map(|f| {
            f.children()
                .of_kind(NodeKind::VariableDeclaration)
                .first()
                .unwrap()
                .name()
                .to_string()
        })
        .collect();
    assert_eq!(declared, ["count", "reserved", "label"]);
}

#[test]
fn guarded_chain_narrows_each_step() {
    let tree = build();
    let item_ctor = tree
        .get_child_by_steps(&[
            (NodeKind::Namespace, Guard::Ordinal(0)),
            (NodeKind::Class, Guard::Name("Item".to_string())),
            (NodeKind::Constructor, Guard::Ordinal(0)),
        ])
        .expect("constructor of Item");
    assert_eq!(item_ctor.name(), "Item");

    let missing = tree.get_child_by_steps(&[
        (NodeKind::Namespace, Guard::Ordinal(0)),
        (NodeKind::Class, Guard::Name("Depot".to_string())),
        (NodeKind::Constructor, Guard::Ordinal(0)),
    ]);
    assert!(missing.is_none());
}

#[test]
fn sibling_navigation_by_identity() {
    let tree = build();
    let fields = tree.get_children(&[NodeKind::Namespace, NodeKind::Class, NodeKind::Field]);
    let first = fields.get(0).unwrap();
    let second = fields.get(1).unwrap();

    assert_eq!(first.next_sibling(), Some(second));
    assert_eq!(second.prev_sibling(), Some(first));

    let first_root = tree.root_nodes().get(0).unwrap();
    assert!(first_root.prev_sibling().is_none());
}

#[test]
fn trivia_attachment() {
    let tree = build();

    // File header leads the first using directive.
    let first_using = tree.root_nodes().get(0).unwrap();
    assert_eq!(first_using.leading_trivia().len(), 1);
    assert_eq!(
        first_using.leading_trivia()[0].kind,
        TriviaKind::LineComment
    );
    assert_eq!(first_using.start_offset(), 0);

    // Doc comment leads the class carrying it.
    let item = tree.get_child("namespace/class[Item]").unwrap().unwrap();
    assert_eq!(item.leading_trivia().len(), 1);
    assert_eq!(item.leading_trivia()[0].kind, TriviaKind::DocComment);

    // Same-line comment trails the field it follows.
    let fields = tree.get_children(&[NodeKind::Namespace, NodeKind::Class, NodeKind::Field]);
    let reserved = fields.get(1).unwrap();
    assert_eq!(reserved.trailing_trivia().len(), 1);
    assert!(reserved.trailing_trivia()[0]
        .text
        .contains("held for pending orders"));
}

#[test]
fn container_invariants_hold_everywhere() {
    let tree = build();
    let root_ids: Vec<_> = tree.root_nodes().iter().map(|n| n.id()).collect();

    for node in tree.iter_nodes() {
        // Exactly one location variant, consistent with ownership.
        match node.location() {
            Location::AtRoot => {
                assert!(root_ids.contains(&node.id()));
                assert!(node.parent().is_none());
            }
            Location::InTree(parent) => {
                assert!(tree
                    .node(parent)
                    .children()
                    .position_of(node.id())
                    .is_some());
            }
        }

        // Spans contain children; siblings stay ordered.
        let mut last_start = 0;
        for child in node.children().iter() {
            assert!(node.start_offset() <= child.start_offset());
            assert!(child.end_offset() <= node.end_offset());
            assert!(child.start_offset() >= last_start);
            last_start = child.start_offset();
        }

        // No stored trivia is blank.
        for run in node.leading_trivia().iter().chain(node.trailing_trivia()) {
            assert!(!run.text.trim().is_empty());
        }
    }
}

#[test]
fn build_from_file_matches_in_memory_build() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Inventory.cs");
    std::fs::write(&path, INVENTORY).unwrap();

    let from_file = build_from_file(&path, &BuildOptions::default()).unwrap();
    let in_memory = build();
    assert_eq!(from_file.node_count(), in_memory.node_count());
    assert_eq!(from_file.root_nodes().len(), in_memory.root_nodes().len());
}
