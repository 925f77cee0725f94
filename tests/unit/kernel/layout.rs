use super::*;
use proptest::prelude::*;

fn welcome() -> RichText {
    RichText::plain("welcome")
}

fn fixture() -> (LayoutTree, SessionRegistry) {
    (LayoutTree::new(), SessionRegistry::new(welcome()))
}

fn assert_consistent(tree: &LayoutTree, registry: &SessionRegistry) {
    assert!(tree.root().is_minimal());
    let leaves = tree.leaves();
    assert_eq!(leaves.len(), registry.len());
    for leaf in leaves {
        assert!(registry.contains(leaf), "leaf {leaf} missing from registry");
    }
}

#[test]
fn split_single_leaf_becomes_binary_split() {
    let (mut tree, mut registry) = fixture();
    let main = SessionId::main();
    let new_id = tree
        .split(&mut registry, &main, SplitDirection::Horizontal, welcome())
        .unwrap();

    assert_eq!(
        tree.shape(),
        LayoutShape::Split(
            SplitDirection::Horizontal,
            vec![LayoutShape::Leaf(main.clone()), LayoutShape::Leaf(new_id.clone())]
        )
    );
    assert_eq!(registry.len(), 2);
    assert_consistent(&tree, &registry);

    assert!(tree.close(&mut registry, &new_id));
    assert_eq!(tree.shape(), LayoutShape::Leaf(main));
    assert_eq!(registry.len(), 1);
}

#[test]
fn split_nested_leaf_replaces_in_place() {
    let (mut tree, mut registry) = fixture();
    let main = SessionId::main();
    let right = tree
        .split(&mut registry, &main, SplitDirection::Horizontal, welcome())
        .unwrap();
    let below = tree
        .split(&mut registry, &right, SplitDirection::Vertical, welcome())
        .unwrap();

    assert_eq!(
        tree.shape(),
        LayoutShape::Split(
            SplitDirection::Horizontal,
            vec![
                LayoutShape::Leaf(main.clone()),
                LayoutShape::Split(
                    SplitDirection::Vertical,
                    vec![LayoutShape::Leaf(right.clone()), LayoutShape::Leaf(below.clone())]
                ),
            ]
        )
    );
    assert_consistent(&tree, &registry);
}

#[test]
fn close_collapses_nested_split_into_parent() {
    let (mut tree, mut registry) = fixture();
    let main = SessionId::main();
    let right = tree
        .split(&mut registry, &main, SplitDirection::Horizontal, welcome())
        .unwrap();
    let below = tree
        .split(&mut registry, &right, SplitDirection::Vertical, welcome())
        .unwrap();

    assert!(tree.close(&mut registry, &right));
    assert_eq!(
        tree.shape(),
        LayoutShape::Split(
            SplitDirection::Horizontal,
            vec![LayoutShape::Leaf(main), LayoutShape::Leaf(below)]
        )
    );
    assert_consistent(&tree, &registry);
}

#[test]
fn closing_main_inside_split_is_allowed() {
    let (mut tree, mut registry) = fixture();
    let main = SessionId::main();
    let other = tree
        .split(&mut registry, &main, SplitDirection::Vertical, welcome())
        .unwrap();
    assert!(tree.close(&mut registry, &main));
    assert_eq!(tree.shape(), LayoutShape::Leaf(other.clone()));
    assert!(!registry.contains(&main));

    // The survivor is now the last pane and cannot be closed.
    assert!(!tree.close(&mut registry, &other));
    assert_eq!(registry.len(), 1);
}

#[test]
fn last_pane_cannot_be_closed() {
    let (mut tree, mut registry) = fixture();
    assert!(!tree.close(&mut registry, &SessionId::main()));
    assert!(tree.is_single_leaf());
    assert_eq!(registry.len(), 1);
}

#[test]
fn split_of_unknown_target_creates_nothing() {
    let (mut tree, mut registry) = fixture();
    let result = tree.split(
        &mut registry,
        &SessionId::new("nowhere"),
        SplitDirection::Horizontal,
        welcome(),
    );
    assert!(result.is_none());
    assert_eq!(registry.len(), 1);
    assert!(tree.is_single_leaf());
}

#[test]
fn split_then_close_restores_shape() {
    let (mut tree, mut registry) = fixture();
    let main = SessionId::main();
    let a = tree
        .split(&mut registry, &main, SplitDirection::Horizontal, welcome())
        .unwrap();
    let before = tree.shape();
    let b = tree
        .split(&mut registry, &a, SplitDirection::Vertical, welcome())
        .unwrap();
    assert!(tree.close(&mut registry, &b));
    assert_eq!(tree.shape(), before);
}

#[test]
fn first_leaf_follows_tree_order() {
    let (mut tree, mut registry) = fixture();
    let main = SessionId::main();
    tree.split(&mut registry, &main, SplitDirection::Horizontal, welcome());
    assert_eq!(tree.first_leaf(), Some(&main));
}

#[derive(Debug, Clone)]
enum LayoutOp {
    Split(usize, bool),
    Close(usize),
}

fn layout_op() -> impl Strategy<Value = LayoutOp> {
    prop_oneof![
        (0usize..16, any::<bool>()).prop_map(|(i, h)| LayoutOp::Split(i, h)),
        (0usize..16).prop_map(LayoutOp::Close),
    ]
}

proptest! {
    #[test]
    fn tree_stays_minimal_and_in_sync(ops in prop::collection::vec(layout_op(), 0..48)) {
        let (mut tree, mut registry) = fixture();
        for op in ops {
            let leaves: Vec<SessionId> = tree.leaves().into_iter().cloned().collect();
            match op {
                LayoutOp::Split(i, horizontal) => {
                    let target = &leaves[i % leaves.len()];
                    let direction = if horizontal {
                        SplitDirection::Horizontal
                    } else {
                        SplitDirection::Vertical
                    };
                    let before = tree.shape();
                    let new_id = tree.split(&mut registry, target, direction, welcome());
                    prop_assert!(new_id.is_some());
                    if let Some(new_id) = new_id {
                        // Splitting and immediately closing the new pane is a round trip.
                        if i % 3 == 0 {
                            prop_assert!(tree.close(&mut registry, &new_id));
                            prop_assert_eq!(tree.shape(), before);
                        }
                    }
                }
                LayoutOp::Close(i) => {
                    let target = &leaves[i % leaves.len()];
                    let closed = tree.close(&mut registry, target);
                    prop_assert_eq!(closed, leaves.len() > 1);
                }
            }
            prop_assert!(tree.root().is_minimal());
            let leaves = tree.leaves();
            prop_assert_eq!(leaves.len(), registry.len());
            for leaf in leaves {
                prop_assert!(registry.contains(leaf));
            }
        }
    }
}
