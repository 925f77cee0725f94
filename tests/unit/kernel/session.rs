use super::*;
use proptest::prelude::*;

fn welcome() -> RichText {
    RichText::plain("welcome")
}

#[test]
fn new_registry_has_main_with_welcome() {
    let registry = SessionRegistry::new(welcome());
    let main = registry.get(&SessionId::main()).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(main.outputs.len(), 1);
    assert!(main.shows_only_welcome());
    assert_eq!(main.input, "");
    assert!(main.history.is_empty());
    assert_eq!(main.history_cursor, None);
}

#[test]
fn created_ids_are_unique_and_not_reused() {
    let mut registry = SessionRegistry::new(welcome());
    let a = registry.create_session(welcome());
    let b = registry.create_session(welcome());
    assert_ne!(a, b);
    registry.remove(&b);
    let c = registry.create_session(welcome());
    assert_ne!(c, b);
    assert_ne!(c, a);
    assert_eq!(registry.len(), 3);
}

#[test]
fn update_unknown_session_is_noop() {
    let mut registry = SessionRegistry::new(welcome());
    registry.update(
        &SessionId::new("ghost"),
        SessionPatch {
            input: Some("x".into()),
            ..SessionPatch::default()
        },
    );
    assert_eq!(registry.len(), 1);
    assert!(registry.get(&SessionId::new("ghost")).is_none());
}

#[test]
fn update_merges_only_given_fields() {
    let mut registry = SessionRegistry::new(welcome());
    let main = SessionId::main();
    registry.update(
        &main,
        SessionPatch {
            input: Some("abc".into()),
            history: Some(vec!["help".into()]),
            ..SessionPatch::default()
        },
    );
    let session = registry.get(&main).unwrap();
    assert_eq!(session.input, "abc");
    assert_eq!(session.history, vec!["help".to_string()]);
    assert_eq!(session.outputs.len(), 1);
}

#[test]
fn update_clamps_out_of_range_cursor() {
    let mut registry = SessionRegistry::new(welcome());
    let main = SessionId::main();
    registry.update(
        &main,
        SessionPatch {
            history_cursor: Some(Some(4)),
            ..SessionPatch::default()
        },
    );
    assert_eq!(registry.get(&main).unwrap().history_cursor, None);
}

#[test]
fn clear_is_structurally_idempotent() {
    let mut registry = SessionRegistry::new(welcome());
    let main = SessionId::main();
    registry.append_output(&main, OutputEntry::info("a"));
    registry.append_output(&main, OutputEntry::error("b"));
    registry.clear(&main, RichText::plain("fresh"));
    assert_eq!(registry.get(&main).unwrap().outputs.len(), 1);
    registry.clear(&main, RichText::plain("fresher"));
    let session = registry.get(&main).unwrap();
    assert_eq!(session.outputs.len(), 1);
    assert_eq!(session.outputs[0].content.to_plain_string(), "fresher");
}

#[test]
fn history_up_walks_from_newest_to_oldest() {
    let mut registry = SessionRegistry::new(welcome());
    let session = registry.get_mut(&SessionId::main()).unwrap();
    session.push_history("one");
    session.push_history("two");
    session.input = "draft".into();

    assert!(session.history_up());
    assert_eq!(session.input, "two");
    assert!(session.history_up());
    assert_eq!(session.input, "one");
    assert!(!session.history_up());
    assert_eq!(session.input, "one");
    assert_eq!(session.history_cursor, Some(1));

    assert!(session.history_down());
    assert_eq!(session.input, "two");
    assert!(session.history_down());
    assert_eq!(session.input, "");
    assert_eq!(session.history_cursor, None);
}

#[test]
fn history_up_discards_draft_input() {
    let mut registry = SessionRegistry::new(welcome());
    let session = registry.get_mut(&SessionId::main()).unwrap();
    session.push_history("help");
    session.input = "unsent".into();
    session.history_up();
    session.history_down();
    assert_eq!(session.input, "");
}

#[test]
fn history_down_when_not_browsing_is_noop() {
    let mut registry = SessionRegistry::new(welcome());
    let session = registry.get_mut(&SessionId::main()).unwrap();
    session.push_history("help");
    session.input = "typing".into();
    assert!(!session.history_down());
    assert_eq!(session.input, "typing");
    assert_eq!(session.history_cursor, None);
}

#[derive(Debug, Clone)]
enum HistoryOp {
    Push,
    Up,
    Down,
}

fn history_op() -> impl Strategy<Value = HistoryOp> {
    prop_oneof![Just(HistoryOp::Push), Just(HistoryOp::Up), Just(HistoryOp::Down)]
}

proptest! {
    #[test]
    fn history_cursor_stays_in_range(ops in prop::collection::vec(history_op(), 0..64)) {
        let mut registry = SessionRegistry::new(welcome());
        let session = registry.get_mut(&SessionId::main()).unwrap();
        for (i, op) in ops.into_iter().enumerate() {
            match op {
                HistoryOp::Push => session.push_history(&format!("cmd{i}")),
                HistoryOp::Up => { session.history_up(); }
                HistoryOp::Down => { session.history_down(); }
            }
            if let Some(cursor) = session.history_cursor {
                prop_assert!(cursor < session.history.len());
            }
        }
    }
}
