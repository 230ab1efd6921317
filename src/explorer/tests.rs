use super::*;
use crate::error::JnavError;
use serde_json::json;

fn sample() -> Value {
    json!({
        "alpha": {"x": 1},
        "abc": [10, 20, 30],
        "beta": "b",
        "dot.key": true,
    })
}

fn type_str<D: Document + ?Sized>(explorer: &mut Explorer<'_, D>, text: &str) {
    for ch in text.chars() {
        explorer.insert_char(ch);
    }
}

#[test]
fn test_initial_state_lists_root_keys() {
    let doc = sample();
    let explorer = Explorer::new(&doc, '.');
    assert!(!explorer.is_fully_resolved());
    assert_eq!(explorer.node(), Some(&doc));
    assert_eq!(
        explorer.completions(),
        &["abc", "alpha", "beta", "dot.key"]
    );
    assert_eq!(explorer.hint(), "abc");
}

#[test]
fn test_nested_array_is_indexed() {
    let doc = json!({"items": [{"a": 1}, {"a": 2}]});
    let mut explorer = Explorer::new(&doc, '.');
    type_str(&mut explorer, "items[1].a");
    assert!(explorer.is_fully_resolved());
    assert_eq!(explorer.node(), Some(&json!(2)));
}

#[test]
fn test_array_root_has_no_key_candidates() {
    // The leading empty key is looked up like any other key, which an array cannot satisfy
    let doc = json!([{"a": 1}]);
    let mut explorer = Explorer::new(&doc, '.');
    assert_eq!(explorer.node(), None);
    assert!(explorer.completions().is_empty());

    type_str(&mut explorer, "[0]");
    assert!(!explorer.is_fully_resolved());
    assert_eq!(explorer.node(), None);
}

#[test]
fn test_typing_narrows_candidates() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    type_str(&mut explorer, "a");
    assert_eq!(explorer.completions(), &["abc", "alpha"]);
    assert_eq!(explorer.hint(), "bc");

    type_str(&mut explorer, "lpha");
    assert!(explorer.is_fully_resolved());
    assert!(explorer.completions().is_empty());
    assert_eq!(explorer.node(), Some(&doc["alpha"]));
}

#[test]
fn test_unmatched_prefix_has_no_results() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    type_str(&mut explorer, "zz");
    assert!(explorer.completions().is_empty());
    assert_eq!(explorer.node(), None);

    explorer.delete_char();
    explorer.delete_char();
    assert_eq!(explorer.node(), Some(&doc));
}

#[test]
fn test_tab_single_candidate_completes() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    type_str(&mut explorer, "be");
    explorer.tab_complete();
    assert_eq!(explorer.query().raw(), "beta");
    assert!(explorer.is_fully_resolved());
    assert_eq!(explorer.node(), Some(&json!("b")));
}

#[test]
fn test_tab_cycles_and_enter_applies() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    type_str(&mut explorer, "a");
    assert_eq!(explorer.active_completion(), None);

    explorer.tab_complete();
    assert_eq!(explorer.active_completion(), Some(0));
    explorer.tab_complete();
    assert_eq!(explorer.active_completion(), Some(1));
    explorer.tab_complete();
    assert_eq!(explorer.active_completion(), Some(0));
    explorer.tab_complete();

    assert_eq!(explorer.accept(), Accept::Continue);
    assert_eq!(explorer.query().raw(), "alpha");
    assert_eq!(explorer.active_completion(), None);
    assert_eq!(explorer.accept(), Accept::Done(Some(&doc["alpha"])));
}

#[test]
fn test_edit_resets_active_candidate() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    explorer.tab_complete();
    assert!(explorer.active_completion().is_some());
    explorer.insert_char('b');
    assert_eq!(explorer.active_completion(), None);

    explorer.tab_complete();
    explorer.cancel_completion();
    assert_eq!(explorer.active_completion(), None);
}

#[test]
fn test_completion_escapes_separator() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    type_str(&mut explorer, "d");
    explorer.tab_complete();
    assert_eq!(explorer.query().raw(), r"dot\.key");
    assert!(explorer.is_fully_resolved());
    assert_eq!(explorer.node(), Some(&json!(true)));
}

#[test]
fn test_unfinished_index_offers_closing_bracket() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    type_str(&mut explorer, "abc[2");
    assert_eq!(explorer.completions(), &["[2]"]);
    assert_eq!(explorer.node(), Some(&doc["abc"]));
    assert_eq!(explorer.hint(), "]");

    explorer.tab_complete();
    assert_eq!(explorer.query().raw(), "abc[2]");
    assert_eq!(explorer.node(), Some(&json!(30)));
}

#[test]
fn test_cursor_editing() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    type_str(&mut explorer, "beta.zzz");
    explorer.cursor_backward();
    explorer.cursor_backward();
    explorer.cursor_backward();
    explorer.cursor_backward();
    explorer.delete_after_cursor();
    assert_eq!(explorer.query().raw(), "beta");
    assert!(explorer.is_fully_resolved());

    explorer.cursor_home();
    assert!(!explorer.cursor_backward());
    explorer.cursor_end();
    assert!(!explorer.cursor_forward());

    explorer.cursor_backward();
    explorer.delete_before_cursor();
    assert_eq!(explorer.query().raw(), "a");
    assert_eq!(explorer.query().cursor(), 0);
}

#[test]
fn test_execute_one_shot() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    assert_eq!(explorer.execute("abc[1]").unwrap(), &json!(20));
    assert_eq!(explorer.execute(r"dot\.key").unwrap(), &json!(true));
}

#[test]
fn test_execute_reports_failing_token() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    for (query, token) in [("abc[7]", "[7]"), ("alp", "alp"), ("abc[", "[")] {
        match explorer.execute(query) {
            Err(JnavError::Usage(UsageError::BadQuery { token: t, .. })) => {
                assert_eq!(t, token, "{query}")
            }
            other => panic!("unexpected result for {query}: {other:?}"),
        }
    }
}

#[test]
fn test_view_snapshot() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    explorer.toggle_only_keys();
    type_str(&mut explorer, "al");
    let view = explorer.view();
    assert_eq!(view.query.raw(), "al");
    assert_eq!(view.hint, "pha");
    assert!(view.only_keys);
    assert_eq!(view.completions, &["alpha"]);
    assert_eq!(view.node, Some(&doc));
}

#[test]
fn test_custom_separator() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '/');
    assert_eq!(explorer.execute("dot.key").unwrap(), &json!(true));
    assert_eq!(explorer.execute("alpha/x").unwrap(), &json!(1));
}

#[test]
fn test_toggle_only_keys_drops_active_candidate() {
    let doc = sample();
    let mut explorer = Explorer::new(&doc, '.');
    explorer.tab_complete();
    explorer.toggle_only_keys();
    assert!(explorer.only_keys());
    assert_eq!(explorer.active_completion(), None);
    assert_eq!(explorer.accept(), Accept::Done(Some(&doc)));
}
