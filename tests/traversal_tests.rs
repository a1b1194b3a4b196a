//! Tests for traversals over a fixed list of foci.

use optival::optics::{Focus, OpticError, Traversal, lens, prism};
use optival::record;
use optival::value::Value;
use proptest::prelude::*;
use rstest::rstest;

fn span() -> Traversal<Value, Value> {
    Traversal::combine([Focus::from(prism::key("start")), Focus::from(prism::key("end"))])
}

// =============================================================================
// Reading
// =============================================================================

#[rstest]
#[case(record! { "start" => 1, "end" => 4 }, Some(vec![Value::from(1), Value::from(4)]))]
#[case(record! { "start" => 1 }, None)]
#[case(record! { "start" => 1, "end" => Value::Null }, None)]
#[case(record! {}, None)]
fn test_to_list_maybe_is_all_or_nothing(
    #[case] source: Value,
    #[case] expected: Option<Vec<Value>>,
) {
    let foci = span()
        .to_list_maybe(&source)
        .unwrap()
        .map(|foci| foci.into_iter().cloned().collect::<Vec<_>>());
    assert_eq!(foci, expected);
}

#[rstest]
fn test_to_list_skips_absent_foci() {
    let source = record! { "end" => 4 };
    assert_eq!(span().to_list(&source), Ok(vec![&Value::from(4)]));
}

#[rstest]
fn test_preview_returns_first_present_focus() {
    let source = record! { "start" => Value::Null, "end" => 4 };
    assert_eq!(span().preview(&source), Ok(Some(&Value::from(4))));
    assert_eq!(span().has(&source), Ok(true));
    assert_eq!(span().has(&record! {}), Ok(false));
}

#[rstest]
fn test_empty_traversal_is_never_fully_present() {
    let empty: Traversal<Value, Value> = Traversal::combine([]);
    assert!(empty.is_empty());
    assert_eq!(empty.to_list_maybe(&record! { "start" => 1 }), Ok(None));
    assert_eq!(empty.to_list(&record! {}), Ok(vec![]));
}

#[rstest]
fn test_lens_focus_raises_on_missing_key() {
    let strict =
        Traversal::combine([Focus::from(lens::key("start")), Focus::from(prism::key("end"))]);
    assert!(matches!(
        strict.focus_all(&record! { "end" => 2 }),
        Err(OpticError::MissingKey { .. })
    ));
}

#[rstest]
fn test_foci_keep_declaration_order() {
    let traversal: Traversal<Value, Value> = [
        Focus::from(lens::key("b")),
        Focus::from(prism::key("a")),
    ]
    .into_iter()
    .collect();
    let kinds: Vec<_> = traversal.foci().iter().map(Focus::kind).collect();
    assert_eq!(kinds, ["lens", "prism"]);
    assert_eq!(traversal.len(), 2);
}

// =============================================================================
// Writing
// =============================================================================

#[rstest]
fn test_modify_all_touches_only_present_foci() {
    let source = record! { "start" => 1 };
    let bump = |value: Value| Value::from(value.as_i64().unwrap_or_default() + 10);
    assert_eq!(span().modify_all(source, bump), Ok(record! { "start" => 11 }));
}

proptest! {
    #[test]
    fn prop_modify_identity_law(start in any::<i64>(), end in any::<i64>()) {
        let source = record! { "start" => start, "end" => end };
        prop_assert_eq!(span().modify_all(source.clone(), |value| value), Ok(source));
    }

    #[test]
    fn prop_modify_composition_law(start in -1000_i64..1000, end in -1000_i64..1000) {
        let source = record! { "start" => start, "end" => end };
        let double = |value: Value| Value::from(value.as_i64().unwrap_or_default() * 2);
        let increment = |value: Value| Value::from(value.as_i64().unwrap_or_default() + 1);

        let stepwise = span()
            .modify_all(source.clone(), double)
            .and_then(|doubled| span().modify_all(doubled, increment));
        let fused = span().modify_all(source, |value| increment(double(value)));
        prop_assert_eq!(stepwise, fused);
    }

    #[test]
    fn prop_fully_present_iff_every_focus_present(
        start in prop::option::of(any::<i64>()),
        end in prop::option::of(any::<i64>())
    ) {
        let source = record! { "start" => start, "end" => end };
        let complete = span().to_list_maybe(&source).unwrap().is_some();
        prop_assert_eq!(complete, start.is_some() && end.is_some());
    }
}
