//! Property-based tests for optic composition.
//!
//! - **Associativity**: `(o1 ∘ o2) ∘ o3` behaves like `o1 ∘ (o2 ∘ o3)` on every input
//! - **Path equivalence**: `prism::path([a, b, c])` behaves like the composed prisms
//! - **Absence propagation**: an absent link anywhere makes the whole chain absent
//! - **Weakest link**: any prism in a chain makes the result a prism

use optival::optics::{Lens, OpticError, Prism, lens, prism};
use optival::projection::Projection;
use optival::record;
use optival::value::Value;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

/// A record whose `a.b.c` chain may be cut at any level.
fn chain() -> impl Strategy<Value = Value> {
    let level_c = prop_oneof![
        Just(record! {}),
        leaf().prop_map(|value| record! { "c" => value }),
    ];
    let level_b = prop_oneof![
        Just(record! {}),
        Just(record! { "b" => Value::Null }),
        level_c.prop_map(|inner| record! { "b" => inner }),
    ];
    prop_oneof![
        Just(record! {}),
        Just(record! { "a" => Value::Null }),
        level_b.prop_map(|inner| record! { "a" => inner }),
    ]
}

/// A record whose `a.b.c` chain is always complete.
fn complete_chain() -> impl Strategy<Value = Value> {
    leaf().prop_map(|value| record! { "a" => record! { "b" => record! { "c" => value } } })
}

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    #[test]
    fn prop_prism_composition_is_associative(source in chain()) {
        let left = prism::key("a").compose(prism::key("b")).compose(prism::key("c"));
        let right = prism::key("a").compose(prism::key("b").compose(prism::key("c")));
        prop_assert_eq!(left.preview(&source), right.preview(&source));
    }

    #[test]
    fn prop_lens_composition_is_associative(source in complete_chain(), value in leaf()) {
        let left = lens::key("a").compose(lens::key("b")).compose(lens::key("c"));
        let right = lens::key("a").compose(lens::key("b").compose(lens::key("c")));
        prop_assert_eq!(left.get(&source), right.get(&source));
        prop_assert_eq!(
            left.set(source.clone(), value.clone()),
            right.set(source, value)
        );
    }

    #[test]
    fn prop_mixed_composition_is_associative(source in chain()) {
        let left = Projection::from(lens::key("a"))
            .compose(Projection::key("b"))
            .and_then(|projection| projection.compose(Projection::key("c")))
            .unwrap();
        let right = Projection::key("b")
            .compose(Projection::key("c"))
            .and_then(|inner| Projection::from(lens::key("a")).compose(inner))
            .unwrap();
        prop_assert_eq!(left.resolve(&source), right.resolve(&source));
    }

    #[test]
    fn prop_path_equals_composition(source in chain()) {
        let composed = prism::key("a").compose(prism::key("b")).compose(prism::key("c"));
        let path = prism::path(["a", "b", "c"]);
        prop_assert_eq!(composed.preview(&source), path.preview(&source));
    }
}

// =============================================================================
// Absence propagation
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_link_makes_chain_absent(value in leaf()) {
        let path = prism::path(["a", "b", "c"]);
        for source in [
            record! { "b" => record! { "c" => value.clone() } },
            record! { "a" => Value::Null },
            record! { "a" => record! { "c" => value.clone() } },
        ] {
            prop_assert_eq!(path.preview(&source), Ok(None));
        }
    }

    #[test]
    fn prop_lens_then_absent_prism_is_absent(value in leaf()) {
        let optional = lens::key("a").compose_prism(prism::key("missing"));
        let source = record! { "a" => record! { "other" => value } };
        prop_assert_eq!(optional.preview(&source), Ok(None));
    }
}

// =============================================================================
// Weakest link
// =============================================================================

#[test]
fn test_result_kind_follows_weakest_link() {
    let kind = |outer: Projection, inner: Projection| outer.compose(inner).unwrap().kind();

    assert_eq!(kind(lens::key("a").into(), lens::key("b").into()), "lens");
    assert_eq!(kind(lens::key("a").into(), prism::key("b").into()), "prism");
    assert_eq!(kind(prism::key("a").into(), lens::key("b").into()), "prism");
    assert_eq!(kind(prism::key("a").into(), prism::key("b").into()), "prism");
}

#[test]
fn test_lens_chain_propagates_inner_failure() {
    let strict = lens::key("a").compose(lens::key("b"));
    let error = strict.get(&record! { "a" => record! {} }).unwrap_err();
    assert_eq!(
        error,
        OpticError::MissingKey {
            key: "b".to_string(),
            path: "b".to_string(),
        }
    );
}

#[test]
fn test_prism_then_lens_is_absent_before_the_lens_runs() {
    let optional = prism::key("a").compose_lens(lens::key("b"));
    assert_eq!(optional.preview(&record! {}), Ok(None));
    assert!(optional.preview(&record! { "a" => record! {} }).is_err());
}
