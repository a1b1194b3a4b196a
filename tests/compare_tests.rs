//! Tests for projected equality and ordering strategies.

use std::cmp::Ordering;

use optival::compare::{Comparison, Equality, contramap, contramap_with};
use optival::optics::{Focus, OpticError, Traversal, lens, prism};
use optival::record;
use optival::value::Value;
use proptest::prelude::*;
use rstest::rstest;

fn coordinates() -> Traversal<Value, Value> {
    Traversal::combine([Focus::from(prism::key("x")), Focus::from(prism::key("y"))])
}

// =============================================================================
// Absence ordering
// =============================================================================

#[rstest]
fn test_absent_score_orders_before_present_score() {
    let by_score = contramap(prism::key("score"));
    let unscored = record! {};
    let scored = record! { "score" => 5 };

    assert_eq!(by_score.compare(&unscored, &scored), Ok(Some(Ordering::Less)));
    assert_eq!(by_score.compare(&scored, &unscored), Ok(Some(Ordering::Greater)));
    assert_eq!(by_score.compare(&unscored, &record! {}), Ok(Some(Ordering::Equal)));
    assert_eq!(by_score.equal(&unscored, &record! { "score" => Value::Null }), Ok(true));
    assert_eq!(by_score.not_equal(&unscored, &scored), Ok(true));
}

#[rstest]
fn test_predicates_follow_compare() {
    let by_score = contramap("score");
    let low = record! { "score" => 1 };
    let high = record! { "score" => 2 };
    assert_eq!(by_score.lt(&low, &high), Ok(true));
    assert_eq!(by_score.le(&low, &high), Ok(true));
    assert_eq!(by_score.gt(&low, &high), Ok(false));
    assert_eq!(by_score.ge(&low, &high), Ok(false));
    assert_eq!(by_score.le(&low, &low.clone()), Ok(true));
}

// =============================================================================
// Traversals
// =============================================================================

#[rstest]
#[case(record! { "x" => 1 }, record! { "x" => 1 })]
#[case(record! {}, record! {})]
#[case(record! { "x" => 1, "y" => 2 }, record! { "y" => 2 })]
fn test_incomplete_traversals_are_unrelated(#[case] left: Value, #[case] right: Value) {
    let strategy = contramap(coordinates());
    assert_eq!(strategy.equal(&left, &right), Ok(false));
    assert_eq!(strategy.compare(&left, &right), Ok(None));
    assert_eq!(strategy.le(&left, &right), Ok(false));
    assert_eq!(strategy.ge(&left, &right), Ok(false));
}

#[rstest]
fn test_complete_traversals_compare_lexicographically() {
    let strategy = contramap(coordinates());
    let origin = record! { "x" => 0, "y" => 0 };
    let right = record! { "x" => 0, "y" => 1 };
    assert_eq!(strategy.compare(&origin, &right), Ok(Some(Ordering::Less)));
    assert_eq!(strategy.equal(&origin, &origin.clone()), Ok(true));
}

proptest! {
    #[test]
    fn prop_traversal_relates_only_complete_sides(
        left_x in prop::option::of(0_i64..3),
        left_y in prop::option::of(0_i64..3),
        right_x in prop::option::of(0_i64..3),
        right_y in prop::option::of(0_i64..3)
    ) {
        let strategy = contramap(coordinates());
        let left = record! { "x" => left_x, "y" => left_y };
        let right = record! { "x" => right_x, "y" => right_y };
        let complete =
            left_x.is_some() && left_y.is_some() && right_x.is_some() && right_y.is_some();

        let ordering = strategy.compare(&left, &right).unwrap();
        prop_assert_eq!(ordering.is_some(), complete);
        if complete {
            let expected = (left_x, left_y).cmp(&(right_x, right_y));
            prop_assert_eq!(ordering, Some(expected));
        }
    }
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn test_reversed_flips_absence_ordering() {
    let descending = contramap("score").reversed();
    assert_eq!(
        descending.compare(&record! {}, &record! { "score" => 5 }),
        Ok(Some(Ordering::Greater))
    );
}

#[rstest]
fn test_then_breaks_ties() {
    let by_team_then_name = contramap("team").then(contramap("name"));
    let ada = record! { "team" => "red", "name" => "Ada" };
    let bob = record! { "team" => "red", "name" => "Bob" };
    let cy = record! { "team" => "blue", "name" => "Cy" };

    assert_eq!(by_team_then_name.lt(&ada, &bob), Ok(true));
    assert_eq!(by_team_then_name.lt(&cy, &ada), Ok(true));
    assert_eq!(by_team_then_name.equal(&ada, &ada.clone()), Ok(true));
    assert_eq!(by_team_then_name.equal(&ada, &bob), Ok(false));
}

#[rstest]
fn test_contramap_with_custom_inner_strategy() {
    struct CaseInsensitive;

    impl Equality<Value> for CaseInsensitive {
        fn equal(&self, left: &Value, right: &Value) -> Result<bool, OpticError> {
            Ok(match (left.as_str(), right.as_str()) {
                (Some(left), Some(right)) => left.eq_ignore_ascii_case(right),
                _ => left == right,
            })
        }
    }

    let by_email = contramap_with("email", CaseInsensitive);
    let upper = record! { "email" => "ADA@EXAMPLE.COM" };
    let lower = record! { "email" => "ada@example.com" };
    assert_eq!(by_email.equal(&upper, &lower), Ok(true));
}

#[rstest]
fn test_lens_projection_propagates_structural_errors() {
    let strict = contramap(lens::key("id"));
    assert!(strict.compare(&record! { "id" => 1 }, &record! {}).is_err());
}
