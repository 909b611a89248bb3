#![cfg(feature = "control")]
//! Integration tests for `Optional`.
//!
//! Covers construction from nullable and fallible sources, the laziness of
//! every function-taking combinator, conversion into `Outcome` and the abort
//! raised by `unwrap`/`expect` on `None`.

use effectum::control::{Optional, OptionalMatcher, Outcome};
use rstest::rstest;
use std::cell::Cell;

fn counting<T>(calls: &Cell<usize>, value: T) -> T {
    calls.set(calls.get() + 1);
    value
}

// =============================================================================
// Construction
// =============================================================================

mod construction {
    use super::*;

    #[rstest]
    fn test_some_holds_value() {
        let optional = Optional::some("value");
        assert!(optional.is_some());
        assert_eq!(optional.unwrap(), "value");
    }

    #[rstest]
    fn test_none_is_shared_constant() {
        let first: Optional<Vec<u8>> = Optional::none();
        let second: Optional<Vec<u8>> = Optional::NONE;
        assert!(first.is_none());
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(Some(3), Optional::Some(3))]
    #[case(None, Optional::None)]
    fn test_from_nullable(#[case] value: Option<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(Optional::from_nullable(value), expected);
        assert_eq!(Optional::from(value), expected);
    }

    #[rstest]
    fn test_try_from_fn_catches_raised_error() {
        let parsed: Optional<serde_json::Value> =
            Optional::try_from_fn(|| serde_json::from_str("{ not json"));
        assert!(parsed.is_none());
    }

    #[rstest]
    fn test_try_from_fn_keeps_value() {
        let parsed: Optional<i32> = Optional::try_from_fn(|| serde_json::from_str("42"));
        assert_eq!(parsed, Optional::Some(42));
    }

    #[rstest]
    #[case("null", Optional::None)]
    #[case("7", Optional::Some(7))]
    #[case("invalid", Optional::None)]
    fn test_try_from_nullable_fn(#[case] json: &str, #[case] expected: Optional<i32>) {
        let parsed = Optional::try_from_nullable_fn(|| serde_json::from_str::<Option<i32>>(json));
        assert_eq!(parsed, expected);
    }
}

// =============================================================================
// Extraction
// =============================================================================

mod extraction {
    use super::*;

    #[rstest]
    #[should_panic(expected = "panicked at 'called Option.unwrap() on a None value'")]
    fn test_unwrap_none_aborts_with_default_message() {
        let absent: Optional<i32> = Optional::NONE;
        let _ = absent.unwrap();
    }

    #[rstest]
    #[should_panic(expected = "panicked at 'user id must be set'")]
    fn test_expect_none_aborts_with_message() {
        let absent: Optional<u64> = Optional::NONE;
        let _ = absent.expect("user id must be set");
    }

    #[rstest]
    fn test_unwrap_or_else_runs_once_on_none() {
        let calls = Cell::new(0);
        let absent: Optional<i32> = Optional::NONE;
        assert_eq!(absent.unwrap_or_else(|| counting(&calls, 9)), 9);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_unwrap_or_else_skipped_on_some() {
        let calls = Cell::new(0);
        assert_eq!(Optional::some(1).unwrap_or_else(|| counting(&calls, 9)), 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Optional::Some(2), 2)]
    #[case(Optional::None, 0)]
    fn test_unwrap_or(#[case] optional: Optional<i32>, #[case] expected: i32) {
        assert_eq!(optional.unwrap_or(0), expected);
        assert_eq!(optional.unwrap_or_default(), expected);
    }
}

// =============================================================================
// Transformation
// =============================================================================

mod transformation {
    use super::*;

    #[rstest]
    fn test_map_or_else_default_only_on_none() {
        let calls = Cell::new(0);
        let present = Optional::some(3).map_or_else(|| counting(&calls, 0), |x| x * 2);
        assert_eq!(present, 6);
        assert_eq!(calls.get(), 0);

        let absent = Optional::<i32>::NONE.map_or_else(|| counting(&calls, 0), |x| x * 2);
        assert_eq!(absent, 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    #[case(Optional::Some(2), "2")]
    #[case(Optional::None, "-")]
    fn test_map_or(#[case] optional: Optional<i32>, #[case] expected: &str) {
        assert_eq!(optional.map_or("-".to_string(), |x| x.to_string()), expected);
    }

    #[rstest]
    fn test_and_then_and_flat_map_agree() {
        let parse = |text: &str| Optional::try_from_fn(|| text.parse::<i32>());
        assert_eq!(Optional::some("5").and_then(parse), Optional::some("5").flat_map(parse));
        assert_eq!(Optional::some("x").and_then(parse), Optional::None);
    }

    #[rstest]
    fn test_and_then_skipped_on_none() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::NONE.and_then(|x| counting(&calls, Optional::some(x)));
        assert_eq!(result, Optional::None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Optional::Some(10), Optional::Some(10))]
    #[case(Optional::Some(-1), Optional::None)]
    #[case(Optional::None, Optional::None)]
    fn test_filter(#[case] optional: Optional<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(optional.filter(|x| *x > 0), expected);
    }

    #[rstest]
    fn test_flatten_nested() {
        assert_eq!(Optional::some(Optional::some(1)).flatten(), Optional::Some(1));
        assert_eq!(Optional::some(Optional::<i32>::NONE).flatten(), Optional::None);
        assert_eq!(Optional::<Optional<i32>>::NONE.flatten(), Optional::None);
    }

    #[rstest]
    fn test_flatten_three_levels() {
        let deep = Optional::some(Optional::some(Optional::some('x')));
        assert_eq!(deep.flatten().flatten(), Optional::Some('x'));
    }
}

// =============================================================================
// Combination
// =============================================================================

mod combination {
    use super::*;

    #[rstest]
    #[case(Optional::Some(1), Optional::Some("b"), Optional::Some("b"))]
    #[case(Optional::Some(1), Optional::None, Optional::None)]
    #[case(Optional::None, Optional::Some("b"), Optional::None)]
    fn test_and(
        #[case] left: Optional<i32>,
        #[case] right: Optional<&str>,
        #[case] expected: Optional<&str>,
    ) {
        assert_eq!(left.and(right), expected);
    }

    #[rstest]
    #[case(Optional::Some(1), Optional::Some(2), Optional::Some(1))]
    #[case(Optional::None, Optional::Some(2), Optional::Some(2))]
    #[case(Optional::None, Optional::None, Optional::None)]
    fn test_or(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(left.or(right), expected);
    }

    #[rstest]
    fn test_or_else_runs_only_on_none() {
        let calls = Cell::new(0);
        assert_eq!(
            Optional::some(1).or_else(|| counting(&calls, Optional::some(2))),
            Optional::Some(1)
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(
            Optional::NONE.or_else(|| counting(&calls, Optional::some(2))),
            Optional::Some(2)
        );
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_zip_requires_both() {
        assert_eq!(Optional::some(1).zip(Optional::some('a')), Optional::Some((1, 'a')));
        assert_eq!(Optional::some(1).zip(Optional::<char>::NONE), Optional::None);
    }
}

// =============================================================================
// Conversion and Matching
// =============================================================================

mod conversion {
    use super::*;

    #[rstest]
    fn test_ok_or() {
        assert_eq!(Optional::some(1).ok_or("missing"), Outcome::Ok(1));
        assert_eq!(Optional::<i32>::NONE.ok_or("missing"), Outcome::Err("missing"));
    }

    #[rstest]
    fn test_ok_or_else_runs_only_on_none() {
        let calls = Cell::new(0);
        let present = Optional::some(1).ok_or_else(|| counting(&calls, "missing"));
        assert_eq!(present, Outcome::Ok(1));
        assert_eq!(calls.get(), 0);

        let absent = Optional::<i32>::NONE.ok_or_else(|| counting(&calls, "missing"));
        assert_eq!(absent, Outcome::Err("missing"));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_match_with_invokes_one_branch() {
        let some_calls = Cell::new(0);
        let none_calls = Cell::new(0);

        let result = Optional::some(2).match_with(OptionalMatcher {
            some: |value: i32| counting(&some_calls, value * 2),
            none: || counting(&none_calls, 0),
        });
        assert_eq!(result, 4);
        assert_eq!((some_calls.get(), none_calls.get()), (1, 0));

        let result = Optional::<i32>::NONE.match_with(OptionalMatcher {
            some: |value: i32| counting(&some_calls, value * 2),
            none: || counting(&none_calls, -1),
        });
        assert_eq!(result, -1);
        assert_eq!((some_calls.get(), none_calls.get()), (1, 1));
    }

    #[rstest]
    fn test_fold_matches_map_or_else() {
        assert_eq!(Optional::some(2).fold(|| 0, |x| x + 1), 3);
        assert_eq!(Optional::<i32>::NONE.fold(|| 0, |x| x + 1), 0);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Optional::some(42).to_string(), "Some(42)");
        assert_eq!(Optional::some("text").to_string(), "Some(text)");
        assert_eq!(Optional::<i32>::NONE.to_string(), "None");
    }

    #[rstest]
    fn test_into_option_roundtrip() {
        assert_eq!(Optional::some(1).into_option(), Some(1));
        let option: Option<i32> = Optional::NONE.into();
        assert_eq!(option, None);
    }
}
