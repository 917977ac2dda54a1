use std::cell::Cell;

use try_rail::Try;

#[test]
fn test_zip_pairs_two_successes() {
    let pair = Try::success(1).zip(Try::success("one"));
    assert_eq!(pair.into_value(), Some((1, "one")));
}

#[test]
fn test_zip_left_failure_wins_when_both_fail() {
    let t = Try::<i32>::failure("left").zip(Try::<&str>::failure("right"));
    assert_eq!(t.unwrap_failure().message(), "left");
}

#[test]
fn test_zip_right_failure_propagates() {
    let t = Try::success(1).zip(Try::<&str>::failure("right"));
    assert_eq!(t.unwrap_failure().message(), "right");
}

#[test]
fn test_zip_with_combines_values() {
    let sum = Try::success(2).zip_with(Try::success(3), |a, b| a + b);
    assert_eq!(sum.into_value(), Some(5));
}

#[test]
fn test_zip_with_never_runs_the_combiner_on_failure() {
    let calls = Cell::new(0);
    let t = Try::<i32>::failure("boom").zip_with(Try::success(3), |a, b| {
        calls.set(calls.get() + 1);
        a + b
    });

    assert!(t.is_failure());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_try_zip_with_captures_the_combiner_error() {
    let ratio = Try::success(10)
        .try_zip_with(Try::success(0), |a: i32, b: i32| a.checked_div(b).ok_or("division by zero"));
    assert_eq!(ratio.unwrap_failure().message(), "division by zero");

    let ok = Try::success(10)
        .try_zip_with(Try::success(2), |a: i32, b: i32| a.checked_div(b).ok_or("division by zero"));
    assert_eq!(ok.into_value(), Some(5));
}

#[test]
fn test_zip_and_then_returns_the_inner_try() {
    let t = Try::success(6).zip_and_then(Try::success(7), |a, b| Try::success(a * b));
    assert_eq!(t.into_value(), Some(42));

    let inner = Try::success(6).zip_and_then(Try::success(7), |_, _| Try::<i32>::failure("inner"));
    assert_eq!(inner.unwrap_failure().message(), "inner");
}
