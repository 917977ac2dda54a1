use try_rail::convert::*;
use try_rail::{Captured, Try};

#[test]
fn result_to_try_handles_both_variants() {
    let ok: Result<i32, &str> = Ok(7);
    assert_eq!(result_to_try(ok), Try::success(7));

    let err: Result<i32, &str> = Err("boom");
    assert_eq!(result_to_try(err).unwrap_failure().message(), "boom");
}

#[test]
fn try_to_result_round_trips() {
    let success = Try::success(3);
    assert_eq!(try_to_result(success), Ok(3));

    let failure = Try::<i32>::failure("fail");
    assert_eq!(try_to_result(failure), Err(Captured::new("fail")));
}

#[test]
fn option_to_try_attaches_the_error_to_none() {
    let present = option_to_try(Some(5), "absent");
    assert_eq!(present, Try::success(5));

    let missing = option_to_try(None::<i32>, "absent");
    assert_eq!(missing.unwrap_failure().message(), "absent");
}

#[test]
fn try_to_option_discards_the_error() {
    assert_eq!(try_to_option(Try::success(9)), Some(9));
    assert_eq!(try_to_option(Try::<i32>::failure("gone")), None);
}

#[test]
fn successes_keeps_order_and_skips_failures() {
    let tries = vec![
        Try::success(1),
        Try::failure("skipped"),
        Try::success(2),
        Try::failure("also skipped"),
        Try::success(3),
    ];

    let values: Vec<_> = successes(tries).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn failures_keeps_order_and_skips_successes() {
    let tries = vec![Try::success(1), Try::failure("first"), Try::failure("second")];

    let errors: Vec<_> = failures(tries).map(|e| e.message().to_string()).collect();
    assert_eq!(errors, vec!["first", "second"]);
}

#[test]
fn empty_input_yields_empty_iterators() {
    let none: Vec<Try<i32>> = Vec::new();
    assert_eq!(successes(none.clone()).count(), 0);
    assert_eq!(failures(none).count(), 0);
}
