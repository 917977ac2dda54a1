use std::cell::Cell;

use try_rail::Try;

#[test]
fn test_iter_yields_zero_or_one_items() {
    let success = Try::success(5);
    let collected: Vec<&i32> = success.iter().collect();
    assert_eq!(collected, [&5]);

    let failure = Try::<i32>::failure("boom");
    assert_eq!(failure.iter().next(), None);
}

#[test]
fn test_iter_mut_allows_in_place_updates() {
    let mut t = Try::success(3);
    if let Some(value) = t.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(t.into_value(), Some(4));
}

#[test]
fn test_into_iterator_by_value_and_by_reference() {
    let t = Try::success(2);
    let doubled: Vec<i32> = (&t).into_iter().map(|n| n * 2).collect();
    assert_eq!(doubled, [4]);

    let owned: Vec<i32> = t.into_iter().collect();
    assert_eq!(owned, [2]);

    let mut total = 0;
    for n in &Try::success(9) {
        total += n;
    }
    assert_eq!(total, 9);
}

#[test]
fn test_iterators_report_exact_length() {
    assert_eq!(Try::success(1).iter().len(), 1);
    assert_eq!(Try::<i32>::failure("boom").iter().len(), 0);
    assert_eq!(Try::success(1).into_iter().len(), 1);
}

#[test]
fn test_collecting_all_successes() {
    let parsed: Try<Vec<i32>> =
        ["1", "2", "3"].iter().map(|s| Try::of(|| s.parse::<i32>())).collect();
    assert_eq!(parsed.into_value(), Some(vec![1, 2, 3]));
}

#[test]
fn test_collecting_fails_fast_and_stops_consuming() {
    let consumed = Cell::new(0);
    let items = [Try::success(1), Try::<i32>::failure("bad row"), Try::success(3)];

    let collected: Try<Vec<i32>> = items
        .into_iter()
        .inspect(|_| consumed.set(consumed.get() + 1))
        .collect();

    assert_eq!(collected.unwrap_failure().message(), "bad row");
    assert_eq!(consumed.get(), 2);
}

#[test]
fn test_collecting_into_a_custom_collection() {
    use smallvec::SmallVec;

    let items = [Try::success(1), Try::success(2)];
    let collected: Try<SmallVec<[i32; 4]>> = items.into_iter().collect();

    assert_eq!(collected.into_value().map(|v| v.to_vec()), Some(vec![1, 2]));
}
