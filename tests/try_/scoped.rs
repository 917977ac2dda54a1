use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use try_rail::Try;

/// Counts its own drops, so release-exactly-once is observable.
struct Probe {
    drops: Rc<Cell<u32>>,
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn using_feeds_resource_and_value_to_the_computation() {
    let written = Try::success("hello").using(
        || Ok::<_, &str>(Vec::new()),
        |buffer, text| {
            buffer.extend_from_slice(text.as_bytes());
            Ok::<_, &str>(buffer.len())
        },
    );

    assert_eq!(written.into_value(), Some(5));
}

#[test]
fn using_releases_exactly_once_on_success() {
    let drops = Rc::new(Cell::new(0));
    let handle = Rc::clone(&drops);

    let t = Try::success(1).using(
        move || Ok::<_, &str>(Probe { drops: handle }),
        |_, n| Ok::<_, &str>(n + 1),
    );

    assert_eq!(t.into_value(), Some(2));
    assert_eq!(drops.get(), 1);
}

#[test]
fn using_releases_exactly_once_when_use_fails() {
    let drops = Rc::new(Cell::new(0));
    let handle = Rc::clone(&drops);

    let t = Try::success(1).using(
        move || Ok::<_, &str>(Probe { drops: handle }),
        |_, _| Err::<i32, _>("use failed"),
    );

    assert_eq!(t.unwrap_failure().message(), "use failed");
    assert_eq!(drops.get(), 1);
}

#[test]
fn using_releases_during_unwind() {
    let drops = Rc::new(Cell::new(0));
    let handle = Rc::clone(&drops);

    let outcome = catch_unwind(AssertUnwindSafe(move || {
        Try::success(1).using(
            move || Ok::<_, &str>(Probe { drops: handle }),
            |_, _| -> Result<i32, &str> { panic!("mid-use") },
        )
    }));

    assert!(outcome.is_err());
    assert_eq!(drops.get(), 1);
}

#[test]
fn using_never_acquires_on_a_failure_input() {
    let acquired = Cell::new(false);

    let t = Try::<i32>::failure("boom").using(
        || {
            acquired.set(true);
            Ok::<_, &str>(Vec::<u8>::new())
        },
        |_, _| Ok::<_, &str>(0),
    );

    assert_eq!(t.unwrap_failure().message(), "boom");
    assert!(!acquired.get());
}

#[test]
fn using_captures_an_acquisition_failure_and_skips_use() {
    let used = Cell::new(false);

    let t = Try::success(1).using(
        || Err::<Vec<u8>, _>("no resource"),
        |_, _| {
            used.set(true);
            Ok::<_, &str>(0)
        },
    );

    assert_eq!(t.unwrap_failure().message(), "no resource");
    assert!(!used.get());
}

#[test]
fn bracket_runs_the_finalizer_on_both_outcomes() {
    let released = Cell::new(0);

    let ok = Try::success(21).bracket(
        || Ok::<_, &str>(2),
        |factor, n| Ok::<_, &str>(*factor * n),
        |_| released.set(released.get() + 1),
    );
    assert_eq!(ok.into_value(), Some(42));

    let err = Try::success(21).bracket(
        || Ok::<_, &str>(2),
        |_, _| Err::<i32, _>("use failed"),
        |_| released.set(released.get() + 1),
    );
    assert_eq!(err.unwrap_failure().message(), "use failed");

    assert_eq!(released.get(), 2);
}

#[test]
fn bracket_does_not_release_when_acquisition_fails() {
    let released = Cell::new(false);

    let t = Try::success(1).bracket(
        || Err::<i32, _>("acquire failed"),
        |_, _| Ok::<_, &str>(0),
        |_| released.set(true),
    );

    assert_eq!(t.unwrap_failure().message(), "acquire failed");
    assert!(!released.get());
}

#[test]
fn bracket_panic_skips_the_finalizer_but_drop_still_runs() {
    let drops = Rc::new(Cell::new(0));
    let handle = Rc::clone(&drops);
    let released = Rc::new(Cell::new(false));
    let released_flag = Rc::clone(&released);

    let outcome = catch_unwind(AssertUnwindSafe(move || {
        Try::success(1).bracket(
            move || Ok::<_, &str>(Probe { drops: handle }),
            |_, _| -> Result<i32, &str> { panic!("mid-use") },
            move |_probe| released_flag.set(true),
        )
    }));

    assert!(outcome.is_err());
    assert!(!released.get());
    assert_eq!(drops.get(), 1);
}
