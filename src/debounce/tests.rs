#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Debouncer that records every fired argument, plus the shared record.
fn recording_debouncer(wait_ms: u64) -> (Debouncer<String>, Rc<RefCell<Vec<String>>>) {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    let debouncer = debounce(move |q: String| sink.borrow_mut().push(q), wait_ms);
    (debouncer, fired)
}

#[test]
fn test_burst_collapses_to_last_call() {
    let (mut d, fired) = recording_debouncer(300);
    let t0 = Instant::now();

    // Keystrokes at t=0, t=50, t=100 with a 300ms window.
    d.call_at("f".into(), t0);
    d.call_at("fo".into(), t0 + ms(50));
    d.call_at("foo".into(), t0 + ms(100));

    // Quiet until t=400; nothing may fire before then.
    assert!(!d.poll_at(t0 + ms(150)));
    assert!(!d.poll_at(t0 + ms(399)));
    assert!(fired.borrow().is_empty());

    assert!(d.poll_at(t0 + ms(400)));
    assert_eq!(*fired.borrow(), vec!["foo".to_string()]);
}

#[test]
fn test_single_call_fires_exactly_once() {
    let (mut d, fired) = recording_debouncer(300);
    let t0 = Instant::now();

    d.call_at("query".into(), t0);
    assert!(!d.poll_at(t0 + ms(299)));
    assert!(d.poll_at(t0 + ms(300)));
    assert_eq!(fired.borrow().len(), 1);

    // Subsequent polls are no-ops.
    assert!(!d.poll_at(t0 + ms(301)));
    assert!(!d.poll_at(t0 + ms(10_000)));
    assert_eq!(fired.borrow().len(), 1);
}

#[test]
fn test_each_call_resets_the_window() {
    let (mut d, fired) = recording_debouncer(300);
    let t0 = Instant::now();

    d.call_at("a".into(), t0);
    // 250ms later: would have fired at t=300, but this rearms to t=550.
    d.call_at("b".into(), t0 + ms(250));
    assert!(!d.poll_at(t0 + ms(300)));
    assert!(!d.poll_at(t0 + ms(549)));
    assert!(d.poll_at(t0 + ms(550)));
    assert_eq!(*fired.borrow(), vec!["b".to_string()]);
}

#[test]
fn test_cancel_drops_pending_call() {
    let (mut d, fired) = recording_debouncer(300);
    let t0 = Instant::now();

    d.call_at("doomed".into(), t0);
    assert!(d.is_pending());
    d.cancel();
    assert!(!d.is_pending());
    assert!(!d.poll_at(t0 + ms(1000)));
    assert!(fired.borrow().is_empty());
}

#[test]
fn test_next_deadline_tracks_pending_call() {
    let (mut d, _fired) = recording_debouncer(300);
    assert!(d.next_deadline().is_none());

    let t0 = Instant::now();
    d.call_at("q".into(), t0);
    assert_eq!(d.next_deadline(), Some(t0 + ms(300)));

    d.call_at("qu".into(), t0 + ms(100));
    assert_eq!(d.next_deadline(), Some(t0 + ms(400)));
}

#[test]
fn test_instances_are_isolated() {
    let (mut search, search_fired) = recording_debouncer(300);
    let (mut filter, filter_fired) = recording_debouncer(100);
    let t0 = Instant::now();

    search.call_at("coffee".into(), t0);
    filter.call_at("food".into(), t0);

    assert!(filter.poll_at(t0 + ms(100)));
    assert!(!search.poll_at(t0 + ms(100)));
    assert_eq!(*filter_fired.borrow(), vec!["food".to_string()]);
    assert!(search_fired.borrow().is_empty());

    assert!(search.poll_at(t0 + ms(300)));
    assert_eq!(*search_fired.borrow(), vec!["coffee".to_string()]);
}

#[test]
fn test_fires_again_after_new_call() {
    let (mut d, fired) = recording_debouncer(300);
    let t0 = Instant::now();

    d.call_at("first".into(), t0);
    assert!(d.poll_at(t0 + ms(300)));
    d.call_at("second".into(), t0 + ms(500));
    assert!(d.poll_at(t0 + ms(800)));
    assert_eq!(*fired.borrow(), vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn test_wall_clock_smoke() {
    // One real-time pass through the public API.
    let (mut d, fired) = recording_debouncer(50);
    d.call("live".into());
    assert!(d.is_pending());
    std::thread::sleep(ms(80));
    assert!(d.poll());
    assert_eq!(*fired.borrow(), vec!["live".to_string()]);
}

#[test]
fn test_debounced_search_reaches_store() {
    // The real wiring: keystrokes debounce into the store's search path.
    use crate::models::TransactionKind;
    use crate::store::TransactionStore;
    use chrono::NaiveDate;

    let mut store = TransactionStore::new();
    store
        .insert(crate::models::Transaction::new(
            4.5,
            "Food".into(),
            "Coffee beans".into(),
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        ))
        .unwrap();

    let store = Rc::new(store);
    let results = Rc::new(RefCell::new(Vec::new()));
    let (store_ref, sink) = (Rc::clone(&store), Rc::clone(&results));
    let mut search_box = debounce(
        move |query: String| {
            *sink.borrow_mut() = store_ref.search(&query);
        },
        300,
    );

    let t0 = Instant::now();
    search_box.call_at("c".into(), t0);
    search_box.call_at("co".into(), t0 + ms(50));
    search_box.call_at("coffee".into(), t0 + ms(100));
    assert!(search_box.poll_at(t0 + ms(400)));

    let hits = results.borrow();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].description, "Coffee beans");
}
