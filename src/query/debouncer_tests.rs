//! Tests for the query debouncer

use super::*;
use proptest::prelude::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_new_debouncer_has_no_pending() {
    let debouncer = Debouncer::new(ms(300));
    assert!(!debouncer.is_pending());
    assert!(debouncer.deadline().is_none());
    assert!(!debouncer.should_fire(Instant::now()));
}

#[test]
fn test_default_delay_is_300ms() {
    assert_eq!(Debouncer::default().delay(), ms(300));
}

#[test]
fn test_fires_only_after_delay() {
    let mut debouncer = Debouncer::new(ms(300));
    let start = Instant::now();
    debouncer.schedule(start);

    assert!(debouncer.is_pending());
    assert!(!debouncer.should_fire(start));
    assert!(!debouncer.should_fire(start + ms(299)));
    assert!(debouncer.should_fire(start + ms(300)));
    assert!(debouncer.should_fire(start + ms(1000)));
}

#[test]
fn test_reschedule_extends_deadline() {
    let mut debouncer = Debouncer::new(ms(300));
    let start = Instant::now();
    debouncer.schedule(start);
    debouncer.schedule(start + ms(200));

    assert!(!debouncer.should_fire(start + ms(300)));
    assert!(debouncer.should_fire(start + ms(500)));
    assert_eq!(debouncer.deadline(), Some(start + ms(500)));
}

#[test]
fn test_mark_fired_clears_pending() {
    let mut debouncer = Debouncer::new(ms(300));
    let start = Instant::now();
    debouncer.schedule(start);
    debouncer.mark_fired();

    assert!(!debouncer.is_pending());
    assert!(!debouncer.should_fire(start + ms(1000)));
}

#[test]
fn test_cancel_clears_pending() {
    let mut debouncer = Debouncer::new(ms(300));
    let start = Instant::now();
    debouncer.schedule(start);
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert!(!debouncer.should_fire(start + ms(1000)));
}

#[test]
fn test_zero_delay_fires_immediately() {
    let mut debouncer = Debouncer::new(Duration::ZERO);
    let start = Instant::now();
    debouncer.schedule(start);
    assert!(debouncer.should_fire(start));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A burst of schedules never fires before the last one plus the delay
    #[test]
    fn prop_burst_fires_after_last_schedule(gaps in prop::collection::vec(0u64..299, 1..20)) {
        let mut debouncer = Debouncer::new(ms(300));
        let start = Instant::now();
        let mut now = start;

        debouncer.schedule(now);
        for gap in &gaps {
            now += ms(*gap);
            prop_assert!(!debouncer.should_fire(now));
            debouncer.schedule(now);
        }

        prop_assert!(!debouncer.should_fire(now + ms(299)));
        prop_assert!(debouncer.should_fire(now + ms(300)));
    }
}
