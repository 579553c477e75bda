use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn fires_on_interval_grid() {
    let s = TickScheduler::new();
    let h = s.schedule(ms(16), ms(0));
    assert!(s.poll(ms(15)).is_empty());
    assert_eq!(s.poll(ms(16)), vec![h.id()]);
    assert!(s.poll(ms(20)).is_empty());
    assert_eq!(s.poll(ms(33)), vec![h.id()]);
}

#[test]
fn missed_intervals_coalesce_without_drift() {
    let s = TickScheduler::new();
    let h = s.schedule(ms(10), ms(0));
    assert_eq!(s.poll(ms(55)), vec![h.id()]);
    assert_eq!(s.next_due(), Some(ms(60)));
}

#[test]
fn dropping_handle_cancels_synchronously() {
    let s = TickScheduler::new();
    let a = s.schedule(ms(10), ms(0));
    let b = s.schedule(ms(10), ms(0));
    assert_eq!(s.active(), 2);
    let b_id = b.id();
    drop(a);
    assert_eq!(s.active(), 1);
    assert_eq!(s.poll(ms(10)), vec![b_id]);
    drop(b);
    assert!(s.poll(ms(1_000)).is_empty());
    assert_eq!(s.next_due(), None);
}

#[test]
fn handle_outliving_scheduler_is_harmless() {
    let s = TickScheduler::new();
    let h = s.schedule(ms(10), ms(0));
    assert!(h.is_active());
    drop(s);
    assert!(!h.is_active());
    drop(h);
}

#[test]
fn ids_are_unique() {
    let s = TickScheduler::new();
    let a = s.schedule(ms(1), ms(0));
    let b = s.schedule(ms(1), ms(0));
    assert_ne!(a.id(), b.id());
}
