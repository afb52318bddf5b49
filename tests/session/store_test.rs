//! `SessionStore` bookkeeping.

use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Duration, Utc};
use quickadd::session::{SessionError, SessionStore};

use crate::support::wednesday_noon;

fn after(secs: i64) -> DateTime<Utc> {
    let start = wednesday_noon().and_utc();
    start.checked_add_signed(Duration::seconds(secs)).unwrap_or(start)
}

#[test]
fn expiry_is_inclusive_of_timeout() {
    let store = SessionStore::new(60);
    let id = store.start(after(0));

    assert!(store.check(&id, after(59)).is_ok());
    match store.check(&id, after(60)) {
        Err(SessionError::Expired { age_secs, .. }) => assert_eq!(age_secs, 60),
        other => panic!("expected expiry, got {other:?}"),
    }
}

#[test]
fn purge_only_drops_expired() {
    let store = SessionStore::new(60);
    let old = store.start(after(0));
    let fresh = store.start(after(45));

    assert_eq!(store.purge_expired(after(70)), 1);
    assert!(matches!(
        store.check(&old, after(70)),
        Err(SessionError::Unknown(_))
    ));
    assert!(store.check(&fresh, after(70)).is_ok());
}

#[test]
fn concurrent_starts_are_all_tracked() {
    let store = Arc::new(SessionStore::default());
    let now = wednesday_noon().and_utc();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.start(now))
        })
        .collect();
    for handle in handles {
        if handle.join().is_err() {
            panic!("session thread panicked");
        }
    }
    assert_eq!(store.len(), 8);
}
