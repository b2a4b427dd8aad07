// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp used by every test clock.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// `fixed_now()` shifted by whole minutes, for ordering fixtures.
pub fn minutes_after(minutes: i64) -> DateTime<Utc> {
    fixed_now() + Duration::minutes(minutes)
}

#[derive(Clone, Default)]
pub struct FixedClock;

impl shelf::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
