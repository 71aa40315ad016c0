// tests/support/mocks/time.rs
use articles_core::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp shared by every test.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock that only moves when a test advances it.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::at(fixed_now())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
