//! Time source used wherever "now" or "today" matters.
//!
//! Age cutoffs are computed against [`Clock::today`], evaluated on every
//! call, so a long-running process never serves a stale date.

use crate::Interface;
use chrono::{DateTime, NaiveDate, Utc};
use shaku::Component;

/// Source of the current instant and calendar date.
pub trait Clock: Interface + Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock backed by the system time.
#[derive(Component, Debug, Default, Clone, Copy)]
#[shaku(interface = Clock)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for tests and replays.
#[derive(Component, Debug, Default, Clone, Copy)]
#[shaku(interface = Clock)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Creates a clock reporting midnight UTC of `date`.
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::on(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().date_naive(), date);
    }

    #[test]
    fn test_system_clock_is_close_to_now() {
        let clock = SystemClock::default();
        let delta = Utc::now() - clock.now();
        assert!(delta.num_seconds().abs() < 5);
    }
}
