//! Session duration parsing and normalization.

use std::ops::Add;

use once_cell::sync::Lazy;
use regex::Regex;

/// Seconds in an hour
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Seconds in a minute
pub const SECONDS_PER_MINUTE: u64 = 60;

static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)h").expect("valid pattern"));
static MINUTES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)m").expect("valid pattern"));
static SECONDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)s").expect("valid pattern"));

/// An hours/minutes/seconds triple. Minutes and seconds may exceed 59 until
/// [`TimeParts::normalize`] is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeParts {
    pub const ZERO: TimeParts = TimeParts {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Extract hours, minutes, and seconds from a free-form duration string
    /// such as `"1h 30m"`, `"45m"`, or `"15m 20s"`.
    ///
    /// Each component is matched independently on its first occurrence, so
    /// ordering and stray characters do not matter. A missing or non-textual
    /// duration yields the zero triple rather than an error; partial exports
    /// must not abort the run.
    pub fn parse(raw: Option<&str>) -> TimeParts {
        let Some(raw) = raw else {
            return TimeParts::ZERO;
        };

        TimeParts {
            hours: component(&HOURS_RE, raw),
            minutes: component(&MINUTES_RE, raw),
            seconds: component(&SECONDS_RE, raw),
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }

    /// Carry overflow upward so that minutes and seconds land in [0, 60).
    /// Preserves total seconds and is idempotent.
    pub fn normalize(self) -> TimeParts {
        let total = self.total_seconds();
        TimeParts {
            hours: total / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }
}

impl Add for TimeParts {
    type Output = TimeParts;

    fn add(self, other: TimeParts) -> TimeParts {
        TimeParts {
            hours: self.hours + other.hours,
            minutes: self.minutes + other.minutes,
            seconds: self.seconds + other.seconds,
        }
    }
}

fn component(pattern: &Regex, raw: &str) -> u64 {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(0)
}
