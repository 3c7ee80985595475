//! Wall-clock access for the footer.
//!
//! The footer shows the current year and a local timestamp, read fresh on
//! every render. Reads go through [`Clock`] so tests can pin the time.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real clock. On wasm32 chrono reads it from `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock stopped at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Build from local calendar fields. Returns `None` for times that do not
    /// exist in the local zone (DST gaps) or out-of-range fields.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .earliest()
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// en-US style local timestamp, e.g. `3/7/2026, 4:05:09 PM`.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Time-derived footer values, captured once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterStamp {
    pub year: i32,
    pub timestamp: String,
}

impl FooterStamp {
    pub fn from_clock(clock: &impl Clock) -> Self {
        let now = clock.now();
        Self {
            year: now.year(),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn now() -> Self {
        Self::from_clock(&SystemClock)
    }
}
