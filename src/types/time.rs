// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Clock readings. Never stored in a canonical record.

const NSEC_PER_SEC: i64 = 1_000_000_000;
const NSEC_PER_USEC: i64 = 1_000;

/// Signed nanosecond reading from one clock domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Timestamp(pub i64);

/// Seconds + microseconds, as carried by the legacy framing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeVal {
    pub sec: i64,
    pub usec: i64,
}

impl Timestamp {
    pub fn from_nanos(nanos: i64) -> Self {
        Timestamp(nanos)
    }

    /// Saturates instead of wrapping for readings outside the i64 range.
    pub fn from_parts(sec: i64, nsec: i64) -> Self {
        Timestamp(sec.saturating_mul(NSEC_PER_SEC).saturating_add(nsec))
    }

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    /// `usec` is always in `0..1_000_000`, also for readings before zero.
    pub fn to_timeval(&self) -> TimeVal {
        TimeVal {
            sec: self.0.div_euclid(NSEC_PER_SEC),
            usec: self.0.rem_euclid(NSEC_PER_SEC) / NSEC_PER_USEC,
        }
    }
}
