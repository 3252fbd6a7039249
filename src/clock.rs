// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Clock sources for outbound timestamps.
//!
//! Readings are taken at translation time and never cached. Where a
//! deployment has no boot-inclusive clock, `BootIncludingSuspend` reads the
//! wall clock instead; the choice is fixed per build target.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::event::ClockDomain;
use crate::types::time::Timestamp;

pub trait Clock {
    fn now(&self, domain: ClockDomain) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self, domain: ClockDomain) -> Timestamp {
        (**self).now(domain)
    }
}

/// Host clocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self, domain: ClockDomain) -> Timestamp {
        match domain {
            ClockDomain::Real => real_time(),
            ClockDomain::Monotonic => monotonic_time(),
            ClockDomain::BootIncludingSuspend => boot_time(),
        }
    }
}

/// Samples `domain` on `clock`.
pub fn resolve_clock<C: Clock + ?Sized>(clock: &C, domain: ClockDomain) -> Timestamp {
    clock.now(domain)
}

fn real_time() -> Timestamp {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => Timestamp::from_parts(d.as_secs() as i64, i64::from(d.subsec_nanos())),
        Err(before) => {
            let d = before.duration();
            Timestamp::from_parts(-(d.as_secs() as i64), -i64::from(d.subsec_nanos()))
        }
    }
}

#[cfg(unix)]
fn clock_gettime(id: libc::clockid_t) -> Option<Timestamp> {
    // SAFETY: timespec is plain data; all-zero is a valid value.
    let mut ts: libc::timespec = unsafe { core::mem::zeroed() };
    // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
    let rc = unsafe { libc::clock_gettime(id, &mut ts) };
    if rc != 0 {
        return None;
    }
    Some(Timestamp::from_parts(ts.tv_sec as i64, ts.tv_nsec as i64))
}

#[cfg(unix)]
fn monotonic_time() -> Timestamp {
    clock_gettime(libc::CLOCK_MONOTONIC).unwrap_or_else(process_monotonic)
}

#[cfg(not(unix))]
fn monotonic_time() -> Timestamp {
    process_monotonic()
}

/// Monotonic reading relative to the first call in this process.
fn process_monotonic() -> Timestamp {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ANCHOR: OnceLock<Instant> = OnceLock::new();
    let elapsed = ANCHOR.get_or_init(Instant::now).elapsed();
    Timestamp::from_parts(elapsed.as_secs() as i64, i64::from(elapsed.subsec_nanos()))
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn boot_time() -> Timestamp {
    clock_gettime(libc::CLOCK_BOOTTIME).unwrap_or_else(real_time)
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn boot_time() -> Timestamp {
    real_time()
}
