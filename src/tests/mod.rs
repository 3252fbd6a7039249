pub mod inbound_tests;
pub mod concurrency_tests;

use std::cell::Cell;

use crate::boundary::{Boundary, UserAddr, UserMemory};
use crate::clock::Clock;
use crate::error::{Fault, Result};
use crate::types::event::{CallerWidth, ClockDomain};
use crate::types::time::Timestamp;

pub const BASE: UserAddr = UserAddr(0x7f00_0000);

/// Returns `start`, then advances by `step` on every reading.
pub struct StepClock {
    next: Cell<i64>,
    step: i64,
}

impl StepClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self { next: Cell::new(start), step }
    }
}

impl Clock for StepClock {
    fn now(&self, _domain: ClockDomain) -> Timestamp {
        let now = self.next.get();
        self.next.set(now + self.step);
        Timestamp::from_nanos(now)
    }
}

/// Fixed reading per domain, to see which one was sampled.
pub struct DomainClock;

impl DomainClock {
    pub fn reading(domain: ClockDomain) -> Timestamp {
        match domain {
            ClockDomain::Real => Timestamp::from_parts(1_700_000_000, 1_000),
            ClockDomain::Monotonic => Timestamp::from_parts(42, 2_000),
            ClockDomain::BootIncludingSuspend => Timestamp::from_parts(4_242, 3_000),
        }
    }
}

impl Clock for DomainClock {
    fn now(&self, domain: ClockDomain) -> Timestamp {
        Self::reading(domain)
    }
}

/// Memory whose reads always fault.
pub struct Unmapped {
    pub width: CallerWidth,
}

impl Boundary for Unmapped {
    fn read(&self, _addr: UserAddr, _dst: &mut [u8]) -> Result<()> {
        Err(Fault::Unreachable)
    }

    fn write(&mut self, _addr: UserAddr, _src: &[u8]) -> Result<()> {
        Err(Fault::Unreachable)
    }

    fn caller_width(&self) -> CallerWidth {
        self.width
    }
}

/// `len` bytes at [`BASE`], filled with `fill`.
pub fn memory(len: usize, width: CallerWidth, fill: u8) -> UserMemory {
    UserMemory::from_bytes(BASE, vec![fill; len], width)
}
