// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical event record and the selectors that shape its wire form.

use serde::{Deserialize, Serialize};

use crate::config::{EV_CLK_BOOT, EV_CLK_MONO, EV_IF_COMPOSITE, EV_IF_LEGACY, EV_IF_RAW};
use crate::error::{Fault, Result};

/// Width-independent event. Fields are carried verbatim, never interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventRecord {
    pub ev_type: u16,
    pub code: u16,
    pub value: i32,
}

impl EventRecord {
    pub fn new(ev_type: u16, code: u16, value: i32) -> Self {
        Self { ev_type, code, value }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum FramingMode {
    /// Record with an inline timestamp.
    Legacy = EV_IF_LEGACY,
    /// Record only.
    Raw = EV_IF_RAW,
    /// Record followed by an 8-byte nanosecond timestamp element.
    Composite = EV_IF_COMPOSITE,
}

impl FramingMode {
    pub fn from_raw(v: u32) -> Option<Self> {
        match v {
            EV_IF_LEGACY => Some(FramingMode::Legacy),
            EV_IF_RAW => Some(FramingMode::Raw),
            EV_IF_COMPOSITE => Some(FramingMode::Composite),
            _ => None,
        }
    }
}

impl TryFrom<u32> for FramingMode {
    type Error = Fault;

    fn try_from(v: u32) -> Result<Self> {
        FramingMode::from_raw(v).ok_or(Fault::UnsupportedMode(v))
    }
}

/// Anything that names a framing mode: the typed enum, or the raw interface
/// number a device layer keeps per descriptor.
pub trait IntoFramingMode {
    fn into_framing_mode(self) -> Result<FramingMode>;
}

impl IntoFramingMode for FramingMode {
    fn into_framing_mode(self) -> Result<FramingMode> {
        Ok(self)
    }
}

impl IntoFramingMode for u32 {
    fn into_framing_mode(self) -> Result<FramingMode> {
        FramingMode::try_from(self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallerWidth {
    #[default]
    Native,
    /// 32-bit caller on a 64-bit host.
    Compat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockDomain {
    /// Wall clock.
    #[default]
    Real,
    Monotonic,
    /// Monotonic, including time spent suspended.
    BootIncludingSuspend,
}

impl ClockDomain {
    /// Unknown clock ids resolve to the wall clock.
    pub fn from_raw(v: u32) -> Self {
        match v {
            EV_CLK_MONO => ClockDomain::Monotonic,
            EV_CLK_BOOT => ClockDomain::BootIncludingSuspend,
            _ => ClockDomain::Real,
        }
    }
}
