// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants and the per-deployment compat switch.

use serde::{Deserialize, Serialize};

/// Interface numbers used by the device layer for each framing.
pub const EV_IF_LEGACY: u32 = 0;
pub const EV_IF_RAW: u32 = 1;
pub const EV_IF_COMPOSITE: u32 = 2;

/// Clock ids used by the device layer.
pub const EV_CLK_REAL: u32 = 0;
pub const EV_CLK_MONO: u32 = 1;
pub const EV_CLK_BOOT: u32 = 2;

/// Force-feedback effect types.
pub const FF_RUMBLE: u16 = 0x50;
pub const FF_PERIODIC: u16 = 0x51;
pub const FF_CONSTANT: u16 = 0x52;
pub const FF_SPRING: u16 = 0x53;
pub const FF_FRICTION: u16 = 0x54;
pub const FF_DAMPER: u16 = 0x55;
pub const FF_INERTIA: u16 = 0x56;
pub const FF_RAMP: u16 = 0x57;

/// Periodic waveforms.
pub const FF_SQUARE: u16 = 0x58;
pub const FF_TRIANGLE: u16 = 0x59;
pub const FF_SINE: u16 = 0x5a;
pub const FF_SAW_UP: u16 = 0x5b;
pub const FF_SAW_DOWN: u16 = 0x5c;
pub const FF_CUSTOM: u16 = 0x5d;

pub const EFAULT: i32 = 14;
pub const EINVAL: i32 = 22;

/// Compat handling, resolved once per deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatConfig {
    /// Narrow layouts are honoured for compat callers. Ignored when the
    /// crate is built without the `compat` feature.
    pub compat_support: bool,
    /// Compat callers already use 64-bit time, so legacy events keep the
    /// native layout. Effect layout is unaffected.
    pub compat_64bit_time: bool,
}

impl CompatConfig {
    /// Every caller is treated as native.
    pub fn native_only() -> Self {
        Self {
            compat_support: false,
            compat_64bit_time: false,
        }
    }
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            compat_support: cfg!(feature = "compat"),
            compat_64bit_time: false,
        }
    }
}
