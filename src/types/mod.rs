// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod event;
pub mod effect;
pub mod time;

pub use event::{CallerWidth, ClockDomain, EventRecord, FramingMode, IntoFramingMode};
pub use effect::{EffectDescriptor, EffectKind, SampleRef, Waveform};
pub use time::{TimeVal, Timestamp};
