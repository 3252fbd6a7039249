// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Force-feedback effect descriptor.
//!
//! The wire form is a header followed by a union selected by the effect
//! type. Here the union is an enum, so a payload field can only be read
//! through the variant that owns it.

use serde::{Deserialize, Serialize};

use crate::config::{
    FF_CONSTANT, FF_CUSTOM, FF_DAMPER, FF_FRICTION, FF_INERTIA, FF_PERIODIC, FF_RAMP, FF_RUMBLE,
    FF_SAW_DOWN, FF_SAW_UP, FF_SINE, FF_SPRING, FF_SQUARE, FF_TRIANGLE,
};

/// Bytes of union payload in the native layout. Narrow effects fill the
/// first 28 and leave the rest zero.
pub const OPAQUE_PAYLOAD_SIZE: usize = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub button: u16,
    pub interval: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub length: u16,
    pub delay: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub attack_length: u16,
    pub attack_level: u16,
    pub fade_length: u16,
    pub fade_level: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantEffect {
    pub level: i16,
    pub envelope: Envelope,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampEffect {
    pub start_level: i16,
    pub end_level: i16,
    pub envelope: Envelope,
}

/// One axis of a condition effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEffect {
    pub right_saturation: u16,
    pub left_saturation: u16,
    pub right_coeff: i16,
    pub left_coeff: i16,
    pub deadband: u16,
    pub center: i16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RumbleEffect {
    pub strong_magnitude: u16,
    pub weak_magnitude: u16,
}

/// Caller address of custom waveform samples, at native width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SampleRef(pub u64);

impl SampleRef {
    /// Narrow references are zero-extended.
    pub fn widen(narrow: u32) -> Self {
        SampleRef(u64::from(narrow))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Waveform {
    Square,
    Triangle,
    Sine,
    SawUp,
    SawDown,
    /// Samples supplied by the caller through a [`SampleRef`].
    Custom,
    Unknown(u16),
}

impl Waveform {
    pub fn from_raw(v: u16) -> Self {
        match v {
            FF_SQUARE => Waveform::Square,
            FF_TRIANGLE => Waveform::Triangle,
            FF_SINE => Waveform::Sine,
            FF_SAW_UP => Waveform::SawUp,
            FF_SAW_DOWN => Waveform::SawDown,
            FF_CUSTOM => Waveform::Custom,
            other => Waveform::Unknown(other),
        }
    }

    pub fn raw(&self) -> u16 {
        match self {
            Waveform::Square => FF_SQUARE,
            Waveform::Triangle => FF_TRIANGLE,
            Waveform::Sine => FF_SINE,
            Waveform::SawUp => FF_SAW_UP,
            Waveform::SawDown => FF_SAW_DOWN,
            Waveform::Custom => FF_CUSTOM,
            Waveform::Unknown(v) => *v,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicEffect {
    pub waveform: Waveform,
    pub period: u16,
    pub magnitude: i16,
    pub offset: i16,
    pub phase: u16,
    pub envelope: Envelope,
    /// Number of custom samples. Carried verbatim for every waveform.
    pub custom_len: u32,
    /// Only ever `Some` for [`Waveform::Custom`].
    pub custom_data: Option<SampleRef>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionKind {
    Spring,
    Friction,
    Damper,
    Inertia,
}

impl ConditionKind {
    pub fn from_raw(v: u16) -> Option<Self> {
        match v {
            FF_SPRING => Some(ConditionKind::Spring),
            FF_FRICTION => Some(ConditionKind::Friction),
            FF_DAMPER => Some(ConditionKind::Damper),
            FF_INERTIA => Some(ConditionKind::Inertia),
            _ => None,
        }
    }

    pub fn raw(&self) -> u16 {
        match self {
            ConditionKind::Spring => FF_SPRING,
            ConditionKind::Friction => FF_FRICTION,
            ConditionKind::Damper => FF_DAMPER,
            ConditionKind::Inertia => FF_INERTIA,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Rumble(RumbleEffect),
    Periodic(PeriodicEffect),
    Constant(ConstantEffect),
    /// One entry per axis.
    Condition(ConditionKind, [ConditionEffect; 2]),
    Ramp(RampEffect),
    /// Effect type this crate does not know. The payload prefix is identical
    /// in both layouts and is kept as-is.
    Opaque {
        effect_type: u16,
        payload: [u8; OPAQUE_PAYLOAD_SIZE],
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    pub id: i16,
    pub direction: u16,
    pub trigger: Trigger,
    pub replay: Replay,
    pub kind: EffectKind,
}

impl EffectDescriptor {
    /// Wire tag of this descriptor.
    pub fn effect_type(&self) -> u16 {
        match &self.kind {
            EffectKind::Rumble(_) => FF_RUMBLE,
            EffectKind::Periodic(_) => FF_PERIODIC,
            EffectKind::Constant(_) => FF_CONSTANT,
            EffectKind::Condition(kind, _) => kind.raw(),
            EffectKind::Ramp(_) => FF_RAMP,
            EffectKind::Opaque { effect_type, .. } => *effect_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_raw_roundtrip() {
        for raw in 0x58..=0x5d {
            assert_eq!(Waveform::from_raw(raw).raw(), raw);
        }
        assert_eq!(Waveform::from_raw(0x7f), Waveform::Unknown(0x7f));
        assert_eq!(Waveform::from_raw(FF_CUSTOM), Waveform::Custom);
    }

    #[test]
    fn test_widen_zero_extends() {
        assert_eq!(SampleRef::widen(0xffff_fff0), SampleRef(0x0000_0000_ffff_fff0));
    }

    #[test]
    fn test_condition_kinds_keep_their_tag() {
        for raw in FF_SPRING..=FF_INERTIA {
            let kind = ConditionKind::from_raw(raw).unwrap();
            let desc = EffectDescriptor {
                id: -1,
                direction: 0,
                trigger: Trigger::default(),
                replay: Replay::default(),
                kind: EffectKind::Condition(kind, [ConditionEffect::default(); 2]),
            };
            assert_eq!(desc.effect_type(), raw);
        }
        assert_eq!(ConditionKind::from_raw(FF_RAMP), None);
    }
}
