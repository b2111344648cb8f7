//! Blend shape channel identifiers
//!
//! The channel set mirrors the blend shape locations reported by mobile
//! face-tracking hardware (52 facial deformation channels). Each channel
//! carries a normalized coefficient in `0.0..=1.0`.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named facial deformation channel.
///
/// `NotSet` is the placeholder used by unconfigured ranges; it never appears
/// in the live coefficient stream.
#[allow(missing_docs)] // variant names mirror the hardware identifiers
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum BlendShapeLocation {
    BrowDownLeft,
    BrowDownRight,
    BrowInnerUp,
    BrowOuterUpLeft,
    BrowOuterUpRight,
    CheekPuff,
    CheekSquintLeft,
    CheekSquintRight,
    EyeBlinkLeft,
    EyeBlinkRight,
    EyeLookDownLeft,
    EyeLookDownRight,
    EyeLookInLeft,
    EyeLookInRight,
    EyeLookOutLeft,
    EyeLookOutRight,
    EyeLookUpLeft,
    EyeLookUpRight,
    EyeSquintLeft,
    EyeSquintRight,
    EyeWideLeft,
    EyeWideRight,
    JawForward,
    JawLeft,
    JawOpen,
    JawRight,
    MouthClose,
    MouthDimpleLeft,
    MouthDimpleRight,
    MouthFrownLeft,
    MouthFrownRight,
    MouthFunnel,
    MouthLeft,
    MouthLowerDownLeft,
    MouthLowerDownRight,
    MouthPressLeft,
    MouthPressRight,
    MouthPucker,
    MouthRight,
    MouthRollLower,
    MouthRollUpper,
    MouthShrugLower,
    MouthShrugUpper,
    MouthSmileLeft,
    MouthSmileRight,
    MouthStretchLeft,
    MouthStretchRight,
    MouthUpperUpLeft,
    MouthUpperUpRight,
    NoseSneerLeft,
    NoseSneerRight,
    TongueOut,
    #[default]
    NotSet,
}

impl BlendShapeLocation {
    /// All real channels, excluding the `NotSet` placeholder.
    pub const ALL: [BlendShapeLocation; 52] = [
        BlendShapeLocation::BrowDownLeft,
        BlendShapeLocation::BrowDownRight,
        BlendShapeLocation::BrowInnerUp,
        BlendShapeLocation::BrowOuterUpLeft,
        BlendShapeLocation::BrowOuterUpRight,
        BlendShapeLocation::CheekPuff,
        BlendShapeLocation::CheekSquintLeft,
        BlendShapeLocation::CheekSquintRight,
        BlendShapeLocation::EyeBlinkLeft,
        BlendShapeLocation::EyeBlinkRight,
        BlendShapeLocation::EyeLookDownLeft,
        BlendShapeLocation::EyeLookDownRight,
        BlendShapeLocation::EyeLookInLeft,
        BlendShapeLocation::EyeLookInRight,
        BlendShapeLocation::EyeLookOutLeft,
        BlendShapeLocation::EyeLookOutRight,
        BlendShapeLocation::EyeLookUpLeft,
        BlendShapeLocation::EyeLookUpRight,
        BlendShapeLocation::EyeSquintLeft,
        BlendShapeLocation::EyeSquintRight,
        BlendShapeLocation::EyeWideLeft,
        BlendShapeLocation::EyeWideRight,
        BlendShapeLocation::JawForward,
        BlendShapeLocation::JawLeft,
        BlendShapeLocation::JawOpen,
        BlendShapeLocation::JawRight,
        BlendShapeLocation::MouthClose,
        BlendShapeLocation::MouthDimpleLeft,
        BlendShapeLocation::MouthDimpleRight,
        BlendShapeLocation::MouthFrownLeft,
        BlendShapeLocation::MouthFrownRight,
        BlendShapeLocation::MouthFunnel,
        BlendShapeLocation::MouthLeft,
        BlendShapeLocation::MouthLowerDownLeft,
        BlendShapeLocation::MouthLowerDownRight,
        BlendShapeLocation::MouthPressLeft,
        BlendShapeLocation::MouthPressRight,
        BlendShapeLocation::MouthPucker,
        BlendShapeLocation::MouthRight,
        BlendShapeLocation::MouthRollLower,
        BlendShapeLocation::MouthRollUpper,
        BlendShapeLocation::MouthShrugLower,
        BlendShapeLocation::MouthShrugUpper,
        BlendShapeLocation::MouthSmileLeft,
        BlendShapeLocation::MouthSmileRight,
        BlendShapeLocation::MouthStretchLeft,
        BlendShapeLocation::MouthStretchRight,
        BlendShapeLocation::MouthUpperUpLeft,
        BlendShapeLocation::MouthUpperUpRight,
        BlendShapeLocation::NoseSneerLeft,
        BlendShapeLocation::NoseSneerRight,
        BlendShapeLocation::TongueOut,
    ];

    /// Returns the channel name as reported by the tracking hardware.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlendShapeLocation::BrowDownLeft => "BrowDownLeft",
            BlendShapeLocation::BrowDownRight => "BrowDownRight",
            BlendShapeLocation::BrowInnerUp => "BrowInnerUp",
            BlendShapeLocation::BrowOuterUpLeft => "BrowOuterUpLeft",
            BlendShapeLocation::BrowOuterUpRight => "BrowOuterUpRight",
            BlendShapeLocation::CheekPuff => "CheekPuff",
            BlendShapeLocation::CheekSquintLeft => "CheekSquintLeft",
            BlendShapeLocation::CheekSquintRight => "CheekSquintRight",
            BlendShapeLocation::EyeBlinkLeft => "EyeBlinkLeft",
            BlendShapeLocation::EyeBlinkRight => "EyeBlinkRight",
            BlendShapeLocation::EyeLookDownLeft => "EyeLookDownLeft",
            BlendShapeLocation::EyeLookDownRight => "EyeLookDownRight",
            BlendShapeLocation::EyeLookInLeft => "EyeLookInLeft",
            BlendShapeLocation::EyeLookInRight => "EyeLookInRight",
            BlendShapeLocation::EyeLookOutLeft => "EyeLookOutLeft",
            BlendShapeLocation::EyeLookOutRight => "EyeLookOutRight",
            BlendShapeLocation::EyeLookUpLeft => "EyeLookUpLeft",
            BlendShapeLocation::EyeLookUpRight => "EyeLookUpRight",
            BlendShapeLocation::EyeSquintLeft => "EyeSquintLeft",
            BlendShapeLocation::EyeSquintRight => "EyeSquintRight",
            BlendShapeLocation::EyeWideLeft => "EyeWideLeft",
            BlendShapeLocation::EyeWideRight => "EyeWideRight",
            BlendShapeLocation::JawForward => "JawForward",
            BlendShapeLocation::JawLeft => "JawLeft",
            BlendShapeLocation::JawOpen => "JawOpen",
            BlendShapeLocation::JawRight => "JawRight",
            BlendShapeLocation::MouthClose => "MouthClose",
            BlendShapeLocation::MouthDimpleLeft => "MouthDimpleLeft",
            BlendShapeLocation::MouthDimpleRight => "MouthDimpleRight",
            BlendShapeLocation::MouthFrownLeft => "MouthFrownLeft",
            BlendShapeLocation::MouthFrownRight => "MouthFrownRight",
            BlendShapeLocation::MouthFunnel => "MouthFunnel",
            BlendShapeLocation::MouthLeft => "MouthLeft",
            BlendShapeLocation::MouthLowerDownLeft => "MouthLowerDownLeft",
            BlendShapeLocation::MouthLowerDownRight => "MouthLowerDownRight",
            BlendShapeLocation::MouthPressLeft => "MouthPressLeft",
            BlendShapeLocation::MouthPressRight => "MouthPressRight",
            BlendShapeLocation::MouthPucker => "MouthPucker",
            BlendShapeLocation::MouthRight => "MouthRight",
            BlendShapeLocation::MouthRollLower => "MouthRollLower",
            BlendShapeLocation::MouthRollUpper => "MouthRollUpper",
            BlendShapeLocation::MouthShrugLower => "MouthShrugLower",
            BlendShapeLocation::MouthShrugUpper => "MouthShrugUpper",
            BlendShapeLocation::MouthSmileLeft => "MouthSmileLeft",
            BlendShapeLocation::MouthSmileRight => "MouthSmileRight",
            BlendShapeLocation::MouthStretchLeft => "MouthStretchLeft",
            BlendShapeLocation::MouthStretchRight => "MouthStretchRight",
            BlendShapeLocation::MouthUpperUpLeft => "MouthUpperUpLeft",
            BlendShapeLocation::MouthUpperUpRight => "MouthUpperUpRight",
            BlendShapeLocation::NoseSneerLeft => "NoseSneerLeft",
            BlendShapeLocation::NoseSneerRight => "NoseSneerRight",
            BlendShapeLocation::TongueOut => "TongueOut",
            BlendShapeLocation::NotSet => "NotSet",
        }
    }

    /// True for every channel except the `NotSet` placeholder.
    pub fn is_set(&self) -> bool {
        !matches!(self, BlendShapeLocation::NotSet)
    }
}

impl fmt::Display for BlendShapeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendShapeLocation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "NotSet" {
            return Ok(BlendShapeLocation::NotSet);
        }
        BlendShapeLocation::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str() == s)
            .ok_or_else(|| CoreError::UnknownBlendShape(s.to_string()))
    }
}
