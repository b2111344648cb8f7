//! Blend shape range conditions
//!
//! A range is the unit condition of an expression: one channel, a closed
//! coefficient interval, and an optional bound action.

use crate::action::ActionBinding;
use crate::blend_shape::BlendShapeLocation;
use serde::{Deserialize, Serialize};

/// One channel condition inside an expression.
///
/// The configured interval may be sloppy (negative bounds, inverted order);
/// detection always runs against [`effective_bounds`](Self::effective_bounds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendShapeRange {
    /// The channel this condition reads.
    pub location: BlendShapeLocation,
    /// Configured lower bound.
    pub low_bound: f32,
    /// Configured upper bound.
    pub upper_bound: f32,
    /// Number of evaluation ticks this range has matched so far.
    #[serde(default)]
    pub detection_count: u32,
    /// Action fired on every tick the live value stays in range.
    #[serde(default)]
    pub action: Option<ActionBinding>,
}

impl BlendShapeRange {
    /// Create a range condition for `location` over `[low, upper]`.
    pub fn new(location: BlendShapeLocation, low: f32, upper: f32) -> Self {
        Self {
            location,
            low_bound: low,
            upper_bound: upper,
            detection_count: 0,
            action: None,
        }
    }

    /// Attach a bound action.
    pub fn with_action(mut self, action: ActionBinding) -> Self {
        self.action = Some(action);
        self
    }

    /// The interval actually used for detection.
    ///
    /// The lower bound is clamped to zero and the upper bound is raised to
    /// the clamped lower bound, so the result is always a valid closed
    /// interval inside the coefficient domain.
    pub fn effective_bounds(&self) -> (f32, f32) {
        let low = self.low_bound.max(0.0);
        let high = self.upper_bound.max(low);
        (low, high)
    }

    /// Closed-interval membership test against the effective bounds.
    pub fn contains(&self, value: f32) -> bool {
        let (low, high) = self.effective_bounds();
        value >= low && value <= high
    }
}
