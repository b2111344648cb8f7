//! Detection status routing
//!
//! The detector reports per-expression statuses; consumers implement
//! [`StatusSink`] to receive them. [`StatusBoard`] is the built-in sink
//! that reproduces the original status readout.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Status line shown while no expression is detected.
pub const SCANNING_STATUS: &str = "FACE EXPRESSION SCANNING...";

/// Receiver of per-expression detection statuses.
///
/// Injected explicitly into [`DetectionControl`](crate::DetectionControl)
/// instead of being reached through a global.
pub trait StatusSink {
    /// Called once per expression per evaluation pass.
    fn update_detection_status(&mut self, expression: &str, detected: bool);
}

/// Tracks per-expression detection flags and a display status line.
///
/// The status line reflects the most recently reported expression, so with
/// several configured expressions the last one of a pass wins.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    detected: HashMap<String, bool>,
    status_line: Option<String>,
}

impl StatusBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display status line.
    pub fn status_line(&self) -> &str {
        self.status_line.as_deref().unwrap_or(SCANNING_STATUS)
    }

    /// Whether an expression reported detected on its latest status.
    pub fn is_detected(&self, expression: &str) -> bool {
        self.detected.get(expression).copied().unwrap_or(false)
    }

    /// Number of expressions currently reporting detected.
    pub fn detected_count(&self) -> usize {
        self.detected.values().filter(|detected| **detected).count()
    }

    /// Whether any expression currently reports detected.
    pub fn any_detected(&self) -> bool {
        self.detected.values().any(|detected| *detected)
    }

    /// Forget all reported statuses.
    pub fn clear(&mut self) {
        self.detected.clear();
        self.status_line = None;
    }
}

impl StatusSink for StatusBoard {
    fn update_detection_status(&mut self, expression: &str, detected: bool) {
        self.detected.insert(expression.to_string(), detected);
        self.status_line = Some(if detected {
            format!("{expression} EXPRESSION DETECTED")
        } else {
            SCANNING_STATUS.to_string()
        });
    }
}

/// Material identifiers for the face scan indicator.
///
/// Selects between an active and an idle material by scanning state; the
/// host resolves the identifiers against its own asset store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanMaterialToggle {
    /// Material shown while scanning is active.
    pub active_material: String,
    /// Material shown otherwise.
    pub idle_material: String,
}

impl ScanMaterialToggle {
    /// Create a toggle from the two material identifiers.
    pub fn new(active: impl Into<String>, idle: impl Into<String>) -> Self {
        Self {
            active_material: active.into(),
            idle_material: idle.into(),
        }
    }

    /// The material for the given scanning state.
    pub fn material_for(&self, scanning: bool) -> &str {
        if scanning {
            &self.active_material
        } else {
            &self.idle_material
        }
    }
}
