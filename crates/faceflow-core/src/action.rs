//! Callback action bindings
//!
//! Ranges and expressions can bind a named action that the host application
//! registers with the control layer. The binding itself is pure data: a
//! registry key plus an invocation delay.

use serde::{Deserialize, Serialize};

/// A bound callback action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBinding {
    /// Registry key of the callback to invoke.
    pub method: String,
    /// Delay in seconds between the detection tick and the invocation.
    #[serde(default)]
    pub delay: f32,
}

impl ActionBinding {
    /// Create a binding that fires immediately on its detection tick.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            delay: 0.0,
        }
    }

    /// Create a binding with an invocation delay in seconds.
    pub fn with_delay(method: impl Into<String>, delay: f32) -> Self {
        Self {
            method: method.into(),
            delay,
        }
    }

    /// A binding with an empty method name is inert and is never dispatched.
    pub fn is_inert(&self) -> bool {
        self.method.is_empty()
    }
}
