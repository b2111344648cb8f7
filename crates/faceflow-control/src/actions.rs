//! Action registry and delayed invocation
//!
//! Detection reports carry [`ActionBinding`]s by name; the host registers
//! the matching callbacks here. Delays are served cooperatively from the
//! host's update cadence via [`ActionRegistry::tick`] — no threads, no
//! blocking.

use crate::error::{ControlError, Result};
use faceflow_core::ActionBinding;
use std::collections::HashMap;
use tracing::warn;

/// Callback signature for registered actions.
pub type ActionFn = Box<dyn FnMut() -> anyhow::Result<()> + Send>;

struct PendingAction {
    method: String,
    remaining: f32,
}

/// Named callback registry with cooperative delayed invocation.
///
/// Unknown method names and failing callbacks are absorbed with a warning
/// on the dispatch path; only the explicit [`run`](Self::run) API surfaces
/// them as errors.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, ActionFn>,
    pending: Vec<PendingAction>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        self.actions.insert(name.into(), Box::new(callback));
    }

    /// Remove a callback. Returns whether one was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.actions.remove(name).is_some()
    }

    /// Whether a callback is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Queue a binding for invocation after its delay.
    ///
    /// Inert bindings (empty method name) are ignored. The method name is
    /// not validated here; resolution happens when the delay expires.
    pub fn fire(&mut self, binding: &ActionBinding) {
        if binding.is_inert() {
            return;
        }
        self.pending.push(PendingAction {
            method: binding.method.clone(),
            remaining: binding.delay,
        });
    }

    /// Number of queued invocations whose delay has not expired yet.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance pending delays by `dt` seconds and invoke every due
    /// callback. Returns the number of callbacks invoked.
    ///
    /// A zero-delay binding fired during this frame runs on the next tick,
    /// matching the one-frame latency of the original dispatch.
    pub fn tick(&mut self, dt: f32) -> usize {
        let mut due = Vec::new();
        self.pending.retain_mut(|pending| {
            pending.remaining -= dt;
            if pending.remaining <= 0.0 {
                due.push(std::mem::take(&mut pending.method));
                false
            } else {
                true
            }
        });

        let mut invoked = 0;
        for method in due {
            match self.actions.get_mut(&method) {
                Some(callback) => {
                    invoked += 1;
                    if let Err(err) = callback() {
                        warn!("action '{method}' failed: {err:#}");
                    }
                }
                None => warn!("no action registered for '{method}'"),
            }
        }
        invoked
    }

    /// Invoke a callback immediately, bypassing the queue.
    pub fn run(&mut self, name: &str) -> Result<()> {
        let callback = self
            .actions
            .get_mut(name)
            .ok_or_else(|| ControlError::ActionNotFound(name.to_string()))?;
        callback().map_err(ControlError::ActionFailed)
    }
}
