//! Central detection consumer
//!
//! [`DetectionControl`] owns the action registry and status sinks and turns
//! [`DetectionReport`]s into callback invocations and status updates. It can
//! consume reports directly or through a channel, which keeps the detector
//! side free of any consumer types.

use crate::actions::ActionRegistry;
use crate::status::{StatusBoard, StatusSink};
use crossbeam_channel::{unbounded, Receiver, Sender};
use faceflow_core::DetectionReport;

/// Routes detection reports to actions and status sinks.
#[derive(Default)]
pub struct DetectionControl {
    registry: ActionRegistry,
    board: StatusBoard,
    extra_sinks: Vec<Box<dyn StatusSink + Send>>,
    reports: Option<Receiver<DetectionReport>>,
}

impl DetectionControl {
    /// Create a control with an empty registry and a fresh status board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a report channel; the returned sender goes to the detector side.
    ///
    /// Reports sent into it are consumed on the next [`pump`](Self::pump).
    /// Subscribing again replaces the previous channel.
    pub fn subscribe(&mut self) -> Sender<DetectionReport> {
        let (tx, rx) = unbounded();
        self.reports = Some(rx);
        tx
    }

    /// Drain the report channel and dispatch everything received.
    /// Returns the number of reports dispatched.
    pub fn pump(&mut self) -> usize {
        let Some(receiver) = &self.reports else {
            return 0;
        };
        let drained: Vec<DetectionReport> = receiver.try_iter().collect();
        let count = drained.len();
        for report in &drained {
            self.dispatch(report);
        }
        count
    }

    /// Forward one report: statuses to the board and sinks, actions to the
    /// registry queue.
    pub fn dispatch(&mut self, report: &DetectionReport) {
        for status in &report.statuses {
            self.board
                .update_detection_status(&status.expression, status.detected);
            for sink in &mut self.extra_sinks {
                sink.update_detection_status(&status.expression, status.detected);
            }
        }

        for action in &report.actions {
            self.registry.fire(action);
        }
    }

    /// Advance queued action delays. Returns the number of callbacks invoked.
    pub fn tick(&mut self, dt: f32) -> usize {
        self.registry.tick(dt)
    }

    /// Attach an additional status sink.
    pub fn add_status_sink(&mut self, sink: Box<dyn StatusSink + Send>) {
        self.extra_sinks.push(sink);
    }

    /// The action registry.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Mutable access to the action registry.
    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    /// The built-in status board.
    pub fn board(&self) -> &StatusBoard {
        &self.board
    }
}
