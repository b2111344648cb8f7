//! FaceFlow Control - Detection Consumers
//!
//! This crate wires detection reports from `faceflow-core` to the host
//! application:
//! - **Actions**: named callback registry with cooperative delayed invocation
//! - **Status**: per-expression detection status routing and readout
//! - **Manager**: central consumer combining both, with channel intake
//!
//! ## Quick Start
//!
//! ```rust
//! use faceflow_control::DetectionControl;
//!
//! let mut control = DetectionControl::new();
//! control
//!     .registry_mut()
//!     .register("on_smile", || Ok(()));
//! let reports = control.subscribe();
//! // hand `reports` to the detector side, then per frame:
//! control.pump();
//! control.tick(1.0 / 60.0);
//! ```
//!
//! ## Modules
//!
//! - [`actions`] - Action registry and delayed invocation
//! - [`status`] - Status sinks, board and scan indicator
//! - [`manager`] - Central detection consumer
//! - [`error`] - Error types

// Core modules
/// Action registry and delayed invocation
pub mod actions;
/// Error types
pub mod error;
/// Central detection consumer
pub mod manager;
/// Status sinks and readout state
pub mod status;

pub use actions::{ActionFn, ActionRegistry};
pub use error::{ControlError, Result};
pub use manager::DetectionControl;
pub use status::{ScanMaterialToggle, StatusBoard, StatusSink, SCANNING_STATUS};
