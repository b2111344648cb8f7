//! Expression Detection Example
//!
//! This example demonstrates the basics of expression detection:
//! 1. Building an expression library
//! 2. Feeding coefficients from a (simulated) face-tracking source
//! 3. Driving the detector from a frame loop
//! 4. Consuming reports through the control layer

use faceflow_control::DetectionControl;
use faceflow_core::{
    ActionBinding, BlendShapeLocation, BlendShapeRange, CoefficientStore, DetectorConfig,
    ExpressionDefinition, ExpressionDetector, ExpressionLibrary,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut library = ExpressionLibrary::new();
    library.add(
        ExpressionDefinition::new("Smile")
            .with_range(
                BlendShapeRange::new(BlendShapeLocation::MouthSmileLeft, 0.5, 1.0)
                    .with_action(ActionBinding::new("left_corner")),
            )
            .with_range(BlendShapeRange::new(
                BlendShapeLocation::MouthSmileRight,
                0.5,
                1.0,
            )),
    );

    let mut store = CoefficientStore::for_library(&library);
    let mut detector = ExpressionDetector::new(
        library,
        DetectorConfig {
            detection_rate: 0.25,
            ..Default::default()
        },
    );

    let mut control = DetectionControl::new();
    control
        .registry_mut()
        .register("left_corner", || {
            info!("left mouth corner raised");
            Ok(())
        });
    let reports = control.subscribe();

    // Simulate three seconds at 60 fps: the smile ramps up over the first
    // two seconds, then relaxes.
    let dt = 1.0 / 60.0;
    for frame in 0..180 {
        let t = frame as f32 * dt;
        let intensity = if t < 2.0 { (t / 2.0).min(1.0) } else { 1.5 - t / 2.0 };
        store.apply([
            (BlendShapeLocation::MouthSmileLeft, intensity),
            (BlendShapeLocation::MouthSmileRight, intensity * 0.9),
        ]);

        if let Some(report) = detector.update(&store, dt) {
            reports.send(report).expect("control dropped its receiver");
        }
        control.pump();
        control.tick(dt);
    }

    info!(
        status = control.board().status_line(),
        hot = detector.hot_count(),
        "simulation finished"
    );
}
