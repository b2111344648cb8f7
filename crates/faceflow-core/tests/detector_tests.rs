//! tests/detector_tests.rs
use faceflow_core::{
    ActionBinding, BlendShapeLocation, BlendShapeRange, CoefficientStore, DetectorConfig,
    ExpressionDefinition, ExpressionDetector, ExpressionLibrary,
};

fn smile_library() -> ExpressionLibrary {
    let mut library = ExpressionLibrary::new();
    library.add(
        ExpressionDefinition::new("Smile")
            .with_range(
                BlendShapeRange::new(BlendShapeLocation::MouthSmileLeft, 0.5, 1.0)
                    .with_action(ActionBinding::new("left_smile")),
            )
            .with_range(BlendShapeRange::new(
                BlendShapeLocation::MouthSmileRight,
                0.5,
                1.0,
            )),
    );
    library
}

/// Detector that evaluates on every update call.
fn eager_detector(library: ExpressionLibrary) -> ExpressionDetector {
    ExpressionDetector::new(
        library,
        DetectorConfig {
            detection_rate: 0.0,
            ..Default::default()
        },
    )
}

#[test]
fn test_no_evaluation_before_first_face_update() {
    let library = smile_library();
    let store = CoefficientStore::for_library(&library);
    let mut detector = eager_detector(library);

    // The store never received an update, so nothing runs no matter how
    // much time passes.
    assert!(detector.update(&store, 10.0).is_none());
    assert!(detector.update(&store, 10.0).is_none());
    assert_eq!(detector.hot_count(), 0);
}

#[test]
fn test_empty_update_batch_enables_detection() {
    let library = smile_library();
    let mut store = CoefficientStore::for_library(&library);
    let mut detector = eager_detector(library);

    store.apply([]);

    let report = detector.update(&store, 0.016).unwrap();
    assert_eq!(report.samples.len(), 2);
    assert_eq!(report.statuses.len(), 1);
}

#[test]
fn test_evaluation_is_throttled_to_the_detection_rate() {
    let library = smile_library();
    let mut store = CoefficientStore::for_library(&library);
    store.apply([]);

    let mut detector = ExpressionDetector::new(
        library,
        DetectorConfig {
            detection_rate: 1.0,
            ..Default::default()
        },
    );

    // 20 calls at 60 fps accumulate well under one second.
    let mut passes = 0;
    for _ in 0..20 {
        if detector.update(&store, 1.0 / 60.0).is_some() {
            passes += 1;
        }
    }
    assert_eq!(passes, 0);

    // Another 45 calls push the accumulator past 1.0 exactly once.
    for _ in 0..45 {
        if detector.update(&store, 1.0 / 60.0).is_some() {
            passes += 1;
        }
    }
    assert_eq!(passes, 1);
}

#[test]
fn test_counter_increments_once_per_pass_while_in_range() {
    let library = smile_library();
    let mut store = CoefficientStore::for_library(&library);
    store.apply([
        (BlendShapeLocation::MouthSmileLeft, 0.8),
        (BlendShapeLocation::MouthSmileRight, 0.2),
    ]);

    let mut detector = eager_detector(library);

    // The value never leaves the range; the counter still advances on
    // every pass because the check is timer-driven.
    for expected in 1..=3 {
        let report = detector.update(&store, 0.1).unwrap();
        let left = report
            .samples
            .iter()
            .find(|s| s.location == BlendShapeLocation::MouthSmileLeft)
            .unwrap();
        assert!(left.matched);
        assert_eq!(left.count, expected);
    }

    let right = &detector.library().expressions()[0].ranges[1];
    assert_eq!(right.detection_count, 0);
}

#[test]
fn test_range_action_refires_every_pass() {
    let library = smile_library();
    let mut store = CoefficientStore::for_library(&library);
    store.apply([(BlendShapeLocation::MouthSmileLeft, 0.8)]);

    let mut detector = eager_detector(library);

    for _ in 0..2 {
        let report = detector.update(&store, 0.1).unwrap();
        assert_eq!(report.actions.len(), 1);
        assert_eq!(report.actions[0].method, "left_smile");
    }
}

#[test]
fn test_boundary_coefficient_counts_as_matched() {
    let library = smile_library();
    let mut store = CoefficientStore::for_library(&library);
    store.apply([
        (BlendShapeLocation::MouthSmileLeft, 0.5),
        (BlendShapeLocation::MouthSmileRight, 1.0),
    ]);

    let mut detector = eager_detector(library);
    let report = detector.update(&store, 0.1).unwrap();

    assert!(report.samples.iter().all(|s| s.matched));
}

#[test]
fn test_untracked_channel_is_skipped_silently() {
    // The store only tracks the smile channels, but the detector's library
    // also references JawOpen.
    let mut library = smile_library();
    library.add(
        ExpressionDefinition::new("Surprise").with_range(BlendShapeRange::new(
            BlendShapeLocation::JawOpen,
            0.6,
            1.0,
        )),
    );

    let mut store = CoefficientStore::for_library(&smile_library());
    store.apply([(BlendShapeLocation::MouthSmileLeft, 0.8)]);

    let mut detector = eager_detector(library);
    let report = detector.update(&store, 0.1).unwrap();

    // No sample for the untracked channel, but its expression still
    // reports a status.
    assert!(report
        .samples
        .iter()
        .all(|s| s.location != BlendShapeLocation::JawOpen));
    assert_eq!(report.statuses.len(), 2);
    assert!(!detector.is_hot(BlendShapeLocation::JawOpen));
}

#[test]
fn test_full_detection_requires_every_tracked_channel_hot() {
    let library = smile_library();
    let mut store = CoefficientStore::for_library(&library);
    store.apply([
        (BlendShapeLocation::MouthSmileLeft, 0.8),
        (BlendShapeLocation::MouthSmileRight, 0.2),
    ]);

    let mut detector = eager_detector(library);
    let report = detector.update(&store, 0.1).unwrap();
    assert!(!report.statuses[0].detected);

    store.apply([(BlendShapeLocation::MouthSmileRight, 0.9)]);
    let report = detector.update(&store, 0.1).unwrap();
    assert!(report.statuses[0].detected);
    assert_eq!(detector.hot_count(), 2);
}

#[test]
fn test_full_detection_counts_hot_channels_globally() {
    // Two expressions over disjoint channels. "Smile" can only report
    // detected once "Surprise"'s channel is hot as well, because the hot
    // count spans the whole library.
    let mut library = smile_library();
    library.add(
        ExpressionDefinition::new("Surprise").with_range(BlendShapeRange::new(
            BlendShapeLocation::JawOpen,
            0.6,
            1.0,
        )),
    );

    let mut store = CoefficientStore::for_library(&library);
    store.apply([
        (BlendShapeLocation::MouthSmileLeft, 0.8),
        (BlendShapeLocation::MouthSmileRight, 0.8),
        (BlendShapeLocation::JawOpen, 0.1),
    ]);

    let mut detector = eager_detector(library);
    let report = detector.update(&store, 0.1).unwrap();
    assert!(!report.statuses[0].detected);
    assert!(!report.statuses[1].detected);

    store.apply([(BlendShapeLocation::JawOpen, 0.9)]);

    // Statuses are computed mid-pass: "Smile" is checked before JawOpen is
    // re-evaluated, so it only sees the new hot channel one pass later.
    let report = detector.update(&store, 0.1).unwrap();
    assert!(!report.statuses[0].detected);
    assert!(report.statuses[1].detected);

    let report = detector.update(&store, 0.1).unwrap();
    assert!(report.statuses[0].detected);
    assert!(report.statuses[1].detected);
}

#[test]
fn test_expression_action_reported_every_pass() {
    let mut library = ExpressionLibrary::new();
    library.add(
        ExpressionDefinition::new("Wink")
            .with_range(BlendShapeRange::new(
                BlendShapeLocation::EyeBlinkLeft,
                0.8,
                1.0,
            ))
            .with_action(ActionBinding::new("on_wink")),
    );

    let mut store = CoefficientStore::for_library(&library);
    // Out of range: the expression is not detected, yet its action is
    // still reported on every evaluation pass.
    store.apply([(BlendShapeLocation::EyeBlinkLeft, 0.1)]);

    let mut detector = eager_detector(library);
    let report = detector.update(&store, 0.1).unwrap();

    assert!(!report.statuses[0].detected);
    assert_eq!(report.actions.len(), 1);
    assert_eq!(report.actions[0].method, "on_wink");
}

#[test]
fn test_hot_channel_cools_down_when_value_leaves_range() {
    let library = smile_library();
    let mut store = CoefficientStore::for_library(&library);
    store.apply([(BlendShapeLocation::MouthSmileLeft, 0.8)]);

    let mut detector = eager_detector(library);
    detector.update(&store, 0.1).unwrap();
    assert!(detector.is_hot(BlendShapeLocation::MouthSmileLeft));

    store.apply([(BlendShapeLocation::MouthSmileLeft, 0.1)]);
    detector.update(&store, 0.1).unwrap();
    assert!(!detector.is_hot(BlendShapeLocation::MouthSmileLeft));
}

#[test]
fn test_reset_clears_hot_state_and_counters() {
    let library = smile_library();
    let mut store = CoefficientStore::for_library(&library);
    store.apply([(BlendShapeLocation::MouthSmileLeft, 0.8)]);

    let mut detector = eager_detector(library);
    detector.update(&store, 0.1).unwrap();
    assert!(detector.hot_count() > 0);

    detector.reset();

    assert_eq!(detector.hot_count(), 0);
    for expression in detector.library().expressions() {
        for range in &expression.ranges {
            assert_eq!(range.detection_count, 0);
        }
    }
}
