//! Integration tests for the LayoutEngine API
//!
//! These tests drive the engine through its public surface only, the way a
//! host application would.

use slidelab::{
    LayoutEngine, LayoutError, Operation,
    config::{AppConfig, GridAlignment, LayoutConfig, ReferenceMode},
    document::{SlideBounds, SlideDocument},
    indices_to_skip,
    shape::{Shape, ShapeKind, SlideShape},
};

fn rect(left: f32, top: f32, width: f32, height: f32) -> SlideShape {
    SlideShape::new(ShapeKind::Rectangle, left, top, width, height)
}

#[test]
fn test_distribute_horizontal_worked_example() {
    let config = LayoutConfig::default().with_distribute_reference(ReferenceMode::Slide);
    let engine = LayoutEngine::new(config);
    let mut shapes = vec![
        rect(0.0, 0.0, 10.0, 10.0),
        rect(20.0, 0.0, 10.0, 10.0),
        rect(50.0, 0.0, 10.0, 10.0),
    ];

    let outcome = engine
        .apply(
            Operation::DistributeHorizontal,
            &mut shapes,
            SlideBounds::new(100.0, 100.0),
        )
        .expect("slide mode accepts any selection");

    assert!(outcome.is_complete());
    let lefts: Vec<f32> = shapes.iter().map(|s| s.left()).collect();
    assert_eq!(lefts, vec![17.5, 45.0, 72.5]);
}

#[test]
fn test_snap_vertical_worked_example() {
    let engine = LayoutEngine::default();
    let mut shapes = vec![
        rect(0.0, 0.0, 10.0, 30.0).with_rotation(45.0),
        rect(0.0, 0.0, 10.0, 30.0).with_rotation(200.0),
    ];

    engine.snap_vertical(&mut shapes);

    assert_eq!(shapes[0].rotation(), 0.0);
    assert_eq!(shapes[1].rotation(), 180.0);
}

#[test]
fn test_stretch_left_worked_example() {
    let engine = LayoutEngine::default();
    let mut shapes = vec![rect(10.0, 0.0, 30.0, 30.0), rect(50.0, 40.0, 20.0, 20.0)];

    let outcome = engine.stretch_left(&mut shapes).expect("two shapes");

    assert!(outcome.is_complete());
    assert_eq!(shapes[1].width(), 60.0);
    assert_eq!(shapes[1].left(), 10.0);
}

#[test]
fn test_indices_to_skip_worked_example() {
    assert_eq!(indices_to_skip(7, 3, GridAlignment::Center), 1);
}

#[test]
fn test_reference_never_moves() {
    let engine = LayoutEngine::default();
    let original = vec![
        rect(100.0, 100.0, 40.0, 20.0).with_rotation(30.0),
        rect(0.0, 0.0, 10.0, 50.0),
        rect(300.0, 250.0, 25.0, 25.0).with_rotation(75.0),
    ];

    let operations = [
        Operation::AlignLeft,
        Operation::AlignRight,
        Operation::AlignTop,
        Operation::AlignBottom,
        Operation::AlignMiddle,
        Operation::AlignCenter,
        Operation::AdjoinHorizontal,
        Operation::AdjoinVertical,
        Operation::StretchLeft,
        Operation::StretchRight,
        Operation::StretchTop,
        Operation::StretchBottom,
    ];

    for operation in operations {
        let mut shapes = original.clone();
        engine
            .apply(operation, &mut shapes, SlideBounds::default())
            .unwrap_or_else(|err| panic!("{operation} failed: {err}"));
        assert_eq!(shapes[0], original[0], "{operation} moved the reference");
    }
}

#[test]
fn test_single_shape_is_rejected_without_changes() {
    let engine = LayoutEngine::default();
    let original = vec![rect(12.0, 34.0, 56.0, 78.0).with_rotation(9.0)];

    for operation in [
        Operation::AlignLeft,
        Operation::DistributeHorizontal,
        Operation::DistributeShapes,
        Operation::AdjoinHorizontal,
        Operation::Swap,
        Operation::SnapAway,
        Operation::StretchTop,
    ] {
        let mut shapes = original.clone();
        let result = engine.apply(operation, &mut shapes, SlideBounds::default());

        assert_eq!(
            result,
            Err(LayoutError::InsufficientSelection {
                required: 2,
                actual: 1
            }),
            "{operation} accepted a single shape"
        );
        assert!(result.is_err_and(|err| err.is_no_op()));
        assert_eq!(shapes, original);
    }
}

#[test]
fn test_swap_n_times_restores_centers() {
    let engine = LayoutEngine::default();
    let mut shapes = vec![
        rect(0.0, 0.0, 10.0, 10.0),
        rect(30.0, 60.0, 10.0, 10.0),
        rect(90.0, 15.0, 10.0, 10.0),
        rect(50.0, 5.0, 10.0, 10.0),
    ];
    let before: Vec<_> = shapes.iter().map(|s| s.center()).collect();

    for _ in 0..shapes.len() {
        engine.swap(&mut shapes).expect("enough shapes");
    }

    let after: Vec<_> = shapes.iter().map(|s| s.center()).collect();
    assert_eq!(after, before);
}

#[test]
fn test_grid_from_document() {
    let source = r#"
        [slide]
        width = 400.0
        height = 300.0

        [[shapes]]
        name = "a"
        left = 0.0
        top = 0.0
        width = 20.0
        height = 20.0

        [[shapes]]
        name = "b"
        left = 200.0
        top = 200.0
        width = 20.0
        height = 20.0

        [[shapes]]
        name = "c"
        kind = "oval"
        left = 100.0
        top = 50.0
        width = 20.0
        height = 20.0
    "#;

    let mut document: SlideDocument = toml::from_str(source).expect("valid document");
    document.validate().expect("valid geometry");

    let config: AppConfig = toml::from_str(
        r#"
        [layout]
        grid_alignment = "right"

        [layout.margins]
        left = 0.0
        right = 0.0
        top = 0.0
        bottom = 0.0
        "#,
    )
    .expect("valid config");
    let engine = LayoutEngine::from_app_config(&config);
    let slide = document.slide();

    engine
        .apply(
            Operation::DistributeGrid {
                row_length: 2,
                col_length: 2,
            },
            document.shapes_mut(),
            slide,
        )
        .expect("grid accepts any selection");

    let shapes = document.shapes();
    assert_eq!(shapes[0].name(), "a");
    assert_eq!((shapes[1].left(), shapes[1].top()), (20.0, 0.0));
    assert_eq!((shapes[2].left(), shapes[2].top()), (20.0, 20.0));
}

#[test]
fn test_operation_from_name() {
    let operation: Operation = "snap-away".parse().expect("known operation");
    assert_eq!(operation, Operation::SnapAway);
}
