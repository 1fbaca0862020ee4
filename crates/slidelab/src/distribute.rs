//! Distribute operations: even spacing along one axis.
//!
//! Shapes are placed in selection order, each flush against the trailing
//! edge of the one before plus a common gap. Gaps are not clamped; when the
//! shapes are wider than the available span the gap is negative and the
//! shapes overlap.

use log::debug;

use slidelab_core::shape::Shape;

use crate::{
    LayoutEngine, LayoutError, config::ReferenceMode, error::require_selection, measure::Axis,
};

impl LayoutEngine {
    /// Spaces shapes evenly across the slide width, or inside the first
    /// shape's width.
    ///
    /// Against the slide, `n` shapes get `n + 1` equal gaps including the
    /// margins to both slide edges. Against the first shape, the first shape
    /// stays put and the others are spread over its extent with `n` gaps.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn distribute_horizontal<S: Shape>(
        &self,
        shapes: &mut [S],
        slide_width: f32,
    ) -> Result<(), LayoutError> {
        self.distribute_along(shapes, Axis::Horizontal, slide_width)
    }

    /// Vertical counterpart of [`LayoutEngine::distribute_horizontal`].
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn distribute_vertical<S: Shape>(
        &self,
        shapes: &mut [S],
        slide_height: f32,
    ) -> Result<(), LayoutError> {
        self.distribute_along(shapes, Axis::Vertical, slide_height)
    }

    /// Distributes horizontally, then vertically.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] in first-shape mode
    /// with fewer than two shapes.
    pub fn distribute_center<S: Shape>(
        &self,
        shapes: &mut [S],
        slide_width: f32,
        slide_height: f32,
    ) -> Result<(), LayoutError> {
        self.distribute_horizontal(shapes, slide_width)?;
        self.distribute_vertical(shapes, slide_height)
    }

    /// Re-spaces the shapes between the first and the last one.
    ///
    /// Both end shapes stay where they are. The interior shapes are laid out
    /// on each axis with equal gaps between the first shape's trailing edge
    /// and the last shape's leading edge.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes. Exactly two shapes is a successful no-op.
    pub fn distribute_shapes<S: Shape>(&self, shapes: &mut [S]) -> Result<(), LayoutError> {
        require_selection(shapes, 2)?;
        if shapes.len() == 2 {
            return Ok(());
        }

        self.distribute_between_ends(shapes, Axis::Horizontal);
        self.distribute_between_ends(shapes, Axis::Vertical);
        Ok(())
    }

    fn distribute_along<S: Shape>(
        &self,
        shapes: &mut [S],
        axis: Axis,
        slide_extent: f32,
    ) -> Result<(), LayoutError> {
        let count = shapes.len();

        match self.config().distribute_reference() {
            ReferenceMode::Slide => {
                let occupied = self.total_extent(&*shapes, axis);
                let gap = (slide_extent - occupied) / (count as f32 + 1.0);
                debug!(axis:?, count, occupied, gap; "Distributing across slide");

                self.place_in_sequence(shapes, axis, 0.0, gap);
            }
            ReferenceMode::FirstShape => {
                require_selection(shapes, 2)?;
                let (reference, others) = shapes.split_at_mut(1);
                let anchor = self.extreme_points(&reference[0]);
                let occupied = self.total_extent(&*others, axis);
                let gap = (axis.extent(anchor) - occupied) / count as f32;
                debug!(axis:?, count, occupied, gap; "Distributing inside first shape");

                self.place_in_sequence(others, axis, axis.leading(anchor), gap);
            }
        }

        Ok(())
    }

    fn distribute_between_ends<S: Shape>(&self, shapes: &mut [S], axis: Axis) {
        let count = shapes.len();
        let last = count - 1;
        let first_edge = axis.trailing(self.extreme_points(&shapes[0]));
        let last_edge = axis.leading(self.extreme_points(&shapes[last]));

        let interior = &mut shapes[1..last];
        let occupied = self.total_extent(&*interior, axis);
        let gap = (last_edge - first_edge - occupied) / last as f32;
        debug!(axis:?, count, occupied, gap; "Distributing between end shapes");

        self.place_in_sequence(interior, axis, first_edge, gap);
    }

    /// Places `shapes` one after another, starting `gap` after `edge`.
    fn place_in_sequence<S: Shape>(&self, shapes: &mut [S], axis: Axis, edge: f32, gap: f32) {
        let mut edge = edge;
        for shape in shapes.iter_mut() {
            let leading = axis.leading(self.extreme_points(&*shape));
            axis.shift(shape, edge + gap - leading);
            edge = axis.trailing(self.extreme_points(&*shape));
        }
    }

    fn total_extent<S: Shape>(&self, shapes: &[S], axis: Axis) -> f32 {
        shapes
            .iter()
            .map(|shape| axis.extent(self.extreme_points(shape)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use slidelab_core::shape::{ShapeKind, SlideShape};

    use super::*;
    use crate::config::LayoutConfig;

    fn rect(left: f32, top: f32, width: f32, height: f32) -> SlideShape {
        SlideShape::new(ShapeKind::Rectangle, left, top, width, height)
    }

    fn slide_engine() -> LayoutEngine {
        LayoutEngine::new(LayoutConfig::default().with_distribute_reference(ReferenceMode::Slide))
    }

    #[test]
    fn test_distribute_horizontal_across_slide() {
        let engine = slide_engine();
        let mut shapes = vec![
            rect(0.0, 0.0, 10.0, 10.0),
            rect(20.0, 5.0, 10.0, 10.0),
            rect(50.0, 9.0, 10.0, 10.0),
        ];

        engine
            .distribute_horizontal(&mut shapes, 100.0)
            .expect("slide mode");

        assert_eq!(shapes[0].left(), 17.5);
        assert_eq!(shapes[1].left(), 45.0);
        assert_eq!(shapes[2].left(), 72.5);
        assert_eq!(shapes[1].top(), 5.0);
    }

    #[test]
    fn test_distribute_follows_selection_order() {
        let engine = slide_engine();
        let mut shapes = vec![rect(80.0, 0.0, 10.0, 10.0), rect(0.0, 0.0, 10.0, 10.0)];

        engine
            .distribute_vertical(&mut shapes, 70.0)
            .expect("slide mode");

        assert_eq!(shapes[0].top(), 50.0 / 3.0);
        assert!(shapes[1].top() > shapes[0].top());
    }

    #[test]
    fn test_distribute_inside_first_shape() {
        let engine = LayoutEngine::default();
        let mut shapes = vec![
            rect(0.0, 0.0, 100.0, 10.0),
            rect(500.0, 0.0, 10.0, 10.0),
            rect(-300.0, 0.0, 10.0, 10.0),
            rect(40.0, 0.0, 20.0, 10.0),
        ];

        engine
            .distribute_horizontal(&mut shapes, 960.0)
            .expect("enough shapes");

        // 100 - 40 leaves 60 for four gaps.
        assert_eq!(shapes[0].left(), 0.0);
        assert_eq!(shapes[1].left(), 15.0);
        assert_eq!(shapes[2].left(), 40.0);
        assert_eq!(shapes[3].left(), 65.0);
    }

    #[test]
    fn test_distribute_first_shape_mode_needs_two() {
        let engine = LayoutEngine::default();
        let mut shapes = vec![rect(0.0, 0.0, 100.0, 10.0)];
        assert!(matches!(
            engine.distribute_center(&mut shapes, 10.0, 10.0),
            Err(LayoutError::InsufficientSelection { .. })
        ));
    }

    #[test]
    fn test_distribute_negative_gap_overlaps() {
        let engine = slide_engine();
        let mut shapes = vec![rect(0.0, 0.0, 30.0, 10.0), rect(0.0, 0.0, 30.0, 10.0)];

        engine
            .distribute_horizontal(&mut shapes, 30.0)
            .expect("slide mode");

        assert_eq!(shapes[0].left(), -10.0);
        assert_eq!(shapes[1].left(), 10.0);
    }

    #[test]
    fn test_distribute_shapes_between_ends() {
        let engine = LayoutEngine::default();
        let mut shapes = vec![
            rect(0.0, 0.0, 10.0, 10.0),
            rect(70.0, 70.0, 10.0, 10.0),
            rect(12.0, 15.0, 10.0, 10.0),
            rect(90.0, 90.0, 10.0, 10.0),
        ];

        engine.distribute_shapes(&mut shapes).expect("enough shapes");

        // 80 units between the ends, 20 occupied, three gaps of 20.
        assert_eq!(shapes[1].left(), 30.0);
        assert_eq!(shapes[2].left(), 60.0);
        assert_eq!(shapes[1].top(), 30.0);
        assert_eq!(shapes[2].top(), 60.0);
        assert_eq!(shapes[3].left(), 90.0);
        assert_eq!(shapes[0].left(), 0.0);
    }

    #[test]
    fn test_distribute_shapes_two_is_noop() {
        let engine = LayoutEngine::default();
        let mut shapes = vec![rect(0.0, 0.0, 10.0, 10.0), rect(7.0, 3.0, 10.0, 10.0)];
        let before = shapes.clone();

        assert_eq!(engine.distribute_shapes(&mut shapes), Ok(()));
        assert_eq!(shapes, before);
    }

    #[test]
    fn test_distribute_shapes_needs_two() {
        let engine = LayoutEngine::default();
        let mut shapes: Vec<SlideShape> = Vec::new();
        assert_eq!(
            engine.distribute_shapes(&mut shapes),
            Err(LayoutError::InsufficientSelection {
                required: 2,
                actual: 0
            })
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;
    use slidelab_core::shape::{ShapeKind, SlideShape};

    use super::*;
    use crate::config::LayoutConfig;

    // ===================
    // Strategies
    // ===================

    fn shapes_strategy() -> impl Strategy<Value = Vec<SlideShape>> {
        prop::collection::vec(
            (
                -500.0f32..500.0,
                -500.0f32..500.0,
                1.0f32..80.0,
                1.0f32..80.0,
                0.0f32..360.0,
            )
                .prop_map(|(left, top, width, height, rotation)| {
                    SlideShape::new(ShapeKind::Rectangle, left, top, width, height)
                        .with_rotation(rotation)
                }),
            1..8,
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// In slide mode every gap, including both outer ones, is the same.
    fn check_slide_gaps_are_equal(mut shapes: Vec<SlideShape>) -> Result<(), TestCaseError> {
        let engine = LayoutEngine::new(
            LayoutConfig::default().with_distribute_reference(ReferenceMode::Slide),
        );
        let slide_width = 960.0;
        engine
            .distribute_horizontal(&mut shapes, slide_width)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        let silhouettes: Vec<_> = shapes.iter().map(|s| engine.extreme_points(s)).collect();
        let first_gap = silhouettes[0].leftmost().x();

        for pair in silhouettes.windows(2) {
            let gap = pair[1].leftmost().x() - pair[0].rightmost().x();
            prop_assert!(approx_eq!(f32, gap, first_gap, epsilon = 0.05));
        }

        let trailing_gap = slide_width - silhouettes[silhouettes.len() - 1].rightmost().x();
        prop_assert!(approx_eq!(f32, trailing_gap, first_gap, epsilon = 0.05));
        Ok(())
    }

    /// The first shape never moves in first-shape mode.
    fn check_reference_is_fixed(mut shapes: Vec<SlideShape>) -> Result<(), TestCaseError> {
        prop_assume!(shapes.len() >= 2);
        let engine = LayoutEngine::default();
        let reference = shapes[0].clone();

        engine
            .distribute_center(&mut shapes, 960.0, 540.0)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert_eq!(&shapes[0], &reference);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn slide_gaps_are_equal(shapes in shapes_strategy()) {
            check_slide_gaps_are_equal(shapes)?;
        }

        #[test]
        fn reference_is_fixed(shapes in shapes_strategy()) {
            check_reference_is_fixed(shapes)?;
        }
    }
}
