//! Swap: rotate positions left to right.

use slidelab_core::shape::Shape;

use crate::{LayoutEngine, LayoutError, error::require_selection, measure::sort_by_left};

impl LayoutEngine {
    /// Cyclically exchanges positions.
    ///
    /// Taking shapes from left to right, each one moves to the center of the
    /// next, and the rightmost moves to where the leftmost was. Sizes and
    /// rotations are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InsufficientSelection`] with fewer than two
    /// shapes.
    pub fn swap<S: Shape>(&self, shapes: &mut [S]) -> Result<(), LayoutError> {
        require_selection(shapes, 2)?;

        let order = sort_by_left(shapes);
        let centers: Vec<_> = order.iter().map(|&index| shapes[index].center()).collect();

        for (position, &index) in order.iter().enumerate() {
            let target = centers[(position + 1) % centers.len()];
            let shape = &mut shapes[index];
            let center = shape.center();
            shape.increment_left(target.x() - center.x());
            shape.increment_top(target.y() - center.y());
        }

        Ok(())
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;
    use slidelab_core::shape::{ShapeKind, SlideShape};

    use super::*;

    /// Shapes of one common width at distinct lefts, so ordering by left
    /// and by center agree.
    fn shapes_strategy() -> impl Strategy<Value = Vec<SlideShape>> {
        (1.0f32..100.0, prop::collection::btree_set(-500i32..500, 2..7))
            .prop_flat_map(|(width, lefts)| {
                let count = lefts.len();
                (
                    Just(width),
                    Just(lefts),
                    prop::collection::vec((-500.0f32..500.0, 1.0f32..100.0), count),
                )
            })
            .prop_map(|(width, lefts, rest)| {
                lefts
                    .into_iter()
                    .rev()
                    .zip(rest)
                    .map(|(left, (top, height))| {
                        SlideShape::new(ShapeKind::Rectangle, left as f32, top, width, height)
                    })
                    .collect()
            })
    }

    /// Swapping as many times as there are shapes restores every center.
    fn check_swap_cycle_restores_centers(
        mut shapes: Vec<SlideShape>,
    ) -> Result<(), TestCaseError> {
        let engine = LayoutEngine::default();
        let before: Vec<_> = shapes.iter().map(|s| s.center()).collect();

        for _ in 0..shapes.len() {
            engine
                .swap(&mut shapes)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
        }

        for (shape, center) in shapes.iter().zip(&before) {
            prop_assert!(approx_eq!(f32, shape.center().x(), center.x(), epsilon = 0.01));
            prop_assert!(approx_eq!(f32, shape.center().y(), center.y(), epsilon = 0.01));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn swap_cycle_restores_centers(shapes in shapes_strategy()) {
            check_swap_cycle_restores_centers(shapes)?;
        }
    }
}
