//! Slide documents: slide bounds plus an ordered shape selection.
//!
//! A [`SlideDocument`] is the file-level representation the CLI reads and
//! writes. Shape order is significant: the first shape is the reference for
//! every operation that needs one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shape::SlideShape;

/// Usable dimensions of the slide canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideBounds {
    width: f32,
    height: f32,
}

impl SlideBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

impl Default for SlideBounds {
    /// A 16:9 slide measured in points.
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
        }
    }
}

/// Problems found while validating a slide document.
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("slide dimensions must be positive and finite, got {width} x {height}")]
    InvalidSlide { width: f32, height: f32 },

    #[error("shape #{index} ({name:?}) has a non-finite coordinate")]
    NonFinite { index: usize, name: String },

    #[error("shape #{index} ({name:?}) has a negative size")]
    NegativeSize { index: usize, name: String },
}

/// A slide with its selected shapes, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideDocument {
    #[serde(default)]
    slide: SlideBounds,
    #[serde(default)]
    shapes: Vec<SlideShape>,
}

impl SlideDocument {
    pub fn new(slide: SlideBounds, shapes: Vec<SlideShape>) -> Self {
        Self { slide, shapes }
    }

    pub fn slide(&self) -> SlideBounds {
        self.slide
    }

    pub fn shapes(&self) -> &[SlideShape] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [SlideShape] {
        &mut self.shapes
    }

    /// Checks that the slide and every shape have usable geometry.
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentError`] encountered, in shape order.
    pub fn validate(&self) -> Result<(), DocumentError> {
        use crate::shape::Shape;

        let slide = self.slide;
        if !(slide.width.is_finite() && slide.height.is_finite())
            || slide.width <= 0.0
            || slide.height <= 0.0
        {
            return Err(DocumentError::InvalidSlide {
                width: slide.width,
                height: slide.height,
            });
        }

        for (index, shape) in self.shapes.iter().enumerate() {
            let values = [
                shape.left(),
                shape.top(),
                shape.width(),
                shape.height(),
                shape.rotation(),
            ];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(DocumentError::NonFinite {
                    index,
                    name: shape.name().to_string(),
                });
            }
            if shape.width() < 0.0 || shape.height() < 0.0 {
                return Err(DocumentError::NegativeSize {
                    index,
                    name: shape.name().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    #[test]
    fn test_default_slide_is_widescreen() {
        let slide = SlideBounds::default();
        assert_eq!(slide.width(), 960.0);
        assert_eq!(slide.height(), 540.0);
    }

    #[test]
    fn test_validate_accepts_regular_document() {
        let doc = SlideDocument::new(
            SlideBounds::new(100.0, 100.0),
            vec![SlideShape::new(ShapeKind::Rectangle, 0.0, 0.0, 10.0, 10.0)],
        );
        assert_eq!(doc.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_slide() {
        let doc = SlideDocument::new(SlideBounds::new(0.0, 100.0), Vec::new());
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::InvalidSlide { .. })
        ));
    }

    #[test]
    fn test_validate_reports_shape_index() {
        let doc = SlideDocument::new(
            SlideBounds::default(),
            vec![
                SlideShape::new(ShapeKind::Rectangle, 0.0, 0.0, 10.0, 10.0),
                SlideShape::new(ShapeKind::Oval, 0.0, 0.0, -1.0, 10.0).with_name("bad"),
            ],
        );
        assert_eq!(
            doc.validate(),
            Err(DocumentError::NegativeSize {
                index: 1,
                name: "bad".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let doc = SlideDocument::new(
            SlideBounds::default(),
            vec![SlideShape::new(ShapeKind::Rectangle, f32::NAN, 0.0, 10.0, 10.0)],
        );
        assert!(matches!(doc.validate(), Err(DocumentError::NonFinite { index: 0, .. })));
    }
}
