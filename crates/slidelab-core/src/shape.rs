//! Shape model: kinds, capabilities and the geometry accessor.
//!
//! The layout engine never owns shapes. It reads and writes their geometry
//! through the [`Shape`] trait, which a host document implements for its own
//! shape handles. [`SlideShape`] is the plain in-memory implementation used by
//! slide documents and tests.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::geometry::{Bounds, Point, Size};

/// Classification of a shape's outline, used to decide whether its exact
/// silhouette can be traced or the rotated bounding box must be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineSupport {
    /// The outline is the bounding box itself.
    FillsBoundingBox,
    /// The outline is a smooth curve without vertices.
    NoNodes,
    /// Vertices exist but cannot be traced reliably.
    Unsupported,
    /// Exact extremes may be obtained from an outline provider.
    Traceable,
}

impl OutlineSupport {
    /// Returns true if an outline provider should be consulted.
    pub fn is_traceable(self) -> bool {
        matches!(self, OutlineSupport::Traceable)
    }
}

macro_rules! shape_kinds {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// The preset geometry of a shape.
        ///
        /// Unknown kinds deserialize to [`ShapeKind::Other`].
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum ShapeKind {
            #[default]
            $($variant,)+
            #[serde(other)]
            Other,
        }

        impl ShapeKind {
            /// Every named kind, excluding [`ShapeKind::Other`].
            pub const ALL: &'static [ShapeKind] = &[$(ShapeKind::$variant,)+];

            /// Returns the kebab-case name used in documents and configuration.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ShapeKind::$variant => $name,)+
                    ShapeKind::Other => "other",
                }
            }
        }
    };
}

shape_kinds! {
    Rectangle => "rectangle",
    Bevel => "bevel",
    Frame => "frame",
    FlowchartProcess => "flowchart-process",
    FlowchartPredefinedProcess => "flowchart-predefined-process",
    FlowchartInternalStorage => "flowchart-internal-storage",
    ActionButton => "action-button",
    Oval => "oval",
    Chord => "chord",
    Heart => "heart",
    Connector => "connector",
    Diamond => "diamond",
    IsoscelesTriangle => "isosceles-triangle",
    RightTriangle => "right-triangle",
    Parallelogram => "parallelogram",
    Trapezoid => "trapezoid",
    Hexagon => "hexagon",
    LightningBolt => "lightning-bolt",
    LeftArrow => "left-arrow",
    LeftRightArrow => "left-right-arrow",
    LeftArrowCallout => "left-arrow-callout",
    LeftRightArrowCallout => "left-right-arrow-callout",
    CurvedLeftArrow => "curved-left-arrow",
    RightArrow => "right-arrow",
    BentArrow => "bent-arrow",
    StripedRightArrow => "striped-right-arrow",
    NotchedRightArrow => "notched-right-arrow",
    Pentagon => "pentagon",
    Chevron => "chevron",
    RightArrowCallout => "right-arrow-callout",
    CurvedRightArrow => "curved-right-arrow",
    UpArrow => "up-arrow",
    BentUpArrow => "bent-up-arrow",
    UpDownArrow => "up-down-arrow",
    LeftRightUpArrow => "left-right-up-arrow",
    LeftUpArrow => "left-up-arrow",
    UpArrowCallout => "up-arrow-callout",
    CurvedUpArrow => "curved-up-arrow",
    DownArrow => "down-arrow",
    UTurnArrow => "u-turn-arrow",
    DownArrowCallout => "down-arrow-callout",
    CurvedDownArrow => "curved-down-arrow",
    CircularArrow => "circular-arrow",
}

impl ShapeKind {
    /// Classifies how this kind's outline relates to its bounding box.
    ///
    /// This is the single place where new kinds are sorted into capability
    /// groups.
    pub fn outline_support(self) -> OutlineSupport {
        match self {
            ShapeKind::Rectangle
            | ShapeKind::Bevel
            | ShapeKind::Frame
            | ShapeKind::FlowchartProcess
            | ShapeKind::FlowchartPredefinedProcess
            | ShapeKind::FlowchartInternalStorage
            | ShapeKind::ActionButton => OutlineSupport::FillsBoundingBox,
            ShapeKind::Oval => OutlineSupport::NoNodes,
            ShapeKind::Chord | ShapeKind::Heart | ShapeKind::Connector => {
                OutlineSupport::Unsupported
            }
            _ => OutlineSupport::Traceable,
        }
    }
}

impl FromStr for ShapeKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or("Unsupported shape kind")
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A snapshot of where a shape sits on the slide.
///
/// Outline providers receive a placement rather than the shape itself so
/// that they stay independent of the host's shape type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    bounds: Bounds,
    rotation: f32,
    kind: ShapeKind,
}

impl Placement {
    pub fn new(bounds: Bounds, rotation: f32, kind: ShapeKind) -> Self {
        Self {
            bounds,
            rotation,
            kind,
        }
    }

    /// The unrotated bounding box
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Clockwise rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }
}

/// Geometry accessor for a shape owned by a slide.
///
/// `left`/`top` locate the top-left corner of the unrotated bounding box;
/// rotation is applied about that box's center.
pub trait Shape {
    fn left(&self) -> f32;
    fn top(&self) -> f32;
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Clockwise rotation in degrees
    fn rotation(&self) -> f32;
    fn kind(&self) -> ShapeKind;

    fn set_left(&mut self, left: f32);
    fn set_top(&mut self, top: f32);
    fn set_width(&mut self, width: f32);
    fn set_height(&mut self, height: f32);
    fn set_rotation(&mut self, rotation: f32);

    /// Moves the shape horizontally by `dx`
    fn increment_left(&mut self, dx: f32) {
        let left = self.left();
        self.set_left(left + dx);
    }

    /// Moves the shape vertically by `dy`
    fn increment_top(&mut self, dy: f32) {
        let top = self.top();
        self.set_top(top + dy);
    }

    /// Right edge of the unrotated bounding box
    fn right(&self) -> f32 {
        self.left() + self.width()
    }

    /// Bottom edge of the unrotated bounding box
    fn bottom(&self) -> f32 {
        self.top() + self.height()
    }

    /// The unrotated bounding box
    fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(self.left(), self.top()),
            Size::new(self.width(), self.height()),
        )
    }

    /// Center of the bounding box; unaffected by rotation.
    fn center(&self) -> Point {
        Point::new(
            self.left() + self.width() / 2.0,
            self.top() + self.height() / 2.0,
        )
    }

    /// Returns true if the shape is taller than it is wide
    fn is_tall(&self) -> bool {
        self.height() > self.width()
    }

    fn placement(&self) -> Placement {
        Placement::new(self.bounds(), self.rotation(), self.kind())
    }
}

/// An in-memory shape as stored in a slide document.
///
/// # Examples
///
/// ```
/// # use slidelab_core::shape::{Shape, ShapeKind, SlideShape};
/// let mut shape = SlideShape::new(ShapeKind::Rectangle, 10.0, 20.0, 100.0, 50.0);
/// shape.increment_left(5.0);
/// shape.set_rotation(370.0);
///
/// assert_eq!(shape.left(), 15.0);
/// assert_eq!(shape.rotation(), 10.0);
/// assert_eq!(shape.center().x(), 65.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideShape {
    #[serde(default)]
    name: String,
    #[serde(default)]
    kind: ShapeKind,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    #[serde(default, deserialize_with = "deserialize_rotation")]
    rotation: f32,
}

/// Reads a rotation in degrees and normalizes it into `[0, 360)`.
fn deserialize_rotation<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    f32::deserialize(deserializer).map(|rotation| rotation.rem_euclid(360.0))
}

impl SlideShape {
    /// Creates an unrotated, unnamed shape.
    pub fn new(kind: ShapeKind, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            name: String::new(),
            kind,
            left,
            top,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Returns the shape with the given name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the shape with the given rotation, normalized into `[0, 360)`
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.set_rotation(rotation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Shape for SlideShape {
    fn left(&self) -> f32 {
        self.left
    }

    fn top(&self) -> f32 {
        self.top
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn kind(&self) -> ShapeKind {
        self.kind
    }

    fn set_left(&mut self, left: f32) {
        self.left = left;
    }

    fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation.rem_euclid(360.0);
    }
}
