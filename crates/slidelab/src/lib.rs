//! SlideLab - Geometric layout for shapes on a slide.
//!
//! Align, distribute, adjoin, swap, snap and stretch operations over an
//! ordered selection of rotated rectangles. The engine reads and writes shape
//! geometry through the [`Shape`](slidelab_core::shape::Shape) trait and
//! never creates or removes shapes.
//!
//! Every operation that needs a reference shape treats the first shape of the
//! selection as that reference.

pub mod config;
pub mod outline;

mod adjoin;
mod align;
mod distribute;
mod error;
mod grid;
mod measure;
mod operation;
mod snap;
mod stretch;
mod swap;
mod up_angle;

pub use slidelab_core::{document, geometry, shape};

pub use error::LayoutError;
pub use grid::indices_to_skip;
pub use measure::{center_point, sort_by_left, sort_by_top};
pub use operation::{Operation, Outcome};
pub use snap::Direction;
pub use up_angle::UpAngleTable;

use log::debug;

use config::{AppConfig, LayoutConfig};
use outline::{OutlineProvider, VertexOutline};

/// Entry point for all layout operations.
///
/// The engine owns its configuration, the up-angle table used by snap-away,
/// and the outline provider used to measure non-rectangular shapes. It keeps
/// no other state between calls.
///
/// # Examples
///
/// ```
/// use slidelab::{LayoutEngine, config::{LayoutConfig, ReferenceMode}};
/// use slidelab_core::shape::{Shape, ShapeKind, SlideShape};
///
/// let config = LayoutConfig::default().with_distribute_reference(ReferenceMode::Slide);
/// let engine = LayoutEngine::new(config);
///
/// let mut shapes = vec![
///     SlideShape::new(ShapeKind::Rectangle, 0.0, 0.0, 10.0, 10.0),
///     SlideShape::new(ShapeKind::Rectangle, 20.0, 0.0, 10.0, 10.0),
///     SlideShape::new(ShapeKind::Rectangle, 50.0, 0.0, 10.0, 10.0),
/// ];
/// engine.distribute_horizontal(&mut shapes, 100.0).expect("slide mode accepts any selection");
///
/// assert_eq!(shapes[0].left(), 17.5);
/// assert_eq!(shapes[1].left(), 45.0);
/// assert_eq!(shapes[2].left(), 72.5);
/// ```
#[derive(Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
    up_angles: UpAngleTable,
    outline: Box<dyn OutlineProvider>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine {
    /// Creates an engine with the standard up-angle table and the vertex
    /// outline provider.
    ///
    /// # Arguments
    ///
    /// * `config` - Reference modes, grid alignment and grid margins
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            up_angles: UpAngleTable::standard(),
            outline: Box::new(VertexOutline::standard()),
        }
    }

    /// Creates an engine from a loaded application configuration.
    ///
    /// Up-angle overrides in the snap section are merged over the standard
    /// table.
    pub fn from_app_config(config: &AppConfig) -> Self {
        let up_angles = UpAngleTable::from_config(config.snap());
        debug!(
            align_reference:% = config.layout().align_reference(),
            distribute_reference:% = config.layout().distribute_reference(),
            grid_alignment:% = config.layout().grid_alignment(),
            up_angles = up_angles.len();
            "Creating layout engine"
        );

        Self::new(*config.layout()).with_up_angles(up_angles)
    }

    /// Returns the engine with a different outline provider.
    pub fn with_outline_provider(mut self, provider: impl OutlineProvider + 'static) -> Self {
        self.outline = Box::new(provider);
        self
    }

    /// Returns the engine with a different up-angle table.
    pub fn with_up_angles(mut self, up_angles: UpAngleTable) -> Self {
        self.up_angles = up_angles;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Mutable access to the configuration; changes apply from the next
    /// operation on.
    pub fn config_mut(&mut self) -> &mut LayoutConfig {
        &mut self.config
    }

    pub fn up_angles(&self) -> &UpAngleTable {
        &self.up_angles
    }

    pub(crate) fn outline_provider(&self) -> &dyn OutlineProvider {
        self.outline.as_ref()
    }
}
