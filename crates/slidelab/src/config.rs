//! Configuration types for the SlideLab layout engine.
//!
//! This module provides configuration structures that control how layout
//! operations pick their reference and how grids are spaced. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and snap settings.
//! - [`LayoutConfig`] - Reference modes, grid alignment and grid margins.
//! - [`SnapConfig`] - Overrides for the intrinsic "up" angle of shape kinds.
//!
//! # Example
//!
//! ```
//! # use slidelab::config::{AppConfig, ReferenceMode};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().align_reference(), ReferenceMode::FirstShape);
//! assert_eq!(config.layout().margins().top(), 5.0);
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use slidelab_core::geometry::Insets;

/// Grid margin applied on every side when nothing else is configured.
pub const DEFAULT_GRID_MARGIN: f32 = 5.0;

/// What an operation measures against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceMode {
    /// The slide edges and centerlines
    Slide,
    /// The first shape in the selection (default)
    #[default]
    FirstShape,
}

impl FromStr for ReferenceMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slide" => Ok(Self::Slide),
            "first-shape" => Ok(Self::FirstShape),
            _ => Err("Unsupported reference mode"),
        }
    }
}

impl From<ReferenceMode> for &'static str {
    fn from(val: ReferenceMode) -> Self {
        match val {
            ReferenceMode::Slide => "slide",
            ReferenceMode::FirstShape => "first-shape",
        }
    }
}

impl fmt::Display for ReferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// How the ragged last row (or column) of a grid is justified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for GridAlignment {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err("Unsupported grid alignment"),
        }
    }
}

impl From<GridAlignment> for &'static str {
    fn from(val: GridAlignment) -> Self {
        match val {
            GridAlignment::Left => "left",
            GridAlignment::Center => "center",
            GridAlignment::Right => "right",
        }
    }
}

impl fmt::Display for GridAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Top-level configuration combining layout and snap settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Snap configuration section.
    #[serde(default)]
    snap: SnapConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `layout` - Reference modes and grid settings.
    /// * `snap` - Up-angle overrides for snapping.
    pub fn new(layout: LayoutConfig, snap: SnapConfig) -> Self {
        Self { layout, snap }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the snap configuration.
    pub fn snap(&self) -> &SnapConfig {
        &self.snap
    }
}

/// Mode flags consulted by the layout operations.
///
/// Align and distribute each have their own reference mode. Margins are
/// inserted between neighbouring grid cells: left and right margins between
/// columns, top and bottom margins between rows.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    align_reference: ReferenceMode,
    distribute_reference: ReferenceMode,
    grid_alignment: GridAlignment,
    #[serde(deserialize_with = "deserialize_margins")]
    margins: Insets,
}

/// The `[layout.margins]` table; omitted sides keep the default margin.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct MarginsTable {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Default for MarginsTable {
    fn default() -> Self {
        Self {
            top: DEFAULT_GRID_MARGIN,
            right: DEFAULT_GRID_MARGIN,
            bottom: DEFAULT_GRID_MARGIN,
            left: DEFAULT_GRID_MARGIN,
        }
    }
}

fn deserialize_margins<'de, D>(deserializer: D) -> Result<Insets, D::Error>
where
    D: Deserializer<'de>,
{
    let table = MarginsTable::deserialize(deserializer)?;
    Ok(Insets::new(table.top, table.right, table.bottom, table.left))
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            align_reference: ReferenceMode::default(),
            distribute_reference: ReferenceMode::default(),
            grid_alignment: GridAlignment::default(),
            margins: Insets::uniform(DEFAULT_GRID_MARGIN),
        }
    }
}

impl LayoutConfig {
    /// Returns the reference used by align operations
    pub fn align_reference(&self) -> ReferenceMode {
        self.align_reference
    }

    /// Returns the reference used by distribute operations
    pub fn distribute_reference(&self) -> ReferenceMode {
        self.distribute_reference
    }

    /// Returns the justification of a grid's ragged edge
    pub fn grid_alignment(&self) -> GridAlignment {
        self.grid_alignment
    }

    /// Returns the margins between grid cells
    pub fn margins(&self) -> Insets {
        self.margins
    }

    pub fn set_align_reference(&mut self, reference: ReferenceMode) {
        self.align_reference = reference;
    }

    pub fn set_distribute_reference(&mut self, reference: ReferenceMode) {
        self.distribute_reference = reference;
    }

    pub fn set_grid_alignment(&mut self, alignment: GridAlignment) {
        self.grid_alignment = alignment;
    }

    pub fn set_margin_top(&mut self, margin: f32) {
        self.margins = self.margins.with_top(margin);
    }

    pub fn set_margin_bottom(&mut self, margin: f32) {
        self.margins = self.margins.with_bottom(margin);
    }

    pub fn set_margin_left(&mut self, margin: f32) {
        self.margins = self.margins.with_left(margin);
    }

    pub fn set_margin_right(&mut self, margin: f32) {
        self.margins = self.margins.with_right(margin);
    }

    /// Returns the configuration with the given align reference
    pub fn with_align_reference(mut self, reference: ReferenceMode) -> Self {
        self.align_reference = reference;
        self
    }

    /// Returns the configuration with the given distribute reference
    pub fn with_distribute_reference(mut self, reference: ReferenceMode) -> Self {
        self.distribute_reference = reference;
        self
    }

    /// Returns the configuration with the given grid alignment
    pub fn with_grid_alignment(mut self, alignment: GridAlignment) -> Self {
        self.grid_alignment = alignment;
        self
    }

    /// Returns the configuration with the given grid margins
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }
}

/// Snap settings.
///
/// `up_angles` maps shape kind names (as written in slide documents) to the
/// clockwise angle at which that kind points "up". Entries extend or replace
/// the built-in table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapConfig {
    #[serde(default)]
    up_angles: IndexMap<String, f32>,
}

impl SnapConfig {
    pub fn new(up_angles: IndexMap<String, f32>) -> Self {
        Self { up_angles }
    }

    /// Returns the configured up-angle overrides, keyed by kind name
    pub fn up_angles(&self) -> &IndexMap<String, f32> {
        &self.up_angles
    }
}
