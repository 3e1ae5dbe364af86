//! Scene graph collaborator interface
//!
//! The formatter never owns the figures it restyles. A rendering backend
//! exposes its object tree through the [`Scene`] trait, and the walker reads
//! and writes attributes through it. Nodes are never created or destroyed.
//!
//! # Key Components
//!
//! - [`Scene`]: The trait a backend implements
//! - [`Handle`]: Opaque node identifier; ordering follows creation order
//! - [`AxesInfo`], [`TextInfo`], [`SurfaceInfo`]: Read-only node snapshots
//! - [`FigureStyle`], [`AxesStyle`], [`LegendStyle`]: Attribute bundles written back

use serde::{Deserialize, Serialize};

use crate::colors::Rgb;
use crate::cycle::LineStyleSpec;
use crate::role::{FontTreatment, FontWeight, HorizontalAlign, TextRole, VerticalAlign};

/// Identifier of a scene node
///
/// Backends hand out handles in increasing order as nodes are created, so
/// sorting by handle yields creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Handle(pub u64);

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Screen dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

/// An axes node as enumerated within a figure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxesInfo {
    pub handle: Handle,
    /// Empty for plotting axes; legend containers carry `"legend"`
    pub tag: String,
}

impl AxesInfo {
    /// Whether this axes holds plotted data rather than a legend
    pub fn is_plot_axes(&self) -> bool {
        self.tag.is_empty()
    }
}

/// A text node as enumerated within a figure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextInfo {
    pub handle: Handle,
    pub content: String,
    /// Axes the text belongs to, `None` for figure-level annotations
    pub parent_axes: Option<Handle>,
    pub rotation_degrees: f64,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    /// Role set explicitly when the label was created
    pub role: Option<TextRole>,
}

/// A surface-like node and its opacity
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceInfo {
    pub handle: Handle,
    pub alpha: f64,
}

/// Figure window placement and background
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigureStyle {
    /// Distance from the left screen edge
    pub left: f64,
    /// Distance from the bottom screen edge
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
    pub background: Rgb,
}

/// Tick mark direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    In,
    Out,
}

/// Font used for tick labels and other axes text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    pub weight: FontWeight,
}

/// Axes decoration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxesStyle {
    pub grid: bool,
    /// Clamp axis limits to the data range
    pub tight_bounds: bool,
    pub tick_direction: TickDirection,
    pub tick_length: f64,
    pub axis_color: Rgb,
    pub font: FontSpec,
}

/// Legend placement rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendLocation {
    /// Backend picks the position that overlaps the least data
    Best,
}

/// Legend decoration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    pub font: FontSpec,
    pub text_color: Rgb,
    pub border_width: f64,
    pub location: LegendLocation,
}

/// Read/write access to a backend's object tree
///
/// Enumeration methods may return nodes in any order; the walker sorts by
/// handle. Setters receive absolute values, so applying the same style
/// twice is the same as applying it once.
pub trait Scene {
    /// All open figures
    fn figures(&self) -> Vec<Handle>;

    /// Size of the screen figures are placed on
    fn screen_size(&self) -> ScreenSize;

    fn set_figure_style(&mut self, figure: Handle, style: &FigureStyle);

    /// Every axes in a figure, legend containers included
    fn axes(&self, figure: Handle) -> Vec<AxesInfo>;

    /// The axes that currently has focus in a figure
    fn current_axes(&self, figure: Handle) -> Option<Handle>;

    /// Whether the axes draws its surrounding box
    fn box_on(&self, axes: Handle) -> bool;

    fn set_axes_style(&mut self, axes: Handle, style: &AxesStyle);

    /// Lines plotted in an axes
    fn lines(&self, axes: Handle) -> Vec<Handle>;

    fn set_line_style(&mut self, line: Handle, style: &LineStyleSpec);

    /// Text objects in a figure
    fn texts(&self, figure: Handle) -> Vec<TextInfo>;

    fn set_text_style(&mut self, text: Handle, treatment: &FontTreatment);

    /// Legend attached to an axes, if any
    fn legend(&self, axes: Handle) -> Option<Handle>;

    fn set_legend_style(&mut self, legend: Handle, style: &LegendStyle);

    /// Surface-like objects across all figures
    fn surfaces(&self) -> Vec<SurfaceInfo>;

    fn set_surface_alpha(&mut self, surface: Handle, alpha: f64);
}
