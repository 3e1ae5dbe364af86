//! In-memory scene
//!
//! [`MemoryScene`] is a plain-data [`Scene`] for hosts that build their
//! figure tree themselves (or load it from JSON) and render after
//! formatting. Handles come from a single counter, so creation order is
//! handle order across every node kind.

use serde::{Deserialize, Serialize};

use crate::cycle::LineStyleSpec;
use crate::role::{FontTreatment, HorizontalAlign, TextRole, VerticalAlign};
use crate::scene::{
    AxesInfo, AxesStyle, FigureStyle, Handle, LegendStyle, Scene, ScreenSize, SurfaceInfo,
    TextInfo,
};

const LEGEND_TAG: &str = "legend";

/// Rotation and alignment of a text object
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub rotation_degrees: f64,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Placement {
    pub fn new(
        rotation_degrees: f64,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) -> Self {
        Self {
            rotation_degrees,
            horizontal,
            vertical,
        }
    }

    /// Default placement of an x-axis label on 2D axes
    pub fn xlabel() -> Self {
        Self::new(0.0, HorizontalAlign::Center, VerticalAlign::Cap)
    }

    /// Default placement of a y-axis label on 2D axes
    pub fn ylabel() -> Self {
        Self::new(90.0, HorizontalAlign::Center, VerticalAlign::Bottom)
    }

    /// Default placement of a title (2D and 3D)
    pub fn title() -> Self {
        Self::new(0.0, HorizontalAlign::Center, VerticalAlign::Bottom)
    }

    pub fn xlabel_3d() -> Self {
        Self::new(0.0, HorizontalAlign::Left, VerticalAlign::Top)
    }

    pub fn ylabel_3d() -> Self {
        Self::new(0.0, HorizontalAlign::Right, VerticalAlign::Top)
    }

    pub fn zlabel_3d() -> Self {
        Self::new(90.0, HorizontalAlign::Center, VerticalAlign::Bottom)
    }

    /// Free-floating annotation text
    pub fn annotation() -> Self {
        Self::new(0.0, HorizontalAlign::Left, VerticalAlign::Middle)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct FigureNode {
    handle: Handle,
    current_axes: Option<Handle>,
    style: Option<FigureStyle>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct AxesNode {
    handle: Handle,
    figure: Handle,
    tag: String,
    box_on: bool,
    legend: Option<Handle>,
    style: Option<AxesStyle>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct LineNode {
    handle: Handle,
    axes: Handle,
    style: Option<LineStyleSpec>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct TextNode {
    figure: Handle,
    info: TextInfo,
    style: Option<FontTreatment>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct LegendNode {
    handle: Handle,
    style: Option<LegendStyle>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SurfaceNode {
    handle: Handle,
    axes: Handle,
    alpha: f64,
    refreshed: bool,
}

/// A self-contained figure tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryScene {
    next_handle: u64,
    screen: ScreenSize,
    figures: Vec<FigureNode>,
    axes: Vec<AxesNode>,
    lines: Vec<LineNode>,
    texts: Vec<TextNode>,
    legends: Vec<LegendNode>,
    surfaces: Vec<SurfaceNode>,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new(ScreenSize {
            width: 1920.0,
            height: 1080.0,
        })
    }
}

impl MemoryScene {
    /// Create an empty scene on a screen of the given size
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            next_handle: 1,
            screen,
            figures: Vec::new(),
            axes: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
            legends: Vec::new(),
            surfaces: Vec::new(),
        }
    }

    fn allocate(&mut self) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Open a new figure
    pub fn add_figure(&mut self) -> Handle {
        let handle = self.allocate();
        self.figures.push(FigureNode {
            handle,
            current_axes: None,
            style: None,
        });
        handle
    }

    /// Add plotting axes to a figure; the new axes becomes current
    pub fn add_axes(&mut self, figure: Handle, box_on: bool) -> Handle {
        let handle = self.allocate();
        self.axes.push(AxesNode {
            handle,
            figure,
            tag: String::new(),
            box_on,
            legend: None,
            style: None,
        });
        if let Some(fig) = self.figure_mut(figure) {
            fig.current_axes = Some(handle);
        }
        handle
    }

    /// Give focus to an axes without creating anything
    pub fn set_current_axes(&mut self, figure: Handle, axes: Handle) {
        if let Some(fig) = self.figure_mut(figure) {
            fig.current_axes = Some(axes);
        }
    }

    /// Plot a line into an axes
    pub fn add_line(&mut self, axes: Handle) -> Handle {
        let handle = self.allocate();
        self.lines.push(LineNode {
            handle,
            axes,
            style: None,
        });
        handle
    }

    /// Add a text object to a figure
    pub fn add_text(
        &mut self,
        figure: Handle,
        parent_axes: Option<Handle>,
        content: impl Into<String>,
        placement: Placement,
    ) -> Handle {
        let handle = self.allocate();
        self.texts.push(TextNode {
            figure,
            info: TextInfo {
                handle,
                content: content.into(),
                parent_axes,
                rotation_degrees: placement.rotation_degrees,
                horizontal: placement.horizontal,
                vertical: placement.vertical,
                role: None,
            },
            style: None,
        });
        handle
    }

    /// Add a label owned by an axes
    pub fn add_label(
        &mut self,
        axes: Handle,
        content: impl Into<String>,
        placement: Placement,
    ) -> Handle {
        let figure = self
            .axes
            .iter()
            .find(|a| a.handle == axes)
            .map(|a| a.figure)
            .unwrap_or(Handle(0));
        self.add_text(figure, Some(axes), content, placement)
    }

    /// Record the role of a text object explicitly
    pub fn tag_role(&mut self, text: Handle, role: TextRole) {
        if let Some(node) = self.texts.iter_mut().find(|t| t.info.handle == text) {
            node.info.role = Some(role);
        }
    }

    /// Attach a legend to an axes. The legend lives in a tagged container
    /// axes of the same figure.
    pub fn add_legend(&mut self, axes: Handle) -> Handle {
        let handle = self.allocate();
        let figure = self
            .axes
            .iter()
            .find(|a| a.handle == axes)
            .map(|a| a.figure)
            .unwrap_or(Handle(0));
        self.axes.push(AxesNode {
            handle,
            figure,
            tag: LEGEND_TAG.to_string(),
            box_on: true,
            legend: None,
            style: None,
        });
        self.legends.push(LegendNode {
            handle,
            style: None,
        });
        if let Some(owner) = self.axes.iter_mut().find(|a| a.handle == axes) {
            owner.legend = Some(handle);
        }
        handle
    }

    /// Add a surface with the given opacity
    pub fn add_surface(&mut self, axes: Handle, alpha: f64) -> Handle {
        let handle = self.allocate();
        self.surfaces.push(SurfaceNode {
            handle,
            axes,
            alpha,
            refreshed: false,
        });
        handle
    }

    fn figure_mut(&mut self, figure: Handle) -> Option<&mut FigureNode> {
        self.figures.iter_mut().find(|f| f.handle == figure)
    }

    pub fn figure_style(&self, figure: Handle) -> Option<&FigureStyle> {
        self.figures
            .iter()
            .find(|f| f.handle == figure)
            .and_then(|f| f.style.as_ref())
    }

    pub fn axes_style(&self, axes: Handle) -> Option<&AxesStyle> {
        self.axes
            .iter()
            .find(|a| a.handle == axes)
            .and_then(|a| a.style.as_ref())
    }

    pub fn line_style(&self, line: Handle) -> Option<&LineStyleSpec> {
        self.lines
            .iter()
            .find(|l| l.handle == line)
            .and_then(|l| l.style.as_ref())
    }

    pub fn text_style(&self, text: Handle) -> Option<&FontTreatment> {
        self.texts
            .iter()
            .find(|t| t.info.handle == text)
            .and_then(|t| t.style.as_ref())
    }

    pub fn legend_style(&self, legend: Handle) -> Option<&LegendStyle> {
        self.legends
            .iter()
            .find(|l| l.handle == legend)
            .and_then(|l| l.style.as_ref())
    }

    pub fn surface_alpha(&self, surface: Handle) -> Option<f64> {
        self.surfaces
            .iter()
            .find(|s| s.handle == surface)
            .map(|s| s.alpha)
    }

    /// Whether the opacity of a surface has been written
    pub fn surface_refreshed(&self, surface: Handle) -> bool {
        self.surfaces
            .iter()
            .any(|s| s.handle == surface && s.refreshed)
    }

    /// Whether any attribute of any node has been written
    pub fn is_untouched(&self) -> bool {
        self.figures.iter().all(|f| f.style.is_none())
            && self.axes.iter().all(|a| a.style.is_none())
            && self.lines.iter().all(|l| l.style.is_none())
            && self.texts.iter().all(|t| t.style.is_none())
            && self.legends.iter().all(|l| l.style.is_none())
            && self.surfaces.iter().all(|s| !s.refreshed)
    }

    /// Load a scene from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the scene, styles included
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Scene for MemoryScene {
    fn figures(&self) -> Vec<Handle> {
        self.figures.iter().map(|f| f.handle).collect()
    }

    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn set_figure_style(&mut self, figure: Handle, style: &FigureStyle) {
        if let Some(fig) = self.figure_mut(figure) {
            fig.style = Some(*style);
        }
    }

    fn axes(&self, figure: Handle) -> Vec<AxesInfo> {
        self.axes
            .iter()
            .filter(|a| a.figure == figure)
            .map(|a| AxesInfo {
                handle: a.handle,
                tag: a.tag.clone(),
            })
            .collect()
    }

    fn current_axes(&self, figure: Handle) -> Option<Handle> {
        self.figures
            .iter()
            .find(|f| f.handle == figure)
            .and_then(|f| f.current_axes)
    }

    fn box_on(&self, axes: Handle) -> bool {
        self.axes
            .iter()
            .find(|a| a.handle == axes)
            .map(|a| a.box_on)
            .unwrap_or(true)
    }

    fn set_axes_style(&mut self, axes: Handle, style: &AxesStyle) {
        if let Some(node) = self.axes.iter_mut().find(|a| a.handle == axes) {
            node.style = Some(style.clone());
        }
    }

    fn lines(&self, axes: Handle) -> Vec<Handle> {
        self.lines
            .iter()
            .filter(|l| l.axes == axes)
            .map(|l| l.handle)
            .collect()
    }

    fn set_line_style(&mut self, line: Handle, style: &LineStyleSpec) {
        if let Some(node) = self.lines.iter_mut().find(|l| l.handle == line) {
            node.style = Some(*style);
        }
    }

    fn texts(&self, figure: Handle) -> Vec<TextInfo> {
        self.texts
            .iter()
            .filter(|t| t.figure == figure && !t.info.content.is_empty())
            .map(|t| t.info.clone())
            .collect()
    }

    fn set_text_style(&mut self, text: Handle, treatment: &FontTreatment) {
        if let Some(node) = self.texts.iter_mut().find(|t| t.info.handle == text) {
            node.style = Some(treatment.clone());
        }
    }

    fn legend(&self, axes: Handle) -> Option<Handle> {
        self.axes
            .iter()
            .find(|a| a.handle == axes)
            .and_then(|a| a.legend)
    }

    fn set_legend_style(&mut self, legend: Handle, style: &LegendStyle) {
        if let Some(node) = self.legends.iter_mut().find(|l| l.handle == legend) {
            node.style = Some(style.clone());
        }
    }

    fn surfaces(&self) -> Vec<SurfaceInfo> {
        self.surfaces
            .iter()
            .map(|s| SurfaceInfo {
                handle: s.handle,
                alpha: s.alpha,
            })
            .collect()
    }

    fn set_surface_alpha(&mut self, surface: Handle, alpha: f64) {
        if let Some(node) = self.surfaces.iter_mut().find(|s| s.handle == surface) {
            node.alpha = alpha;
            node.refreshed = true;
        }
    }
}
