//! The formatting pass
//!
//! [`Formatter::format`] walks a scene once, top to bottom:
//!
//! 1. figures in creation order: placement and background
//! 2. plotting axes of each figure in creation order (legend containers
//!    skipped): decoration, then each line's color and dash pattern by its
//!    position in the axes, then the legend
//! 3. text objects of each figure in creation order: role, then font
//! 4. once at the end, fully opaque surfaces get their opacity re-set
//!
//! Every write is an absolute value, so formatting an unchanged scene a
//! second time changes nothing.

use std::num::NonZeroUsize;

use crate::colors::{ColorTable, Rgb};
use crate::config::{DimensionSource, FormatConfig};
use crate::cycle::{LineStyleSpec, Palette, StylePattern};
use crate::error::RestyleResult;
use crate::role::{classify, FontTreatments, TextRole, TextRoleSignature};
use crate::scene::{
    AxesInfo, AxesStyle, FigureStyle, Handle, LegendStyle, Scene, ScreenSize, TextInfo,
};

/// Where figure windows go on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigurePlacement {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_top: f64,
    pub background: Rgb,
}

impl FigurePlacement {
    /// Anchor a figure to the top-left corner of the screen.
    ///
    /// Positions are measured from the bottom-left, so the top margin is
    /// converted into a bottom offset. On a screen too short for the figure
    /// the offset is clamped to 0, keeping the bottom edge on screen.
    pub fn style_for(&self, screen: ScreenSize) -> FigureStyle {
        FigureStyle {
            left: self.margin_left,
            bottom: (screen.height - self.height - self.margin_top).max(0.0),
            width: self.width,
            height: self.height,
            background: self.background,
        }
    }
}

/// Counts of what one pass touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub figures: usize,
    pub axes: usize,
    pub lines: usize,
    pub texts: usize,
    pub legends: usize,
    pub surfaces: usize,
}

/// Restyles scenes with one fixed configuration
///
/// Built from a [`FormatConfig`]; once built it cannot fail and can be
/// shared between passes over independent scenes.
#[derive(Debug, Clone)]
pub struct Formatter {
    pub(crate) palette: Palette,
    pub(crate) styles: StylePattern,
    pub(crate) line_width: f64,
    pub(crate) placement: FigurePlacement,
    pub(crate) axes_style: AxesStyle,
    pub(crate) legend_style: LegendStyle,
    pub(crate) fonts: FontTreatments,
    pub(crate) dimension_source: DimensionSource,
    pub(crate) normalize_surface_opacity: bool,
}

impl Formatter {
    /// Formatter for the default configuration and the built-in color table
    pub fn with_defaults() -> RestyleResult<Self> {
        FormatConfig::default().resolve(ColorTable::global())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn style_pattern(&self) -> &StylePattern {
        &self.styles
    }

    pub fn fonts(&self) -> &FontTreatments {
        &self.fonts
    }

    pub fn dimension_source(&self) -> DimensionSource {
        self.dimension_source
    }

    /// Style for the line at `ordinal` (1-based) within its axes
    pub fn line_style(&self, ordinal: NonZeroUsize) -> LineStyleSpec {
        LineStyleSpec::for_ordinal(ordinal, &self.palette, &self.styles, self.line_width)
    }

    /// Restyle every figure in the scene
    pub fn format<S: Scene + ?Sized>(&self, scene: &mut S) {
        let summary = self.format_with_summary(scene);
        tracing::info!(
            figures = summary.figures,
            axes = summary.axes,
            lines = summary.lines,
            texts = summary.texts,
            legends = summary.legends,
            surfaces = summary.surfaces,
            "Formatting pass complete"
        );
    }

    /// Restyle every figure and report what was touched
    pub fn format_with_summary<S: Scene + ?Sized>(&self, scene: &mut S) -> PassSummary {
        let mut summary = PassSummary::default();

        let mut figures = scene.figures();
        figures.sort();

        for figure in figures {
            self.format_figure(scene, figure, &mut summary);
        }

        if self.normalize_surface_opacity {
            self.normalize_surfaces(scene, &mut summary);
        }

        summary
    }

    fn format_figure<S: Scene + ?Sized>(
        &self,
        scene: &mut S,
        figure: Handle,
        summary: &mut PassSummary,
    ) {
        tracing::debug!(%figure, "Formatting figure");
        summary.figures += 1;

        let style = self.placement.style_for(scene.screen_size());
        scene.set_figure_style(figure, &style);

        let mut axes: Vec<Handle> = scene
            .axes(figure)
            .into_iter()
            .filter(AxesInfo::is_plot_axes)
            .map(|a| a.handle)
            .collect();
        axes.sort();

        for ax in axes {
            self.format_axes(scene, ax, summary);
        }

        self.format_texts(scene, figure, summary);
    }

    fn format_axes<S: Scene + ?Sized>(
        &self,
        scene: &mut S,
        axes: Handle,
        summary: &mut PassSummary,
    ) {
        summary.axes += 1;
        scene.set_axes_style(axes, &self.axes_style);

        let mut lines = scene.lines(axes);
        lines.sort();
        tracing::debug!(%axes, lines = lines.len(), "Formatting axes");

        for (i, line) in lines.into_iter().enumerate() {
            let ordinal = NonZeroUsize::MIN.saturating_add(i);
            let style = self.line_style(ordinal);
            tracing::trace!(%line, ordinal = ordinal.get(), dash = ?style.dash, "Styling line");
            scene.set_line_style(line, &style);
            summary.lines += 1;
        }

        if let Some(legend) = scene.legend(axes) {
            scene.set_legend_style(legend, &self.legend_style);
            summary.legends += 1;
        }
    }

    fn format_texts<S: Scene + ?Sized>(
        &self,
        scene: &mut S,
        figure: Handle,
        summary: &mut PassSummary,
    ) {
        let current = scene.current_axes(figure);

        let mut texts = scene.texts(figure);
        texts.sort_by_key(|t| t.handle);

        for text in texts.iter().filter(|t| !t.content.trim().is_empty()) {
            let role = self.role_of(&*scene, text, current);
            tracing::trace!(text = %text.handle, role = role.name(), "Styling text");
            scene.set_text_style(text.handle, self.fonts.for_role(role));
            summary.texts += 1;
        }
    }

    /// Explicit role if the caller set one, otherwise inferred from placement
    fn role_of<S: Scene + ?Sized>(
        &self,
        scene: &S,
        text: &TextInfo,
        current: Option<Handle>,
    ) -> TextRole {
        if let Some(role) = text.role {
            return role;
        }
        classify(&self.signature(scene, text, current))
    }

    /// Placement signature of a text object, with the box mode taken from
    /// the axes selected by the dimension source. Text with no axes to
    /// consult is treated as 2D.
    pub fn signature<S: Scene + ?Sized>(
        &self,
        scene: &S,
        text: &TextInfo,
        current: Option<Handle>,
    ) -> TextRoleSignature {
        let axes = match self.dimension_source {
            DimensionSource::OwningAxes => text.parent_axes.or(current),
            DimensionSource::CurrentAxes => current,
        };

        TextRoleSignature {
            rotation_degrees: text.rotation_degrees,
            horizontal: text.horizontal,
            vertical: text.vertical,
            box_on: axes.map(|a| scene.box_on(a)).unwrap_or(true),
        }
    }

    fn normalize_surfaces<S: Scene + ?Sized>(&self, scene: &mut S, summary: &mut PassSummary) {
        let mut surfaces = scene.surfaces();
        surfaces.sort_by_key(|s| s.handle);

        for surface in surfaces {
            if (surface.alpha - 1.0).abs() < f64::EPSILON {
                scene.set_surface_alpha(surface.handle, 1.0);
                summary.surfaces += 1;
            }
        }
    }
}

/// Format every open figure with the default configuration
pub fn format_all<S: Scene + ?Sized>(scene: &mut S) -> RestyleResult<()> {
    Formatter::with_defaults()?.format(scene);
    Ok(())
}
