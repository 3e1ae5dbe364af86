//! Configuration for the formatting pass
//!
//! A [`FormatConfig`] is plain data: color names, dash patterns, sizes.
//! [`FormatConfig::resolve`] validates it and looks up every color, so all
//! configuration errors surface before any scene is touched.

use serde::{Deserialize, Serialize};

use crate::colors::{ColorSpec, ColorTable};
use crate::cycle::{DashPattern, Palette, StylePattern};
use crate::error::{ConfigError, ConfigResult, RestyleResult};
use crate::role::{FontTreatments, FontWeight};
use crate::scene::{AxesStyle, FontSpec, LegendLocation, LegendStyle, TickDirection};
use crate::walker::{FigurePlacement, Formatter};

/// Which axes decides whether a text object sits on a 2D or 3D plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionSource {
    /// The axes the text belongs to, or the figure's current axes for
    /// figure-level text
    #[default]
    OwningAxes,

    /// Always the figure's current axes. Matches older formatters, where a
    /// label could be judged by a different axes than its own.
    CurrentAxes,
}

/// Complete formatter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Line colors, cycled by line order within each axes
    pub palette: Vec<ColorSpec>,
    /// Dash patterns, cycled independently of the palette
    pub style_pattern: Vec<DashPattern>,
    /// Line width in points
    pub line_width: f64,
    pub dimension_source: DimensionSource,
    /// Re-set opacity on fully opaque surfaces after the pass
    pub normalize_surface_opacity: bool,
    pub figure: FigureConfig,
    pub axes: AxesConfig,
    pub legend: LegendConfig,
    pub text: TextConfig,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            palette: [
                "RoyalBlue1",
                "firebrick3",
                "ForestGreen",
                "DarkOrange2",
                "DarkOrchid3",
                "turquoise4",
                "goldenrod3",
            ]
            .into_iter()
            .map(ColorSpec::from)
            .collect(),
            style_pattern: vec![
                DashPattern::Solid,
                DashPattern::Dashed,
                DashPattern::Dotted,
                DashPattern::DashDot,
            ],
            line_width: 2.0,
            dimension_source: DimensionSource::default(),
            normalize_surface_opacity: true,
            figure: FigureConfig::default(),
            axes: AxesConfig::default(),
            legend: LegendConfig::default(),
            text: TextConfig::default(),
        }
    }
}

/// Figure window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
    /// Gap between the left screen edge and the figure
    pub margin_left: f64,
    /// Gap between the top screen edge and the figure, leaving room for
    /// menu and title bars
    pub margin_top: f64,
    pub background: ColorSpec,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin_left: 5.0,
            margin_top: 85.0,
            background: ColorSpec::Rgb([1.0, 1.0, 1.0]),
        }
    }
}

/// Axes decoration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub grid: bool,
    pub tight_bounds: bool,
    pub tick_length: f64,
    pub axis_color: ColorSpec,
    pub font_family: String,
    pub font_size: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            grid: true,
            tight_bounds: true,
            tick_length: 0.0,
            axis_color: ColorSpec::name("gray40"),
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
        }
    }
}

/// Legend decoration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub font_family: String,
    pub font_size: f64,
    pub text_color: ColorSpec,
    pub border_width: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
            text_color: ColorSpec::name("gray40"),
            border_width: 0.5,
        }
    }
}

/// Label and title fonts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub font_family: String,
    pub color: ColorSpec,
    /// Size of axis labels and unclassified text
    pub label_size: f64,
    pub title_size: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            color: ColorSpec::name("gray30"),
            label_size: 16.0,
            title_size: 18.0,
        }
    }
}

fn require_positive(field: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            message: format!("must be positive, got {}", value),
        })
    }
}

fn require_non_negative(field: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        })
    }
}

impl FormatConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.style_pattern.is_empty() {
            return Err(ConfigError::EmptyStylePattern);
        }

        require_positive("line_width", self.line_width)?;
        require_positive("figure.width", self.figure.width)?;
        require_positive("figure.height", self.figure.height)?;
        require_non_negative("figure.margin_left", self.figure.margin_left)?;
        require_non_negative("figure.margin_top", self.figure.margin_top)?;
        require_non_negative("axes.tick_length", self.axes.tick_length)?;
        require_positive("axes.font_size", self.axes.font_size)?;
        require_positive("legend.font_size", self.legend.font_size)?;
        require_non_negative("legend.border_width", self.legend.border_width)?;
        require_positive("text.label_size", self.text.label_size)?;
        require_positive("text.title_size", self.text.title_size)?;

        Ok(())
    }

    /// Validate, look up every color, and build a formatter
    pub fn resolve(&self, table: &ColorTable) -> RestyleResult<Formatter> {
        self.validate()?;

        let colors = self
            .palette
            .iter()
            .map(|spec| spec.resolve(table))
            .collect::<Result<Vec<_>, _>>()?;
        let palette = Palette::new(colors)?;
        let styles = StylePattern::new(self.style_pattern.clone())?;

        let placement = FigurePlacement {
            width: self.figure.width,
            height: self.figure.height,
            margin_left: self.figure.margin_left,
            margin_top: self.figure.margin_top,
            background: self.figure.background.resolve(table)?,
        };

        let axes_style = AxesStyle {
            grid: self.axes.grid,
            tight_bounds: self.axes.tight_bounds,
            tick_direction: TickDirection::In,
            tick_length: self.axes.tick_length,
            axis_color: self.axes.axis_color.resolve(table)?,
            font: FontSpec {
                family: self.axes.font_family.clone(),
                size_px: self.axes.font_size,
                weight: FontWeight::Normal,
            },
        };

        let legend_style = LegendStyle {
            font: FontSpec {
                family: self.legend.font_family.clone(),
                size_px: self.legend.font_size,
                weight: FontWeight::Normal,
            },
            text_color: self.legend.text_color.resolve(table)?,
            border_width: self.legend.border_width,
            location: LegendLocation::Best,
        };

        let fonts = FontTreatments::uniform(
            self.text.color.resolve(table)?,
            &self.text.font_family,
            self.text.label_size,
            self.text.title_size,
        );

        Ok(Formatter {
            palette,
            styles,
            line_width: self.line_width,
            placement,
            axes_style,
            legend_style,
            fonts,
            dimension_source: self.dimension_source,
            normalize_surface_opacity: self.normalize_surface_opacity,
        })
    }
}
