//! Text role inference
//!
//! Plotting toolkits place axis labels and titles with characteristic
//! rotation and alignment defaults. When a caller has not tagged a text
//! object with its role explicitly, [`classify`] recovers the role from
//! that placement signature. The axes box mode stands in for 2D vs 3D:
//! 2D axes draw their box, 3D axes do not.

use serde::{Deserialize, Serialize};

use crate::colors::Rgb;

/// Angular tolerance when matching rotations, in degrees
const ROTATION_TOLERANCE: f64 = 1e-6;

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    /// Top of capital letters
    Cap,
    Middle,
    Baseline,
    Bottom,
}

/// Plot dimensionality as inferred from the axes box mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimensionality {
    TwoD,
    ThreeD,
}

impl Dimensionality {
    /// Boxed axes are treated as 2D, unboxed as 3D
    pub fn from_box(box_on: bool) -> Self {
        if box_on {
            Dimensionality::TwoD
        } else {
            Dimensionality::ThreeD
        }
    }
}

/// Placement properties used to infer a text object's role
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextRoleSignature {
    pub rotation_degrees: f64,
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    /// Box mode of the axes used for the 2D/3D decision
    pub box_on: bool,
}

impl TextRoleSignature {
    pub fn dimensionality(&self) -> Dimensionality {
        Dimensionality::from_box(self.box_on)
    }

    fn rotated(&self, degrees: f64) -> bool {
        let r = self.rotation_degrees.rem_euclid(360.0);
        let d = (r - degrees).abs();
        d < ROTATION_TOLERANCE || (360.0 - d).abs() < ROTATION_TOLERANCE
    }
}

/// Semantic role of a text object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    XLabel,
    YLabel,
    ZLabel,
    Title,
    /// No rule matched
    Default,
}

impl TextRole {
    pub fn name(&self) -> &'static str {
        match self {
            TextRole::XLabel => "x-label",
            TextRole::YLabel => "y-label",
            TextRole::ZLabel => "z-label",
            TextRole::Title => "title",
            TextRole::Default => "default",
        }
    }
}

/// Infer the role of a text object from its placement signature
///
/// Rules are tried in order and the first match wins:
///
/// | dims | rotation | horizontal | vertical | role    |
/// |------|----------|------------|----------|---------|
/// | 2D   | 0        | center     | cap      | x-label |
/// | 2D   | 90       | center     | bottom   | y-label |
/// | 2D   | 0        | center     | bottom   | title   |
/// | 3D   | 0        | left       | top      | x-label |
/// | 3D   | 0        | right      | top      | y-label |
/// | 3D   | 90       | center     | bottom   | z-label |
/// | 3D   | 0        | center     | bottom   | title   |
pub fn classify(signature: &TextRoleSignature) -> TextRole {
    use Dimensionality::*;
    use HorizontalAlign as H;
    use VerticalAlign as V;

    let upright = signature.rotated(0.0);
    let sideways = signature.rotated(90.0);
    let align = (signature.horizontal, signature.vertical);

    match (signature.dimensionality(), align) {
        (TwoD, (H::Center, V::Cap)) if upright => TextRole::XLabel,
        (TwoD, (H::Center, V::Bottom)) if sideways => TextRole::YLabel,
        (TwoD, (H::Center, V::Bottom)) if upright => TextRole::Title,
        (ThreeD, (H::Left, V::Top)) if upright => TextRole::XLabel,
        (ThreeD, (H::Right, V::Top)) if upright => TextRole::YLabel,
        (ThreeD, (H::Center, V::Bottom)) if sideways => TextRole::ZLabel,
        (ThreeD, (H::Center, V::Bottom)) if upright => TextRole::Title,
        _ => TextRole::Default,
    }
}

/// Font weight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font styling applied to a text object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontTreatment {
    pub color: Rgb,
    pub font_family: String,
    pub weight: FontWeight,
    pub size_px: f64,
}

impl FontTreatment {
    pub fn bold(color: Rgb, font_family: impl Into<String>, size_px: f64) -> Self {
        Self {
            color,
            font_family: font_family.into(),
            weight: FontWeight::Bold,
            size_px,
        }
    }
}

/// One font treatment per role
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontTreatments {
    pub x_label: FontTreatment,
    pub y_label: FontTreatment,
    pub z_label: FontTreatment,
    pub title: FontTreatment,
    pub default: FontTreatment,
}

impl FontTreatments {
    /// Axis labels and unmatched text share `label_size`; titles use
    /// `title_size`. Everything is bold in one color and family.
    pub fn uniform(color: Rgb, font_family: &str, label_size: f64, title_size: f64) -> Self {
        let label = FontTreatment::bold(color, font_family, label_size);
        Self {
            x_label: label.clone(),
            y_label: label.clone(),
            z_label: label.clone(),
            title: FontTreatment::bold(color, font_family, title_size),
            default: label,
        }
    }

    pub fn for_role(&self, role: TextRole) -> &FontTreatment {
        match role {
            TextRole::XLabel => &self.x_label,
            TextRole::YLabel => &self.y_label,
            TextRole::ZLabel => &self.z_label,
            TextRole::Title => &self.title,
            TextRole::Default => &self.default,
        }
    }
}
