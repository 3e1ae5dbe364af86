//! Cyclic assignment of line colors and dash patterns
//!
//! Line `n` of an axes (1-based, creation order) takes entry `n` of the
//! palette and entry `n` of the style pattern, wrapping around when `n`
//! passes the end. The two sequences wrap independently, so with 7 colors
//! and 4 dash patterns the combined look repeats every 28 lines.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::colors::Rgb;
use crate::error::{ConfigError, ConfigResult};

/// 1-based position of `ordinal` in a sequence of length `len`
///
/// Ordinals up to `len` map to themselves; beyond that the index is
/// `ordinal mod len`, with a zero remainder mapping to `len`.
pub fn cyclic_index(ordinal: NonZeroUsize, len: NonZeroUsize) -> usize {
    let (ordinal, len) = (ordinal.get(), len.get());
    if ordinal <= len {
        return ordinal;
    }
    match ordinal % len {
        0 => len,
        rem => rem,
    }
}

/// Pick the entry for `ordinal` from a slice, wrapping around
///
/// Returns `None` only when the slice is empty.
pub fn pick<T>(ordinal: NonZeroUsize, sequence: &[T]) -> Option<&T> {
    let len = NonZeroUsize::new(sequence.len())?;
    sequence.get(cyclic_index(ordinal, len) - 1)
}

/// A non-empty ordered sequence indexed by 1-based wrapping ordinals
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cycle<T> {
    items: Vec<T>,
}

impl<T> Cycle<T> {
    /// Wrap a sequence, or `None` if it is empty
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Entry for `ordinal`
    pub fn pick(&self, ordinal: NonZeroUsize) -> &T {
        let index = cyclic_index(ordinal, self.period());
        &self.items[index - 1]
    }

    /// Number of entries before the sequence repeats
    pub fn period(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// Line dash pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashPattern {
    Solid,
    Dashed,
    Dotted,
    #[serde(alias = "dash-dot")]
    DashDot,
}

impl DashPattern {
    /// Conventional line-spec token for this pattern
    pub fn token(&self) -> &'static str {
        match self {
            DashPattern::Solid => "-",
            DashPattern::Dashed => "--",
            DashPattern::Dotted => ":",
            DashPattern::DashDot => "-.",
        }
    }
}

/// Ordered line colors
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette(Cycle<Rgb>);

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> ConfigResult<Self> {
        Cycle::new(colors).map(Self).ok_or(ConfigError::EmptyPalette)
    }

    pub fn pick(&self, ordinal: NonZeroUsize) -> Rgb {
        *self.0.pick(ordinal)
    }

    /// Number of entries before the sequence repeats
    pub fn period(&self) -> NonZeroUsize {
        self.0.period()
    }

    pub fn colors(&self) -> &[Rgb] {
        self.0.as_slice()
    }
}

/// Ordered dash patterns
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StylePattern(Cycle<DashPattern>);

impl StylePattern {
    pub fn new(patterns: Vec<DashPattern>) -> ConfigResult<Self> {
        Cycle::new(patterns)
            .map(Self)
            .ok_or(ConfigError::EmptyStylePattern)
    }

    pub fn pick(&self, ordinal: NonZeroUsize) -> DashPattern {
        *self.0.pick(ordinal)
    }

    /// Number of entries before the sequence repeats
    pub fn period(&self) -> NonZeroUsize {
        self.0.period()
    }

    pub fn patterns(&self) -> &[DashPattern] {
        self.0.as_slice()
    }
}

impl Default for StylePattern {
    fn default() -> Self {
        Self(Cycle {
            items: vec![
                DashPattern::Solid,
                DashPattern::Dashed,
                DashPattern::Dotted,
                DashPattern::DashDot,
            ],
        })
    }
}

/// Style applied to one plotted line
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyleSpec {
    pub color: Rgb,
    pub dash: DashPattern,
    pub width: f64,
}

impl LineStyleSpec {
    /// Style for the line at `ordinal` within its axes
    pub fn for_ordinal(
        ordinal: NonZeroUsize,
        palette: &Palette,
        styles: &StylePattern,
        width: f64,
    ) -> Self {
        Self {
            color: palette.pick(ordinal),
            dash: styles.pick(ordinal),
            width,
        }
    }
}
