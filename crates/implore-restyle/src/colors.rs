//! Named colors for figure styling
//!
//! The name table is the X11 color list shipped as a data asset
//! (`data/rgb.txt`) and parsed once per process. Lookup is exact and
//! case-sensitive: `RoyalBlue1` exists, `royalblue1` does not.
//!
//! Normalized colors divide each channel by 256, so full intensity maps to
//! 255/256 rather than 1.0. Palettes built here keep that convention.

use std::collections::HashMap;
use std::fmt::Write as _;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};

const RGB_TXT: &str = include_str!("../data/rgb.txt");

lazy_static! {
    static ref GLOBAL_TABLE: ColorTable = ColorTable::parse(RGB_TXT);
}

/// An RGB color with channels in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Create a new color
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Pure white
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Convert to array [r, g, b]
    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb8> for Rgb {
    fn from(c: Rgb8) -> Self {
        Self {
            r: f64::from(c.r) / 256.0,
            g: f64::from(c.g) / 256.0,
            b: f64::from(c.b) / 256.0,
        }
    }
}

/// An RGB color as stored in the name table (0-255 per channel)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Read-only mapping from color names to channels
#[derive(Clone, Debug, Default)]
pub struct ColorTable {
    entries: Vec<(String, Rgb8)>,
    by_name: HashMap<String, usize>,
}

impl ColorTable {
    /// The process-wide table built from the embedded X11 list
    pub fn global() -> &'static ColorTable {
        &GLOBAL_TABLE
    }

    /// Parse a table in `rgb.txt` format: `R G B name`, one per line.
    ///
    /// Lines starting with `!` are comments. Names may contain spaces
    /// (`ghost white`); runs of whitespace inside a name collapse to one
    /// space. Malformed lines are skipped.
    pub fn parse(source: &str) -> Self {
        let mut table = Self::default();

        for (line_no, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let channels: Option<Vec<u8>> = fields
                .by_ref()
                .take(3)
                .map(|f| f.parse::<u8>().ok())
                .collect();
            let name = fields.collect::<Vec<_>>().join(" ");

            match channels {
                Some(c) if c.len() == 3 && !name.is_empty() => {
                    table.insert(name, Rgb8::new(c[0], c[1], c[2]));
                }
                _ => {
                    tracing::warn!(line = line_no + 1, "Skipping malformed color table entry");
                }
            }
        }

        table
    }

    fn insert(&mut self, name: String, color: Rgb8) {
        if self.by_name.contains_key(&name) {
            return;
        }
        self.by_name.insert(name.clone(), self.entries.len());
        self.entries.push((name, color));
    }

    /// Number of named colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All names in table order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Iterate over `(name, channels)` in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb8)> + '_ {
        self.entries.iter().map(|(name, c)| (name.as_str(), *c))
    }

    /// Exact-match lookup of a color name
    pub fn lookup(&self, name: &str) -> ColorResult<Rgb8> {
        self.by_name
            .get(name)
            .map(|&i| self.entries[i].1)
            .ok_or_else(|| ColorError::UnknownName {
                name: name.to_string(),
                valid_names: self.names(),
            })
    }

    /// Lookup of an untyped value; anything but a string is rejected
    /// before the table is searched.
    pub fn lookup_value(&self, value: &serde_json::Value) -> ColorResult<Rgb8> {
        match value {
            serde_json::Value::String(name) => self.lookup(name),
            other => Err(ColorError::MalformedName {
                found: json_kind(other).to_string(),
            }),
        }
    }

    /// Lookup normalized to [0, 1] (channel / 256)
    pub fn rgb(&self, name: &str) -> ColorResult<Rgb> {
        self.lookup(name).map(Rgb::from)
    }

    /// Plain-text reference listing every valid name with its channels
    pub fn help_table(&self) -> String {
        let width = self
            .entries
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{:<width$}  {:>3} {:>3} {:>3}", "name", "R", "G", "B");
        for (name, c) in &self.entries {
            let _ = writeln!(out, "{:<width$}  {:>3} {:>3} {:>3}", name, c.r, c.g, c.b);
        }
        out
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A color as written in configuration: a table name or explicit channels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Name looked up in the color table
    Name(String),

    /// Explicit normalized channels
    Rgb([f64; 3]),

    /// Anything else; rejected when resolved
    Other(serde_json::Value),
}

impl ColorSpec {
    pub fn name(name: impl Into<String>) -> Self {
        ColorSpec::Name(name.into())
    }

    /// Resolve against a table
    pub fn resolve(&self, table: &ColorTable) -> ColorResult<Rgb> {
        match self {
            ColorSpec::Name(name) => table.rgb(name),
            ColorSpec::Rgb(channels) => {
                for (channel, &value) in channels.iter().enumerate() {
                    if !(0.0..=1.0).contains(&value) {
                        return Err(ColorError::ChannelOutOfRange { channel, value });
                    }
                }
                Ok(Rgb::new(channels[0], channels[1], channels[2]))
            }
            ColorSpec::Other(value) => table.lookup_value(value).map(Rgb::from),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}
