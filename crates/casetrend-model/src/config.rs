//! Chart and pipeline configuration.
//!
//! The country allowlist, population table, color table, and per-chart style
//! blocks are configuration data rather than code: a JSON file deserializes
//! into [`ChartConfig`], and [`ChartConfig::default`] reproduces the
//! reference run (Netherlands, Belgium, United Kingdom, US).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration problems caught before the pipeline starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("country list is empty")]
    NoCountries,
    #[error("figure size must be non-zero, got {width}x{height}")]
    ZeroFigure { width: u32, height: u32 },
    #[error("line width must be non-zero")]
    ZeroLineWidth,
    #[error("invalid color '{value}' for country '{country}' (expected #rrggbb)")]
    InvalidColor { country: String, value: String },
}

/// Style block for one rendered chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    pub title: String,
    /// Y-axis description; the x-axis is always the date.
    pub y_label: String,
    /// Fixed vertical offset lifting the title above the tallest series
    /// value, in y-axis units. Tuned per chart scale, not derived from data.
    pub title_offset: f64,
    /// Format y-axis tick labels with thousands separators.
    #[serde(default)]
    pub thousands_separators: bool,
}

/// Output image dimensions in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

/// Full configuration for a chart run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Ordered allowlist of countries to select from the source data.
    ///
    /// This order drives selection only; the wide table's column order is
    /// captured from the pivot and may differ.
    pub countries: Vec<String>,
    /// Population per country, the per-capita denominator.
    pub populations: BTreeMap<String, u64>,
    /// Display color per country as a `#rrggbb` hex string, shared by both
    /// charts.
    pub colors: BTreeMap<String, String>,
    #[serde(default = "default_figure")]
    pub figure: FigureSize,
    #[serde(default = "default_line_width")]
    pub line_width: u32,
    /// Style of the absolute-cases chart.
    pub absolute: ChartStyle,
    /// Style of the cases-per-100,000 chart.
    pub per_capita: ChartStyle,
}

fn default_figure() -> FigureSize {
    FigureSize {
        width: 2000,
        height: 800,
    }
}

fn default_line_width() -> u32 {
    1
}

impl ChartConfig {
    /// Check structural invariants that every run depends on.
    ///
    /// Population coverage is intentionally not checked here; the per-capita
    /// derivation reports a missing denominator against the columns that
    /// actually materialize.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countries.is_empty() {
            return Err(ConfigError::NoCountries);
        }
        if self.figure.width == 0 || self.figure.height == 0 {
            return Err(ConfigError::ZeroFigure {
                width: self.figure.width,
                height: self.figure.height,
            });
        }
        if self.line_width == 0 {
            return Err(ConfigError::ZeroLineWidth);
        }
        for (country, value) in &self.colors {
            if parse_hex_color(value).is_none() {
                return Err(ConfigError::InvalidColor {
                    country: country.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            countries: vec![
                "Netherlands".to_string(),
                "Belgium".to_string(),
                "United Kingdom".to_string(),
                "US".to_string(),
            ],
            populations: BTreeMap::from([
                ("Netherlands".to_string(), 17_231_624),
                ("Belgium".to_string(), 11_433_256),
                ("United Kingdom".to_string(), 67_802_690),
                ("US".to_string(), 330_548_815),
            ]),
            colors: BTreeMap::from([
                ("Belgium".to_string(), "#045275".to_string()),
                ("Netherlands".to_string(), "#089099".to_string()),
                ("US".to_string(), "#DC3977".to_string()),
                ("United Kingdom".to_string(), "#7C1D6F".to_string()),
            ]),
            figure: default_figure(),
            line_width: default_line_width(),
            absolute: ChartStyle {
                title: "COVID-19 Cases by Country".to_string(),
                y_label: "# of Cases".to_string(),
                title_offset: 45_000.0,
                thousands_separators: true,
            },
            per_capita: ChartStyle {
                title: "Per Capita COVID-19 Cases by Country".to_string(),
                y_label: "# of Cases per 100,000 People".to_string(),
                title_offset: 25.0,
                thousands_separators: false,
            },
        }
    }
}

/// Parse a `#rrggbb` hex color into RGB components.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
