//! Line chart rendering with inline series labels.
//!
//! The charts carry no legend. Each series is identified by a bold text
//! label in the series color, placed at the last date and level with the
//! series maximum. The title is drawn inside the plot area above the
//! tallest series, so the y-range reserves fixed headroom for it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use tracing::{debug, warn};

use casetrend_model::{FigureSize, parse_hex_color};
use casetrend_transform::WideTable;

use crate::format_thousands;

const TITLE_FONT_SIZE: i32 = 32;
const LABEL_FONT_SIZE: i32 = 17;
const AXIS_FONT_SIZE: i32 = 16;
const TITLE_ALPHA: f64 = 0.75;
const GRID_COLOR: RGBColor = RGBColor(0xd4, 0xd4, 0xd4);

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Everything one chart invocation needs besides the table itself.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Fixed offset lifting the title above the tallest series value, in
    /// y-axis units.
    pub title_offset: f64,
    pub thousands_separators: bool,
    pub figure: FigureSize,
    pub line_width: u32,
    pub path: PathBuf,
    pub format: ImageFormat,
}

/// Rendering seam for the pipeline.
///
/// Alternative backends (or a recording test double) implement this to
/// replace the static image output without touching label placement policy.
pub trait Renderer {
    fn render(
        &mut self,
        table: &WideTable,
        colors: &BTreeMap<String, String>,
        options: &RenderOptions,
    ) -> Result<()>;
}

/// Static chart renderer backed by plotters.
#[derive(Debug, Default)]
pub struct ChartRenderer;

impl Renderer for ChartRenderer {
    fn render(
        &mut self,
        table: &WideTable,
        colors: &BTreeMap<String, String>,
        options: &RenderOptions,
    ) -> Result<()> {
        if table.is_empty() {
            bail!("no rows to chart for '{}'", options.title);
        }
        let size = (options.figure.width, options.figure.height);
        match options.format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(&options.path, size).into_drawing_area();
                draw_chart(&root, table, colors, options)?;
                root.present()
                    .with_context(|| format!("write {}", options.path.display()))?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(&options.path, size).into_drawing_area();
                draw_chart(&root, table, colors, options)?;
                root.present()
                    .with_context(|| format!("write {}", options.path.display()))?;
            }
        }
        debug!(path = %options.path.display(), "chart written");
        Ok(())
    }
}

fn draw_chart<DB>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    table: &WideTable,
    colors: &BTreeMap<String, String>,
    options: &RenderOptions,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (&first, &last) = match (table.dates().first(), table.dates().last()) {
        (Some(first), Some(last)) => (first, last),
        _ => bail!("cannot chart an empty table"),
    };
    // Degenerate single-day tables still need a non-empty x range.
    let x_end = if last > first {
        last
    } else {
        last.succ_opt().unwrap_or(last)
    };

    let global_max = table.max().unwrap_or(0.0);
    let y_max = (global_max + options.title_offset).max(1.0) * 1.02;

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .margin_right(140)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(first..x_end, 0f64..y_max)?;

    let thousands = |value: &f64| format_thousands(*value);
    let date_labels = |date: &NaiveDate| date.format("%b %d, %Y").to_string();
    let mut mesh = chart.configure_mesh();
    mesh.bold_line_style(&GRID_COLOR)
        .light_line_style(&GRID_COLOR.mix(0.3))
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .label_style(("sans-serif", AXIS_FONT_SIZE))
        .x_label_formatter(&date_labels);
    if options.thousands_separators {
        mesh.y_label_formatter(&thousands);
    }
    mesh.draw()?;

    for country in table.columns() {
        let Some(hex) = colors.get(country) else {
            warn!(country = %country, "no color configured; series omitted");
            continue;
        };
        let (r, g, b) =
            parse_hex_color(hex).with_context(|| format!("invalid color for '{country}'"))?;
        let color = RGBColor(r, g, b);

        // An entirely null column has nothing to draw and nothing to label.
        let Some(peak) = table.column_max(country) else {
            warn!(country = %country, "series has no data; line and label omitted");
            continue;
        };

        let values = table.column_values(country).unwrap_or_default();
        for segment in split_segments(table.dates(), &values) {
            chart.draw_series(LineSeries::new(
                segment,
                color.stroke_width(options.line_width),
            ))?;
        }

        let label_style = FontDesc::new(
            FontFamily::SansSerif,
            f64::from(LABEL_FONT_SIZE),
            FontStyle::Bold,
        )
        .color(&color);
        chart.draw_series(std::iter::once(Text::new(
            country.clone(),
            (last, peak),
            label_style,
        )))?;
    }

    // Title inside the plot area, anchored near the start of the series.
    let title_anchor = if table.dates().len() > 1 {
        table.dates()[1]
    } else {
        first
    };
    let title_style = FontDesc::new(
        FontFamily::SansSerif,
        f64::from(TITLE_FONT_SIZE),
        FontStyle::Bold,
    )
    .color(&BLACK.mix(TITLE_ALPHA));
    chart.draw_series(std::iter::once(Text::new(
        options.title.clone(),
        (title_anchor, global_max + options.title_offset),
        title_style,
    )))?;

    Ok(())
}

/// Split a column into contiguous runs of present values.
///
/// Null cells break the line: a gap in the source stays a gap in the chart
/// rather than being bridged or zero-filled.
fn split_segments(dates: &[NaiveDate], values: &[Option<f64>]) -> Vec<Vec<(NaiveDate, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (date, value) in dates.iter().zip(values) {
        match value {
            Some(value) => current.push((*date, *value)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
