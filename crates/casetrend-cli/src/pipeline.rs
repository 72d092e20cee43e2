//! Chart pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: fetch the source resource and parse it into records
//! 2. **Select**: filter to the configured countries and derive totals
//! 3. **Reshape**: pivot to the wide table, derive the per-capita view
//! 4. **Render**: draw the absolute chart, then the per-capita chart
//!
//! Each stage takes the previous stage's output as its only input, so every
//! stage is unit-testable in isolation and the whole run is a pure function
//! of source data and configuration.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use casetrend_ingest::load_records;
use casetrend_model::ChartConfig;
use casetrend_render::{ImageFormat, RenderOptions, Renderer};
use casetrend_transform::{WideTable, filter_and_aggregate, per_capita, pivot};

/// Both charts share the date axis.
const X_LABEL: &str = "Date";

/// Result of a full chart run.
#[derive(Debug)]
pub struct RunResult {
    pub source: String,
    /// Rows parsed from the source.
    pub records: usize,
    /// Rows kept after country selection.
    pub selected: usize,
    /// Distinct dates in the wide table.
    pub dates: usize,
    /// Country columns in table order.
    pub countries: Vec<String>,
    /// Configured countries that never appeared in the data.
    pub missing_countries: Vec<String>,
    /// Chart files written, in render order.
    pub outputs: Vec<PathBuf>,
}

/// Run the full pipeline against `source`, writing both charts via
/// `renderer`.
pub fn run(
    source: &str,
    config: &ChartConfig,
    output_dir: &Path,
    format: ImageFormat,
    renderer: &mut dyn Renderer,
) -> Result<RunResult> {
    config.validate().context("invalid configuration")?;

    // =========================================================================
    // Stage 1: Load
    // =========================================================================
    let records = {
        let span = info_span!("load", source);
        let _guard = span.enter();
        let start = Instant::now();
        let records = load_records(source).context("load source data")?;
        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "load complete"
        );
        records
    };
    info!(records = records.len(), "loaded source records");

    // =========================================================================
    // Stage 2: Select
    // =========================================================================
    let selected = {
        let span = info_span!("select");
        let _guard = span.enter();
        filter_and_aggregate(&records, &config.countries)
    };
    info!(selected = selected.len(), "selected configured countries");

    // =========================================================================
    // Stage 3: Reshape
    // =========================================================================
    let (wide, capita) = {
        let span = info_span!("reshape");
        let _guard = span.enter();
        let wide = pivot(&selected).context("pivot records")?;
        let capita = per_capita(&wide, &config.populations).context("derive per-capita table")?;
        (wide, capita)
    };
    let missing_countries = missing_countries(&config.countries, &wide);
    for country in &missing_countries {
        warn!(country = %country, "configured country absent from source data");
    }
    info!(
        dates = wide.height(),
        countries = wide.columns().len(),
        "reshaped into wide tables"
    );

    // =========================================================================
    // Stage 4: Render
    // =========================================================================
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let charts = [
        (&wide, &config.absolute, "cases"),
        (&capita, &config.per_capita, "cases_per_100k"),
    ];
    let mut outputs = Vec::with_capacity(charts.len());
    for (table, style, slug) in charts {
        let span = info_span!("render", chart = slug);
        let _guard = span.enter();
        let path = output_dir.join(format!("{slug}.{}", format.extension()));
        let options = RenderOptions {
            title: style.title.clone(),
            x_label: X_LABEL.to_string(),
            y_label: style.y_label.clone(),
            title_offset: style.title_offset,
            thousands_separators: style.thousands_separators,
            figure: config.figure,
            line_width: config.line_width,
            path: path.clone(),
            format,
        };
        renderer
            .render(table, &config.colors, &options)
            .with_context(|| format!("render {}", path.display()))?;
        outputs.push(path);
    }
    info!(charts = outputs.len(), "charts written");

    Ok(RunResult {
        source: source.to_string(),
        records: records.len(),
        selected: selected.len(),
        dates: wide.height(),
        countries: wide.columns().to_vec(),
        missing_countries,
        outputs,
    })
}

fn missing_countries(configured: &[String], table: &WideTable) -> Vec<String> {
    let present: BTreeSet<&str> = table.columns().iter().map(String::as_str).collect();
    configured
        .iter()
        .filter(|country| !present.contains(country.as_str()))
        .cloned()
        .collect()
}
