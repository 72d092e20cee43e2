//! Command implementations for the chart tool.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info_span;

use casetrend_cli::pipeline::{self, RunResult};
use casetrend_model::ChartConfig;
use casetrend_render::{ChartRenderer, ImageFormat};

use crate::cli::{ChartArgs, CountriesArgs, ImageFormatArg};
use crate::summary::apply_table_style;

pub fn run_chart(args: &ChartArgs) -> Result<RunResult> {
    let span = info_span!("chart", source = %args.source);
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;
    let format = match args.format {
        ImageFormatArg::Png => ImageFormat::Png,
        ImageFormatArg::Svg => ImageFormat::Svg,
    };
    let mut renderer = ChartRenderer;
    pipeline::run(
        &args.source,
        &config,
        &args.output_dir,
        format,
        &mut renderer,
    )
}

pub fn run_countries(args: &CountriesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let mut table = Table::new();
    table.set_header(vec!["Country", "Population", "Color"]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for country in &config.countries {
        let population = config
            .populations
            .get(country)
            .map(u64::to_string)
            .unwrap_or_else(|| "-".to_string());
        let color = config
            .colors
            .get(country)
            .cloned()
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(country),
            Cell::new(population),
            Cell::new(color),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ChartConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
        }
        None => Ok(ChartConfig::default()),
    }
}
