//! Run summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use casetrend_cli::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Source: {}", result.source);
    let mut table = Table::new();
    table.set_header(vec!["Records", "Selected", "Dates", "Countries", "Charts"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        result.records.to_string(),
        result.selected.to_string(),
        result.dates.to_string(),
        result.countries.join(", "),
        result
            .outputs
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    ]);
    println!("{table}");
    if !result.missing_countries.is_empty() {
        println!(
            "Not in source data: {}",
            result.missing_countries.join(", ")
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
