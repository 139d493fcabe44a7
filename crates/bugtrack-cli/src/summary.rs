use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::types::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    let summary = &result.summary;
    if result.dry_run {
        println!("Dry run: nothing written");
    } else {
        println!("Template: {}", summary.path.display());
    }
    println!("Sheets: {}", summary.sheets.join(", "));
    println!(
        "Modules: {} ({} named ranges)",
        summary.module_count,
        summary.defined_ranges.len()
    );
    println!(
        "Dropdown rules: {} across {} data rows",
        summary.validation_rules, summary.data_rows
    );
    if !result.dry_run {
        println!("Excel template created successfully!");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
