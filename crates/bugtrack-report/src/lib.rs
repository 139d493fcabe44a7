#![deny(unsafe_code)]

//! Workbook assembly for the bug-tracking template.
//!
//! One entry point, [`write_template`], builds the three-sheet document
//! in a single pass and saves it: the visible tracker sheet, the hidden
//! reference sheet feeding the dropdowns, and the instructions sheet.
//! Reference data is written before the validation rules that point at
//! it.

mod instructions;
mod reference;
mod style;
mod tracker;
mod validation;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use tracing::{debug, info};

use bugtrack_model::{Column, ModuleCatalog};

pub use instructions::{LineStyle, classify_line, render_lines};
pub use reference::DefinedRange;

/// Visible tracking sheet name.
pub const TRACKER_SHEET_NAME: &str = "Bug Reports";

/// Hidden lookup sheet name.
pub const REFERENCE_SHEET_NAME: &str = "Reference";

/// Instructions sheet name.
pub const INSTRUCTIONS_SHEET_NAME: &str = "Instructions";

/// Build options. Defaults reproduce the stock CRM template.
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    /// Template title, used on the instructions sheet.
    pub title: String,
    /// Number of data rows covered by the dropdown rules.
    pub data_rows: u32,
    /// Pre-fill the illustrative sample row.
    pub sample_row: bool,
    /// Include the instructions sheet.
    pub instructions: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            title: "CRM Bug Tracking Template".to_string(),
            data_rows: 999,
            sample_row: true,
            instructions: true,
        }
    }
}

/// What was generated, for the caller's completion summary.
#[derive(Debug, Clone)]
pub struct TemplateSummary {
    pub path: PathBuf,
    pub sheets: Vec<String>,
    pub module_count: usize,
    pub defined_ranges: Vec<String>,
    pub validation_rules: usize,
    pub data_rows: u32,
}

/// Assemble the workbook in memory.
///
/// # Errors
///
/// Fails when the catalog violates its invariants or the underlying
/// writer rejects a cell, name, or rule.
pub fn build_workbook(catalog: &ModuleCatalog, options: &TemplateOptions) -> Result<Workbook> {
    catalog.validate()?;

    let mut workbook = Workbook::new();

    let mut tracker = tracker::build_tracker_sheet(catalog, options)?;
    debug!(columns = Column::ALL.len(), "tracker sheet populated");

    let (reference, ranges) = reference::build_reference_sheet(catalog)?;
    debug!(
        modules = catalog.len(),
        defined_ranges = ranges.len(),
        "reference sheet populated"
    );

    // Reference data exists now; the rules below point into it.
    let rules = validation::apply_validations(&mut tracker, catalog, options)?;
    debug!(rules, data_rows = options.data_rows, "dropdown rules attached");

    workbook.push_worksheet(tracker);
    workbook.push_worksheet(reference);
    if options.instructions {
        workbook.push_worksheet(instructions::build_instructions_sheet(
            catalog,
            &options.title,
        )?);
    }

    for range in &ranges {
        workbook.define_name(&range.name, &range.refers_to)?;
    }

    Ok(workbook)
}

/// Build the workbook and write it to `path`.
pub fn write_template(
    path: &Path,
    catalog: &ModuleCatalog,
    options: &TemplateOptions,
) -> Result<TemplateSummary> {
    let mut workbook = build_workbook(catalog, options)?;
    workbook
        .save(path)
        .with_context(|| format!("write template {}", path.display()))?;
    info!(path = %path.display(), modules = catalog.len(), "template written");
    Ok(summarize(path, catalog, options))
}

/// Summary of a (would-be) build; also used by dry runs.
pub fn summarize(
    path: &Path,
    catalog: &ModuleCatalog,
    options: &TemplateOptions,
) -> TemplateSummary {
    let mut sheets = vec![
        TRACKER_SHEET_NAME.to_string(),
        REFERENCE_SHEET_NAME.to_string(),
    ];
    if options.instructions {
        sheets.push(INSTRUCTIONS_SHEET_NAME.to_string());
    }
    TemplateSummary {
        path: path.to_path_buf(),
        sheets,
        module_count: catalog.len(),
        defined_ranges: catalog.modules.iter().map(|m| m.range_name()).collect(),
        validation_rules: 4 + options.data_rows as usize,
        data_rows: options.data_rows,
    }
}
