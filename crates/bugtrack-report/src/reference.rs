//! Hidden reference sheet: dropdown source lists and the defined
//! ranges behind the dependent Tab/Section dropdown.
//!
//! Layout: column A holds the module list; one column per module
//! starting at B holds that module's sections; the priority, severity,
//! and status lists sit in the fixed columns M, N, and O. The module
//! cap in the catalog validator keeps the two regions from colliding.

use anyhow::Result;
use rust_xlsxwriter::{Format, Worksheet};

use bugtrack_model::{ModuleCatalog, Priority, Severity, Status};

use crate::REFERENCE_SHEET_NAME;
use crate::style;

/// Column of the module name list.
const MODULE_LIST_COL: u16 = 0;

/// First per-module section column (B).
const FIRST_MODULE_COL: u16 = 1;

/// Fixed option-list columns M, N, O.
const PRIORITY_COL: u16 = 12;
const SEVERITY_COL: u16 = 13;
const STATUS_COL: u16 = 14;

/// A workbook-level defined name and the range it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedRange {
    pub name: String,
    pub refers_to: String,
}

/// Build the hidden reference sheet and the defined range per module.
pub fn build_reference_sheet(catalog: &ModuleCatalog) -> Result<(Worksheet, Vec<DefinedRange>)> {
    let mut sheet = Worksheet::new();
    sheet.set_name(REFERENCE_SHEET_NAME)?;
    sheet.set_hidden(true);

    let heading = style::heading_format();

    sheet.write_string_with_format(0, MODULE_LIST_COL, "Modules", &heading)?;
    for (i, module) in catalog.modules.iter().enumerate() {
        sheet.write_string(i as u32 + 1, MODULE_LIST_COL, &module.name)?;
    }

    let mut ranges = Vec::with_capacity(catalog.len());
    for (i, module) in catalog.modules.iter().enumerate() {
        let col = FIRST_MODULE_COL + i as u16;
        let identifier = module.range_name();
        sheet.write_string_with_format(0, col, &identifier, &heading)?;
        for (row, section) in module.sections.iter().enumerate() {
            sheet.write_string(row as u32 + 1, col, section)?;
        }
        let letter = column_letter(col);
        ranges.push(DefinedRange {
            refers_to: format!(
                "={REFERENCE_SHEET_NAME}!${letter}$2:${letter}${}",
                1 + module.sections.len()
            ),
            name: identifier,
        });
    }

    let priorities: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
    let severities: Vec<&str> = Severity::ALL.iter().map(Severity::as_str).collect();
    let statuses: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
    write_option_list(&mut sheet, PRIORITY_COL, "Priority", &priorities, &heading)?;
    write_option_list(&mut sheet, SEVERITY_COL, "Severity", &severities, &heading)?;
    write_option_list(&mut sheet, STATUS_COL, "Status", &statuses, &heading)?;

    Ok((sheet, ranges))
}

/// A1-style range of one of the fixed option lists, e.g.
/// `=Reference!$M$2:$M$5` for the priority column.
pub fn option_list_range(col: u16, len: usize) -> String {
    let letter = column_letter(col);
    format!("={REFERENCE_SHEET_NAME}!${letter}$2:${letter}${}", 1 + len)
}

/// Range of the module name list in column A.
pub fn module_list_range(len: usize) -> String {
    option_list_range(MODULE_LIST_COL, len)
}

/// Range of the priority list.
pub fn priority_list_range() -> String {
    option_list_range(PRIORITY_COL, Priority::ALL.len())
}

/// Range of the severity list.
pub fn severity_list_range() -> String {
    option_list_range(SEVERITY_COL, Severity::ALL.len())
}

/// Range of the status list.
pub fn status_list_range() -> String {
    option_list_range(STATUS_COL, Status::ALL.len())
}

fn write_option_list(
    sheet: &mut Worksheet,
    col: u16,
    heading_text: &str,
    values: &[&str],
    heading: &Format,
) -> Result<()> {
    sheet.write_string_with_format(0, col, heading_text, heading)?;
    for (i, value) in values.iter().enumerate() {
        sheet.write_string(i as u32 + 1, col, *value)?;
    }
    Ok(())
}

/// Letter name of a zero-based column index.
pub(crate) fn column_letter(col: u16) -> String {
    let mut col = i32::from(col);
    let mut letters = String::new();
    loop {
        letters.insert(0, (b'A' + (col % 26) as u8) as char);
        col = col / 26 - 1;
        if col < 0 {
            break;
        }
    }
    letters
}
