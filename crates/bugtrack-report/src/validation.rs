//! Dropdown constraints on the tracker sheet.
//!
//! The module, priority, severity, and status columns each get one
//! list rule over the whole data range, sourced from the reference
//! sheet. The Tab/Section column gets one rule per data row: its
//! allowed list is resolved from that row's own module value via the
//! derived defined name, so the rule formula differs per row.

use anyhow::Result;
use rust_xlsxwriter::{DataValidation, Formula, Worksheet};

use bugtrack_model::{Column, ModuleCatalog, RANGE_NAME_SUFFIX};

use crate::TemplateOptions;
use crate::reference;

/// First data row (zero-based); row 0 is the header.
const FIRST_DATA_ROW: u32 = 1;

/// Attach all dropdown rules. Returns the number of rules written.
pub fn apply_validations(
    sheet: &mut Worksheet,
    catalog: &ModuleCatalog,
    options: &TemplateOptions,
) -> Result<usize> {
    let last_row = options.data_rows;

    let module_rule = list_rule(
        reference::module_list_range(catalog.len()),
        "Invalid Module",
        "Please select a module from the list",
    )?;
    let column = Column::Module.index();
    sheet.add_data_validation(FIRST_DATA_ROW, column, last_row, column, &module_rule)?;

    let priority_rule = list_rule(
        reference::priority_list_range(),
        "Invalid Priority",
        "Please select a priority from the list",
    )?;
    let column = Column::Priority.index();
    sheet.add_data_validation(FIRST_DATA_ROW, column, last_row, column, &priority_rule)?;

    let severity_rule = list_rule(
        reference::severity_list_range(),
        "Invalid Severity",
        "Please select a severity from the list",
    )?;
    let column = Column::Severity.index();
    sheet.add_data_validation(FIRST_DATA_ROW, column, last_row, column, &severity_rule)?;

    let status_rule = list_rule(
        reference::status_list_range(),
        "Invalid Status",
        "Please select a status from the list",
    )?;
    let column = Column::Status.index();
    sheet.add_data_validation(FIRST_DATA_ROW, column, last_row, column, &status_rule)?;

    let column = Column::Tab.index();
    for row in FIRST_DATA_ROW..=last_row {
        let tab_rule = DataValidation::new()
            .allow_list_formula(Formula::new(tab_rule_formula(row + 1)))
            .set_error_title("Invalid Tab")?
            .set_error_message("Please select a valid tab for the chosen module")?;
        sheet.add_data_validation(row, column, row, column, &tab_rule)?;
    }

    Ok(4 + last_row as usize)
}

/// List rule with blanks rejected and a custom error dialog.
fn list_rule(source: String, title: &str, message: &str) -> Result<DataValidation> {
    Ok(DataValidation::new()
        .allow_list_formula(Formula::new(source))
        .ignore_blank(false)
        .set_error_title(title)?
        .set_error_message(message)?)
}

/// Dependent list source for one data row: resolve the defined name
/// derived from that row's module cell.
fn tab_rule_formula(excel_row: u32) -> String {
    let module_letter = Column::Module.letter();
    format!(r#"=INDIRECT(SUBSTITUTE({module_letter}{excel_row}," ","_")&"{RANGE_NAME_SUFFIX}")"#)
}
