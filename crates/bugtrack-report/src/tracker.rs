//! Main tracking sheet: styled header row, column widths, the sample
//! row, and the view conveniences (frozen header, auto-filter).

use anyhow::Result;
use rust_xlsxwriter::Worksheet;

use bugtrack_model::{Column, ModuleCatalog, Priority, Severity, Status};

use crate::{TRACKER_SHEET_NAME, TemplateOptions};
use crate::style;

pub fn build_tracker_sheet(catalog: &ModuleCatalog, options: &TemplateOptions) -> Result<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(TRACKER_SHEET_NAME)?;

    let header = style::header_format();
    for column in Column::ALL {
        sheet.write_string_with_format(0, column.index(), column.header(), &header)?;
        sheet.set_column_width(column.index(), column.width())?;
    }

    if options.sample_row {
        write_sample_row(&mut sheet, catalog)?;
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.autofilter(0, 0, 0, Column::ALL.len() as u16 - 1)?;

    Ok(sheet)
}

/// Illustrative first data row. The module and section come from the
/// catalog so the row always satisfies its own dropdowns.
fn write_sample_row(sheet: &mut Worksheet, catalog: &ModuleCatalog) -> Result<()> {
    let module = &catalog.modules[0];
    let section = module.sections[0].as_str();

    sheet.write_number(1, Column::SerialNumber.index(), 1)?;
    sheet.write_formula_with_format(1, Column::Date.index(), "=TODAY()", &style::date_format())?;
    sheet.write_string(1, Column::ReportedBy.index(), "Tester Name")?;
    sheet.write_string(1, Column::Module.index(), &module.name)?;
    sheet.write_string(1, Column::Tab.index(), section)?;
    sheet.write_string(1, Column::FieldName.index(), "Revenue Card")?;
    sheet.write_string(
        1,
        Column::Issue.index(),
        "Revenue not displaying correctly",
    )?;
    sheet.write_string(
        1,
        Column::Notes.index(),
        "Format issue with currency display",
    )?;
    sheet.write_string(1, Column::Priority.index(), Priority::Medium.as_str())?;
    sheet.write_string(1, Column::Severity.index(), Severity::Minor.as_str())?;
    sheet.write_string(1, Column::Status.index(), Status::Open.as_str())?;
    Ok(())
}
