//! Instructions sheet: usage guidance, testing checklist, and
//! module-wise testing areas.
//!
//! The text is rendered from the column schema and the catalog, then
//! each line is styled by pattern: numbered steps, the three block
//! headings, and other heading lines (ending with a colon) each get
//! their own format.

use anyhow::Result;
use rust_xlsxwriter::Worksheet;

use bugtrack_model::{Column, ModuleCatalog, Priority, Severity, Status};

use crate::INSTRUCTIONS_SHEET_NAME;
use crate::style;

const HOW_TO_HEADING: &str = "HOW TO USE THIS TEMPLATE:";
const CHECKLIST_HEADING: &str = "TESTING CHECKLIST:";
const AREAS_HEADING: &str = "MODULE-WISE TESTING AREAS:";

const CHECKLIST: [&str; 10] = [
    "Test all CRUD operations (Create, Read, Update, Delete)",
    "Test form validations (required fields, email format, etc.)",
    "Test search and filter functionality",
    "Test on different browsers (Chrome, Safari, Firefox)",
    "Test on different devices (Desktop, Tablet, Mobile)",
    "Test with different user roles (Admin, Manager, Sales, etc.)",
    "Test data consistency across modules",
    "Test error handling and error messages",
    "Test loading states and performance",
    "Test navigation and breadcrumbs",
];

/// Per-line style, keyed off the line's text pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// One of the three top-level block headings.
    BlockHeading,
    /// A numbered instruction step ("3. Reported By: ...").
    NumberedStep,
    /// Any other line ending with a colon that is not a checklist item.
    AreaHeading,
    /// Plain text.
    Body,
}

pub fn classify_line(line: &str) -> LineStyle {
    if line == HOW_TO_HEADING || line == CHECKLIST_HEADING || line == AREAS_HEADING {
        LineStyle::BlockHeading
    } else if is_numbered_step(line) {
        LineStyle::NumberedStep
    } else if line.ends_with(':') && !line.starts_with('☐') {
        LineStyle::AreaHeading
    } else {
        LineStyle::Body
    }
}

fn is_numbered_step(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with(". ")
}

/// Render the guidance lines below the title row.
pub fn render_lines(catalog: &ModuleCatalog) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(String::new());
    lines.push(HOW_TO_HEADING.to_string());
    lines.push(String::new());

    for (i, column) in Column::ALL.iter().enumerate() {
        lines.push(format!("{}. {}: {}", i + 1, column.header(), column.usage()));
        match column {
            Column::Module => {
                for module in &catalog.modules {
                    if module.description.is_empty() {
                        lines.push(format!("   • {}", module.name));
                    } else {
                        lines.push(format!("   • {} - {}", module.name, module.description));
                    }
                }
            }
            Column::Tab => {
                lines.push("   Based on module selected:".to_string());
                for module in &catalog.modules {
                    lines.push(format!("   • {}: {}", module.name, module.sections.join(", ")));
                }
            }
            Column::FieldName => {
                lines.push(
                    "   Examples: 'Product Name', 'Email Field', 'Submit Button', 'Date Picker'"
                        .to_string(),
                );
            }
            Column::Issue => {
                lines.push("   • Be specific and detailed".to_string());
                lines.push("   • Include steps to reproduce if it's a bug".to_string());
                lines.push("   • Include expected vs actual behavior".to_string());
            }
            Column::Priority => {
                for priority in Priority::ALL {
                    lines.push(format!("   • {} - {}", priority, priority.guidance()));
                }
            }
            Column::Severity => {
                for severity in Severity::ALL {
                    lines.push(format!("   • {} - {}", severity, severity.guidance()));
                }
            }
            Column::Status => {
                for status in Status::ALL {
                    lines.push(format!("   • {} - {}", status, status.guidance()));
                }
            }
            _ => {}
        }
        lines.push(String::new());
    }

    lines.push(String::new());
    lines.push(CHECKLIST_HEADING.to_string());
    for item in CHECKLIST {
        lines.push(format!("☐ {item}"));
    }

    lines.push(String::new());
    lines.push(String::new());
    lines.push(AREAS_HEADING.to_string());
    lines.push(String::new());

    let areas: Vec<_> = catalog
        .modules
        .iter()
        .flat_map(|module| module.testing_notes.iter())
        .collect();
    for (i, area) in areas.iter().enumerate() {
        lines.push(format!("{}:", area.heading));
        for point in &area.points {
            lines.push(format!("• {point}"));
        }
        if i + 1 < areas.len() {
            lines.push(String::new());
        }
    }

    lines
}

pub fn build_instructions_sheet(catalog: &ModuleCatalog, title: &str) -> Result<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(INSTRUCTIONS_SHEET_NAME)?;

    sheet.merge_range(
        0,
        0,
        0,
        3,
        &format!("{} - INSTRUCTIONS", title.to_uppercase()),
        &style::title_format(),
    )?;

    let numbered = style::numbered_step_format();
    let block = style::block_heading_format();
    let area = style::area_heading_format();
    for (i, line) in render_lines(catalog).iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let row = i as u32 + 1;
        match classify_line(line) {
            LineStyle::BlockHeading => sheet.write_string_with_format(row, 0, line, &block)?,
            LineStyle::NumberedStep => sheet.write_string_with_format(row, 0, line, &numbered)?,
            LineStyle::AreaHeading => sheet.write_string_with_format(row, 0, line, &area)?,
            LineStyle::Body => sheet.write_string(row, 0, line)?,
        };
    }

    sheet.set_column_width(0, 100.0)?;
    Ok(sheet)
}
