//! Column schema for the tracker sheet.
//!
//! The tracker sheet carries a fixed, ordered set of 14 columns. Each
//! column knows its header text, display width, and the usage line
//! rendered on the instructions sheet.

use std::fmt;

/// A tracker sheet column, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    SerialNumber,
    Date,
    ReportedBy,
    Module,
    Tab,
    FieldName,
    Issue,
    Notes,
    Priority,
    Severity,
    Status,
    AssignedTo,
    ResolutionDate,
    ResolutionNotes,
}

impl Column {
    /// All columns in sheet order.
    pub const ALL: [Column; 14] = [
        Column::SerialNumber,
        Column::Date,
        Column::ReportedBy,
        Column::Module,
        Column::Tab,
        Column::FieldName,
        Column::Issue,
        Column::Notes,
        Column::Priority,
        Column::Severity,
        Column::Status,
        Column::AssignedTo,
        Column::ResolutionDate,
        Column::ResolutionNotes,
    ];

    /// Header text as written on the tracker sheet.
    pub fn header(&self) -> &'static str {
        match self {
            Column::SerialNumber => "S.No",
            Column::Date => "Date",
            Column::ReportedBy => "Reported By",
            Column::Module => "Module/Group",
            Column::Tab => "Tab/Section",
            Column::FieldName => "Field Name",
            Column::Issue => "Issue/Suggestion",
            Column::Notes => "Notes/Comments",
            Column::Priority => "Priority",
            Column::Severity => "Severity",
            Column::Status => "Status",
            Column::AssignedTo => "Assigned To",
            Column::ResolutionDate => "Resolution Date",
            Column::ResolutionNotes => "Resolution Notes",
        }
    }

    /// Display width in character units.
    pub fn width(&self) -> f64 {
        match self {
            Column::SerialNumber => 8.0,
            Column::Date => 12.0,
            Column::ReportedBy => 15.0,
            Column::Module => 20.0,
            Column::Tab => 25.0,
            Column::FieldName => 20.0,
            Column::Issue => 40.0,
            Column::Notes => 35.0,
            Column::Priority => 12.0,
            Column::Severity => 12.0,
            Column::Status => 12.0,
            Column::AssignedTo => 15.0,
            Column::ResolutionDate => 15.0,
            Column::ResolutionNotes => 30.0,
        }
    }

    /// Zero-based sheet column index.
    pub fn index(&self) -> u16 {
        *self as u16
    }

    /// Column letter in A1 notation. The schema stays within A..N.
    pub fn letter(&self) -> char {
        (b'A' + self.index() as u8) as char
    }

    /// Usage line rendered under the column's numbered instruction step.
    pub fn usage(&self) -> &'static str {
        match self {
            Column::SerialNumber => "Sequential number for each bug (1, 2, 3...)",
            Column::Date => "Auto-filled with today's date or enter manually",
            Column::ReportedBy => "Enter your name",
            Column::Module => "Select from dropdown",
            Column::Tab => "Enter the specific tab or section",
            Column::FieldName => "Specific field where issue occurs (if applicable)",
            Column::Issue => "Clear description of the issue or enhancement request",
            Column::Notes => "Additional information, screenshots path, or context",
            Column::Priority => "Select from dropdown",
            Column::Severity => "Select from dropdown",
            Column::Status => "Select from dropdown",
            Column::AssignedTo => "Developer/Team member name (filled by admin)",
            Column::ResolutionDate => "Date when issue was resolved",
            Column::ResolutionNotes => "How the issue was fixed",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourteen_columns_in_order() {
        let headers: Vec<&str> = Column::ALL.iter().map(Column::header).collect();
        assert_eq!(
            headers,
            vec![
                "S.No",
                "Date",
                "Reported By",
                "Module/Group",
                "Tab/Section",
                "Field Name",
                "Issue/Suggestion",
                "Notes/Comments",
                "Priority",
                "Severity",
                "Status",
                "Assigned To",
                "Resolution Date",
                "Resolution Notes",
            ]
        );
    }

    #[test]
    fn test_index_matches_position() {
        for (position, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index() as usize, position);
        }
    }

    #[test]
    fn test_dropdown_column_letters() {
        assert_eq!(Column::Module.letter(), 'D');
        assert_eq!(Column::Tab.letter(), 'E');
        assert_eq!(Column::Priority.letter(), 'I');
        assert_eq!(Column::Severity.letter(), 'J');
        assert_eq!(Column::Status.letter(), 'K');
    }

    #[test]
    fn test_width_table() {
        let widths: Vec<f64> = Column::ALL.iter().map(Column::width).collect();
        assert_eq!(
            widths,
            vec![
                8.0, 12.0, 15.0, 20.0, 25.0, 20.0, 40.0, 35.0, 12.0, 12.0, 12.0, 15.0, 15.0, 30.0
            ]
        );
    }
}
