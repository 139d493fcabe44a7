//! Raw-part checks on the produced package: defined names, sheet
//! visibility, and the data-validation metadata a value reader does
//! not expose.

use std::io::{Cursor, Read};

use quick_xml::Reader as XmlReader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

use bugtrack_model::ModuleCatalog;
use bugtrack_report::{TemplateOptions, build_workbook};

fn workbook_bytes(options: &TemplateOptions) -> Vec<u8> {
    let catalog = ModuleCatalog::crm_default();
    let mut workbook = build_workbook(&catalog, options).unwrap();
    workbook.save_to_buffer().unwrap()
}

fn part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    contents
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element
        .try_get_attribute(name)
        .unwrap()
        .map(|attr| attr.unescape_value().unwrap().into_owned())
}

#[derive(Debug, Default)]
struct Validation {
    sqref: String,
    allow_blank: Option<String>,
    error_title: Option<String>,
    error: Option<String>,
    formula1: String,
}

/// Pull every dataValidation element out of a worksheet part.
fn parse_validations(xml: &str) -> Vec<Validation> {
    let mut reader = XmlReader::from_str(xml);
    let mut validations: Vec<Validation> = Vec::new();
    let mut in_formula1 = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Eof => break,
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"dataValidation" => validations.push(Validation {
                    sqref: attribute(&e, "sqref").unwrap_or_default(),
                    allow_blank: attribute(&e, "allowBlank"),
                    error_title: attribute(&e, "errorTitle"),
                    error: attribute(&e, "error"),
                    formula1: String::new(),
                }),
                b"formula1" => in_formula1 = true,
                _ => {}
            },
            Event::Text(text) if in_formula1 => {
                if let Some(validation) = validations.last_mut() {
                    validation.formula1 = text.xml_content().unwrap().into_owned();
                }
            }
            Event::End(e) if e.name().as_ref() == b"formula1" => in_formula1 = false,
            _ => {}
        }
    }
    validations
}

/// Pull (name, refers-to) pairs out of the workbook part.
fn parse_defined_names(xml: &str) -> Vec<(String, String)> {
    let mut reader = XmlReader::from_str(xml);
    let mut names: Vec<(String, String)> = Vec::new();
    let mut in_defined_name = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Eof => break,
            Event::Start(e) if e.name().as_ref() == b"definedName" => {
                names.push((attribute(&e, "name").unwrap_or_default(), String::new()));
                in_defined_name = true;
            }
            Event::Text(text) if in_defined_name => {
                if let Some(entry) = names.last_mut() {
                    entry.1 = text.xml_content().unwrap().into_owned();
                }
            }
            Event::End(e) if e.name().as_ref() == b"definedName" => in_defined_name = false,
            _ => {}
        }
    }
    names
}

#[test]
fn workbook_part_defines_one_range_per_module() {
    let bytes = workbook_bytes(&TemplateOptions::default());
    let names = parse_defined_names(&part(&bytes, "xl/workbook.xml"));
    let catalog = ModuleCatalog::crm_default();

    assert_eq!(names.len(), catalog.len());
    let dashboard = names.iter().find(|(n, _)| n == "Dashboard_Tabs").unwrap();
    assert!(
        dashboard.1.ends_with("!$B$2:$B$6"),
        "unexpected refers-to {:?}",
        dashboard.1
    );
    let admin = names.iter().find(|(n, _)| n == "Admin_Tabs").unwrap();
    assert!(admin.1.ends_with("!$J$2:$J$6"));
    for module in &catalog.modules {
        assert!(
            names.iter().any(|(n, _)| *n == module.range_name()),
            "missing defined name for {}",
            module.name
        );
    }
}

#[test]
fn reference_sheet_is_hidden() {
    let bytes = workbook_bytes(&TemplateOptions::default());
    let workbook_xml = part(&bytes, "xl/workbook.xml");

    let mut reader = XmlReader::from_str(&workbook_xml);
    let mut states: Vec<(String, Option<String>)> = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Eof => break,
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"sheet" => {
                states.push((
                    attribute(&e, "name").unwrap_or_default(),
                    attribute(&e, "state"),
                ));
            }
            _ => {}
        }
    }

    assert_eq!(states.len(), 3);
    assert_eq!(states[0].0, "Bug Reports");
    assert_ne!(states[0].1.as_deref(), Some("hidden"));
    assert_eq!(states[1].0, "Reference");
    assert_eq!(states[1].1.as_deref(), Some("hidden"));
    assert_ne!(states[2].1.as_deref(), Some("hidden"));
}

#[test]
fn tracker_sheet_carries_all_dropdown_rules() {
    let bytes = workbook_bytes(&TemplateOptions::default());
    let validations = parse_validations(&part(&bytes, "xl/worksheets/sheet1.xml"));

    // 4 whole-column rules plus one Tab/Section rule per data row.
    assert_eq!(validations.len(), 1003);

    let module = validations.iter().find(|v| v.sqref == "D2:D1000").unwrap();
    assert!(module.formula1.ends_with("!$A$2:$A$10"));
    assert_ne!(module.allow_blank.as_deref(), Some("1"));
    assert_eq!(module.error_title.as_deref(), Some("Invalid Module"));
    assert_eq!(
        module.error.as_deref(),
        Some("Please select a module from the list")
    );

    let priority = validations.iter().find(|v| v.sqref == "I2:I1000").unwrap();
    assert!(priority.formula1.ends_with("!$M$2:$M$5"));
    assert_eq!(priority.error_title.as_deref(), Some("Invalid Priority"));

    let severity = validations.iter().find(|v| v.sqref == "J2:J1000").unwrap();
    assert!(severity.formula1.ends_with("!$N$2:$N$6"));

    let status = validations.iter().find(|v| v.sqref == "K2:K1000").unwrap();
    assert!(status.formula1.ends_with("!$O$2:$O$8"));
}

#[test]
fn dependent_rules_reference_their_own_row() {
    let bytes = workbook_bytes(&TemplateOptions::default());
    let validations = parse_validations(&part(&bytes, "xl/worksheets/sheet1.xml"));

    let tab_rules: Vec<&Validation> = validations
        .iter()
        .filter(|v| v.sqref.starts_with('E'))
        .collect();
    assert_eq!(tab_rules.len(), 999);

    for rule in &tab_rules {
        let row: u32 = rule.sqref[1..].parse().expect("single-cell sqref");
        assert!(
            rule.formula1.contains(&format!("SUBSTITUTE(D{row},")),
            "rule at {} references the wrong module cell: {}",
            rule.sqref,
            rule.formula1
        );
        assert!(rule.formula1.contains("_Tabs"));
        // Blanks stay allowed on the dependent column.
        assert_eq!(rule.allow_blank.as_deref(), Some("1"));
        assert_eq!(rule.error_title.as_deref(), Some("Invalid Tab"));
    }

    let first = tab_rules.first().unwrap();
    assert_eq!(first.sqref, "E2");
    let last = tab_rules.last().unwrap();
    assert_eq!(last.sqref, "E1000");
}

#[test]
fn rebuilding_produces_identical_sheet_parts() {
    let options = TemplateOptions::default();
    let first = workbook_bytes(&options);
    let second = workbook_bytes(&options);

    // Whole-package equality can differ in embedded package timestamps;
    // the sheet and workbook parts must match byte for byte.
    for name in [
        "xl/workbook.xml",
        "xl/worksheets/sheet1.xml",
        "xl/worksheets/sheet2.xml",
        "xl/worksheets/sheet3.xml",
    ] {
        assert_eq!(part(&first, name), part(&second, name), "part {name} differs");
    }
}

#[test]
fn tracker_sheet_freezes_header_and_filters_the_header_range() {
    let bytes = workbook_bytes(&TemplateOptions::default());
    let sheet_xml = part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(sheet_xml.contains(r#"ySplit="1""#), "header row not frozen");
    assert!(sheet_xml.contains(r#"state="frozen""#));
    assert!(
        sheet_xml.contains(r#"<autoFilter ref="A1:N1"/>"#),
        "auto-filter missing or not spanning the header range"
    );
}

#[test]
fn smaller_row_count_shrinks_the_rule_set() {
    let options = TemplateOptions {
        data_rows: 10,
        ..TemplateOptions::default()
    };
    let bytes = workbook_bytes(&options);
    let validations = parse_validations(&part(&bytes, "xl/worksheets/sheet1.xml"));
    assert_eq!(validations.len(), 14);
    assert!(validations.iter().any(|v| v.sqref == "D2:D11"));
    assert!(validations.iter().any(|v| v.sqref == "E11"));
    assert!(!validations.iter().any(|v| v.sqref == "E12"));
}
