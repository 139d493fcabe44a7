//! Module catalog: the application areas offered in the Module/Group
//! dropdown and the section lists behind the dependent Tab/Section
//! dropdown.
//!
//! Each module's section list is exposed to the workbook under a
//! defined name derived from the module name (spaces replaced by
//! underscores, suffixed `_Tabs`). The derivation is what makes module
//! names load-bearing: they must stay safe identifiers after
//! substitution, which [`ModuleCatalog::validate`] enforces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Suffix appended to the underscored module name to form its defined
/// range identifier.
pub const RANGE_NAME_SUFFIX: &str = "_Tabs";

/// Upper bound on catalog size. Module section columns occupy reference
/// sheet columns B.. and must not collide with the fixed option-list
/// columns M/N/O.
pub const MAX_MODULES: usize = 11;

/// A block of testing guidance rendered on the instructions sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestingArea {
    /// Heading line, rendered with a trailing colon.
    pub heading: String,
    /// Bullet points under the heading.
    pub points: Vec<String>,
}

/// One top-level functional area of the tracked application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Module name as shown in the Module/Group dropdown.
    pub name: String,
    /// Short description rendered in the instructions module overview.
    #[serde(default)]
    pub description: String,
    /// Ordered section names behind the dependent Tab/Section dropdown.
    pub sections: Vec<String>,
    /// Testing-area notes for the instructions sheet.
    #[serde(default)]
    pub testing_notes: Vec<TestingArea>,
}

impl ModuleSpec {
    /// Defined-name identifier for this module's section range:
    /// spaces replaced by underscores, suffixed `_Tabs`.
    pub fn range_name(&self) -> String {
        format!("{}{}", self.name.replace(' ', "_"), RANGE_NAME_SUFFIX)
    }
}

/// Ordered catalog of modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleCatalog {
    pub modules: Vec<ModuleSpec>,
}

impl ModuleCatalog {
    /// Number of modules in the catalog.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when the catalog holds no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    /// Look up a module by name.
    pub fn get(&self, name: &str) -> Option<&ModuleSpec> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Parse a catalog from TOML and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let catalog: ModuleCatalog = toml::from_str(input)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants the workbook build relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: empty catalog, oversized
    /// catalog, unsafe module name, empty section list or section name,
    /// or two modules deriving the same range identifier.
    pub fn validate(&self) -> Result<()> {
        if self.modules.is_empty() {
            return Err(ModelError::EmptyCatalog);
        }
        if self.modules.len() > MAX_MODULES {
            return Err(ModelError::TooManyModules {
                count: self.modules.len(),
                max: MAX_MODULES,
            });
        }
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        for module in &self.modules {
            if !is_safe_module_name(&module.name) {
                return Err(ModelError::InvalidModuleName {
                    name: module.name.clone(),
                });
            }
            if module.sections.is_empty() {
                return Err(ModelError::EmptySections {
                    name: module.name.clone(),
                });
            }
            for section in &module.sections {
                if section.trim().is_empty() {
                    return Err(ModelError::EmptySectionName {
                        name: module.name.clone(),
                        section: section.clone(),
                    });
                }
            }
            let identifier = module.range_name();
            if let Some(first) = seen.insert(identifier.clone(), &module.name) {
                return Err(ModelError::DuplicateRangeName {
                    first: first.to_string(),
                    second: module.name.clone(),
                    identifier,
                });
            }
        }
        Ok(())
    }

    /// The built-in CRM catalog.
    pub fn crm_default() -> Self {
        ModuleCatalog {
            modules: vec![
                module(
                    "Dashboard",
                    "Main dashboard and statistics",
                    &[
                        "Main Dashboard",
                        "Statistics Cards",
                        "Revenue Charts",
                        "Recent Activities",
                        "Quick Actions",
                    ],
                    vec![area(
                        "DASHBOARD",
                        &[
                            "Statistics cards displaying correct data",
                            "Charts loading and interactive",
                            "Recent activities showing correctly",
                            "Quick actions working",
                        ],
                    )],
                ),
                module(
                    "Activities",
                    "Follow-ups, tasks, activities",
                    &[
                        "All Activities",
                        "Follow-ups",
                        "Tasks",
                        "Create Activity",
                        "Mark Complete",
                        "Calendar View",
                    ],
                    vec![area(
                        "ACTIVITIES",
                        &[
                            "Create new activity/follow-up/task",
                            "Edit existing activities",
                            "Mark as complete",
                            "Filter by status, type, date",
                            "Calendar view working",
                        ],
                    )],
                ),
                module(
                    "Sales",
                    "Leads, Contacts, Accounts, Deals",
                    &["Leads", "Contacts", "Accounts", "Deals"],
                    vec![
                        area(
                            "SALES - LEADS",
                            &[
                                "Create/Edit/Delete lead",
                                "Convert lead to deal",
                                "Lead status updates",
                                "Search and filter",
                            ],
                        ),
                        area(
                            "SALES - CONTACTS",
                            &[
                                "Create/Edit/Delete contact",
                                "Link to account",
                                "Contact details display",
                            ],
                        ),
                        area(
                            "SALES - ACCOUNTS",
                            &[
                                "Create/Edit/Delete account",
                                "Related contacts display",
                                "Account details",
                            ],
                        ),
                        area(
                            "SALES - DEALS",
                            &[
                                "Create/Edit/Delete deal",
                                "Multiple products selection",
                                "Deal amount calculation",
                                "Deal stage management",
                            ],
                        ),
                    ],
                ),
                module(
                    "Inventory",
                    "Products, Stock Entries, Quotations, Sales Orders, Invoices",
                    &[
                        "Products",
                        "Stock Entries",
                        "Quotations",
                        "Sales Orders",
                        "Invoices",
                    ],
                    vec![
                        area(
                            "INVENTORY - PRODUCTS",
                            &[
                                "Create/Edit/Delete product",
                                "Stock quantity display",
                                "Category filtering",
                                "Product search",
                            ],
                        ),
                        area(
                            "INVENTORY - STOCK ENTRIES",
                            &[
                                "Create stock inward entry",
                                "Create stock outward entry",
                                "Entry approval workflow",
                                "Stock validation (prevent negative stock)",
                                "Bin location update",
                                "Stock summary accuracy",
                                "Product details tooltip",
                            ],
                        ),
                        area(
                            "INVENTORY - QUOTATIONS",
                            &[
                                "Create/Edit/Delete quotation",
                                "Multiple products",
                                "Total calculation",
                                "Status management",
                            ],
                        ),
                    ],
                ),
                module(
                    "Services",
                    "Installations, AMC, Complaints",
                    &["Installations", "AMC", "Complaints"],
                    vec![
                        area(
                            "SERVICES - INSTALLATIONS",
                            &[
                                "Create/Edit/Delete installation",
                                "Assign technician",
                                "Schedule date",
                                "Status tracking",
                            ],
                        ),
                        area(
                            "SERVICES - AMC",
                            &[
                                "Create/Edit/Delete AMC",
                                "Renewal management",
                                "Service schedule",
                                "AMC status",
                            ],
                        ),
                        area(
                            "SERVICES - COMPLAINTS",
                            &[
                                "Create/Edit/Delete complaint",
                                "Priority management",
                                "Status tracking",
                                "Solution recording",
                                "Assign technician",
                            ],
                        ),
                    ],
                ),
                module(
                    "Support",
                    "Support Center and Tickets",
                    &["Support Center", "Support Tickets"],
                    vec![area(
                        "SUPPORT",
                        &[
                            "Create support ticket",
                            "Ticket status update",
                            "Assign support agent",
                            "Priority management",
                        ],
                    )],
                ),
                module(
                    "Analytics",
                    "MIS Reports",
                    &[
                        "MIS Reports",
                        "Sales Reports",
                        "Service Reports",
                        "Inventory Reports",
                    ],
                    vec![area(
                        "ANALYTICS",
                        &[
                            "MIS reports display",
                            "Filter by date range",
                            "Export reports",
                            "Data accuracy",
                        ],
                    )],
                ),
                module(
                    "Resources",
                    "Document Library",
                    &["Doc Library", "Documents"],
                    vec![],
                ),
                module(
                    "Admin",
                    "Settings, User Management",
                    &[
                        "Company Settings",
                        "User Management",
                        "Role Management",
                        "Profile Settings",
                        "Company Logo",
                    ],
                    vec![area(
                        "ADMIN",
                        &[
                            "Company settings update",
                            "User management (Add/Edit/Delete users)",
                            "Role assignment",
                            "Company logo upload and display",
                            "Profile settings",
                        ],
                    )],
                ),
            ],
        }
    }
}

/// A module name is safe when it survives the underscore substitution
/// as a defined-name identifier: leading ASCII letter, then ASCII
/// letters, digits, and single-word-separating spaces.
fn is_safe_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    if name.ends_with(' ') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

fn module(
    name: &str,
    description: &str,
    sections: &[&str],
    testing_notes: Vec<TestingArea>,
) -> ModuleSpec {
    ModuleSpec {
        name: name.to_string(),
        description: description.to_string(),
        sections: sections.iter().map(|s| (*s).to_string()).collect(),
        testing_notes,
    }
}

fn area(heading: &str, points: &[&str]) -> TestingArea {
    TestingArea {
        heading: heading.to_string(),
        points: points.iter().map(|p| (*p).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crm_default_is_valid() {
        let catalog = ModuleCatalog::crm_default();
        catalog.validate().unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(
            catalog.names(),
            vec![
                "Dashboard",
                "Activities",
                "Sales",
                "Inventory",
                "Services",
                "Support",
                "Analytics",
                "Resources",
                "Admin",
            ]
        );
    }

    #[test]
    fn test_range_name_substitutes_spaces() {
        let module = ModuleSpec {
            name: "Stock Entries".to_string(),
            description: String::new(),
            sections: vec!["Inward".to_string()],
            testing_notes: vec![],
        };
        assert_eq!(module.range_name(), "Stock_Entries_Tabs");
    }

    #[test]
    fn test_validate_rejects_unsafe_names() {
        for bad in ["", "1Sales", "Sales/CRM", "Sales ", "Café"] {
            let catalog = ModuleCatalog {
                modules: vec![ModuleSpec {
                    name: bad.to_string(),
                    description: String::new(),
                    sections: vec!["A".to_string()],
                    testing_notes: vec![],
                }],
            };
            assert!(
                matches!(
                    catalog.validate(),
                    Err(ModelError::InvalidModuleName { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_identifiers() {
        let catalog = ModuleCatalog {
            modules: vec![
                ModuleSpec {
                    name: "Sales".to_string(),
                    description: String::new(),
                    sections: vec!["A".to_string()],
                    testing_notes: vec![],
                },
                ModuleSpec {
                    name: "Sales".to_string(),
                    description: String::new(),
                    sections: vec!["B".to_string()],
                    testing_notes: vec![],
                },
            ],
        };
        assert!(matches!(
            catalog.validate(),
            Err(ModelError::DuplicateRangeName { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_catalog() {
        let modules = (0..MAX_MODULES + 1)
            .map(|i| ModuleSpec {
                name: format!("Module{i}"),
                description: String::new(),
                sections: vec!["A".to_string()],
                testing_notes: vec![],
            })
            .collect();
        let catalog = ModuleCatalog { modules };
        assert!(matches!(
            catalog.validate(),
            Err(ModelError::TooManyModules { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_sections() {
        let catalog = ModuleCatalog {
            modules: vec![ModuleSpec {
                name: "Sales".to_string(),
                description: String::new(),
                sections: vec![],
                testing_notes: vec![],
            }],
        };
        assert!(matches!(
            catalog.validate(),
            Err(ModelError::EmptySections { .. })
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = ModuleCatalog::from_toml_str(
            r#"
            [[modules]]
            name = "Billing"
            description = "Invoices and payments"
            sections = ["Invoices", "Payments"]

            [[modules.testing_notes]]
            heading = "BILLING"
            points = ["Invoice totals correct"]
            "#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        let billing = catalog.get("Billing").unwrap();
        assert_eq!(billing.sections, vec!["Invoices", "Payments"]);
        assert_eq!(billing.range_name(), "Billing_Tabs");
        assert_eq!(billing.testing_notes[0].heading, "BILLING");
    }

    #[test]
    fn test_from_toml_str_rejects_invalid_catalog() {
        let result = ModuleCatalog::from_toml_str(
            r#"
            [[modules]]
            name = "2Fast"
            sections = ["A"]
            "#,
        );
        assert!(matches!(
            result,
            Err(ModelError::InvalidModuleName { .. })
        ));
    }

    #[test]
    fn test_catalog_serializes() {
        let catalog = ModuleCatalog::crm_default();
        let json = serde_json::to_string(&catalog).expect("serialize catalog");
        let round: ModuleCatalog = serde_json::from_str(&json).expect("deserialize catalog");
        assert_eq!(round, catalog);
    }
}
