#![deny(unsafe_code)]

//! Data model for the bug-tracking template generator.
//!
//! Everything here is configuration data, not runtime state: the module
//! catalog behind the dependent dropdowns, the fixed priority/severity/
//! status option lists, and the 14-column tracker schema.

pub mod catalog;
pub mod enums;
pub mod error;
pub mod schema;

pub use catalog::{MAX_MODULES, ModuleCatalog, ModuleSpec, RANGE_NAME_SUFFIX, TestingArea};
pub use enums::{Priority, Severity, Status};
pub use error::{ModelError, Result};
pub use schema::Column;
