//! CLI library components for the bug-tracking template generator.

pub mod logging;
