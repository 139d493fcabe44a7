//! Type-safe enumerations for the fixed dropdown option lists.
//!
//! Priority, severity, and status are fixed, ordered, closed sets. The
//! order of `ALL` is the order the values appear on the reference sheet
//! and therefore in the dropdowns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bug priority, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in dropdown order.
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Returns the value as it appears in the dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// One-line guidance shown on the instructions sheet.
    pub fn guidance(&self) -> &'static str {
        match self {
            Priority::Critical => "System crash, data loss, security issue",
            Priority::High => "Major feature broken, blocking work",
            Priority::Medium => "Feature works but has issues",
            Priority::Low => "Minor cosmetic issue, nice-to-have",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" => Ok(Priority::Critical),
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {s}")),
        }
    }
}

/// Bug severity, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Blocker,
    Critical,
    Major,
    Minor,
    Trivial,
}

impl Severity {
    /// All severities in dropdown order.
    pub const ALL: [Severity; 5] = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Trivial,
    ];

    /// Returns the value as it appears in the dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Blocker => "Blocker",
            Severity::Critical => "Critical",
            Severity::Major => "Major",
            Severity::Minor => "Minor",
            Severity::Trivial => "Trivial",
        }
    }

    /// One-line guidance shown on the instructions sheet.
    pub fn guidance(&self) -> &'static str {
        match self {
            Severity::Blocker => "Prevents testing/usage completely",
            Severity::Critical => "Major functionality broken",
            Severity::Major => "Important feature affected",
            Severity::Minor => "Small issue, workaround available",
            Severity::Trivial => "Cosmetic issue only",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BLOCKER" => Ok(Severity::Blocker),
            "CRITICAL" => Ok(Severity::Critical),
            "MAJOR" => Ok(Severity::Major),
            "MINOR" => Ok(Severity::Minor),
            "TRIVIAL" => Ok(Severity::Trivial),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// Bug lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Open,
    InProgress,
    Fixed,
    Closed,
    Rejected,
    Duplicate,
    NeedMoreInfo,
}

impl Status {
    /// All statuses in dropdown order.
    pub const ALL: [Status; 7] = [
        Status::Open,
        Status::InProgress,
        Status::Fixed,
        Status::Closed,
        Status::Rejected,
        Status::Duplicate,
        Status::NeedMoreInfo,
    ];

    /// Returns the value as it appears in the dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Fixed => "Fixed",
            Status::Closed => "Closed",
            Status::Rejected => "Rejected",
            Status::Duplicate => "Duplicate",
            Status::NeedMoreInfo => "Need More Info",
        }
    }

    /// One-line guidance shown on the instructions sheet.
    pub fn guidance(&self) -> &'static str {
        match self {
            Status::Open => "Newly reported",
            Status::InProgress => "Being worked on",
            Status::Fixed => "Developer has fixed",
            Status::Closed => "Verified and closed",
            Status::Rejected => "Not a bug / Won't fix",
            Status::Duplicate => "Already reported",
            Status::NeedMoreInfo => "Requires additional details",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OPEN" => Ok(Status::Open),
            "IN PROGRESS" => Ok(Status::InProgress),
            "FIXED" => Ok(Status::Fixed),
            "CLOSED" => Ok(Status::Closed),
            "REJECTED" => Ok(Status::Rejected),
            "DUPLICATE" => Ok(Status::Duplicate),
            "NEED MORE INFO" => Ok(Status::NeedMoreInfo),
            _ => Err(format!("Unknown status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_str() {
        assert_eq!("Critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!("  low  ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("Urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_status_round_trips_display() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_option_lists_are_closed_sets() {
        assert_eq!(Priority::ALL.len(), 4);
        assert_eq!(Severity::ALL.len(), 5);
        assert_eq!(Status::ALL.len(), 7);
        assert_eq!(Status::ALL[6].as_str(), "Need More Info");
    }
}
