use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ShopflowError;

/// Urgency of a department stage.
///
/// Ordering follows queue rank: `High < Medium < Low`, so sorting ascending
/// puts the most urgent work first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric queue rank (`high = 0`, `medium = 1`, `low = 2`).
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!(
                "invalid priority: {other} (expected \"high\", \"medium\" or \"low\")"
            )),
        }
    }
}

/// Order-level health.
///
/// `Risk` is raised by flagging a department. `Late` is owned by an external
/// deadline process and never produced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Ok,
    Risk,
    Late,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Ok
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Ok => "OK",
            OrderStatus::Risk => "RISK",
            OrderStatus::Late => "LATE",
        };
        f.write_str(s)
    }
}

/// A mutating action against one department of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Complete,
    Flag,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Complete => "complete",
            Action::Flag => "flag",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ShopflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "start" => Ok(Action::Start),
            "complete" => Ok(Action::Complete),
            "flag" => Ok(Action::Flag),
            other => Err(ShopflowError::UnsupportedAction(other.to_string())),
        }
    }
}

/// Worker-facing status of a department slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageStatus {
    Pending,
    InProgress,
    Completed,
}
