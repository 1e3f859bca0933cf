// src/pipeline/department.rs

//! Per-department record and its state machine.
//!
//! ```text
//! pending --start--> in-progress --complete--> completed
//!    \______________complete______________________/
//! ```
//!
//! `flag` is orthogonal: it annotates the record from any state without
//! moving it. There is no edge back out of `completed`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{Result, ShopflowError};
use crate::types::{Action, Priority, StageStatus};

/// Note recorded when a flag arrives without any text.
pub const DEFAULT_FLAG_NOTE: &str = "Flagged by employee";

/// Text form of a department timestamp: RFC 3339 in UTC with milliseconds.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One pipeline stage of one order.
///
/// `start_time` and `completed_time` are kept as text. Records written
/// elsewhere use other shapes and must load unchanged; new stamps come from
/// [`timestamp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub in_progress: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_late: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flagged: bool,

    /// Fields this crate does not interpret, kept so a save never drops them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What a successful transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    /// `start` on a department that was already in progress.
    AlreadyStarted,
    Completed,
    Flagged,
}

impl Department {
    /// A fresh record in the `pending` state.
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
            in_progress: false,
            hours_late: None,
            note: None,
            employee: None,
            start_time: None,
            completed_time: None,
            estimated_hours: None,
            actual_hours: None,
            priority: None,
            flagged: false,
            extra: Map::new(),
        }
    }

    /// `completed` wins over `in_progress` if a stored record has both set.
    pub fn stage_status(&self) -> StageStatus {
        if self.completed {
            StageStatus::Completed
        } else if self.in_progress {
            StageStatus::InProgress
        } else {
            StageStatus::Pending
        }
    }

    /// Apply `action` at time `now`.
    ///
    /// Every check runs before the first field is written, so a rejected
    /// action leaves the record exactly as it was.
    pub fn apply(
        &mut self,
        action: Action,
        note: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Transition> {
        match action {
            Action::Start => self.start(now),
            Action::Complete => self.complete(now),
            Action::Flag => Ok(self.flag(note)),
        }
    }

    fn start(&mut self, now: DateTime<Utc>) -> Result<Transition> {
        match self.stage_status() {
            StageStatus::Completed => Err(self.invalid(Action::Start, "already completed")),
            StageStatus::InProgress => {
                debug!(department = %self.name, "start on in-progress department; keeping first start time");
                Ok(Transition::AlreadyStarted)
            }
            StageStatus::Pending => {
                self.in_progress = true;
                if self.start_time.is_none() {
                    self.start_time = Some(timestamp(now));
                }
                debug!(department = %self.name, "pending -> in-progress");
                Ok(Transition::Started)
            }
        }
    }

    fn complete(&mut self, now: DateTime<Utc>) -> Result<Transition> {
        let from = self.stage_status();
        if from == StageStatus::Completed {
            return Err(self.invalid(Action::Complete, "already completed"));
        }

        self.in_progress = false;
        self.completed = true;
        self.completed_time = Some(timestamp(now));
        debug!(department = %self.name, ?from, "-> completed");
        Ok(Transition::Completed)
    }

    fn flag(&mut self, note: Option<&str>) -> Transition {
        let text = match note.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => DEFAULT_FLAG_NOTE.to_string(),
        };
        debug!(department = %self.name, note = %text, "flagged");
        self.note = Some(text);
        self.flagged = true;
        Transition::Flagged
    }

    fn invalid(&self, action: Action, reason: &str) -> ShopflowError {
        ShopflowError::InvalidTransition {
            department: self.name.clone(),
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }
}
