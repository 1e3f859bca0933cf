// src/pipeline/progress.rs

//! Derived order fields: completion percentage and current department.
//!
//! These are pure functions of the department list. Orders never accept
//! them from callers; they are recomputed after each mutation.

use crate::pipeline::department::Department;

/// `currentDept` value once every department is completed.
pub const TERMINAL_LABEL: &str = "Completed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub percent: u8,
    pub current_dept: String,
}

pub fn completed_count(departments: &[Department]) -> usize {
    departments.iter().filter(|d| d.completed).count()
}

/// `round(100 * completed / total)` with halves rounded up.
///
/// An empty pipeline reports 0.
pub fn percent_complete(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    // floor(100c/n + 1/2) in integers.
    ((200 * completed + total) / (2 * total)) as u8
}

/// Name of the first non-completed department, or [`TERMINAL_LABEL`].
pub fn current_department(departments: &[Department]) -> &str {
    departments
        .iter()
        .find(|d| !d.completed)
        .map(|d| d.name.as_str())
        .unwrap_or(TERMINAL_LABEL)
}

pub fn compute(departments: &[Department]) -> Progress {
    Progress {
        percent: percent_complete(completed_count(departments), departments.len()),
        current_dept: current_department(departments).to_string(),
    }
}
