// src/pipeline/stages.rs

//! The ordered list of department stages a new order is created with.

use crate::pipeline::department::Department;
use crate::types::Priority;

/// Built-in shop pipeline: quoting, production approval, programming,
/// machining, hand-work, surface finishing, inspection, shipping.
pub const DEFAULT_STAGES: [(&str, Priority); 8] = [
    ("报价", Priority::High),
    ("生产审批", Priority::Medium),
    ("编程", Priority::High),
    ("操机", Priority::Medium),
    ("手工", Priority::Low),
    ("表面处理", Priority::Medium),
    ("检验", Priority::High),
    ("出货", Priority::Low),
];

/// One stage of the creation template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTemplate {
    pub name: String,
    /// Priority stamped on the department record of new orders.
    pub priority: Option<Priority>,
}

/// Ordered stage list used when creating orders.
///
/// Existing orders keep the department list they were created with; the
/// template only shapes new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineTemplate {
    stages: Vec<StageTemplate>,
}

impl PipelineTemplate {
    /// Construct without validation. Config loading checks for empty or
    /// duplicate stage names before calling this.
    pub fn new_unchecked(stages: Vec<StageTemplate>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[StageTemplate] {
        &self.stages
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stages.iter().any(|s| s.name == name)
    }

    /// Fresh, all-pending department records in pipeline order.
    pub fn instantiate(&self) -> Vec<Department> {
        self.stages
            .iter()
            .map(|s| {
                let mut dept = Department::pending(&s.name);
                dept.priority = s.priority;
                dept
            })
            .collect()
    }
}

impl Default for PipelineTemplate {
    fn default() -> Self {
        let stages = DEFAULT_STAGES
            .iter()
            .map(|(name, priority)| StageTemplate {
                name: (*name).to_string(),
                priority: Some(*priority),
            })
            .collect();
        Self { stages }
    }
}
