use sea_orm::{ColumnTrait, Condition};

use crate::models::tickets::Column;

/// Optional exact-match constraints for listing tickets.
///
/// Every present constraint is AND-ed together; empty strings count as absent.
/// Values only ever reach the query as bound parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub emp_id: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub department: Option<String>,
    pub issue_type: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_emp_id(mut self, emp_id: impl Into<String>) -> Self {
        self.emp_id = non_empty(emp_id.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = non_empty(status.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = non_empty(priority.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = non_empty(department.into());
        self
    }

    pub fn with_issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = non_empty(issue_type.into());
        self
    }

    fn constraints(&self) -> [(Column, Option<&str>); 5] {
        [
            (Column::EmpId, self.emp_id.as_deref()),
            (Column::Status, self.status.as_deref()),
            (Column::Priority, self.priority.as_deref()),
            (Column::Department, self.department.as_deref()),
            (Column::IssueType, self.issue_type.as_deref()),
        ]
    }

    /// Compiles the filter into a conjunctive condition. No constraints matches every row.
    pub fn condition(&self) -> Condition {
        self.constraints()
            .into_iter()
            .filter_map(|(column, value)| value.filter(|v| !v.is_empty()).map(|v| (column, v)))
            .fold(Condition::all(), |cond, (column, value)| {
                cond.add(column.eq(value))
            })
    }
}
