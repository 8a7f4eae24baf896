//! Ticket request and response models.
//!
//! Request fields default to empty so that format rules, which live in the ticket
//! service, decide validity and their order rather than the deserializer.

use db::{filters::TicketFilter, models::tickets::Model as TicketModel};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use services::ticket_service::CreateTicket;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TicketRequest {
    pub emp_id: String,
    pub emp_name: String,
    pub emp_email: String,
    pub department: String,
    pub priority: String,
    pub issue_type: String,
    pub description: String,
}

impl From<TicketRequest> for CreateTicket {
    fn from(req: TicketRequest) -> Self {
        Self {
            emp_id: req.emp_id,
            emp_name: req.emp_name,
            emp_email: req.emp_email,
            department: req.department,
            priority: req.priority,
            issue_type: req.issue_type,
            description: req.description,
        }
    }
}

/// Any JSON value is accepted; anything but one of the four status names is
/// rejected by the ticket service.
#[derive(Debug, Default, Deserialize)]
pub struct StatusRequest {
    #[serde(default)]
    pub status: Option<Value>,
}

impl StatusRequest {
    pub fn status(&self) -> &str {
        self.status.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

/// Query string for `GET /tickets`. Absent or empty parameters impose no constraint.
#[derive(Debug, Default, Deserialize)]
pub struct FilterReq {
    pub emp_id: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub department: Option<String>,
    pub issue_type: Option<String>,
}

impl From<FilterReq> for TicketFilter {
    fn from(req: FilterReq) -> Self {
        let mut filter = TicketFilter::new();
        if let Some(emp_id) = req.emp_id {
            filter = filter.with_emp_id(emp_id);
        }
        if let Some(status) = req.status {
            filter = filter.with_status(status);
        }
        if let Some(priority) = req.priority {
            filter = filter.with_priority(priority);
        }
        if let Some(department) = req.department {
            filter = filter.with_department(department);
        }
        if let Some(issue_type) = req.issue_type {
            filter = filter.with_issue_type(issue_type);
        }
        filter
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TicketResponse {
    pub id: i64,
    pub ticket_id: String,
    pub emp_id: String,
    pub emp_name: String,
    pub emp_email: String,
    pub department: String,
    pub priority: String,
    pub issue_type: String,
    pub description: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TicketModel> for TicketResponse {
    fn from(ticket: TicketModel) -> Self {
        Self {
            id: ticket.id,
            ticket_id: ticket.ticket_id,
            emp_id: ticket.emp_id,
            emp_name: ticket.emp_name,
            emp_email: ticket.emp_email,
            department: ticket.department,
            priority: ticket.priority,
            issue_type: ticket.issue_type,
            description: ticket.description,
            status: ticket.status.to_string(),
            created_at: ticket.created_at.to_rfc3339(),
            updated_at: ticket.updated_at.to_rfc3339(),
        }
    }
}
