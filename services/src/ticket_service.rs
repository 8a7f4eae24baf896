use std::str::FromStr;

use db::{
    filters::TicketFilter,
    models::tickets::{Model as Ticket, NewTicket, TicketStatus},
};
use rand::Rng;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::validation::{validate_email_domain, validate_emp_id, validate_required};

pub const TICKET_ID_PREFIX: &str = "TKT-";

/// Insert attempts before a run of `ticket_id` collisions is reported as a store failure.
pub const TICKET_ID_MAX_ATTEMPTS: usize = 5;

pub const INVALID_STATUS: &str = "Invalid status";

#[derive(Debug, Clone)]
pub struct CreateTicket {
    pub emp_id: String,
    pub emp_name: String,
    pub emp_email: String,
    pub department: String,
    pub priority: String,
    pub issue_type: String,
    pub description: String,
}

/// `TKT-` followed by a uniformly random number in `100000..=999999`.
pub fn generate_ticket_id() -> String {
    let n: u32 = rand::rng().random_range(100_000..=999_999);
    format!("{TICKET_ID_PREFIX}{n}")
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Ticket count per status. Every status is always present, defaulting to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    #[serde(rename = "Open")]
    pub open: u64,
    #[serde(rename = "In Progress")]
    pub in_progress: u64,
    #[serde(rename = "Resolved")]
    pub resolved: u64,
    #[serde(rename = "Closed")]
    pub closed: u64,
}

impl TicketStats {
    fn slot(&mut self, status: TicketStatus) -> &mut u64 {
        match status {
            TicketStatus::Open => &mut self.open,
            TicketStatus::InProgress => &mut self.in_progress,
            TicketStatus::Resolved => &mut self.resolved,
            TicketStatus::Closed => &mut self.closed,
        }
    }

    pub fn get(&self, status: TicketStatus) -> u64 {
        match status {
            TicketStatus::Open => self.open,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Resolved => self.resolved,
            TicketStatus::Closed => self.closed,
        }
    }

    pub fn total(&self) -> u64 {
        self.open + self.in_progress + self.resolved + self.closed
    }
}

pub struct TicketService;

impl TicketService {
    /// Validates the submission, then stores it under a freshly generated `ticket_id`.
    ///
    /// Validation is ordered and fail-fast: employee id first, then email domain, then
    /// the remaining free-text fields.
    pub async fn create(db: &DatabaseConnection, params: CreateTicket) -> ServiceResult<Ticket> {
        validate_emp_id(&params.emp_id)?;
        validate_email_domain(&params.emp_email)?;
        for (field, value) in [
            ("emp_name", &params.emp_name),
            ("department", &params.department),
            ("priority", &params.priority),
            ("issue_type", &params.issue_type),
            ("description", &params.description),
        ] {
            validate_required(field, value)?;
        }

        let ticket = Self::insert_with_ids(db, &params, generate_ticket_id).await?;
        info!(ticket_id = %ticket.ticket_id, emp_id = %ticket.emp_id, "Ticket created");
        Ok(ticket)
    }

    /// Retries the insert with a new id from `next_id` while it collides on `ticket_id`.
    pub(crate) async fn insert_with_ids<F>(
        db: &DatabaseConnection,
        params: &CreateTicket,
        mut next_id: F,
    ) -> ServiceResult<Ticket>
    where
        F: FnMut() -> String,
    {
        let mut attempt = 1;
        loop {
            let ticket_id = next_id();
            let new = NewTicket {
                ticket_id: &ticket_id,
                emp_id: &params.emp_id,
                emp_name: &params.emp_name,
                emp_email: &params.emp_email,
                department: &params.department,
                priority: &params.priority,
                issue_type: &params.issue_type,
                description: &params.description,
            };

            match Ticket::create(db, new).await {
                Ok(ticket) => return Ok(ticket),
                Err(err) if is_unique_violation(&err) && attempt < TICKET_ID_MAX_ATTEMPTS => {
                    warn!(%ticket_id, attempt, "Ticket id collision, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub async fn list(db: &DatabaseConnection, filter: &TicketFilter) -> ServiceResult<Vec<Ticket>> {
        Ok(Ticket::find_filtered(db, filter).await?)
    }

    pub async fn get(db: &DatabaseConnection, ticket_id: &str) -> ServiceResult<Ticket> {
        Ticket::find_by_ticket_id(db, ticket_id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Moves a ticket to `status`. Any of the four statuses is reachable from any other.
    pub async fn update_status(
        db: &DatabaseConnection,
        ticket_id: &str,
        status: &str,
    ) -> ServiceResult<Ticket> {
        let status =
            TicketStatus::from_str(status).map_err(|_| ServiceError::invalid(INVALID_STATUS))?;

        let ticket = Ticket::set_status(db, ticket_id, status)
            .await?
            .ok_or(ServiceError::NotFound)?;

        info!(%ticket_id, status = %status, "Ticket status updated");
        Ok(ticket)
    }

    pub async fn stats(db: &DatabaseConnection) -> ServiceResult<TicketStats> {
        let mut stats = TicketStats::default();

        for (status, count) in Ticket::count_by_status(db).await? {
            match TicketStatus::from_str(&status) {
                Ok(status) => *stats.slot(status) = u64::try_from(count).unwrap_or(0),
                Err(_) => warn!(%status, count, "Ignoring tickets with unknown status"),
            }
        }

        Ok(stats)
    }
}
