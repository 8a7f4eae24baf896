pub mod m202510170001_create_tickets;
pub mod m202510170002_create_comments;
