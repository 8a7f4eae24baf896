pub mod comments;
pub mod tickets;

pub use comments::Entity as Comment;
pub use tickets::Entity as Ticket;
