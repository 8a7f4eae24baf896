pub mod comment_service;
pub mod error;
pub mod ticket_service;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
