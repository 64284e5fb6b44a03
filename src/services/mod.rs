pub mod errors;
pub mod members;
pub mod query;
pub mod seed;

pub use errors::{ServiceError, ServiceResult};
