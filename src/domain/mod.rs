//! Domain aggregates and search primitives exposed by the service layer.

pub mod member;
pub mod search;
pub mod team;
pub mod types;
