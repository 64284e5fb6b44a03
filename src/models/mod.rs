//! Database models shared across the repository layer.

#[cfg(feature = "server")]
pub mod config;
pub mod member;
pub mod team;
