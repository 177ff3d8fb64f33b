//! API endpoint handlers.

pub mod agent;
pub mod doctors;
pub mod health;
