//! Route handlers organized by resource

pub mod courses;
pub mod health;
