//! Entities

pub mod login_event;
pub mod user;
