//! Value Object Module

pub mod email;
pub mod login_event_id;
pub mod user_id;
pub mod user_name;
pub mod user_password;
