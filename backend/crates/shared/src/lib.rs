//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - Error classification and the unified application error
//! - Typed UUID identifiers
//!
//! Only things whose meaning is the same in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
