//! Caller identity
//!
//! The frontend signs in (anonymously or otherwise) and forwards the resulting
//! user id in the `x-user-id` header. That id selects the caller's collection.
//!
//! - [`CurrentOwner`] - extracted identity
//! - [`USER_ID_HEADER`] - header carrying it

pub mod identity;

pub use identity::{CurrentOwner, MAX_USER_ID_LEN, USER_ID_HEADER};
