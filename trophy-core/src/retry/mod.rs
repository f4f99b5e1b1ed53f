//! Retry module
//! - policy.rs: exponential backoff policy with jitter and its executor

pub mod policy;

pub use policy::*;
