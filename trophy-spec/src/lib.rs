//! trophy-spec
//!
//! Wire-level records and errors for the Trophy API.
//!
//! This crate only contains *spec-level* types: request and response records,
//! string enums, union payloads, and the error taxonomy. HTTP execution,
//! retries, and the endpoint surface live in `trophy-core` and `trophy`.
#![deny(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{RequestInfo, TrophyError, ValidationError};
