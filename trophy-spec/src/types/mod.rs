//! Wire Type Definitions
//!
//! Records are grouped by API area. Each record is declared once with the
//! `record!` macro, so its serde encoding, optional-field set, and
//! unrecognized-field bag all come from a single field table.
//!
//! ## Module Organization
//!
//! - **`users`** - users, shared user payloads, error bodies
//! - **`achievements`** - achievement definitions and completions
//! - **`metrics`** - metric state and metric event results
//! - **`streaks`** - streak state, history and rankings
//! - **`points`** - points awards, triggers and summaries
//! - **`leaderboards`** - leaderboards, rankings and per-user history
//! - **`admin`** - admin payloads (points boosts, streak freezes)
//! - **`record`** - the `Record` trait and field tables

#[macro_use]
mod macros;

pub mod achievements;
pub mod admin;
pub mod leaderboards;
pub mod metrics;
pub mod points;
pub mod record;
pub mod streaks;
pub mod users;

pub use achievements::*;
pub use admin::*;
pub use leaderboards::*;
pub use metrics::*;
pub use points::*;
pub use record::{FieldSpec, Presence, Record};
pub use streaks::*;
pub use users::*;

/// Calendar date in `YYYY-MM-DD` form, as used by streak periods and summaries.
pub type DateString = String;

/// Instant in time, ISO-8601 on the wire.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
