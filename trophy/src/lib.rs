//! # Trophy - Rust client for the Trophy gamification API
//!
//! Track user activity with metric events and read back achievements,
//! streaks, points and leaderboards. The admin API manages points boosts
//! and streak freezes.
//!
//! ## Features
//!
//! - **Async and blocking**: one resource surface, generic over the transport.
//! - **Per-call options**: override the base URL, API key, headers, query and
//!   body parameters or timeout for a single request.
//! - **Retries**: opt-in exponential backoff on network errors, timeouts,
//!   429 and 5xx responses.
//! - **Forward compatible**: unknown response fields are kept in
//!   `additional_properties`, unknown enum values in an `Unknown` variant.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trophy::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), TrophyError> {
//!     let client = TrophyClient::builder().api_key("your-api-key").build()?;
//!
//!     let user = UpsertedUser::new("user-123").with_tz("Europe/London");
//!     let event = client
//!         .metrics()
//!         .event("words-written", &user, 750.0, None)
//!         .await?;
//!     println!("new total: {}", event.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Blocking
//!
//! ```rust,no_run
//! use trophy::prelude::*;
//!
//! fn main() -> Result<(), TrophyError> {
//!     let client = BlockingTrophyClient::new("your-api-key")?;
//!     for achievement in client.achievements().all(None)? {
//!         println!("{}: {:?}", achievement.name, achievement.completions);
//!     }
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]

pub mod builder;
pub mod client;
pub mod resources;

pub use builder::ClientBuilder;
pub use client::{BlockingTrophyClient, Client, TrophyClient};

pub use trophy_core::{
    ApiKey, ApiScope, CredentialProvider, EnvCredentialProvider, Environment, HttpInterceptor,
    HttpRequestContext, LoggingInterceptor, RequestInfo, RequestOptions, ResolvedRequest,
    RetryPolicy, TrophyError, ValidationError,
};

/// Request and response records.
pub use trophy_spec::types;

pub mod prelude {
    pub use crate::builder::ClientBuilder;
    pub use crate::client::{BlockingTrophyClient, TrophyClient};
    pub use crate::resources::{EventSummaryQuery, LeaderboardQuery, StreakRankingsQuery};
    pub use trophy_core::{Environment, RequestOptions, RetryPolicy, TrophyError};
    pub use trophy_spec::types::*;
}
