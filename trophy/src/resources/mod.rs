//! Endpoint groups, one per API area.
//!
//! Every group is generic over the [`Transport`](trophy_core::Transport) it
//! sends through, so the same methods serve the async and the blocking
//! client.

pub mod achievements;
pub mod admin;
pub mod leaderboards;
pub mod metrics;
pub mod points;
pub mod streaks;
pub mod users;

pub use achievements::AchievementsClient;
pub use admin::{AdminClient, PointsBoostsClient, StreakFreezesClient};
pub use leaderboards::{LeaderboardQuery, LeaderboardsClient};
pub use metrics::MetricsClient;
pub use points::PointsClient;
pub use streaks::{StreakRankingsQuery, StreaksClient};
pub use users::{EventSummaryQuery, UsersClient};
