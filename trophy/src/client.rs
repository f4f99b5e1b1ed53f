//! Trophy clients.

use crate::builder::ClientBuilder;
use crate::resources::{
    AchievementsClient, AdminClient, LeaderboardsClient, MetricsClient, PointsClient,
    StreaksClient, UsersClient,
};
use trophy_core::{AsyncTransport, BlockingTransport, ClientConfig, Transport, TrophyError};

/// Entry point to every API area, generic over the transport.
///
/// Use [`TrophyClient`] from async code and [`BlockingTrophyClient`]
/// elsewhere. Cloning is cheap; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct Client<T> {
    transport: T,
}

/// Client whose methods return futures.
pub type TrophyClient = Client<AsyncTransport>;

/// Client whose methods block the calling thread.
pub type BlockingTrophyClient = Client<BlockingTransport>;

impl<T: Transport> Client<T> {
    pub fn from_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn achievements(&self) -> AchievementsClient<T> {
        AchievementsClient::new(self.transport.clone())
    }

    pub fn metrics(&self) -> MetricsClient<T> {
        MetricsClient::new(self.transport.clone())
    }

    pub fn leaderboards(&self) -> LeaderboardsClient<T> {
        LeaderboardsClient::new(self.transport.clone())
    }

    pub fn streaks(&self) -> StreaksClient<T> {
        StreaksClient::new(self.transport.clone())
    }

    pub fn points(&self) -> PointsClient<T> {
        PointsClient::new(self.transport.clone())
    }

    pub fn users(&self) -> UsersClient<T> {
        UsersClient::new(self.transport.clone())
    }

    /// Admin API (points boosts, streak freezes).
    pub fn admin(&self) -> AdminClient<T> {
        AdminClient::new(self.transport.clone())
    }
}

impl TrophyClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Async client for the production environment.
    pub fn new(api_key: impl Into<String>) -> Result<Self, TrophyError> {
        ClientBuilder::new().api_key(api_key).build()
    }
}

impl BlockingTrophyClient {
    /// Blocking client for the production environment.
    pub fn new(api_key: impl Into<String>) -> Result<Self, TrophyError> {
        ClientBuilder::new().api_key(api_key).build_blocking()
    }
}
