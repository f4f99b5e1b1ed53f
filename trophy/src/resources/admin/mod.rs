//! Admin API endpoints. These resolve against the admin base URL.

pub mod points_boosts;
pub mod streak_freezes;

pub use points_boosts::PointsBoostsClient;
pub use streak_freezes::StreakFreezesClient;

use trophy_core::Transport;

#[derive(Clone, Debug)]
pub struct AdminClient<T> {
    transport: T,
}

impl<T: Transport> AdminClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn points_boosts(&self) -> PointsBoostsClient<T> {
        PointsBoostsClient::new(self.transport.clone())
    }

    pub fn streak_freezes(&self) -> StreakFreezesClient<T> {
        StreakFreezesClient::new(self.transport.clone())
    }
}
