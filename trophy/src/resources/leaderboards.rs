//! Leaderboards endpoints.

use trophy_core::execution::encode_path_segment;
use trophy_core::{ApiCall, ApiScope, PreparedRequest, RequestOptions, Transport};
use trophy_spec::types::{LeaderboardResponse, LeaderboardResponseWithRankings};

/// Paging and run selection for [`LeaderboardsClient::get`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardQuery {
    /// Number of rankings to skip.
    pub offset: Option<i64>,
    /// Maximum number of rankings to return.
    pub limit: Option<i64>,
    /// Start date (`YYYY-MM-DD`) of a past run of a repeating leaderboard.
    pub run: Option<String>,
    /// Only return the ranking of this user.
    pub user_id: Option<String>,
}

impl LeaderboardQuery {
    pub fn page(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_run(mut self, run: impl Into<String>) -> Self {
        self.run = Some(run.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

#[derive(Clone, Debug)]
pub struct LeaderboardsClient<T> {
    transport: T,
}

impl<T: Transport> LeaderboardsClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn all(&self, options: Option<RequestOptions>) -> T::Output<Vec<LeaderboardResponse>> {
        let request = PreparedRequest::get(ApiScope::Api, "/leaderboards").with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// Leaderboard `key` with a page of rankings.
    pub fn get(
        &self,
        key: &str,
        query: &LeaderboardQuery,
        options: Option<RequestOptions>,
    ) -> T::Output<LeaderboardResponseWithRankings> {
        let request = PreparedRequest::get(
            ApiScope::Api,
            format!("/leaderboards/{}", encode_path_segment(key)),
        )
        .query("offset", query.offset)
        .query("limit", query.limit)
        .query("run", query.run.clone())
        .query("userId", query.user_id.clone())
        .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }
}
