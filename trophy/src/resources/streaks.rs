//! Streaks endpoints.

use trophy_core::{ApiCall, ApiScope, PreparedRequest, RequestOptions, Transport};
use trophy_spec::types::{BulkStreakResponseItem, StreakRankingType, StreakRankingUser};

/// Options for [`StreaksClient::rankings`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreakRankingsQuery {
    pub limit: Option<i64>,
    /// Rank by the active streak or the longest streak ever.
    pub kind: Option<StreakRankingType>,
}

#[derive(Clone, Debug)]
pub struct StreaksClient<T> {
    transport: T,
}

impl<T: Transport> StreaksClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Current streak length for each of `user_ids`.
    pub fn list<I, S>(
        &self,
        user_ids: I,
        options: Option<RequestOptions>,
    ) -> T::Output<Vec<BulkStreakResponseItem>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let user_ids: Vec<String> = user_ids.into_iter().map(Into::into).collect();
        let request = PreparedRequest::get(ApiScope::Api, "/streaks")
            .query("userIds", Some(user_ids))
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// Users with the top streaks.
    pub fn rankings(
        &self,
        query: &StreakRankingsQuery,
        options: Option<RequestOptions>,
    ) -> T::Output<Vec<StreakRankingUser>> {
        let request = PreparedRequest::get(ApiScope::Api, "/streaks/rankings")
            .query("limit", query.limit)
            .query("type", query.kind.as_ref().map(ToString::to_string))
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }
}
