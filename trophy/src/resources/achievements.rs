//! Achievements endpoints.

use trophy_core::execution::encode_path_segment;
use trophy_core::{ApiCall, ApiScope, PreparedRequest, RequestOptions, Transport};
use trophy_spec::types::{AchievementCompletionResponse, AchievementWithStatsResponse, UpsertedUser};

#[derive(Clone, Debug)]
pub struct AchievementsClient<T> {
    transport: T,
}

impl<T: Transport> AchievementsClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    /// All achievements with their completion statistics.
    pub fn all(
        &self,
        options: Option<RequestOptions>,
    ) -> T::Output<Vec<AchievementWithStatsResponse>> {
        let request = PreparedRequest::get(ApiScope::Api, "/achievements").with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// Complete the `api`-triggered achievement `key` for `user`.
    ///
    /// The user is created if Trophy has not seen it before.
    pub fn complete(
        &self,
        key: &str,
        user: &UpsertedUser,
        options: Option<RequestOptions>,
    ) -> T::Output<AchievementCompletionResponse> {
        let request = PreparedRequest::post(
            ApiScope::Api,
            format!("/achievements/{}/complete", encode_path_segment(key)),
        )
        .body_field("user", user)
        .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }
}
