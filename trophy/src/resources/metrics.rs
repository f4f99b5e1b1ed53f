//! Metrics endpoints.

use trophy_core::execution::encode_path_segment;
use trophy_core::{ApiCall, ApiScope, PreparedRequest, RequestOptions, Transport};
use trophy_spec::types::{EventResponse, UpsertedUser};

#[derive(Clone, Debug)]
pub struct MetricsClient<T> {
    transport: T,
}

impl<T: Transport> MetricsClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Record `value` against metric `key` for `user`.
    ///
    /// The response reports the new total and everything the event changed:
    /// completed achievements, the streak, points and leaderboard ranks.
    pub fn event(
        &self,
        key: &str,
        user: &UpsertedUser,
        value: f64,
        options: Option<RequestOptions>,
    ) -> T::Output<EventResponse> {
        let request = PreparedRequest::post(
            ApiScope::Api,
            format!("/metrics/{}/event", encode_path_segment(key)),
        )
        .body_field("user", user)
        .body_field("value", &value)
        .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }
}
