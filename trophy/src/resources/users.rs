//! Users endpoints.

use trophy_core::execution::encode_path_segment;
use trophy_core::{ApiCall, ApiScope, PreparedRequest, RequestOptions, Transport};
use trophy_spec::types::{
    CompletedAchievementResponse, DateString, EventSummaryAggregation, GetUserPointsResponse,
    MetricEventSummaryItem, MetricResponse, PointsEventSummaryItem, StreakResponse, UpdatedUser,
    UpsertedUser, User, UserLeaderboardResponse,
};

/// Date range and bucket size for event summaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventSummaryQuery {
    pub aggregation: EventSummaryAggregation,
    /// First day of the range, `YYYY-MM-DD`.
    pub start_date: DateString,
    /// Last day of the range, `YYYY-MM-DD`.
    pub end_date: DateString,
}

impl EventSummaryQuery {
    pub fn new(
        aggregation: EventSummaryAggregation,
        start_date: impl Into<DateString>,
        end_date: impl Into<DateString>,
    ) -> Self {
        Self {
            aggregation,
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    fn apply(&self, request: PreparedRequest) -> PreparedRequest {
        request
            .query("aggregation", Some(self.aggregation.to_string()))
            .query("startDate", Some(self.start_date.clone()))
            .query("endDate", Some(self.end_date.clone()))
    }
}

#[derive(Clone, Debug)]
pub struct UsersClient<T> {
    transport: T,
}

impl<T: Transport> UsersClient<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn create(
        &self,
        user: &UpsertedUser,
        options: Option<RequestOptions>,
    ) -> T::Output<User> {
        let request = PreparedRequest::post(ApiScope::Api, "/users")
            .body(user)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    pub fn get(&self, id: &str, options: Option<RequestOptions>) -> T::Output<User> {
        let request =
            PreparedRequest::get(ApiScope::Api, user_path(id, "")).with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// Create user `id` or replace its details.
    pub fn identify(
        &self,
        id: &str,
        user: &UpdatedUser,
        options: Option<RequestOptions>,
    ) -> T::Output<User> {
        let request = PreparedRequest::put(ApiScope::Api, user_path(id, ""))
            .body(user)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// Change the given fields of existing user `id`.
    pub fn update(
        &self,
        id: &str,
        user: &UpdatedUser,
        options: Option<RequestOptions>,
    ) -> T::Output<User> {
        let request = PreparedRequest::patch(ApiScope::Api, user_path(id, ""))
            .body(user)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    pub fn all_metrics(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> T::Output<Vec<MetricResponse>> {
        let request =
            PreparedRequest::get(ApiScope::Api, user_path(id, "/metrics")).with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    pub fn single_metric(
        &self,
        id: &str,
        key: &str,
        options: Option<RequestOptions>,
    ) -> T::Output<MetricResponse> {
        let suffix = format!("/metrics/{}", encode_path_segment(key));
        let request = PreparedRequest::get(ApiScope::Api, user_path(id, &suffix)).with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    pub fn metric_event_summary(
        &self,
        id: &str,
        key: &str,
        query: &EventSummaryQuery,
        options: Option<RequestOptions>,
    ) -> T::Output<Vec<MetricEventSummaryItem>> {
        let suffix = format!("/metrics/{}/event-summary", encode_path_segment(key));
        let request = query
            .apply(PreparedRequest::get(ApiScope::Api, user_path(id, &suffix)))
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// Achievements the user completed; pass `include_incomplete` to list
    /// the rest as well.
    pub fn all_achievements(
        &self,
        id: &str,
        include_incomplete: Option<bool>,
        options: Option<RequestOptions>,
    ) -> T::Output<Vec<CompletedAchievementResponse>> {
        let request = PreparedRequest::get(ApiScope::Api, user_path(id, "/achievements"))
            .query("includeIncomplete", include_incomplete)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// The user's streak, with `history_periods` past periods of history.
    pub fn streak(
        &self,
        id: &str,
        history_periods: Option<i64>,
        options: Option<RequestOptions>,
    ) -> T::Output<StreakResponse> {
        let request = PreparedRequest::get(ApiScope::Api, user_path(id, "/streak"))
            .query("historyPeriods", history_periods)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// The user's total in points system `key` and their latest `awards`.
    pub fn points(
        &self,
        id: &str,
        key: &str,
        awards: Option<i64>,
        options: Option<RequestOptions>,
    ) -> T::Output<GetUserPointsResponse> {
        let suffix = format!("/points/{}", encode_path_segment(key));
        let request = PreparedRequest::get(ApiScope::Api, user_path(id, &suffix))
            .query("awards", awards)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    pub fn points_event_summary(
        &self,
        id: &str,
        key: &str,
        query: &EventSummaryQuery,
        options: Option<RequestOptions>,
    ) -> T::Output<Vec<PointsEventSummaryItem>> {
        let suffix = format!("/points/{}/event-summary", encode_path_segment(key));
        let request = query
            .apply(PreparedRequest::get(ApiScope::Api, user_path(id, &suffix)))
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }

    /// The user's rank and rank history on leaderboard `key`.
    pub fn leaderboard(
        &self,
        id: &str,
        key: &str,
        run: Option<&str>,
        options: Option<RequestOptions>,
    ) -> T::Output<UserLeaderboardResponse> {
        let suffix = format!("/leaderboards/{}", encode_path_segment(key));
        let request = PreparedRequest::get(ApiScope::Api, user_path(id, &suffix))
            .query("run", run)
            .with_options(options);
        self.transport.execute(ApiCall::json(request))
    }
}

fn user_path(id: &str, suffix: &str) -> String {
    format!("/users/{}{}", encode_path_segment(id), suffix)
}
