//! Metric records and metric event results.

use super::DateString;
use super::achievements::{
    CompletedAchievementResponse, MetricAchievementResponse, StreakAchievementResponse,
};
use super::leaderboards::MetricEventLeaderboardResponse;
use super::points::MetricEventPointsResponse;
use super::streaks::StreakFrequency;
use std::collections::HashMap;

string_enum! {
    pub enum MetricStatus {
        Active => "active",
        Archived => "archived",
    }
}

string_enum! {
    /// Bucket size for event summaries.
    pub enum EventSummaryAggregation {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

record! {
    /// A metric and the requesting user's progress on it.
    pub struct MetricResponse {
        id: String => "id",
        key: String => "key",
        name: String => "name",
        status: MetricStatus => "status",
        /// The user's current total for the metric.
        current: f64 => "current",
        units: Option<String> => "units",
        achievements: Vec<CompletedAchievementResponse> => "achievements",
    }
}

union_record! {
    /// An achievement completed as a side effect of a metric event.
    ///
    /// The payload carries no trusted discriminant; it resolves to the first
    /// shape it satisfies, metric achievements before streak achievements.
    pub enum EventResponseMetricsItemCompletedItem {
        Metric(MetricAchievementResponse),
        Streak(StreakAchievementResponse),
    }
}

record! {
    /// Achievements completed for one metric by an event.
    pub struct EventResponseMetricsItem {
        metric_id: String => "metricId",
        completed: Vec<EventResponseMetricsItemCompletedItem> => "completed",
    }
}

record! {
    /// The user's streak after a metric event.
    pub struct MetricEventStreakResponse {
        length: i64 => "length",
        frequency: StreakFrequency => "frequency",
        started: Option<DateString> => "started",
        period_start: Option<DateString> => "periodStart",
        period_end: Option<DateString> => "periodEnd",
        expires: Option<DateString> => "expires",
        /// Whether this event extended the streak.
        extended: bool => "extended",
        freezes: Option<i64> => "freezes",
        max_freezes: Option<i64> => "maxFreezes",
    }
}

record! {
    /// Result of sending a metric event.
    pub struct EventResponse {
        event_id: String => "eventId",
        metric_id: String => "metricId",
        /// The user's new total for the metric.
        total: f64 => "total",
        metrics: Option<Vec<EventResponseMetricsItem>> => "metrics",
        current_streak: Option<MetricEventStreakResponse> => "currentStreak",
        points: Option<HashMap<String, MetricEventPointsResponse>> => "points",
        leaderboards: Option<HashMap<String, MetricEventLeaderboardResponse>> => "leaderboards",
    }
}

record! {
    /// One bucket of a user's metric event summary.
    pub struct MetricEventSummaryItem {
        date: DateString => "date",
        total: f64 => "total",
        change: f64 => "change",
    }
}
