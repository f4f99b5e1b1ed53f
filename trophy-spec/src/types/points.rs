//! Points records.

use super::{DateString, Timestamp};

string_enum! {
    /// What awards points.
    pub enum PointsTriggerType {
        Metric => "metric",
        Achievement => "achievement",
        Streak => "streak",
        Time => "time",
        UserCreation => "user_creation",
    }
}

string_enum! {
    pub enum PointsTriggerStatus {
        Active => "active",
        Archived => "archived",
    }
}

string_enum! {
    pub enum PointsTriggerTimeUnit {
        Hour => "hour",
        Day => "day",
    }
}

record! {
    /// The trigger that produced a points award.
    pub struct PointsTrigger {
        id: String => "id",
        kind: PointsTriggerType => "type",
        points: f64 => "points",
        metric_name: Option<String> => "metricName",
        metric_threshold: Option<f64> => "metricThreshold",
        streak_length_threshold: Option<i64> => "streakLengthThreshold",
        achievement_name: Option<String> => "achievementName",
        time_unit: Option<PointsTriggerTimeUnit> => "timeUnit",
        time_interval: Option<i64> => "timeInterval",
    }
}

record! {
    /// A single points award.
    pub struct PointsAward {
        id: Option<String> => "id",
        awarded: f64 => "awarded",
        date: Timestamp => "date",
        /// The user's total after this award.
        total: f64 => "total",
        trigger: Option<PointsTrigger> => "trigger",
    }
}

record! {
    /// Points changes caused by a metric event or achievement completion.
    pub struct MetricEventPointsResponse {
        system_key: Option<String> => "systemKey",
        total: f64 => "total",
        added: f64 => "added",
        awards: Vec<PointsAward> => "awards",
    }
}

record! {
    /// A configured points trigger.
    pub struct PointsTriggerResponse {
        id: String => "id",
        kind: PointsTriggerType => "type",
        points: f64 => "points",
        status: PointsTriggerStatus => "status",
        metric_id: Option<String> => "metricId",
        metric_name: Option<String> => "metricName",
        metric_threshold: Option<f64> => "metricThreshold",
        streak_length_threshold: Option<i64> => "streakLengthThreshold",
        achievement_id: Option<String> => "achievementId",
        achievement_name: Option<String> => "achievementName",
        time_unit: Option<PointsTriggerTimeUnit> => "timeUnit",
        time_interval: Option<i64> => "timeInterval",
        created: Option<Timestamp> => "created",
        updated: Option<Timestamp> => "updated",
    }
}

record! {
    /// One bucket of the points distribution across users.
    pub struct PointsRange {
        from: f64 => "from",
        to: f64 => "to",
        users: i64 => "users",
    }
}

record! {
    /// A user's points total and recent awards.
    pub struct GetUserPointsResponse {
        total: f64 => "total",
        awards: Vec<PointsAward> => "awards",
    }
}

record! {
    /// One bucket of a user's points event summary.
    pub struct PointsEventSummaryItem {
        date: DateString => "date",
        total: f64 => "total",
        change: f64 => "change",
    }
}
