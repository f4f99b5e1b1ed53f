//! Achievement records.

use super::Timestamp;
use super::points::MetricEventPointsResponse;
use std::collections::HashMap;

string_enum! {
    /// What completes an achievement.
    pub enum AchievementTrigger {
        Metric => "metric",
        Streak => "streak",
        Api => "api",
    }
}

record! {
    /// An achievement definition.
    pub struct AchievementResponse {
        id: String => "id",
        name: String => "name",
        trigger: AchievementTrigger => "trigger",
        description: Option<String> => "description",
        badge_url: Option<String> => "badgeUrl",
        /// Key used to complete `api` achievements.
        key: Option<String> => "key",
        streak_length: Option<i64> => "streakLength",
        metric_id: Option<String> => "metricId",
        metric_value: Option<f64> => "metricValue",
        metric_name: Option<String> => "metricName",
    }
}

record! {
    /// An achievement definition with completion statistics.
    pub struct AchievementWithStatsResponse {
        id: String => "id",
        name: String => "name",
        trigger: AchievementTrigger => "trigger",
        description: Option<String> => "description",
        badge_url: Option<String> => "badgeUrl",
        key: Option<String> => "key",
        streak_length: Option<i64> => "streakLength",
        metric_id: Option<String> => "metricId",
        metric_value: Option<f64> => "metricValue",
        metric_name: Option<String> => "metricName",
        /// Number of users that completed the achievement.
        completions: i64 => "completions",
        /// Share of all users that completed it, 0-100.
        completed_percentage: f64 => "completedPercentage",
    }
}

record! {
    /// An achievement a user has completed (or not, when listing incomplete ones).
    pub struct CompletedAchievementResponse {
        id: String => "id",
        name: String => "name",
        trigger: AchievementTrigger => "trigger",
        description: Option<String> => "description",
        badge_url: Option<String> => "badgeUrl",
        key: Option<String> => "key",
        streak_length: Option<i64> => "streakLength",
        metric_id: Option<String> => "metricId",
        metric_value: Option<f64> => "metricValue",
        metric_name: Option<String> => "metricName",
        achieved_at: Option<Timestamp> => "achievedAt",
    }
}

record! {
    /// An achievement completed by reaching a metric value.
    pub struct MetricAchievementResponse {
        id: String => "id",
        name: String => "name",
        metric_id: String => "metricId",
        metric_value: f64 => "metricValue",
        metric_name: Option<String> => "metricName",
        key: Option<String> => "key",
        description: Option<String> => "description",
        badge_url: Option<String> => "badgeUrl",
        achieved_at: Option<Timestamp> => "achievedAt",
    }
}

record! {
    /// An achievement completed by reaching a streak length.
    pub struct StreakAchievementResponse {
        id: String => "id",
        name: String => "name",
        streak_length: i64 => "streakLength",
        key: Option<String> => "key",
        description: Option<String> => "description",
        badge_url: Option<String> => "badgeUrl",
        achieved_at: Option<Timestamp> => "achievedAt",
    }
}

record! {
    /// Result of completing an `api` achievement for a user.
    pub struct AchievementCompletionResponse {
        completion_id: String => "completionId",
        achievement: CompletedAchievementResponse => "achievement",
        /// Points awarded by the completion, keyed by points system.
        points: Option<HashMap<String, MetricEventPointsResponse>> => "points",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    #[test]
    fn completion_response_decodes_nested_achievement() {
        let body = br#"{
            "completionId": "0040fe51-6bce-4b44-b0ad-bddc4e123534",
            "achievement": {
                "id": "5100fe51-6bce-6j44-b0hs-bddc4e123682",
                "name": "Finish onboarding",
                "trigger": "api",
                "description": "Complete the onboarding process.",
                "badgeUrl": "https://example.com/badge.png",
                "key": "finish-onboarding",
                "achievedAt": "2021-01-01T00:00:00Z"
            }
        }"#;

        let response = AchievementCompletionResponse::decode(body).unwrap();
        assert_eq!(response.completion_id, "0040fe51-6bce-4b44-b0ad-bddc4e123534");
        assert_eq!(response.achievement.trigger, AchievementTrigger::Api);
        assert_eq!(response.achievement.key.as_deref(), Some("finish-onboarding"));
        assert!(response.achievement.achieved_at.is_some());
        assert!(response.points.is_none());
    }

    #[test]
    fn unknown_trigger_is_kept_verbatim() {
        let achievement = AchievementResponse::from_value(json!({
            "id": "1",
            "name": "Early bird",
            "trigger": "time_of_day"
        }))
        .unwrap();

        assert_eq!(
            achievement.trigger,
            AchievementTrigger::Unknown("time_of_day".into())
        );
        assert!(!achievement.trigger.is_known());
        assert_eq!(achievement.encode().unwrap()["trigger"], "time_of_day");
    }

    #[test]
    fn achievement_with_stats_round_trips() {
        let payload = json!({
            "id": "1",
            "name": "10k words",
            "trigger": "metric",
            "metricId": "m-1",
            "metricValue": 10000.0,
            "metricName": "words written",
            "completions": 42,
            "completedPercentage": 12.5
        });
        let achievement = AchievementWithStatsResponse::from_value(payload.clone()).unwrap();
        assert_eq!(achievement.completions, 42);
        assert_eq!(achievement.encode().unwrap(), payload);
    }

    #[test]
    fn completion_points_map_decodes_each_entry() {
        let response = AchievementCompletionResponse::from_value(json!({
            "completionId": "c-1",
            "achievement": {"id": "a-1", "name": "A", "trigger": "api"},
            "points": {
                "xp": {"total": 20, "added": 10, "awards": []},
                "coins": {"systemKey": "coins", "total": 5, "added": 5, "awards": []}
            }
        }))
        .unwrap();

        let points = response.points.unwrap();
        assert_eq!(points["xp"].added, 10.0);
        assert_eq!(points["coins"].system_key.as_deref(), Some("coins"));
    }
}
