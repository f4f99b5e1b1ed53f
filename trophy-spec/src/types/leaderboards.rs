//! Leaderboard records.

use super::{DateString, Timestamp};

string_enum! {
    /// What a leaderboard ranks users by.
    pub enum LeaderboardRankBy {
        Points => "points",
        Streak => "streak",
        Metric => "metric",
    }
}

string_enum! {
    pub enum LeaderboardStatus {
        Active => "active",
        Scheduled => "scheduled",
        Finished => "finished",
    }
}

string_enum! {
    /// Unit of a repeating leaderboard's run interval.
    pub enum LeaderboardRunUnit {
        Day => "day",
        Month => "month",
        Year => "year",
    }
}

record! {
    /// A leaderboard definition.
    pub struct LeaderboardResponse {
        id: String => "id",
        key: String => "key",
        name: String => "name",
        description: Option<String> => "description",
        rank_by: LeaderboardRankBy => "rankBy",
        metric_key: Option<String> => "metricKey",
        metric_name: Option<String> => "metricName",
        status: LeaderboardStatus => "status",
        start: DateString => "start",
        end: Option<DateString> => "end",
        max_participants: i64 => "maxParticipants",
        run_unit: Option<LeaderboardRunUnit> => "runUnit",
        run_interval: Option<i64> => "runInterval",
    }
}

record! {
    /// A user's position on a leaderboard.
    pub struct LeaderboardRanking {
        user_id: String => "userId",
        user_name: Option<String> => "userName",
        rank: i64 => "rank",
        value: f64 => "value",
    }
}

record! {
    /// A leaderboard with a page of rankings.
    pub struct LeaderboardResponseWithRankings {
        id: String => "id",
        key: String => "key",
        name: String => "name",
        description: Option<String> => "description",
        rank_by: LeaderboardRankBy => "rankBy",
        metric_key: Option<String> => "metricKey",
        metric_name: Option<String> => "metricName",
        status: LeaderboardStatus => "status",
        start: DateString => "start",
        end: Option<DateString> => "end",
        max_participants: i64 => "maxParticipants",
        run_unit: Option<LeaderboardRunUnit> => "runUnit",
        run_interval: Option<i64> => "runInterval",
        rankings: Vec<LeaderboardRanking> => "rankings",
    }
}

record! {
    /// A change in a user's rank or value.
    pub struct LeaderboardEvent {
        timestamp: Timestamp => "timestamp",
        previous_rank: Option<i64> => "previousRank",
        rank: Option<i64> => "rank",
        previous_value: Option<f64> => "previousValue",
        value: Option<f64> => "value",
    }
}

record! {
    /// A leaderboard from one user's point of view, with their rank history.
    pub struct UserLeaderboardResponse {
        id: String => "id",
        key: String => "key",
        name: String => "name",
        description: Option<String> => "description",
        rank_by: LeaderboardRankBy => "rankBy",
        metric_key: Option<String> => "metricKey",
        metric_name: Option<String> => "metricName",
        status: LeaderboardStatus => "status",
        start: DateString => "start",
        end: Option<DateString> => "end",
        max_participants: i64 => "maxParticipants",
        run_unit: Option<LeaderboardRunUnit> => "runUnit",
        run_interval: Option<i64> => "runInterval",
        /// Unset when the user is not ranked.
        rank: Option<i64> => "rank",
        value: Option<f64> => "value",
        history: Vec<LeaderboardEvent> => "history",
    }
}

record! {
    /// A leaderboard the user moved on after a metric event.
    pub struct MetricEventLeaderboardResponse {
        key: String => "key",
        name: String => "name",
        rank_by: LeaderboardRankBy => "rankBy",
        rank: Option<i64> => "rank",
        previous_rank: Option<i64> => "previousRank",
        /// Minimum value needed to enter the leaderboard.
        threshold: Option<f64> => "threshold",
        start: DateString => "start",
        end: Option<DateString> => "end",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    #[test]
    fn rankings_page_decodes() {
        let board = LeaderboardResponseWithRankings::decode(
            br#"{
                "id": "5100fe51-6bce-6j44-b0hs-bddc4e123682",
                "key": "weekly-words",
                "name": "Weekly words",
                "rankBy": "metric",
                "metricKey": "words-written",
                "status": "active",
                "start": "2025-01-01",
                "maxParticipants": 100,
                "runUnit": "day",
                "runInterval": 7,
                "rankings": [
                    {"userId": "18", "userName": "Joanne", "rank": 11, "value": 5000},
                    {"userId": "19", "rank": 12, "value": 4800}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(board.rank_by, LeaderboardRankBy::Metric);
        assert_eq!(board.run_unit, Some(LeaderboardRunUnit::Day));
        assert_eq!(board.rankings.len(), 2);
        assert_eq!(board.rankings[1].user_name, None);
        assert_eq!(board.rankings[0].value, 5000.0);
    }

    #[test]
    fn user_leaderboard_keeps_history_and_unranked_state() {
        let payload = json!({
            "id": "l-1",
            "key": "daily-points",
            "name": "Daily points",
            "rankBy": "points",
            "status": "finished",
            "start": "2025-01-01",
            "end": "2025-01-31",
            "maxParticipants": 10,
            "history": [
                {"timestamp": "2025-01-02T10:00:00Z", "rank": 3, "value": 40.0},
                {"timestamp": "2025-01-03T10:00:00Z", "previousRank": 3, "rank": 1, "previousValue": 40.0, "value": 90.0}
            ]
        });

        let board = UserLeaderboardResponse::from_value(payload.clone()).unwrap();
        assert!(board.rank.is_none());
        assert_eq!(board.history[1].previous_rank, Some(3));
        assert_eq!(board.encode().unwrap(), payload);
    }

    #[test]
    fn metric_event_leaderboard_requires_key_name_rank_by_and_start() {
        let required: Vec<_> = MetricEventLeaderboardResponse::FIELDS
            .iter()
            .filter(|f| !f.optional)
            .map(|f| f.wire)
            .collect();
        assert_eq!(required, ["key", "name", "rankBy", "start"]);
    }
}
