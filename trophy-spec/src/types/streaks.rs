//! Streak records.

use super::DateString;

string_enum! {
    /// How often activity is needed to keep a streak alive.
    pub enum StreakFrequency {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

string_enum! {
    /// Which streak length to rank users by.
    pub enum StreakRankingType {
        Active => "active",
        Longest => "longest",
    }
}

record! {
    /// A user's current streak.
    pub struct StreakResponse {
        length: i64 => "length",
        frequency: StreakFrequency => "frequency",
        started: Option<DateString> => "started",
        period_start: Option<DateString> => "periodStart",
        period_end: Option<DateString> => "periodEnd",
        expires: Option<DateString> => "expires",
        freezes: Option<i64> => "freezes",
        max_freezes: Option<i64> => "maxFreezes",
        /// Recent periods, oldest first.
        streak_history: Option<Vec<StreakHistoryPeriod>> => "streakHistory",
        rank: Option<i64> => "rank",
    }
}

record! {
    /// One period of a user's streak history.
    pub struct StreakHistoryPeriod {
        period_start: DateString => "periodStart",
        period_end: DateString => "periodEnd",
        length: i64 => "length",
        used_freeze: Option<bool> => "usedFreeze",
    }
}

record! {
    /// Streak summary for one user in a bulk lookup.
    pub struct BulkStreakResponseItem {
        user_id: String => "userId",
        streak_length: i64 => "streakLength",
        extended: Option<DateString> => "extended",
    }
}

record! {
    /// One entry of the streak rankings.
    pub struct StreakRankingUser {
        user_id: String => "userId",
        name: Option<String> => "name",
        streak_length: i64 => "streakLength",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    #[test]
    fn streak_with_history_round_trips() {
        let payload = json!({
            "length": 2,
            "frequency": "weekly",
            "started": "2025-04-02",
            "periodStart": "2025-03-31",
            "periodEnd": "2025-04-05",
            "expires": "2025-04-12",
            "freezes": 1,
            "maxFreezes": 3,
            "streakHistory": [
                {"periodStart": "2025-03-24", "periodEnd": "2025-03-29", "length": 1},
                {"periodStart": "2025-03-31", "periodEnd": "2025-04-05", "length": 2, "usedFreeze": false}
            ]
        });

        let streak = StreakResponse::from_value(payload.clone()).unwrap();
        assert_eq!(streak.frequency, StreakFrequency::Weekly);
        let history = streak.streak_history.as_ref().unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].used_freeze.is_none());
        assert_eq!(streak.encode().unwrap(), payload);
    }

    #[test]
    fn missing_frequency_decodes_as_unset() {
        let streak = StreakResponse::decode(br#"{"length": 0}"#).unwrap();
        assert_eq!(streak.frequency, StreakFrequency::Unknown(String::new()));
        assert!(StreakResponse::validate(&json!({"length": 0})).is_err());
    }
}
