//! Admin API records: points boosts and streak freezes.

use super::DateString;

string_enum! {
    /// How boosted points are rounded.
    pub enum PointsBoostRounding {
        Down => "down",
        Up => "up",
        Nearest => "nearest",
    }
}

string_enum! {
    pub enum PointsBoostStatus {
        Active => "active",
        Scheduled => "scheduled",
        Finished => "finished",
        Archived => "archived",
    }
}

string_enum! {
    pub enum AdminIssueSeverity {
        Error => "error",
        Warning => "warning",
    }
}

record! {
    /// A problem reported for one item of a bulk admin request.
    pub struct AdminIssue {
        user_id: Option<String> => "userId",
        severity: AdminIssueSeverity => "severity",
        message: String => "message",
    }
}

record! {
    /// One boost to create.
    pub struct PointsBoostInput {
        user_id: String => "userId",
        name: String => "name",
        start: DateString => "start",
        end: Option<DateString> => "end",
        multiplier: f64 => "multiplier",
        rounding: Option<PointsBoostRounding> => "rounding",
    }
}

record! {
    pub struct CreatePointsBoostsRequest {
        /// Key of the points system the boosts apply to.
        system_key: String => "systemKey",
        boosts: Vec<PointsBoostInput> => "boosts",
    }
}

record! {
    /// A created points boost.
    pub struct PointsBoost {
        id: String => "id",
        user_id: String => "userId",
        name: String => "name",
        status: PointsBoostStatus => "status",
        start: DateString => "start",
        end: Option<DateString> => "end",
        multiplier: f64 => "multiplier",
        rounding: PointsBoostRounding => "rounding",
    }
}

record! {
    pub struct CreatePointsBoostsResponse {
        created: Vec<PointsBoost> => "created",
        issues: Vec<AdminIssue> => "issues",
    }
}

record! {
    pub struct ArchivePointsBoostsResponse {
        archived_count: i64 => "archivedCount",
    }
}

record! {
    pub struct StreakFreezeInput {
        user_id: String => "userId",
    }
}

record! {
    pub struct CreateStreakFreezesRequest {
        freezes: Vec<StreakFreezeInput> => "freezes",
    }
}

record! {
    pub struct CreateStreakFreezesResponse {
        issues: Vec<AdminIssue> => "issues",
    }
}

impl PointsBoostInput {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        start: impl Into<DateString>,
        multiplier: f64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            start: start.into(),
            multiplier,
            ..Default::default()
        }
    }

    pub fn with_end(mut self, end: impl Into<DateString>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn with_rounding(mut self, rounding: PointsBoostRounding) -> Self {
        self.rounding = Some(rounding);
        self
    }
}

impl CreateStreakFreezesRequest {
    /// One freeze for each user ID.
    pub fn for_users<I, S>(user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            freezes: user_ids
                .into_iter()
                .map(|id| StreakFreezeInput {
                    user_id: id.into(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }
}
