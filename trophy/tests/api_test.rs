//! Endpoint surface against a mock Trophy server: paths, methods, headers,
//! query strings, bodies and response decoding.

use serde_json::json;
use trophy::prelude::*;
use trophy::types::EventResponseMetricsItemCompletedItem;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client(server: &MockServer) -> TrophyClient {
    TrophyClient::builder()
        .api_key("test-key")
        .environment(Environment::custom(
            server.uri(),
            format!("{}/admin", server.uri()),
        ))
        .build()
        .unwrap()
}

async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn complete_achievement_posts_user_and_decodes_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/achievements/finish-onboarding/complete"))
        .and(header("X-API-KEY", "test-key"))
        .and(header("X-Fern-Language", "Rust"))
        .and(header("X-Fern-SDK-Name", "trophy"))
        .and(body_json(json!({
            "user": {
                "id": "18",
                "email": "jk.rowling@harrypotter.com",
                "tz": "Europe/London"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "completionId": "0040fe51-6bce-4b44-b0ad-bddc4e123534",
            "achievement": {
                "id": "5100fe51-6bce-6j44-b0hs-bddc4e123682",
                "name": "Finish onboarding",
                "trigger": "api",
                "key": "finish-onboarding",
                "achievedAt": "2021-01-01T00:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = UpsertedUser::new("18")
        .with_email("jk.rowling@harrypotter.com")
        .with_tz("Europe/London");
    let completion = client(&server)
        .achievements()
        .complete("finish-onboarding", &user, None)
        .await
        .unwrap();

    assert_eq!(completion.completion_id, "0040fe51-6bce-4b44-b0ad-bddc4e123534");
    assert_eq!(completion.achievement.name, "Finish onboarding");
    assert_eq!(completion.achievement.key.as_deref(), Some("finish-onboarding"));
    assert!(completion.points.is_none());
}

#[tokio::test]
async fn leaderboard_page_sends_only_the_given_parameters_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leaderboards/weekly-words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "lb-1",
            "key": "weekly-words",
            "name": "Weekly words",
            "rankBy": "metric",
            "status": "active",
            "start": "2025-01-06",
            "maxParticipants": 100,
            "runUnit": "day",
            "runInterval": 7,
            "rankings": [
                {"userId": "u-11", "userName": "Ada", "rank": 11, "value": 4200},
                {"userId": "u-12", "rank": 12, "value": 3900}
            ]
        })))
        .mount(&server)
        .await;

    let leaderboard = client(&server)
        .leaderboards()
        .get("weekly-words", &LeaderboardQuery::page(10, 5), None)
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("offset=10&limit=5"));
    assert_eq!(leaderboard.rankings.len(), 2);
    assert_eq!(leaderboard.rankings[0].rank, 11);
    assert_eq!(leaderboard.rankings[1].user_name, None);
    assert_eq!(leaderboard.run_interval, Some(7));
}

#[tokio::test]
async fn batch_archive_deletes_boosts_on_the_admin_api() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/points/boosts"))
        .and(query_param("ids", "boost-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"archivedCount": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let archived = client(&server)
        .admin()
        .points_boosts()
        .batch_archive(["boost-1", "boost-2"], None)
        .await
        .unwrap();

    assert_eq!(archived.archived_count, 2);
    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("ids=boost-1&ids=boost-2"));
}

#[tokio::test]
async fn archive_single_boost_accepts_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/points/boosts/boost%201"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .admin()
        .points_boosts()
        .archive("boost 1", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn create_points_boosts_reports_issues() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/points/boosts"))
        .and(body_json(json!({
            "systemKey": "xp",
            "boosts": [
                {"userId": "u-1", "name": "Double XP", "start": "2025-02-01", "multiplier": 2.0, "end": "2025-02-08"}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "created": [],
            "issues": [{"userId": "u-1", "severity": "error", "message": "User not found"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreatePointsBoostsRequest {
        system_key: "xp".into(),
        boosts: vec![
            PointsBoostInput::new("u-1", "Double XP", "2025-02-01", 2.0).with_end("2025-02-08"),
        ],
        ..Default::default()
    };
    let response = client(&server)
        .admin()
        .points_boosts()
        .create(&request, None)
        .await
        .unwrap();

    assert!(response.created.is_empty());
    assert_eq!(response.issues[0].severity, AdminIssueSeverity::Error);
    assert_eq!(response.issues[0].message, "User not found");
}

#[tokio::test]
async fn streak_freezes_are_created_on_the_admin_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/streaks/freezes"))
        .and(body_json(json!({"freezes": [{"userId": "u-1"}, {"userId": "u-2"}]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"issues": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .admin()
        .streak_freezes()
        .create(&CreateStreakFreezesRequest::for_users(["u-1", "u-2"]), None)
        .await
        .unwrap();
    assert!(response.issues.is_empty());
}

#[tokio::test]
async fn metric_event_sends_user_and_value_and_resolves_completed_union() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/metrics/words-written/event"))
        .and(body_json(json!({"user": {"id": "u-1"}, "value": 750.0})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "eventId": "e-1",
            "metricId": "m-1",
            "total": 1500,
            "metrics": [{
                "metricId": "m-1",
                "completed": [
                    {"id": "a-1", "name": "Novelist", "metricId": "m-1", "metricValue": 1000},
                    {"something": "else"}
                ]
            }],
            "currentStreak": {"length": 3, "frequency": "daily", "extended": true},
            "points": {
                "xp": {"total": 20, "added": 10, "awards": []}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let event = client(&server)
        .metrics()
        .event("words-written", &UpsertedUser::new("u-1"), 750.0, None)
        .await
        .unwrap();

    assert_eq!(event.total, 1500.0);
    let completed = &event.metrics.as_ref().unwrap()[0].completed;
    match &completed[0] {
        EventResponseMetricsItemCompletedItem::Metric(achievement) => {
            assert_eq!(achievement.name, "Novelist");
            assert_eq!(achievement.metric_value, 1000.0);
        }
        other => panic!("expected metric achievement, got {other:?}"),
    }
    assert!(completed[1].is_raw());
    let streak = event.current_streak.unwrap();
    assert!(streak.extended);
    assert_eq!(streak.frequency, StreakFrequency::Daily);
    assert_eq!(event.points.unwrap()["xp"].added, 10.0);
}

#[tokio::test]
async fn user_lifecycle_uses_the_right_methods() {
    let server = MockServer::start().await;
    let user = json!({"id": "u-1", "email": "ada@example.com", "tz": "UTC"});
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({"id": "u-1", "email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(&user))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/u-1"))
        .and(body_json(json!({"tz": "UTC"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/users/u-1"))
        .and(body_json(json!({"name": "Ada"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).users();
    let created = users
        .create(&UpsertedUser::new("u-1").with_email("ada@example.com"), None)
        .await
        .unwrap();
    assert_eq!(created.email.as_deref(), Some("ada@example.com"));

    let fetched = users.get("u-1", None).await.unwrap();
    assert_eq!(fetched.id, "u-1");

    let identify = UpdatedUser {
        tz: Some("UTC".into()),
        ..Default::default()
    };
    users.identify("u-1", &identify, None).await.unwrap();

    let update = UpdatedUser {
        name: Some("Ada".into()),
        ..Default::default()
    };
    users.update("u-1", &update, None).await.unwrap();
}

#[tokio::test]
async fn user_reads_encode_ids_and_optional_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/user%2F1/achievements"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/user%2F1/points/xp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 120,
            "awards": [{"id": "aw-1", "awarded": 10, "date": "2025-01-01T12:00:00Z", "total": 120}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/user%2F1/metrics/words/event-summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"date": "2025-01-01", "total": 10, "change": 10}
        ])))
        .mount(&server)
        .await;

    let users = client(&server).users();
    users
        .all_achievements("user/1", Some(true), None)
        .await
        .unwrap();
    let points = users.points("user/1", "xp", None, None).await.unwrap();
    assert_eq!(points.total, 120.0);
    assert_eq!(points.awards[0].awarded, 10.0);
    let summary = users
        .metric_event_summary(
            "user/1",
            "words",
            &EventSummaryQuery::new(EventSummaryAggregation::Daily, "2025-01-01", "2025-01-31"),
            None,
        )
        .await
        .unwrap();
    assert_eq!(summary[0].change, 10.0);

    let queries: Vec<Option<String>> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.query().map(str::to_string))
        .collect();
    assert_eq!(
        queries,
        vec![
            Some("includeIncomplete=true".to_string()),
            None,
            Some("aggregation=daily&startDate=2025-01-01&endDate=2025-01-31".to_string()),
        ]
    );
}

#[tokio::test]
async fn streaks_repeat_user_ids_and_rankings_send_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/streaks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"userId": "u-1", "streakLength": 4, "extended": "2025-01-02"},
            {"userId": "u-2", "streakLength": 0}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/streaks/rankings"))
        .and(query_param("type", "longest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let streaks = client.streaks().list(["u-1", "u-2"], None).await.unwrap();
    assert_eq!(streaks[0].streak_length, 4);
    assert_eq!(streaks[1].extended, None);

    let query = StreakRankingsQuery {
        limit: None,
        kind: Some(StreakRankingType::Longest),
    };
    client.streaks().rankings(&query, None).await.unwrap();

    let first = &server.received_requests().await.unwrap()[0];
    assert_eq!(first.url.query(), Some("userIds=u-1&userIds=u-2"));
}

#[tokio::test]
async fn request_options_override_key_headers_and_parameters() {
    let server = MockServer::start().await;
    let other = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leaderboards/weekly-words"))
        .and(header("X-API-KEY", "call-key"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rankings": []})))
        .expect(1)
        .mount(&other)
        .await;

    let options = RequestOptions::new()
        .with_base_url(other.uri())
        .with_api_key("call-key")
        .with_header("x-trace", "abc")
        .with_query_parameter("limit", 99)
        .with_query_parameter("debug", true);
    client(&server)
        .leaderboards()
        .get("weekly-words", &LeaderboardQuery::page(0, 5), Some(options))
        .await
        .unwrap();

    assert!(server.received_requests().await.unwrap().is_empty());
    let request = only_request(&other).await;
    assert_eq!(request.url.query(), Some("offset=0&limit=5&debug=true"));
}

#[tokio::test]
async fn body_parameters_from_options_are_merged_under_declared_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/metrics/words/event"))
        .and(body_json(json!({
            "user": {"id": "u-1"},
            "value": 1.0,
            "idempotencyKey": "k-1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "eventId": "e-1", "metricId": "m-1", "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new()
        .with_body_parameter("idempotencyKey", "k-1")
        .with_body_parameter("value", 5);
    let event = client(&server)
        .metrics()
        .event("words", &UpsertedUser::new("u-1"), 1.0, Some(options))
        .await
        .unwrap();
    assert_eq!(event.event_id, "e-1");
}

#[tokio::test]
async fn api_errors_carry_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "User not found"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/points/triggers"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.users().get("ghost", None).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.error_body().unwrap().error, "User not found");

    let err = client.points().triggers(None).await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn unknown_fields_and_enum_values_are_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/achievements"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "a-1",
            "name": "Early bird",
            "trigger": "webhook",
            "completions": 3,
            "completedPercentage": 12.5,
            "color": "gold"
        }])))
        .mount(&server)
        .await;

    let achievements = client(&server).achievements().all(None).await.unwrap();
    let achievement = &achievements[0];
    assert_eq!(
        achievement.trigger,
        AchievementTrigger::Unknown("webhook".to_string())
    );
    assert_eq!(achievement.additional_properties["color"], json!("gold"));
}
