//! API Integration Tests
//!
//! Servers run in-process against in-memory repositories and a stubbed
//! platform access provider, so the suite is fully hermetic.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::fakes::{CREATOR_TOKEN, MEMBER_TOKEN};
use integration_tests::fixtures::*;
use integration_tests::{assert_status, json_data, TestServer};
use pulse_core::MessageTag;
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Creator Tests
// ============================================================================

#[tokio::test]
async fn test_register_creator_requires_auth() {
    let server = TestServer::start().await.unwrap();
    let body = json!({ "name": "Maya", "email": "maya@example.com" });

    let response = server.post("/api/v1/creators", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_auth("/api/v1/creators", MEMBER_TOKEN, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_register_and_lookup_creator() {
    let server = TestServer::start().await.unwrap();
    let body = json!({ "name": "Maya", "email": "maya@example.com" });

    let response = server
        .post_auth("/api/v1/creators", CREATOR_TOKEN, &body)
        .await
        .unwrap();
    let created = json_data(response, StatusCode::CREATED).await.unwrap();

    let link = created["feedback_link"].as_str().unwrap().to_string();
    assert_eq!(link.len(), 8);

    let response = server
        .get(&format!("/api/v1/creators/{link}"))
        .await
        .unwrap();
    let profile = json_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile["name"], "Maya");
    // The public profile never carries the email
    assert!(profile.get("email").is_none());
}

#[tokio::test]
async fn test_lookup_unknown_feedback_link() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/creators/nosuch00").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_submit_message() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    let response = server
        .post("/api/v1/messages", &submit_message_body(creator.id, "question"))
        .await
        .unwrap();
    let message = json_data(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(message["tag"], "question");
    assert_eq!(message["reviewed"], false);
    assert_eq!(message["creator_id"], creator.id.to_string());
}

#[tokio::test]
async fn test_submit_message_unknown_creator() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/api/v1/messages",
            &submit_message_body(uuid::Uuid::new_v4(), "question"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_submit_message_rejects_bad_input() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    // Empty body text
    let body = json!({ "creator_id": creator.id, "body": "", "tag": "question" });
    let response = server.post("/api/v1/messages", &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Unknown tag
    let body = json!({ "creator_id": creator.id, "body": "hello", "tag": "rant" });
    let response = server.post("/api/v1/messages", &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_messages_requires_creator_access() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());
    let path = format!("/api/v1/messages?creator_id={}", creator.id);

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth(&path, MEMBER_TOKEN).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth(&path, "tok_bogus").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_list_and_filter_messages() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    let response = server
        .post("/api/v1/messages", &submit_message_body(creator.id, "question"))
        .await
        .unwrap();
    let first = json_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/messages", &submit_message_body(creator.id, "feedback"))
        .await
        .unwrap();
    json_data(response, StatusCode::CREATED).await.unwrap();

    // Mark the first message reviewed
    let response = server
        .patch_auth(
            &format!("/api/v1/messages/{}", first["id"].as_str().unwrap()),
            CREATOR_TOKEN,
            &json!({ "reviewed": true }),
        )
        .await
        .unwrap();
    let updated = json_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["reviewed"], true);

    // Unfiltered list has both
    let response = server
        .get_auth(
            &format!("/api/v1/messages?creator_id={}", creator.id),
            CREATOR_TOKEN,
        )
        .await
        .unwrap();
    let all = json_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.as_array().unwrap().len(), 2);

    // Reviewed filter keeps one
    let response = server
        .get_auth(
            &format!("/api/v1/messages?creator_id={}&reviewed=true", creator.id),
            CREATOR_TOKEN,
        )
        .await
        .unwrap();
    let reviewed = json_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviewed.as_array().unwrap().len(), 1);

    // Tag filter keeps one
    let response = server
        .get_auth(
            &format!("/api/v1/messages?creator_id={}&tag=feedback", creator.id),
            CREATOR_TOKEN,
        )
        .await
        .unwrap();
    let tagged = json_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(tagged.as_array().unwrap().len(), 1);
    assert_eq!(tagged[0]["tag"], "feedback");
}

#[tokio::test]
async fn test_delete_message() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    let response = server
        .post("/api/v1/messages", &submit_message_body(creator.id, "confession"))
        .await
        .unwrap();
    let message = json_data(response, StatusCode::CREATED).await.unwrap();
    let id = message["id"].as_str().unwrap().to_string();

    let response = server
        .delete_auth(&format!("/api/v1/messages/{id}"), CREATOR_TOKEN)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(server.store.message_count(), 0);

    // Invalid id shape is a caller error
    let response = server
        .delete_auth("/api/v1/messages/not-a-uuid", CREATOR_TOKEN)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Reply Tests
// ============================================================================

#[tokio::test]
async fn test_reply_visibility_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());
    let message = message_at(creator.id, hours_ago(1), MessageTag::Question);
    server.store.seed_message(message.clone());

    // Creator answers privately
    let response = server
        .post_auth(
            &format!("/api/v1/messages/{}/replies", message.id),
            CREATOR_TOKEN,
            &reply_body(false),
        )
        .await
        .unwrap();
    let reply = json_data(response, StatusCode::CREATED).await.unwrap();
    let reply_id = reply["id"].as_str().unwrap().to_string();

    // Visitors see nothing, the creator sees the private reply
    let path = format!("/api/v1/messages/{}/replies", message.id);
    let visible = json_data(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(visible.as_array().unwrap().len(), 0);

    let own = json_data(
        server.get_auth(&path, CREATOR_TOKEN).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(own.as_array().unwrap().len(), 1);

    // Publishing the reply makes it visible to visitors
    let response = server
        .patch_auth(
            &format!("/api/v1/replies/{reply_id}"),
            CREATOR_TOKEN,
            &json!({ "is_public": true }),
        )
        .await
        .unwrap();
    let updated = json_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["is_public"], true);

    let visible = json_data(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(visible.as_array().unwrap().len(), 1);

    // Delete removes it again
    let response = server
        .delete_auth(&format!("/api/v1/replies/{reply_id}"), CREATOR_TOKEN)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_update_reply_requires_some_field() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());
    let message = message_at(creator.id, hours_ago(1), MessageTag::Question);
    server.store.seed_message(message.clone());
    let reply = reply_at(message.id, hours_ago(1), false);
    server.store.seed_reply(reply.clone());

    let response = server
        .patch_auth(
            &format!("/api/v1/replies/{}", reply.id),
            CREATOR_TOKEN,
            &json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reply_to_unknown_message() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/messages/{}/replies", uuid::Uuid::new_v4()),
            CREATOR_TOKEN,
            &reply_body(true),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_toggle_and_summary() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());
    let message = message_at(creator.id, hours_ago(1), MessageTag::Feedback);
    server.store.seed_message(message.clone());

    let path = format!("/api/v1/messages/{}/reactions", message.id);
    let body = json!({ "reaction_type": "🔥", "user_hash": "user_a" });

    // First add sticks, the duplicate is a no-op
    let response = server.post(&path, &body).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.post(&path, &body).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // A second visitor reacts with the same token
    let response = server
        .post(&path, &json!({ "reaction_type": "🔥", "user_hash": "user_b" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let summary = json_data(
        server.get(&format!("{path}?user_hash=user_a")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let entries = summary.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["reaction_type"], "🔥");
    assert_eq!(entries[0]["count"], 2);
    assert_eq!(entries[0]["me"], true);

    // Removing one reaction lowers the count and drops the viewer flag
    let response = server
        .delete_json(&path, &json!({ "reaction_type": "🔥", "user_hash": "user_a" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let summary = json_data(
        server.get(&format!("{path}?user_hash=user_a")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let entries = summary.as_array().unwrap();
    assert_eq!(entries[0]["count"], 1);
    assert_eq!(entries[0]["me"], false);
}

#[tokio::test]
async fn test_reaction_defaults_to_thumbs_up() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());
    let message = message_at(creator.id, hours_ago(1), MessageTag::Feedback);
    server.store.seed_message(message.clone());

    let path = format!("/api/v1/messages/{}/reactions", message.id);
    let response = server
        .post(&path, &json!({ "user_hash": "user_a" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let summary = json_data(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(summary[0]["reaction_type"], "thumbs_up");
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_contains_only_publicly_answered_messages() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    let answered = message_at(creator.id, hours_ago(3), MessageTag::Question);
    server.store.seed_message(answered.clone());
    server
        .store
        .seed_reply(reply_at(answered.id, hours_ago(2), true));
    server
        .store
        .seed_reply(reply_at(answered.id, hours_ago(1), false));
    server.store.seed_reaction(reaction(answered.id, "❤️"));
    server.store.seed_reaction(reaction(answered.id, "🔥"));

    let privately_answered = message_at(creator.id, hours_ago(2), MessageTag::Feedback);
    server.store.seed_message(privately_answered.clone());
    server
        .store
        .seed_reply(reply_at(privately_answered.id, hours_ago(1), false));

    let unanswered = message_at(creator.id, hours_ago(1), MessageTag::Confession);
    server.store.seed_message(unanswered);

    let feed = json_data(
        server
            .get(&format!("/api/v1/feed?creator_id={}", creator.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let items = feed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], answered.id.to_string());
    assert_eq!(items[0]["reaction_count"], 2);
    // Only the public reply crosses the boundary
    assert_eq!(items[0]["replies"].as_array().unwrap().len(), 1);
}

// ============================================================================
// Analytics Tests
// ============================================================================

#[tokio::test]
async fn test_analytics_requires_creator_access() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());
    let path = format!("/api/v1/analytics?creator_id={}", creator.id);

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth(&path, MEMBER_TOKEN).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_analytics_rejects_unknown_period() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    let response = server
        .get_auth(
            &format!("/api/v1/analytics?creator_id={}&period=year", creator.id),
            CREATOR_TOKEN,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_analytics_report_summary() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    // Stale: five days old, never answered
    let stale = message_at(creator.id, days_ago(5), MessageTag::Confession);
    server.store.seed_message(stale.clone());

    // Answered publicly one hour after submission
    let answered = message_at(creator.id, hours_ago(2), MessageTag::Question);
    server.store.seed_message(answered.clone());
    server
        .store
        .seed_reply(reply_at(answered.id, hours_ago(1), true));

    // Fresh, unanswered, with two reactions
    let hot = message_at(creator.id, hours_ago(1), MessageTag::Feedback);
    server.store.seed_message(hot.clone());
    server.store.seed_reaction(reaction(hot.id, "🔥"));
    server.store.seed_reaction(reaction(hot.id, "🔥"));

    let report = json_data(
        server
            .get_auth(
                &format!("/api/v1/analytics?creator_id={}&period=all", creator.id),
                CREATOR_TOKEN,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let summary = &report["summary"];
    assert_eq!(summary["total_messages"], 3);
    assert_eq!(summary["total_replies"], 1);
    assert_eq!(summary["public_replies"], 1);
    assert_eq!(summary["total_reactions"], 2);
    assert_eq!(summary["stale_unanswered_count"], 1);
    assert!((summary["response_rate"].as_f64().unwrap() - 33.3).abs() < 1e-9);
    assert!((summary["average_response_time_hours"].as_f64().unwrap() - 1.0).abs() < 1e-9);

    // Distributions carry the three tags and the reaction token
    assert_eq!(report["distributions"]["tags"]["confession"], 1);
    assert_eq!(report["distributions"]["tags"]["question"], 1);
    assert_eq!(report["distributions"]["tags"]["feedback"], 1);
    assert_eq!(report["distributions"]["reaction_types"]["🔥"], 2);

    // The trend accounts for every message
    let trend_total: u64 = report["trend"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["count"].as_u64().unwrap())
        .sum();
    assert_eq!(trend_total, 3);

    // The stale list projects the reduced shape
    let stale_list = report["stale_messages"].as_array().unwrap();
    assert_eq!(stale_list.len(), 1);
    assert_eq!(stale_list[0]["id"], stale.id.to_string());
    assert_eq!(stale_list[0]["tag"], "confession");
    assert!(stale_list[0].get("reviewed").is_none());
}

#[tokio::test]
async fn test_analytics_week_window() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    server
        .store
        .seed_message(message_at(creator.id, days_ago(20), MessageTag::Question));
    server
        .store
        .seed_message(message_at(creator.id, days_ago(1), MessageTag::Question));

    let report = json_data(
        server
            .get_auth(
                &format!("/api/v1/analytics?creator_id={}&period=week", creator.id),
                CREATOR_TOKEN,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(report["summary"]["total_messages"], 1);

    let report = json_data(
        server
            .get_auth(
                &format!("/api/v1/analytics?creator_id={}&period=month", creator.id),
                CREATOR_TOKEN,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(report["summary"]["total_messages"], 2);
}

#[tokio::test]
async fn test_analytics_empty_report() {
    let server = TestServer::start().await.unwrap();
    let creator = creator();
    server.store.seed_creator(creator.clone());

    let report = json_data(
        server
            .get_auth(
                &format!("/api/v1/analytics?creator_id={}", creator.id),
                CREATOR_TOKEN,
            )
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(report["summary"]["total_messages"], 0);
    assert_eq!(report["summary"]["response_rate"], 0.0);
    assert!(report["summary"]["peak_day"].is_null());
    assert_eq!(report["trend"].as_array().unwrap().len(), 0);
    assert_eq!(report["stale_messages"].as_array().unwrap().len(), 0);
}
