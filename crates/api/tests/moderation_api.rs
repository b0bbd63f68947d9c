//! HTTP-level integration tests for the approve and moderate surfaces.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_titled, get, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_requires_reviewer(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_titled(app.clone(), "Gallery Night", "@curator").await;
    let uri = format!("/api/submissions/{id}/approve");

    let response = post_json(app.clone(), &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Reviewer name is required");

    let response = post_json(app.clone(), &uri, json!({ "reviewedBy": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(app, &format!("/api/submissions/{id}")).await).await;
    assert_eq!(json["status"], "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_sets_status_reviewer_and_timestamp(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_titled(app.clone(), "Runway Sketches", "@atelier").await;

    let response = post_json(
        app,
        &format!("/api/submissions/{id}/approve"),
        json!({ "reviewedBy": "Editorial Team" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "approved");
    assert_eq!(json["reviewedBy"], "Editorial Team");
    assert!(json["reviewedAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_unknown_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/submissions/777/approve",
        json!({ "reviewedBy": "Editorial Team" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn moderate_records_score_flags_and_notes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_titled(app.clone(), "Quick Snap", "@phone").await;

    let body = json!({
        "status": "flagged",
        "qualityScore": 35,
        "moderationFlags": ["low_effort", "duplicate", "low_effort"],
        "adminNotes": "Looks like a repost.",
        "reviewedBy": "Moderator",
    });
    let response = post_json(app, &format!("/api/submissions/{id}/moderate"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "flagged");
    assert_eq!(json["qualityScore"], 35);
    assert_eq!(json["moderationFlags"], json!(["low_effort", "duplicate"]));
    assert_eq!(json["adminNotes"], "Looks like a repost.");
    assert_eq!(json["reviewedBy"], "Moderator");
    assert_eq!(json["editorialStatus"], "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn moderate_rejects_bad_scores_flags_and_reasonless_rejections(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_titled(app.clone(), "Borderline", "@edge").await;
    let uri = format!("/api/submissions/{id}/moderate");

    for body in [
        json!({ "qualityScore": 101 }),
        json!({ "qualityScore": -1 }),
        json!({ "moderationFlags": ["boring"] }),
        json!({ "status": "rejected" }),
        json!({ "status": "rejected", "rejectionReason": "  " }),
    ] {
        let response = post_json(app.clone(), &uri, body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload should be rejected: {body}"
        );
    }

    let json = body_json(get(app, &format!("/api/submissions/{id}")).await).await;
    assert_eq!(json["status"], "pending");
    assert!(json["qualityScore"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn moderate_reject_with_reason(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_titled(app.clone(), "Off Brief", "@wander").await;

    let body = json!({
        "status": "rejected",
        "rejectionReason": "Doesn't fit our current editorial focus.",
        "moderationFlags": ["off_topic"],
    });
    let response = post_json(app, &format!("/api/submissions/{id}/moderate"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["rejectionReason"], "Doesn't fit our current editorial focus.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn all_surfaces_share_one_state_machine(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_titled(app.clone(), "Second Chance", "@retry").await;

    let response = post_json(
        app.clone(),
        &format!("/api/submissions/{id}/moderate"),
        json!({ "status": "rejected", "rejectionReason": "Needs more work." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // rejected -> approved is not allowed through any surface.
    let response = post_json(
        app.clone(),
        &format!("/api/submissions/{id}/approve"),
        json!({ "reviewedBy": "Editorial Team" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // rejected -> pending reopens it, after which approval works.
    let response = post_json(
        app.clone(),
        &format!("/api/submissions/{id}/status"),
        json!({ "status": "pending" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app,
        &format!("/api/submissions/{id}/approve"),
        json!({ "reviewedBy": "Editorial Team" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "approved");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn moderation_body_must_be_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_titled(app.clone(), "Broken Body", "@typo").await;

    let response = post_raw(app, &format!("/api/submissions/{id}/moderate"), "{").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejection_templates_are_listed(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/rejection-templates").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["low_effort", "inappropriate", "poor_quality", "off_topic"]);
    assert!(json[0]["title"].is_string());
    assert!(json[0]["message"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejected_submission_can_be_flagged_for_another_look(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_titled(app.clone(), "Reconsidered", "@twice").await;
    let uri = format!("/api/submissions/{id}/moderate");

    let response = post_json(
        app.clone(),
        &uri,
        json!({ "status": "rejected", "rejectionReason": "Blurry scans." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(app.clone(), &uri, json!({ "status": "flagged" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "flagged");

    let response = post_json(
        app,
        &format!("/api/submissions/{id}/approve"),
        json!({ "reviewedBy": "Editorial Team" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "approved");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn racing_reject_and_approve_never_approve_a_rejection(pool: PgPool) {
    let app = common::build_test_app(pool);

    for round in 0..20 {
        let id = create_titled(app.clone(), &format!("Race {round}"), "@race").await;
        let moderate_uri = format!("/api/submissions/{id}/moderate");
        let approve_uri = format!("/api/submissions/{id}/approve");

        let reject = post_json(
            app.clone(),
            &moderate_uri,
            json!({ "status": "rejected", "rejectionReason": "spam" }),
        );
        let approve = post_json(app.clone(), &approve_uri, json!({ "reviewedBy": "B" }));
        let (reject, approve) = tokio::join!(reject, approve);

        // approved -> rejected is legal, rejected -> approved is not: whichever
        // lands first, the record must end up rejected.
        assert_eq!(reject.status(), StatusCode::OK, "round {round}");
        assert!(
            matches!(approve.status(), StatusCode::OK | StatusCode::CONFLICT),
            "round {round}: {}",
            approve.status()
        );
        let uri = format!("/api/submissions/{id}");
        let json = body_json(get(app.clone(), &uri).await).await;
        assert_eq!(json["status"], "rejected", "round {round}");
        assert_eq!(json["rejectionReason"], "spam");
    }
}
