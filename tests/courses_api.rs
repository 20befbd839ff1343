//! Course API Tests
//!
//! Drives `/courses` end to end through the router.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{app, app_with_state, delete, get, post, put, seeded_app, send, send_raw};
use videohub::store::RecordStore;
use videohub::AppState;

// =============================================================================
// Full lifecycle
// =============================================================================

/// Create, rename, add a second course, delete both.
#[tokio::test]
async fn test_course_lifecycle() {
    let app = app();

    let res = get(&app, "/courses").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!([]));

    assert_eq!(get(&app, "/courses/10").await.status, StatusCode::NOT_FOUND);

    // Invalid create leaves the collection empty
    let res = post(&app, "/courses", json!({"title": ""})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.is_empty());
    assert_eq!(get(&app, "/courses").await.json(), json!([]));

    let res = post(&app, "/courses", json!({"title": "it-incubator course"})).await;
    assert_eq!(res.status, StatusCode::CREATED);
    let course1 = res.json();
    let id1 = course1["id"].clone();
    assert!(id1.is_i64());
    assert_eq!(course1, json!({"id": id1, "title": "it-incubator course"}));
    assert_eq!(get(&app, "/courses").await.json(), json!([course1.clone()]));

    // Invalid update leaves the course untouched
    let uri1 = format!("/courses/{}", course1["id"]);
    assert_eq!(put(&app, &uri1, json!({"title": ""})).await.status, StatusCode::BAD_REQUEST);
    assert_eq!(get(&app, &uri1).await.json(), course1);

    assert_eq!(
        put(&app, "/courses/incorrectId", json!({"title": "good title"})).await.status,
        StatusCode::NOT_FOUND
    );

    let res = put(&app, &uri1, json!({"title": "good new Title"})).await;
    assert_eq!(res.status, StatusCode::OK);
    let course1 = res.json();
    assert_eq!(course1["title"], "good new Title");
    assert_eq!(get(&app, &uri1).await.json(), course1);

    let res = post(&app, "/courses", json!({"title": "it-incubator course 2"})).await;
    assert_eq!(res.status, StatusCode::CREATED);
    let course2 = res.json();
    assert_ne!(course1["id"], course2["id"]);
    assert_eq!(get(&app, "/courses").await.json(), json!([course1.clone(), course2.clone()]));

    let uri2 = format!("/courses/{}", course2["id"]);
    assert_eq!(delete(&app, &uri1).await.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &uri1).await.status, StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, &uri2).await.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &uri2).await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/courses").await.json(), json!([]));
}

// =============================================================================
// Create
// =============================================================================

/// Any non-empty title round-trips, and the stored record has no students.
#[tokio::test]
async fn test_created_course_has_zero_students() {
    let state = Arc::new(AppState::new());
    let app = app_with_state(Arc::clone(&state));

    for title in ["a", "Rust 101", "q/a", "  padded  ", "курс"] {
        let created = post(&app, "/courses", json!({ "title": title })).await.json();
        let id = created["id"].as_i64().unwrap();

        let fetched = get(&app, &format!("/courses/{}", id)).await;
        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.json()["title"], title);

        let stored = state.courses.store().find_by_id(id).unwrap().unwrap();
        assert_eq!(stored.students_count, 0);
    }
}

#[tokio::test]
async fn test_create_coerces_scalar_titles() {
    let app = app();

    let res = post(&app, "/courses", json!({"title": 2024})).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.json()["title"], "2024");

    let res = post(&app, "/courses", json!({"title": 1.0})).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.json()["title"], "1");
}

#[tokio::test]
async fn test_create_rejects_missing_or_structured_titles() {
    let app = app();

    for body in [json!({}), json!({"title": null}), json!({"title": {"en": "x"}}), json!([])] {
        let res = post(&app, "/courses", body).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
    }
    assert_eq!(get(&app, "/courses").await.json(), json!([]));
}

#[tokio::test]
async fn test_create_with_malformed_body() {
    let app = app();

    let res = send_raw(&app, Method::POST, "/courses", "application/json", "{title:").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.is_empty());

    let res = send(&app, Method::POST, "/courses", None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Query
// =============================================================================

#[tokio::test]
async fn test_list_filters_by_title_substring() {
    let app = seeded_app();

    let titles = |v: Value| -> Vec<String> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(titles(get(&app, "/courses").await.json()).len(), 4);
    assert_eq!(titles(get(&app, "/courses?title=").await.json()).len(), 4);
    assert_eq!(titles(get(&app, "/courses?title=end").await.json()), vec!["frontend", "backend"]);
    assert_eq!(titles(get(&app, "/courses?title=q%2Fa").await.json()), vec!["q/a"]);
    assert!(titles(get(&app, "/courses?title=DEV").await.json()).is_empty());
}

/// A query string that cannot be read as a single filter lists everything.
#[tokio::test]
async fn test_list_with_repeated_title_is_unfiltered() {
    let app = seeded_app();

    let res = get(&app, "/courses?title=a&title=b").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json().as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_demo_course_view_hides_student_count() {
    let app = app_with_state(Arc::new(AppState::with_demo_courses()));

    let res = get(&app, "/courses/1").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({"id": 1, "title": "frontend"}));
}

// =============================================================================
// Update / delete edge cases
// =============================================================================

#[tokio::test]
async fn test_update_nonexistent_course() {
    let app = app();
    let res = put(&app, "/courses/999999", json!({"title": "x"})).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.is_empty());
}

#[tokio::test]
async fn test_update_checks_title_before_id() {
    let app = app();
    let res = put(&app, "/courses/999999", json!({"title": ""})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = app();
    let id = post(&app, "/courses", json!({"title": "once"})).await.json()["id"].clone();
    let uri = format!("/courses/{}", id);

    assert_eq!(delete(&app, &uri).await.status, StatusCode::NO_CONTENT);
    assert_eq!(delete(&app, &uri).await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, &uri).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_ids_are_not_found() {
    let app = app();
    post(&app, "/courses", json!({"title": "x"})).await;

    assert_eq!(get(&app, "/courses/abc").await.status, StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, "/courses/1.5").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/courses/%FF").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        put(&app, "/courses/%FF", json!({"title": "x"})).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(delete(&app, "/courses/%FF").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/courses").await.json().as_array().unwrap().len(), 1);
}
