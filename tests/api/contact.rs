use reqwest::StatusCode;

use serde_json::{json, Value};

use wiremock::matchers::*;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    date_from_today, valid_submission, TestApp, STORE_ANON_KEY, STORE_SERVICE_KEY,
};

async fn error_message(res: reqwest::Response) -> String {
    let body: Value = res.json().await.expect("Response body was not JSON");
    body["error"]
        .as_str()
        .expect("Missing error message")
        .to_string()
}

#[tokio::test]
async fn create_returns_success_for_valid_request() {
    let app = TestApp::spawn().await;
    app.expect_store_inserts(1).await;

    let res = app
        .contact_create(&valid_submission())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let body: Value = res.json().await.expect("Response body was not JSON");
    assert_eq!(
        json!({
            "success": true,
            "message": "Call scheduled successfully! We'll be in touch shortly."
        }),
        body
    );
}

#[tokio::test]
async fn create_persists_one_pending_row() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_submissions"))
        .and(header("apikey", STORE_ANON_KEY))
        .and(header(
            "Authorization",
            format!("Bearer {}", STORE_SERVICE_KEY).as_str(),
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(crate::helpers::stored_rows()))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let mut submission = valid_submission();
    submission["company"] = json!("Analytical Engines");
    submission["newsletter"] = json!(true);
    // Clients cannot choose the status
    submission["status"] = json!("completed");

    let res = app
        .contact_create(&submission)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let rows = app.store_bodies().await;
    assert_eq!(1, rows.len());

    let row = &rows[0];
    assert_eq!("pending", row["status"]);
    assert_eq!("Ada Lovelace", row["name"]);
    assert_eq!("Analytical Engines", row["company"]);
    assert_eq!(submission["callDate"], row["call_date"]);
    assert_eq!("10:30 AM", row["call_time"]);
    assert!(row["message"].is_null());
    assert_eq!(true, row["newsletter"]);
    assert!(row.get("callDate").is_none());
    assert!(row.get("id").is_none());
}

#[tokio::test]
async fn create_defaults_absent_optional_fields() {
    let app = TestApp::spawn().await;
    app.expect_store_inserts(1).await;

    let mut submission = valid_submission();
    let fields = submission.as_object_mut().unwrap();
    fields.remove("company");
    fields.remove("message");
    fields.remove("newsletter");

    let res = app
        .contact_create(&submission)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let row = &app.store_bodies().await[0];
    assert!(row["company"].is_null());
    assert!(row["message"].is_null());
    assert_eq!(false, row["newsletter"]);
}

#[tokio::test]
async fn create_returns_bad_request_for_missing_fields() {
    let app = TestApp::spawn().await;
    app.expect_no_store_calls().await;

    for field in ["name", "email", "phone", "service", "callDate", "callTime"] {
        for blank in [None, Some(json!(""))] {
            let mut submission = valid_submission();
            match &blank {
                None => {
                    submission.as_object_mut().unwrap().remove(field);
                }
                Some(value) => submission[field] = value.clone(),
            }

            let res = app
                .contact_create(&submission)
                .await
                .expect("Failed to execute request");

            assert_eq!(
                StatusCode::BAD_REQUEST,
                res.status(),
                "API did not fail when {} was {:?}",
                field,
                blank
            );
            assert_eq!("Missing required fields", error_message(res).await);
        }
    }
}

#[tokio::test]
async fn create_returns_bad_request_for_malformed_email() {
    let app = TestApp::spawn().await;
    app.expect_no_store_calls().await;

    for email in ["a@b", "abc.com", "a @b.com", "@b.com"] {
        let mut submission = valid_submission();
        submission["email"] = json!(email);

        let res = app
            .contact_create(&submission)
            .await
            .expect("Failed to execute request");

        assert_eq!(StatusCode::BAD_REQUEST, res.status(), "{}", email);
        assert_eq!("Invalid email format", error_message(res).await);
    }
}

#[tokio::test]
async fn create_accepts_formatted_phone_numbers() {
    let app = TestApp::spawn().await;
    app.expect_store_inserts(3).await;

    for phone in ["+14155552671", "(415) 555-2671", "415-555-2671"] {
        let mut submission = valid_submission();
        submission["phone"] = json!(phone);

        let res = app
            .contact_create(&submission)
            .await
            .expect("Failed to execute request");

        assert_eq!(StatusCode::OK, res.status(), "{}", phone);
    }

    // Stored as typed
    let phones: Vec<Value> = app
        .store_bodies()
        .await
        .into_iter()
        .map(|row| row["phone"].clone())
        .collect();
    assert_eq!(
        vec![json!("+14155552671"), json!("(415) 555-2671"), json!("415-555-2671")],
        phones
    );
}

#[tokio::test]
async fn create_returns_bad_request_for_malformed_phone() {
    let app = TestApp::spawn().await;
    app.expect_no_store_calls().await;

    for phone in ["0415555", "phone me", "+1 (415) 555-2671 ext 4"] {
        let mut submission = valid_submission();
        submission["phone"] = json!(phone);

        let res = app
            .contact_create(&submission)
            .await
            .expect("Failed to execute request");

        assert_eq!(StatusCode::BAD_REQUEST, res.status(), "{}", phone);
        assert_eq!("Invalid phone number format", error_message(res).await);
    }
}

#[tokio::test]
async fn create_rejects_call_date_in_the_past() {
    let app = TestApp::spawn().await;
    app.expect_no_store_calls().await;

    let mut submission = valid_submission();
    submission["callDate"] = json!(date_from_today(-1));

    let res = app
        .contact_create(&submission)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());
    assert_eq!("Call date cannot be in the past", error_message(res).await);
}

#[tokio::test]
async fn create_accepts_call_date_today() {
    let app = TestApp::spawn().await;
    app.expect_store_inserts(1).await;

    let mut submission = valid_submission();
    submission["callDate"] = json!(date_from_today(0));

    let res = app
        .contact_create(&submission)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
}

#[tokio::test]
async fn create_accepts_call_date_with_time_of_day() {
    let app = TestApp::spawn().await;
    app.expect_store_inserts(1).await;

    let mut submission = valid_submission();
    submission["callDate"] = json!(format!("{}T10:00:00", date_from_today(2)));

    let res = app
        .contact_create(&submission)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let bodies = app.store_bodies().await;
    assert_eq!(json!(date_from_today(2)), bodies[0]["call_date"]);
}

#[tokio::test]
async fn create_reports_first_failing_check_only() {
    let app = TestApp::spawn().await;
    app.expect_no_store_calls().await;

    let mut submission = valid_submission();
    submission["email"] = json!("abc.com");
    submission["phone"] = json!("0415555");
    submission["callDate"] = json!(date_from_today(-3));

    let res = app
        .contact_create(&submission)
        .await
        .expect("Failed to execute request");

    assert_eq!("Invalid email format", error_message(res).await);
}

#[tokio::test]
async fn create_hides_store_failure_detail() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "message": "relation contact_submissions is locked" })),
        )
        .expect(1)
        .mount(&app.store_server)
        .await;

    let res = app
        .contact_create(&valid_submission())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());

    let body: Value = res.json().await.expect("Response body was not JSON");
    assert_eq!(json!({ "error": "Database error" }), body);
}

#[tokio::test]
async fn create_succeeds_when_store_echoes_other_column_types() {
    let app = TestApp::spawn().await;

    let mut rows = crate::helpers::stored_rows();
    rows[0]["id"] = json!(42);
    rows[0]["created_at"] = json!("2026-10-16T09:12:44.512331");

    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_submissions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(rows))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let res = app
        .contact_create(&valid_submission())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let body: Value = res.json().await.expect("Response body was not JSON");
    assert_eq!(json!(true), body["success"]);
}

#[tokio::test]
async fn create_returns_internal_error_for_malformed_body() {
    let app = TestApp::spawn().await;
    app.expect_no_store_calls().await;

    let res = app
        .request(reqwest::Method::POST, "api/contact")
        .header("Content-Type", "application/json")
        .body("{\"name\": \"Ada\",")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    assert_eq!("Internal server error", error_message(res).await);
}

#[tokio::test]
async fn duplicate_submissions_create_duplicate_rows() {
    let app = TestApp::spawn().await;
    app.expect_store_inserts(2).await;

    for _ in 0..2 {
        let res = app
            .contact_create(&valid_submission())
            .await
            .expect("Failed to execute request");
        assert_eq!(StatusCode::OK, res.status());
    }
}

#[tokio::test]
async fn preflight_returns_cors_headers() {
    let app = TestApp::spawn().await;
    app.expect_no_store_calls().await;

    let res = app
        .contact_preflight()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());

    let headers = res.headers();
    assert_eq!("*", headers["access-control-allow-origin"]);
    assert_eq!("POST, OPTIONS", headers["access-control-allow-methods"]);
    assert_eq!("Content-Type", headers["access-control-allow-headers"]);
}
