//! Gateway tests against a canned axum backend on a loopback port.

use api::{ApiClient, ApiError, ClinicDraft};
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};

async fn serve(app: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiClient::new(format!("http://{addr}"))
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers.get("authorization").and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn login_posts_credentials_and_returns_the_token() {
    let app = Router::new().route(
        "/login",
        post(|Json(body): Json<Value>| async move {
            if body == json!({"username": "admin", "password": "hunter2"}) {
                (StatusCode::OK, Json(json!({"token": "t0k3n"})))
            } else {
                (StatusCode::BAD_REQUEST, Json(json!({"error": "bad credentials"})))
            }
        }),
    );
    let client = serve(app).await;

    let response = client.login("admin", "hunter2").await.unwrap();
    assert_eq!(response.token, "t0k3n");
}

#[tokio::test]
async fn profile_carries_the_bearer_header() {
    let app = Router::new().route(
        "/profile",
        get(|headers: HeaderMap| async move {
            if bearer(&headers) == Some("Bearer secret") {
                (StatusCode::OK, Json(json!({"username": "admin", "role": "ADMIN"})))
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid token"})))
            }
        }),
    );
    let client = serve(app).await;

    let profile = client.profile(Some("secret")).await.unwrap();
    assert_eq!(profile.username, "admin");
    assert_eq!(profile.role, "ADMIN");

    // Without a token the server's message comes through verbatim.
    let err = client.profile(None).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Invalid token"));
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn created_clinic_joins_the_local_list_with_the_server_id() {
    let app = Router::new().route(
        "/clinics",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            if bearer(&headers) != Some("Bearer secret") {
                return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid token"})));
            }
            let mut echoed = body;
            echoed["id"] = json!(1);
            (StatusCode::CREATED, Json(echoed))
        }),
    );
    let client = serve(app).await;

    let draft = ClinicDraft {
        name: "Clinic A".to_string(),
        address: "1 Main St".to_string(),
        phone_number: "555-0100".to_string(),
        open_time: "08:00".to_string(),
        close_time: "18:00".to_string(),
    };
    let created = client.create_clinic(Some("secret"), &draft).await.unwrap();

    // The view appends the server's copy; the list ends with exactly one
    // entry carrying the server-assigned id.
    let mut clinics = Vec::new();
    clinics.push(created);
    assert_eq!(clinics.len(), 1);
    assert_eq!(clinics[0].id, 1);
    assert_eq!(clinics[0].name, "Clinic A");
    assert_eq!(clinics[0].open_time, "08:00");
}

#[tokio::test]
async fn update_puts_the_full_record_to_its_path() {
    let app = Router::new().route(
        "/clinics/{id}",
        put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
            if body["id"] != json!(id) {
                return (StatusCode::BAD_REQUEST, Json(json!({"error": "id mismatch"})));
            }
            (StatusCode::OK, Json(body))
        }),
    );
    let client = serve(app).await;

    let clinic = api::Clinic {
        id: 4,
        name: "Clinic B".to_string(),
        address: "2 Side St".to_string(),
        phone_number: "555-0101".to_string(),
        open_time: "09:00".to_string(),
        close_time: "17:00".to_string(),
    };
    let updated = client.update_clinic(Some("secret"), &clinic).await.unwrap();
    assert_eq!(updated, clinic);
}

#[tokio::test]
async fn clinic_doctors_unwraps_the_envelope() {
    let app = Router::new().route(
        "/clinics/{id}/doctors",
        get(|| async {
            Json(json!({
                "doctors": [
                    {"id": 7, "name": "Gregory House", "specialization": "Diagnostics",
                     "phone": "555-0107", "startDate": "2026-08-30"},
                ]
            }))
        }),
    );
    let client = serve(app).await;

    let doctors = client.clinic_doctors(Some("secret"), 1).await.unwrap();
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, 7);
    assert_eq!(doctors[0].start_date, "2026-08-30");
}

#[tokio::test]
async fn assign_posts_the_start_date_to_the_sub_resource() {
    let app = Router::new().route(
        "/clinics/{clinic_id}/workAt-clinic/{doctor_id}",
        post(
            |Path((clinic_id, doctor_id)): Path<(i64, i64)>, Json(body): Json<Value>| async move {
                if (clinic_id, doctor_id) != (1, 7) {
                    return (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})));
                }
                if body != json!({"startDate": "2026-08-30"}) {
                    return (StatusCode::BAD_REQUEST, Json(json!({"error": "bad body"})));
                }
                (
                    StatusCode::CREATED,
                    Json(json!({"doctorId": 7, "clinicId": 1, "startDate": "2026-08-30"})),
                )
            },
        ),
    );
    let client = serve(app).await;

    let start = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let assignment = client
        .assign_doctor(Some("secret"), 1, 7, start)
        .await
        .unwrap();
    assert_eq!(assignment.doctor_id, Some(7));
    assert_eq!(assignment.start_date.as_deref(), Some("2026-08-30"));
}

#[tokio::test]
async fn unassign_and_delete_tolerate_empty_bodies() {
    let app = Router::new()
        .route(
            "/clinics/{clinic_id}/workAt-clinic/{doctor_id}",
            delete(|| async { StatusCode::NO_CONTENT }),
        )
        .route("/doctors/{id}", delete(|| async { StatusCode::NO_CONTENT }));
    let client = serve(app).await;

    client.unassign_doctor(Some("secret"), 1, 7).await.unwrap();
    client.delete_doctor(Some("secret"), 7).await.unwrap();
}

#[tokio::test]
async fn unstructured_failures_keep_only_the_status() {
    let app = Router::new().route(
        "/doctors",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = serve(app).await;

    let err = client.doctors(Some("secret")).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));
    assert_eq!(err.server_message(), None);
}
