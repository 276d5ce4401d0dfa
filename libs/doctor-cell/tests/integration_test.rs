mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use doctor_cell::router::doctor_routes;

use common::{builtin_state, new_doctor_request};

fn create_test_app() -> Router {
    doctor_routes(builtin_state())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json_response: Value = serde_json::from_slice(&body).unwrap();

    (status, json_response)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_search_doctors_with_query_params() {
    let (status, json_response) = send(
        create_test_app(),
        get("/search?specialty=General%20Physician&fees_min=0&fees_max=3000&sort_by=fees-low-to-high&page=1&limit=5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response["total"], 8);
    assert_eq!(json_response["total_pages"], 2);
    assert_eq!(json_response["page"], 1);
    assert_eq!(json_response["limit"], 5);

    let fees: Vec<f64> = json_response["doctors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["consultation_fees"].as_f64().unwrap())
        .collect();
    assert_eq!(fees, vec![500.0, 600.0, 650.0, 700.0, 800.0]);
}

#[tokio::test]
async fn test_search_single_bound_is_ignored() {
    let (status, json_response) = send(create_test_app(), get("/search?experience_min=20&limit=10")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response["total"], 8);
}

#[tokio::test]
async fn test_search_experience_range() {
    let (status, json_response) =
        send(create_test_app(), get("/search?experience_min=15&experience_max=20&limit=10")).await;

    assert_eq!(status, StatusCode::OK);
    // 15, 20 and 18 years
    assert_eq!(json_response["total"], 3);
}

#[tokio::test]
async fn test_search_unknown_specialty_is_empty_not_error() {
    let (status, json_response) = send(create_test_app(), get("/search?specialty=Cardiologist")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response["doctors"], json!([]));
    assert_eq!(json_response["total"], 0);
    assert_eq!(json_response["total_pages"], 0);
}

#[tokio::test]
async fn test_search_rejects_malformed_numbers() {
    let response = create_test_app()
        .oneshot(get("/search?page=first"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_doctors_with_json_body() {
    let (status, json_response) = send(
        create_test_app(),
        post_json(
            "/search",
            json!({
                "specialty": "General Physician",
                "fees": [0, 3000],
                "sortBy": "rating",
                "page": 2,
                "limit": 5
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = json_response["doctors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["7", "2", "6"]);
    assert_eq!(json_response["total_pages"], 2);
}

#[tokio::test]
async fn test_query_doctors_empty_specialty_and_null_sort() {
    let (status, json_response) = send(
        create_test_app(),
        post_json("/search", json!({ "specialty": "", "sortBy": null, "limit": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response["total"], 8);
    assert_eq!(json_response["total_pages"], 1);
    // relevance order
    assert_eq!(json_response["doctors"][0]["id"], "8");
}

#[tokio::test]
async fn test_listing_renders_cards() {
    let (status, json_response) = send(create_test_app(), get("/listing?sort_by=fees-high-to-low&limit=2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response["summary"], "Showing 2 of 8 doctors");
    assert_eq!(json_response["cards"][0]["fee_label"], "₹1500");
    assert_eq!(json_response["cards"][1]["more_slots_label"], "+1 more");
    assert_eq!(json_response["pagination"]["visible"], true);
    assert_eq!(json_response["pagination"]["pages"], json!([1, 2, 3, 4]));
}

#[tokio::test]
async fn test_listing_empty_state() {
    let (status, json_response) = send(create_test_app(), get("/listing?specialty=Pediatrician")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response["empty_state"]["title"], "No doctors found");
    assert_eq!(json_response["empty_state"]["action_label"], "Reset Filters");
    assert_eq!(json_response["pagination"]["visible"], false);
}

#[tokio::test]
async fn test_defaults_and_specialties() {
    let (status, defaults) = send(create_test_app(), get("/defaults")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(defaults["specialty"], "General Physician");
    assert_eq!(defaults["experience"], json!([0, 30]));
    assert_eq!(defaults["sort_by"], "relevance");

    let (status, specialties) = send(create_test_app(), get("/specialties")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(specialties["total"], 6);
    assert_eq!(specialties["specialties"][0], "General Physician");
}

#[tokio::test]
async fn test_page_metadata() {
    let (status, json_response) = send(create_test_app(), get("/metadata")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_response["canonical_url"],
        "https://www.doctorfinder.com/specialties/general-physician-internal-medicine"
    );
    assert_eq!(json_response["structured_data"]["medicalSpecialty"]["name"], "Internal Medicine");
}

#[tokio::test]
async fn test_get_doctor_and_not_found() {
    let (status, json_response) = send(create_test_app(), get("/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response["name"], "Dr. Sunil Mehta");
    assert_eq!(json_response["specialty"], "General Physician");

    let (status, json_response) = send(create_test_app(), get("/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json_response["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_create_doctor_then_search() {
    let app = create_test_app();
    let request = serde_json::to_value(new_doctor_request("Dr. Meera Iyer")).unwrap();

    let (status, created) = send(app.clone(), post_json("/", request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].as_str().unwrap().starts_with("new-"));

    let (status, json_response) = send(app, get("/search?specialty=Cardiologist")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response["total"], 1);
    assert_eq!(json_response["doctors"][0]["id"], created["id"]);
}

#[tokio::test]
async fn test_create_doctor_validation_error() {
    let mut request = serde_json::to_value(new_doctor_request("  ")).unwrap();
    request["languages"] = json!(["English"]);

    let (status, json_response) = send(create_test_app(), post_json("/", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json_response["error"].as_str().unwrap().contains("name"));
}
