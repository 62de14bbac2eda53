//! JSON API integration tests
//!
//! Coverage includes:
//! - Specimen listing pagination, clamping, and filters
//! - CRUD for the three record types
//! - Validation failures (422) and missing records (404)
//! - Cascading deletes

use axum::http::{header, StatusCode};
use serde_json::json;

mod common;
use common::TestApp;

fn taxonomy_body(genus: &str) -> serde_json::Value {
    json!({
        "kingdom": "Plantae",
        "phylum": "Tracheophyta",
        "highest_biostratigraphic_zone": "Spermatophytina",
        "class_name": "Magnoliopsida",
        "identification_description": "Rosales",
        "family": "Rosaceae",
        "genus": genus,
        "species": "canina"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_specimens_paginates_newest_first() {
    let app = TestApp::new();
    let expedition = app.expedition("Alps expedition", "Europe", "Austria").await;
    for i in 1..=30 {
        app.specimen(&format!("1.{:02}.01.0001", i), &expedition, None)
            .await;
    }

    let (status, body) = app.get("/api/v1/specimens").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["specimen_id"], 30);
    assert_eq!(items[19]["specimen_id"], 11);
    assert_eq!(body["meta"]["pagination"]["pages"], 2);
    assert_eq!(body["meta"]["pagination"]["total"], 30);

    let (_, body) = app.get("/api/v1/specimens?page=2").await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[9]["specimen_id"], 1);
}

#[tokio::test]
async fn test_list_specimens_clamps_out_of_range_page() {
    let app = TestApp::new();
    let expedition = app.expedition("Alps expedition", "Europe", "Austria").await;
    for i in 1..=25 {
        app.specimen(&format!("2.{:02}.01.0001", i), &expedition, None)
            .await;
    }

    let (status, body) = app.get("/api/v1/specimens?page=9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["pagination"]["page"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    let (_, body) = app.get("/api/v1/specimens?page=abc").await;
    assert_eq!(body["meta"]["pagination"]["page"], 1);
}

#[tokio::test]
async fn test_list_specimens_filters_by_continent() {
    let app = TestApp::new();
    let alps = app.expedition("Alps expedition", "Europe", "Austria").await;
    let andes = app
        .expedition("Andes expedition", "South America", "Peru")
        .await;
    app.specimen("1.01.01.0001", &alps, None).await;
    app.specimen("2.01.01.0001", &andes, None).await;
    app.specimen("1.01.01.0002", &alps, None).await;

    let (status, body) = app
        .get("/api/v1/specimens?expedition__continent=europe")
        .await;
    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["catalog_number"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(numbers, vec!["1.01.01.0002", "1.01.01.0001"]);
    assert_eq!(body["meta"]["filters"]["expedition__continent"], "europe");
}

#[tokio::test]
async fn test_list_specimens_rejects_oversized_filter_with_notice() {
    let app = TestApp::new();
    let alps = app.expedition("Alps expedition", "Europe", "Austria").await;
    app.specimen("1.01.01.0001", &alps, None).await;

    let uri = format!("/api/v1/specimens?taxonomy__genus={}", "a".repeat(101));
    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    let notice = &body["meta"]["notices"][0];
    assert_eq!(notice["level"], "error");
    assert!(notice["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid filter parameters"));
}

#[tokio::test]
async fn test_create_specimen() {
    let app = TestApp::new();
    let expedition = app.expedition("Alps expedition", "Europe", "Austria").await;
    let taxonomy = app.taxonomy("Homo", "sapiens").await;

    let (status, body) = app
        .send_json(
            "POST",
            "/api/v1/specimens",
            json!({
                "catalog_number": " 1234.56.78.9012 ",
                "expedition_id": expedition.expedition_id,
                "taxonomy_id": taxonomy.taxonomy_id
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["catalog_number"], "1234.56.78.9012");
    assert_eq!(body["data"]["expedition"]["expedition"], "Alps expedition");
    assert_eq!(body["data"]["taxonomy"]["genus"], "Homo");
}

#[tokio::test]
async fn test_create_specimen_validation_errors() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json(
            "POST",
            "/api/v1/specimens",
            json!({ "catalog_number": "12345.1.2.3" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["catalog_number"].is_array());
    assert!(body["error"]["details"]["expedition_id"].is_array());
}

#[tokio::test]
async fn test_create_specimen_non_numeric_expedition() {
    let app = TestApp::new();
    app.expedition("Alps expedition", "Europe", "Austria").await;

    let (status, body) = app
        .send_json(
            "POST",
            "/api/v1/specimens",
            json!({ "catalog_number": "1234.56.78.9012", "expedition_id": "abc" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["error"]["details"]["expedition_id"][0],
        "'abc' is not a valid expedition"
    );

    let (status, _) = app.get("/api/v1/specimens/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_specimen_unknown_expedition() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json(
            "POST",
            "/api/v1/specimens",
            json!({ "catalog_number": "1234.56.78.9012", "expedition_id": 99 }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]["details"]["expedition_id"].is_array());
}

#[tokio::test]
async fn test_get_missing_specimen_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/specimens/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_and_delete_specimen() {
    let app = TestApp::new();
    let expedition = app.expedition("Alps expedition", "Europe", "Austria").await;
    let specimen = app.specimen("1234.56.78.9012", &expedition, None).await;
    let uri = format!("/api/v1/specimens/{}", specimen.specimen_id);

    let (status, body) = app
        .send_json(
            "PUT",
            &uri,
            json!({
                "catalog_number": "1.1.1.1",
                "expedition_id": expedition.expedition_id
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["catalog_number"], "1.1.1.1");

    let (status, _) = app.send_json("DELETE", &uri, json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.send_json("DELETE", &uri, json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_expedition_normalizes_location() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json(
            "POST",
            "/api/v1/expeditions",
            json!({
                "expedition": "Gobi Expedition",
                "continent": "asia",
                "country": "mongolia",
                "state_province": "",
                "term": "1922"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["continent"], "Asia");
    assert_eq!(body["data"]["country"], "Mongolia");
    assert!(body["data"]["state_province"].is_null());
}

#[tokio::test]
async fn test_create_expedition_rejects_bad_values() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json(
            "POST",
            "/api/v1/expeditions",
            json!({
                "expedition": "Summer trip",
                "continent": "Atlantis",
                "country": "Qwxzvq"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let details = &body["error"]["details"];
    assert!(details["expedition"].is_array());
    assert!(details["continent"].is_array());
    assert!(details["country"].is_array());
}

#[tokio::test]
async fn test_delete_expedition_cascades_to_specimens() {
    let app = TestApp::new();
    let alps = app.expedition("Alps expedition", "Europe", "Austria").await;
    let andes = app
        .expedition("Andes expedition", "South America", "Peru")
        .await;
    app.specimen("1.01.01.0001", &alps, None).await;
    app.specimen("1.01.01.0002", &alps, None).await;
    app.specimen("2.01.01.0001", &andes, None).await;

    let response = app
        .send(
            axum::http::Request::builder()
                .uri(format!("/api/v1/expeditions/{}", alps.expedition_id))
                .method("DELETE")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()["x-deleted-specimens"], "2");

    let (_, body) = app.get("/api/v1/specimens").await;
    assert_eq!(body["meta"]["pagination"]["total"], 1);

    let (status, _) = app
        .get(&format!("/api/v1/expeditions/{}", alps.expedition_id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_taxonomy_crud() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json("POST", "/api/v1/taxonomies", taxonomy_body("Rosa"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["taxonomy_id"].as_i64().unwrap();

    let (status, body) = app
        .send_json(
            "PUT",
            &format!("/api/v1/taxonomies/{}", id),
            taxonomy_body("Ro"),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]["details"]["genus"].is_array());

    let (status, body) = app.get("/api/v1/taxonomies?page=1&per_page=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["genus"], "Rosa");
}

#[tokio::test]
async fn test_update_specimen_taxonomy_creates_then_updates() {
    let app = TestApp::new();
    let expedition = app.expedition("Alps expedition", "Europe", "Austria").await;
    let specimen = app.specimen("1234.56.78.9012", &expedition, None).await;
    let uri = format!("/api/v1/taxonomies/specimen/{}", specimen.specimen_id);

    let (status, body) = app.send_json("PUT", &uri, taxonomy_body("Rosa")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["created"], true);

    let (status, body) = app.send_json("PUT", &uri, taxonomy_body("Malus")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["created"], false);
    assert_eq!(body["data"]["taxonomy"]["genus"], "Malus");

    let (status, _) = app
        .send_json("PUT", "/api/v1/taxonomies/specimen/999", taxonomy_body("Rosa"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let app = TestApp::new();

    let response = app
        .send(
            axum::http::Request::builder()
                .uri("/api/v1/specimens")
                .method("OPTIONS")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}
