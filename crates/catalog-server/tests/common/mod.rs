//! Test helpers for catalog server integration tests
//!
//! Every test gets a fresh router over an in-memory store, so no database
//! is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use catalog_common::reference::ReferenceData;
use catalog_server::{
    api,
    config::Config,
    features::FeatureState,
    models::{Expedition, ExpeditionFields, SpecimenDetail, SpecimenFields, Taxonomy, TaxonomyFields},
    store::{CatalogStore, MemoryCatalogStore},
};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryCatalogStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryCatalogStore::new());
        let state = FeatureState::new(store.clone(), Arc::new(ReferenceData::builtin()));
        let router = api::create_router(state, &Config::default());
        Self { router, store }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        into_json(response).await
    }

    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .send(
                Request::builder()
                    .uri(uri)
                    .method(method)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        into_json(response).await
    }

    /// Post an urlencoded form and return the raw response
    pub async fn post_form(&self, uri: &str, pairs: &[(&str, &str)]) -> Response<Body> {
        let body = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        self.send(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn expedition(&self, name: &str, continent: &str, country: &str) -> Expedition {
        self.store
            .create_expedition(&ExpeditionFields {
                expedition: name.to_string(),
                continent: continent.to_string(),
                country: country.to_string(),
                state_province: None,
                term: None,
            })
            .await
            .unwrap()
    }

    pub async fn taxonomy(&self, genus: &str, species: &str) -> Taxonomy {
        self.store
            .create_taxonomy(&TaxonomyFields {
                kingdom: "Animalia".to_string(),
                phylum: "Chordata".to_string(),
                highest_biostratigraphic_zone: "Vertebrata".to_string(),
                class_name: "Mammalia".to_string(),
                identification_description: "Primates".to_string(),
                family: "Hominidae".to_string(),
                genus: genus.to_string(),
                species: species.to_string(),
            })
            .await
            .unwrap()
    }

    pub async fn specimen(
        &self,
        catalog_number: &str,
        expedition: &Expedition,
        taxonomy: Option<&Taxonomy>,
    ) -> SpecimenDetail {
        self.store
            .create_specimen(&SpecimenFields {
                catalog_number: catalog_number.to_string(),
                expedition_id: Some(expedition.expedition_id),
                taxonomy_id: taxonomy.map(|t| t.taxonomy_id),
            })
            .await
            .unwrap()
    }
}

pub async fn into_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

/// Location of a `303 See Other`, split into path and decoded notice
pub fn redirect_target(response: &Response<Body>) -> (String, Option<(String, String)>) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();

    let (path, query) = match location.split_once('?') {
        Some((path, query)) => (path.to_string(), query),
        None => return (location.to_string(), None),
    };

    let mut notice = None;
    let mut level = None;
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            let value = urlencoding::decode(value).unwrap().into_owned();
            match key {
                "notice" => notice = Some(value),
                "level" => level = Some(value),
                _ => {},
            }
        }
    }

    (path, notice.zip(level))
}
