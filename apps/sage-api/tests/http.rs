use std::{sync::Arc, time::Duration};

use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::util::ServiceExt;

use sage_api::{routes, state::AppState};
use sage_service::{MatchingContext, SageService};
use sage_storage::RecipeStore;
use sage_testkit::{StaticOracle, TempArtifacts};

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
	let response = app.oneshot(request).await.expect("Failed to call router.");
	let status = response.status();
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Response body must be JSON.")
	};

	(status, json)
}

fn get(uri: &str) -> Request<Body> {
	Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request.")
}

fn post_json(uri: &str, payload: &str) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(payload.to_string()))
		.expect("Failed to build request.")
}

fn sample_app(artifacts: &TempArtifacts) -> Router {
	let state = AppState::new(artifacts.config()).expect("Sample artifacts must load.");

	routes::router(state)
}

fn stub_app(oracle: StaticOracle, oracle_timeout_ms: u64) -> Router {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");
	let mut cfg = artifacts.config();

	cfg.matching.oracle_timeout_ms = oracle_timeout_ms;

	let recipes = RecipeStore::load(&cfg.artifacts.recipes_path, &cfg.dataset)
		.expect("Sample recipes must load.");
	let service = SageService::new(cfg, MatchingContext::new(Arc::new(oracle)), recipes);

	routes::router(AppState::from_service(service))
}

#[tokio::test]
async fn banner_and_health_respond() {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");
	let (status, json) = send(sample_app(&artifacts), get("/")).await;

	assert_eq!(status, StatusCode::OK);
	assert!(json["message"].as_str().is_some_and(|message| !message.is_empty()));

	let (status, json) = send(sample_app(&artifacts), get("/health")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, Value::Null);
}

#[tokio::test]
async fn recommend_returns_ranked_ids() {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");
	let (status, json) = send(
		sample_app(&artifacts),
		post_json("/recommend", r#"{"diet_types":["Vegan"],"ingredients":["rice"],"top_k":2}"#),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, serde_json::json!(["40", "39"]));
}

#[tokio::test]
async fn recommend_without_matches_is_not_found() {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");
	let (status, json) = send(
		sample_app(&artifacts),
		post_json("/recommend", r#"{"ingredients":["saffron"],"cooking_method":"Baking"}"#),
	)
	.await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(json["error_code"], "NO_MATCHES");
	assert_eq!(json.as_object().map(|body| body.len()), Some(2));

	let (status, json) = send(sample_app(&artifacts), post_json("/recommend", "{}")).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(json["error_code"], "NO_MATCHES");
}

#[tokio::test]
async fn recommend_rejects_malformed_fields() {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");
	let (status, _) =
		send(sample_app(&artifacts), post_json("/recommend", r#"{"top_k":"five"}"#)).await;

	assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn oracle_fault_maps_to_server_error() {
	let oracle = StaticOracle::new().with_fault("hasDietType", "diet_type_Vegan");
	let (status, json) =
		send(stub_app(oracle, 0), post_json("/recommend", r#"{"diet_types":["Vegan"]}"#)).await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error_code"], "ORACLE_FAULT");
}

#[tokio::test]
async fn slow_oracle_maps_to_deadline_error() {
	let oracle = StaticOracle::new()
		.with_rows("hasDietType", "diet_type_Vegan", &[("recipe_38", 1.0)])
		.with_delay(Duration::from_millis(300));
	let (status, json) =
		send(stub_app(oracle, 20), post_json("/recommend", r#"{"diet_types":["Vegan"]}"#)).await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error_code"], "DEADLINE_EXCEEDED");
}

#[tokio::test]
async fn recipe_returns_full_record() {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");
	let (status, json) = send(sample_app(&artifacts), get("/recipe/40")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["RecipeId"], 40);
	assert_eq!(json["Name"], "Fried Rice");
	assert_eq!(json["CuisineRegion"], Value::Null);
	assert_eq!(json["Calories"], 515);
}

#[tokio::test]
async fn unknown_or_invalid_recipe_is_not_found() {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");

	for uri in ["/recipe/999", "/recipe/abc"] {
		let (status, json) = send(sample_app(&artifacts), get(uri)).await;

		assert_eq!(status, StatusCode::NOT_FOUND, "Unexpected status for {uri}.");
		assert_eq!(json["error_code"], "RECIPE_NOT_FOUND");
	}
}

#[tokio::test]
async fn unique_ingredients_are_ordered_by_usage() {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");
	let (status, json) = send(sample_app(&artifacts), get("/unique_ingredients")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, serde_json::json!(["rice", "egg", "lemon", "onion", "tofu"]));
}

#[tokio::test]
async fn permissive_cors_answers_preflight() {
	let artifacts = TempArtifacts::sample().expect("Sample artifacts must be written.");
	let request = Request::builder()
		.method("OPTIONS")
		.uri("/recommend")
		.header(header::ORIGIN, "http://localhost:3000")
		.header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
		.body(Body::empty())
		.expect("Failed to build request.");
	let response =
		sample_app(&artifacts).oneshot(request).await.expect("Failed to call router.");

	assert_eq!(response.status(), StatusCode::OK);
	assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
