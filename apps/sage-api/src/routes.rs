use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use sage_domain::RecipeId;
use sage_service::{Error as ServiceError, RecommendRequest};
use sage_storage::RecipeRecord;

use crate::state::AppState;

const BANNER: &str = "Welcome to the SAGE recipe recommendation API.";

#[derive(Debug, Serialize)]
struct Banner {
	message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::NoMatches => json_error(
				StatusCode::NOT_FOUND,
				"NO_MATCHES",
				"No recipes match the given criteria.",
			),
			ServiceError::NotFound { message } =>
				json_error(StatusCode::NOT_FOUND, "RECIPE_NOT_FOUND", message),
			ServiceError::Oracle { message } => {
				tracing::error!(error = %message, "Link prediction failed.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "ORACLE_FAULT", message)
			},
			err @ ServiceError::DeadlineExceeded { .. } => {
				tracing::error!(error = %err, "Link prediction timed out.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "DEADLINE_EXCEEDED", err.to_string())
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}

pub fn router(state: AppState) -> Router {
	let cors_permissive = state.service.cfg.service.cors_permissive;
	let router = Router::new()
		.route("/", get(root))
		.route("/health", get(health))
		.route("/recommend", post(recommend))
		.route("/recipe/{id}", get(recipe))
		.route("/unique_ingredients", get(unique_ingredients))
		.with_state(state);

	if cors_permissive { router.layer(CorsLayer::permissive()) } else { router }
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError::new(status, code, message)
}

async fn root() -> Json<Banner> {
	Json(Banner { message: BANNER })
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn recommend(
	State(state): State<AppState>,
	Json(payload): Json<RecommendRequest>,
) -> Result<Json<Vec<RecipeId>>, ApiError> {
	let response = state.service.recommend(payload).await?;

	Ok(Json(response))
}

async fn recipe(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<RecipeRecord>, ApiError> {
	let record = state.service.recipe(&id)?.clone();

	Ok(Json(record))
}

async fn unique_ingredients(State(state): State<AppState>) -> Json<Vec<String>> {
	Json(state.service.unique_ingredients().to_vec())
}
