use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{User, UserView};
use crate::services::{CreateUser, LoginRequest, UpdateUser};
use crate::state::SharedState;

pub const PUBLIC_HEADER: &str = "x-public";

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub status: String,
}

pub async fn create(
    State(state): State<SharedState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    let Json(req) = payload.map_err(invalid_body)?;
    let user = state.users.create(req).await?;
    Ok((StatusCode::CREATED, Json(user.marshall(is_public(&headers)))))
}

pub async fn get(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<Json<UserView>, AppError> {
    let id = parse_user_id(&user_id)?;
    let user = state.users.get(id).await?;
    Ok(Json(user.marshall(is_public(&headers))))
}

pub async fn update(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<UserView>, AppError> {
    apply_update(state, headers, user_id, payload, false).await
}

pub async fn patch(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<UserView>, AppError> {
    apply_update(state, headers, user_id, payload, true).await
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_user_id(&user_id)?;
    state.users.delete(id).await?;
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn search(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<UserView>>, AppError> {
    let users = state.users.search(&params.status).await?;
    Ok(Json(User::marshall_all(&users, is_public(&headers))))
}

pub async fn login(
    State(state): State<SharedState>,
    headers: HeaderMap,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserView>, AppError> {
    let Json(req) = payload.map_err(invalid_body)?;
    let user = state.users.login(req).await?;
    Ok(Json(user.marshall(is_public(&headers))))
}

async fn apply_update(
    state: SharedState,
    headers: HeaderMap,
    user_id: String,
    payload: Result<Json<UpdateUser>, JsonRejection>,
    partial: bool,
) -> Result<Json<UserView>, AppError> {
    let id = parse_user_id(&user_id)?;
    let Json(req) = payload.map_err(invalid_body)?;
    let user = state.users.update(id, req, partial).await?;
    Ok(Json(user.marshall(is_public(&headers))))
}

fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest("user id should be a number".to_string())),
    }
}

fn is_public(headers: &HeaderMap) -> bool {
    headers
        .get(PUBLIC_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    tracing::debug!("Rejected request body: {rejection}");
    AppError::BadRequest("invalid json body".to_string())
}
