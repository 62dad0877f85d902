//! User controller.

use crate::{
    extractors::{
        parse_age, parse_date, parse_user_id, AgeQuery, EmailQuery, JsonBody,
        ValidatedJson,
    },
    responses::{created, no_content, ok, ApiResult, AppError, CreatedResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use fitness_service::UserDto;
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/email", get(find_by_email))
        .route("/search/email", get(search_by_email))
        .route("/search/age", get(search_by_age))
        .route("/older/:date", get(older_than))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List every user.
async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserDto>> {
    debug!("List users request");

    let users = state.user_service.list_users().await?;
    ok(users)
}

/// Create a new user.
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UserDto>,
) -> CreatedResult<UserDto> {
    debug!("Create user request: {}", dto.email);

    let user = state.user_service.create_user(dto).await?;
    Ok(created(user))
}

/// Get a user by ID.
async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<UserDto> {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    ok(user)
}

/// Replace a user's fields.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(dto): JsonBody<UserDto>,
) -> ApiResult<UserDto> {
    debug!("Update user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let user = state.user_service.update_user(user_id, dto).await?;
    ok(user)
}

/// Delete a user.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.delete_user(user_id).await?;
    Ok(no_content())
}

/// Exact email lookup, answered as a list of zero or one users.
async fn find_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Vec<UserDto>> {
    debug!("Find user by email request: {}", query.email);

    let user = state.user_service.find_user_by_email(&query.email).await?;
    ok(user.into_iter().collect())
}

/// Case-insensitive email substring search.
async fn search_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Vec<UserDto>> {
    debug!("Search users by email request: {}", query.email);

    let users = state.user_service.search_users_by_email(&query.email).await?;
    ok(users)
}

/// Users older than `age` years.
async fn search_by_age(
    State(state): State<AppState>,
    Query(query): Query<AgeQuery>,
) -> ApiResult<Vec<UserDto>> {
    debug!("Search users by age request: {}", query.age);

    let age = parse_age(&query.age)?;
    let users = state.user_service.search_users_by_age_greater_than(age).await?;
    ok(users)
}

/// Users born before `date`.
async fn older_than(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> ApiResult<Vec<UserDto>> {
    debug!("Users born before request: {}", date);

    let date = parse_date(&date)?;
    let users = state.user_service.find_users_older_than(date).await?;
    ok(users)
}
