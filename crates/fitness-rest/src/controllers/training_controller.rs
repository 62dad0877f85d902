//! Training controller.

use crate::{
    extractors::{
        parse_activity_type, parse_day_start, parse_training_id, parse_user_id,
        ActivityTypeQuery, JsonBody, ValidatedJson,
    },
    responses::{created, ok, ApiResult, CreatedResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use fitness_service::TrainingDto;
use tracing::debug;

/// Creates the training router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trainings).post(create_training))
        .route("/activity-type", get(by_activity_type))
        .route("/user/:user_id", get(by_user))
        .route("/finished/:date", get(finished_after))
        .route("/:id", get(get_training).put(update_training))
}

/// List every training.
async fn list_trainings(State(state): State<AppState>) -> ApiResult<Vec<TrainingDto>> {
    debug!("List trainings request");

    let trainings = state.training_service.list_trainings().await?;
    ok(trainings)
}

/// Record a training for an existing user.
async fn create_training(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TrainingDto>,
) -> CreatedResult<TrainingDto> {
    debug!("Create training request: {}", dto.activity_type);

    let training = state.training_service.create_training(dto).await?;
    Ok(created(training))
}

/// Get a training by ID.
async fn get_training(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<TrainingDto> {
    debug!("Get training request: {}", id);

    let training_id = parse_training_id(&id)?;
    let training = state.training_service.get_training(training_id).await?;
    ok(training)
}

/// Replace a training's fields, keeping its owner.
async fn update_training(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(dto): JsonBody<TrainingDto>,
) -> ApiResult<TrainingDto> {
    debug!("Update training request: {}", id);

    let training_id = parse_training_id(&id)?;
    let training = state.training_service.update_training(training_id, dto).await?;
    ok(training)
}

/// Trainings owned by a user.
async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<TrainingDto>> {
    debug!("Trainings by user request: {}", user_id);

    let user_id = parse_user_id(&user_id)?;
    let trainings = state.training_service.list_by_user(user_id).await?;
    ok(trainings)
}

/// Trainings that ended after midnight UTC of `date`.
async fn finished_after(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> ApiResult<Vec<TrainingDto>> {
    debug!("Trainings finished after request: {}", date);

    let instant = parse_day_start(&date)?;
    let trainings = state.training_service.list_finished_after(instant).await?;
    ok(trainings)
}

/// Trainings of one activity type, matched case-insensitively.
async fn by_activity_type(
    State(state): State<AppState>,
    Query(query): Query<ActivityTypeQuery>,
) -> ApiResult<Vec<TrainingDto>> {
    debug!("Trainings by activity type request: {}", query.activity_type);

    let activity_type = parse_activity_type(&query.activity_type)?;
    let trainings = state
        .training_service
        .list_by_activity_type(activity_type)
        .await?;
    ok(trainings)
}
