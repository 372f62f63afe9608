use crate::error::{ApiError, ErrorResponse};
use crate::models::Kebab;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /kebabs handler - Create a new kebab
///
/// Inserts a row with the submitted flavor and price; any id in the body is
/// ignored, the database assigns its own. The response echoes the submitted
/// record, so the assigned id is not reflected in it.
#[utoipa::path(
    post,
    path = routes::KEBABS,
    request_body = Kebab,
    responses(
        (status = 201, description = "Kebab created, submitted record echoed", body = Kebab),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "kebabs"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(kebab): Json<Kebab>,
) -> Result<(StatusCode, Json<Kebab>), ApiError> {
    let id = state
        .store
        .create(&kebab.flavor, kebab.price)
        .await
        .map_err(|e| ApiError::internal("Failed to create kebab", e))?;

    tracing::info!("Created kebab with id: {}", id);
    Ok((StatusCode::CREATED, Json(kebab)))
}
