use crate::error::{ApiError, ErrorResponse};
use crate::models::Kebab;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PUT /kebabs/:id handler - Overwrite a kebab's flavor and price
///
/// Always overwrites both fields; missing body fields become zero values.
/// The affected-row count is checked, so updating a nonexistent id is a 404
/// rather than a silent success.
#[utoipa::path(
    put,
    path = routes::KEBAB_ITEM,
    params(
        ("id" = i32, Path, description = "Kebab id")
    ),
    request_body = Kebab,
    responses(
        (status = 200, description = "Kebab updated, submitted record echoed", body = Kebab),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Kebab not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "kebabs"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(kebab): Json<Kebab>,
) -> Result<(StatusCode, Json<Kebab>), ApiError> {
    let id: i32 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let affected = state
        .store
        .update(id, &kebab.flavor, kebab.price)
        .await
        .map_err(|e| ApiError::internal("Failed to update kebab", e))?;

    if affected == 0 {
        tracing::info!("Kebab not found with id: {}", id);
        return Err(ApiError::NotFound(id));
    }

    tracing::info!("Updated kebab with id: {}", id);
    Ok((StatusCode::OK, Json(kebab)))
}
