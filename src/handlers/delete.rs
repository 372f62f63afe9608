use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /kebabs/:id handler - Remove a kebab
///
/// Returns 200 with an empty body on success. The affected-row count is
/// checked, so deleting a nonexistent id is a 404 rather than a silent
/// success.
#[utoipa::path(
    delete,
    path = routes::KEBAB_ITEM,
    params(
        ("id" = i32, Path, description = "Kebab id")
    ),
    responses(
        (status = 200, description = "Kebab deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Kebab not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "kebabs"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: i32 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let affected = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete kebab", e))?;

    if affected == 0 {
        tracing::info!("Kebab not found with id: {}", id);
        return Err(ApiError::NotFound(id));
    }

    tracing::info!("Deleted kebab with id: {}", id);
    Ok(StatusCode::OK)
}
