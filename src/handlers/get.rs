use crate::error::{ApiError, ErrorResponse};
use crate::models::Kebab;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /kebabs/:id handler - Retrieve a single kebab
#[utoipa::path(
    get,
    path = routes::KEBAB_ITEM,
    params(
        ("id" = i32, Path, description = "Kebab id")
    ),
    responses(
        (status = 200, description = "Kebab found", body = Kebab),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Kebab not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "kebabs"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Kebab>), ApiError> {
    let id: i32 = id_str
        .parse()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state
        .store
        .get(id)
        .await
        .map_err(|e| ApiError::internal("Failed to get kebab", e))?
    {
        Some(kebab) => {
            tracing::info!("Retrieved kebab with id: {}", id);
            Ok((StatusCode::OK, Json(kebab)))
        }
        None => {
            tracing::info!("Kebab not found with id: {}", id);
            Err(ApiError::NotFound(id))
        }
    }
}
