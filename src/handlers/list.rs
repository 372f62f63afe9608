use crate::error::{ApiError, ErrorResponse};
use crate::models::Kebab;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /kebabs handler - List all kebabs
///
/// Returns every record in the store as a JSON array. Row order is whatever
/// the database returns.
#[utoipa::path(
    get,
    path = routes::KEBABS,
    responses(
        (status = 200, description = "List of kebabs", body = Vec<Kebab>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "kebabs"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Kebab>>), ApiError> {
    let kebabs = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch kebabs", e))?;

    tracing::info!("Listed {} kebabs", kebabs.len());
    Ok((StatusCode::OK, Json(kebabs)))
}
