use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::Kebab;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "kebab-service API",
        version = "1.0.0",
        description = "A minimal CRUD service for kebab records backed by PostgreSQL"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Kebab,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "kebabs", description = "Kebab CRUD operations")
    )
)]
pub struct ApiDoc;
