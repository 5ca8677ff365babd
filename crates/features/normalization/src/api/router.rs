use super::handlers;
use lipi_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Normalization, language and example routes.
pub fn normalization_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::welcome, handlers::welcome_post))
        .routes(routes!(handlers::normalize))
        .routes(routes!(handlers::validate_options))
        .routes(routes!(handlers::list_languages))
        .routes(routes!(handlers::describe_options))
        .routes(routes!(handlers::list_nasals_modes))
        .routes(routes!(handlers::list_examples))
        .routes(routes!(handlers::get_example))
}
