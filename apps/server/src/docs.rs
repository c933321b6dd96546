use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::welcome,
        crate::features::todos::routes::list,
        crate::features::todos::routes::get,
        crate::features::todos::routes::create,
        crate::features::todos::routes::update,
        crate::features::todos::routes::delete,
    ),
    components(
        schemas(
            todo_types::Todo,
            todo_types::CreateTodoRequest,
            todo_types::UpdateTodoRequest,
            todo_types::MessageResponse,
            todo_types::ErrorBody,
        )
    ),
    tags(
        (name = "Service", description = "Service-level endpoints."),
        (name = "Todos", description = "Todo item CRUD operations."),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
}
