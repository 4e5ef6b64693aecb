use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the REST surface of Pixel Press Back.
///
/// The GraphQL API documents itself through the playground at `/graphql`;
/// only the plain HTTP routes are described here.
#[openapi(
    paths(crate::routes::health::healthcheck),
    components(schemas(crate::dto::health::HealthResponse)),
    tags((name = "health", description = "Health check endpoints"))
)]
pub struct ApiDoc;
