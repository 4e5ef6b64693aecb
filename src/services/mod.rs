/// Catalog operations backing the GraphQL resolvers.
pub mod catalog_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
