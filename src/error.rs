use thiserror::Error;

/// Errors that can occur in service layer operations.
///
/// Absence is not an error anywhere in this API: lookups and mutations that
/// miss resolve to an empty `Option` in their return shape. Only input the
/// catalog refuses to store is signaled here, and the GraphQL layer surfaces
/// it as a request error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
