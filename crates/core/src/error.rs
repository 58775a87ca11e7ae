#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is kept as text so an unparseable path segment can be reported too.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
