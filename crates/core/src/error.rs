use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}
