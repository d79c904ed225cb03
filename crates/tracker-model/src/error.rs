use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid user id '{value}': {reason}")]
    InvalidUserId { value: String, reason: String },
    #[error("user id must not be the nil UUID")]
    NilUserId,
}

pub type Result<T> = std::result::Result<T, ModelError>;
