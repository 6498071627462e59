use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("hash length must be between 0 and 64, got {0}")]
    InvalidLength(usize),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
