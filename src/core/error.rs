use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("User '{0}' not found")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Division by zero: page size must be greater than 0")]
    DivisionByZero,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("User '{0}' already exists")]
    DuplicateId(String),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
