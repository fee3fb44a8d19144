use thiserror::Error;

/// Error for ProfessorId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfessorIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for ProfessorName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfessorNameError {
    #[error("Professor name is empty")]
    Empty,
}

/// Error for Rating parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error(r#"Invalid rating. Use either "recommended" or "not recommended""#)]
    Unknown(String),
}

/// Top-level error for all professor-related operations
#[derive(Debug, Clone, Error)]
pub enum ProfessorError {
    #[error("Invalid professor ID: {0}")]
    InvalidProfessorId(#[from] ProfessorIdError),

    #[error("Invalid professor name: {0}")]
    InvalidName(#[from] ProfessorNameError),

    #[error("{0}")]
    InvalidRating(#[from] RatingError),

    #[error("Invalid rating index")]
    InvalidRatingIndex { index: i64, len: usize },

    #[error("Professor not found")]
    NotFound(String),

    #[error("Professor already exists")]
    NameAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

