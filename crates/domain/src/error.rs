#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("plan generation failed: {0}")]
    Generator(String),
    #[error("malformed generator response: {0}")]
    Malformed(String),
    #[error("generated plan contains no usable exercises")]
    NoUsableExercises,
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
