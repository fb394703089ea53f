use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Index outside the question set
    #[error("question index {index} is out of range (question set has {len})")]
    IllegalQuestion { index: usize, len: usize },
    /// Answer outside the 0-3 scale
    #[error("illegal answer {0:?}, expected 0, 1, 2 or 3")]
    IllegalAnswer(String),
    /// Missing answers
    #[error("not every question has been answered")]
    NotFulfilled,
    #[error("question set contains no questions")]
    EmptyQuestionSet,
    #[error("row has {found} answers, question set has {expected}")]
    RowLength { expected: usize, found: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
