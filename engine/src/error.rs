use thiserror::Error as DError;

#[derive(Debug, Clone, PartialEq, DError)]
pub enum ErrorKind {
    #[error("Couldn't find user({0}) in the ratings grid")]
    UnknownUser(String),

    #[error("Couldn't find item({0}) in the ratings grid")]
    UnknownItem(String),

    #[error("Asked for zero recommendations, top-n must be positive")]
    InvalidTopN,

    #[error("Malformed input: {0}")]
    MalformedInput(#[from] controller::error::ErrorKind),
}
