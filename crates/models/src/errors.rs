use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("sequence error: {0}")]
    Sequence(String),
    #[error("database error: {0}")]
    Db(String),
}
