#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("required element `{0}` is missing from the page")]
    MissingElement(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;
