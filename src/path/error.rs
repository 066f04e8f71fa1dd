use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path '{input}' must start with '/'")]
    MissingLeadingSlash { input: String },
    #[error("path contains control or whitespace byte {byte} in '{input}'")]
    ControlOrWhitespace { input: String, byte: u8 },
    #[error("path '{input}' has an invalid percent escape at byte {index}")]
    InvalidPercentEncoding { input: String, index: usize },
    #[error("path '{input}' is not valid UTF-8 after percent decoding")]
    InvalidUtf8AfterDecoding { input: String },
    #[error("path '{input}' normalizes to invalid parent traversal '{normalized}'")]
    InvalidParentTraversal { input: String, normalized: String },
}

pub type PathResult<T> = Result<T, PathError>;
