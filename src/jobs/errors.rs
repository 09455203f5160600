use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum JobError {
    /// The endpoint could not be reached or answered with a non-success status.
    Transport(String),
    /// The server answered with GraphQL errors.
    GraphQL(Vec<String>),
    /// The response did not have the expected shape.
    MalformedResponse(String),
    Io(std::io::Error),
}

impl Display for JobError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JobError::Transport(err) => write!(f, "Transport error: {}", err),
            JobError::GraphQL(messages) => write!(f, "GraphQL error: {}", messages.join("; ")),
            JobError::MalformedResponse(err) => write!(f, "Malformed response: {}", err),
            JobError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for JobError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            JobError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for JobError {
    fn from(err: std::io::Error) -> Self {
        JobError::Io(err)
    }
}

impl From<serde_json::Error> for JobError {
    fn from(err: serde_json::Error) -> Self {
        JobError::MalformedResponse(err.to_string())
    }
}
