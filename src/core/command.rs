use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    CorruptStorage {
        message: String,
    },
    Io {
        message: String,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::CorruptStorage { message } => {
                CommandError::CorruptStorage { message }
            }
            LibraryError::Io { message } => {
                CommandError::Io { message }
            }
        }
    }
}

// Rendered as-is at the presentation edge; messages carry their own context.
impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            CommandError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CommandError::CorruptStorage { message } => {
                write!(f, "{}", message)
            }
            CommandError::Io { message } => {
                write!(f, "{}", message)
            }
        }
    }
}
