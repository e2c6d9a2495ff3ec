use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // The storage location exists but its contents could not be parsed as a
    // library. Never discarded silently; the caller decides whether to reset.
    CorruptStorage {
        message: String,
    },
    Io {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn corrupt_storage(message: &str) -> LibraryError {
        LibraryError::CorruptStorage { message: message.to_string() }
    }

    pub fn io(message: &str) -> LibraryError {
        LibraryError::Io { message: message.to_string() }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(format!("storage io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::corrupt_storage(format!("storage parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CorruptStorage { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Io { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for Store and Catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// The book attribute a search runs against.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SearchField {
    Title,
    Author,
}

impl FromStr for SearchField {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            _ => Err(LibraryError::validation(
                format!("search field must be title or author, got {}", s).as_str(),
                Some(s.to_string()))),
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
        }
    }
}

// Aggregate counters over the whole library.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct LibraryStats {
    pub total: usize,
    pub percent_read: f64,
}

impl LibraryStats {
    // percent_read is defined as 0.0 for an empty library.
    pub fn new(total: usize, read: usize) -> Self {
        let percent_read = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        LibraryStats { total, percent_read }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use crate::core::library::{LibraryError, LibraryStats, SearchField};

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_corrupt_storage_error() {
        assert!(matches!(LibraryError::corrupt_storage("test"), LibraryError::CorruptStorage{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_io_error() {
        assert!(matches!(LibraryError::io("test"), LibraryError::Io{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(LibraryError::from(err), LibraryError::Io{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error_to_corrupt_storage() {
        let err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::CorruptStorage{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_parse_search_field() {
        assert_eq!(SearchField::Title, SearchField::from_str("title").expect("should parse title"));
        assert_eq!(SearchField::Author, SearchField::from_str("Author").expect("should parse author"));
        assert!(SearchField::from_str("genre").is_err());
    }

    #[tokio::test]
    async fn test_should_format_search_field() {
        for field in [SearchField::Title, SearchField::Author] {
            let str = field.to_string();
            assert_eq!(field, SearchField::from_str(str.as_str()).expect("should parse"));
        }
    }

    #[tokio::test]
    async fn test_should_compute_stats() {
        let stats = LibraryStats::new(4, 1);
        assert_eq!(4, stats.total);
        assert_eq!(25.0, stats.percent_read);
    }

    #[tokio::test]
    async fn test_should_compute_empty_stats_without_dividing() {
        let stats = LibraryStats::new(0, 0);
        assert_eq!(0, stats.total);
        assert_eq!(0.0, stats.percent_read);
    }
}
