use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "library.txt";

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub data_file: PathBuf,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: PathBuf::from(data_file),
        }
    }

    // storage location from LIBRARY_DATA_FILE, falling back to library.txt
    // in the working directory
    pub fn from_env() -> Self {
        let data_file = env::var("LIBRARY_DATA_FILE")
            .unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
        Configuration::new(data_file.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("books/library.txt");
        assert_eq!(PathBuf::from("books/library.txt"), config.data_file);
    }
}
