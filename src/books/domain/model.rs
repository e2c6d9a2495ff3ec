use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::SearchField;

// BookEntity is one stored record of the library. The storage schema is
// exactly these five keys; title is the removal key and duplicates are
// permitted. year is opaque text and preserved verbatim.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: &str, genre: &str, read: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            genre: genre.to_string(),
            read,
        }
    }

    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl Book for BookEntity {
    fn is_read(&self) -> bool {
        self.read
    }

    fn field_value(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => self.title.as_str(),
            SearchField::Author => self.author.as_str(),
        }
    }
}
