use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::SearchField;

// BookDto is a data transfer object for the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl BookDto {
    pub fn new(title: &str, author: &str, year: &str, genre: &str, read: bool) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            genre: genre.to_string(),
            read,
        }
    }
}

impl Book for BookDto {
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

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let status = if self.read { "Read" } else { "Unread" };
        write!(f, "{} by {} ({}) - {} - {}", self.title, self.author, self.year, self.genre, status)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Dune", "Herbert", "1965", "Sci-Fi", true);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert!(book.is_read());
    }

    #[tokio::test]
    async fn test_should_format_book_line() {
        let read = BookDto::new("Dune", "Herbert", "1965", "Sci-Fi", true);
        assert_eq!("Dune by Herbert (1965) - Sci-Fi - Read", read.to_string());
        let unread = BookDto::new("Emma", "Austen", "1815", "Romance", false);
        assert_eq!("Emma by Austen (1815) - Romance - Unread", unread.to_string());
    }
}
