use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult, LibraryStats, SearchField};

// CatalogServiceImpl holds the session library: loaded once at construction,
// mutated in memory, and rewritten wholesale through the repository. Mutations
// persist the successor sequence first and commit it to the session only on
// success, so the session view never diverges from durable storage.
pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    books: RwLock<Vec<BookEntity>>,
}

impl std::fmt::Debug for CatalogServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServiceImpl").finish()
    }
}

impl CatalogServiceImpl {
    pub(crate) async fn load(book_repository: Box<dyn BookRepository>) -> LibraryResult<Self> {
        let books = book_repository.load().await?;
        Ok(Self {
            book_repository,
            books: RwLock::new(books),
        })
    }
}

// whitespace-only counts as empty
fn validate(book: &BookDto) -> LibraryResult<()> {
    let required = [
        ("title", book.title.as_str()),
        ("author", book.author.as_str()),
        ("year", book.year.as_str()),
        ("genre", book.genre.as_str()),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("{} is required", name).as_str(), Some(name.to_string())));
        }
    }
    Ok(())
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate(book)?;
        let mut books = self.books.write().await;
        let mut next = books.clone();
        next.push(BookEntity::from(book));
        let _ = self.book_repository.save(&next).await?;
        *books = next;
        Ok(book.clone())
    }

    async fn remove_book(&self, title: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let next: Vec<BookEntity> = books.iter()
            .filter(|book| !book.title_matches(title))
            .cloned()
            .collect();
        let removed = books.len() - next.len();
        if removed == 0 {
            return Err(LibraryError::not_found(format!("book {} not found", title).as_str()));
        }
        let _ = self.book_repository.save(&next).await?;
        *books = next;
        Ok(removed)
    }

    async fn search_books(&self, field: SearchField, term: &str) -> LibraryResult<Vec<BookDto>> {
        let term = term.to_lowercase();
        let books = self.books.read().await;
        Ok(books.iter()
            .filter(|book| book.field_value(field).to_lowercase().contains(term.as_str()))
            .map(BookDto::from)
            .collect())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.books.read().await;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn statistics(&self) -> LibraryResult<LibraryStats> {
        let books = self.books.read().await;
        let read = books.iter().filter(|book| book.is_read()).count();
        Ok(LibraryStats::new(books.len(), read))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year.to_string(),
            genre: other.genre.to_string(),
            read: other.read,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year.to_string(),
            genre: other.genre.to_string(),
            read: other.read,
        }
    }
}
