pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, LibraryStats, SearchField};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send + std::fmt::Debug {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, title: &str) -> LibraryResult<usize>;
    async fn search_books(&self, field: SearchField, term: &str) -> LibraryResult<Vec<BookDto>>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn statistics(&self) -> LibraryResult<LibraryStats>;
}
