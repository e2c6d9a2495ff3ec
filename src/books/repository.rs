pub mod file_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // truncate storage to an empty library; the operator recovery path when
    // the stored contents cannot be parsed
    async fn reset(&self) -> LibraryResult<()>;
}
