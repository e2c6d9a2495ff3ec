use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository backs the catalog with a plain in-process sequence,
// standing in for the file store in tests.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(vec![]),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        *books = entities.to_vec();
        Ok(books.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn reset(&self) -> LibraryResult<()> {
        self.books.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_start_empty() {
        let repo = MemoryBookRepository::new();
        assert!(repo.load().await.expect("should load").is_empty());
    }

    #[tokio::test]
    async fn test_should_replace_books_on_save() {
        let repo = MemoryBookRepository::new();
        let books = vec![BookEntity::new("Dune", "Herbert", "1965", "Sci-Fi", true)];
        let saved = repo.save(&books).await.expect("should save");
        assert_eq!(1, saved);
        assert_eq!(books, repo.load().await.expect("should load"));
        let _ = repo.reset().await.expect("should reset");
        assert!(repo.load().await.expect("should load").is_empty());
    }
}
