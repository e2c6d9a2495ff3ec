use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::log::info;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::fs::atomic_write;

// FileBookRepository keeps the whole library as a JSON array in a single flat
// file and rewrites it wholesale on every save.
#[derive(Debug)]
pub struct FileBookRepository {
    data_file: PathBuf,
}

impl FileBookRepository {
    pub(crate) fn new(data_file: &Path) -> Self {
        Self {
            data_file: data_file.to_path_buf(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for FileBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        match tokio::fs::read_to_string(&self.data_file).await {
            Ok(contents) => serde_json::from_str(contents.as_str()).map_err(LibraryError::from),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no data file at {:?}, starting with an empty library", self.data_file);
                Ok(vec![])
            }
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let json = serde_json::to_string(entities)
            .map_err(|err| LibraryError::io(format!("serialize library {:?}", err).as_str()))?;
        atomic_write(self.data_file.as_path(), json.as_bytes()).await?;
        Ok(entities.len())
    }
}

#[async_trait]
impl BookRepository for FileBookRepository {
    async fn reset(&self) -> LibraryResult<()> {
        self.save(&[]).await.map(|_| ())
    }
}
