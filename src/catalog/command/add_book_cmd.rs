use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) genre: String,
    pub(crate) read: bool,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: &str, genre: &str, read: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            genre: genre.to_string(),
            read,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.year.as_str(),
                     self.genre.as_str(), self.read)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn command() -> AddBookCommand {
        let svc = factory::create_catalog_service(&Configuration::new("unused"), RepositoryStore::Memory)
            .await.expect("should create service");
        AddBookCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = command().await;

        let res = cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", "1965", "Sci-Fi", true))
            .await.expect("should add book");
        assert_eq!("Dune", res.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_blank_fields() {
        let cmd = command().await;

        let err = cmd.execute(AddBookCommandRequest::new("Dune", "", "1965", "Sci-Fi", false))
            .await.expect_err("should reject book");
        assert!(matches!(err, CommandError::Validation { message: _, reason_code: _ }));
    }
}
