use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SearchField;

pub(crate) struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) field: SearchField,
    pub(crate) term: String,
}

impl SearchBooksCommandRequest {
    pub fn new(field: SearchField, term: &str) -> Self {
        Self {
            field,
            term: term.to_string(),
        }
    }
}

// an empty matches list is a valid outcome, not an error
#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub matches: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(matches: Vec<BookDto>) -> Self {
        Self {
            matches,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books(req.field, req.term.as_str()).await
            .map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::SearchField;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_search_books() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let data_file = dir.path().join("library.txt");
        let config = Configuration::new(data_file.to_str().expect("should render path"));

        let add_svc = factory::create_catalog_service(&config, RepositoryStore::File)
            .await.expect("should create service");
        let _ = AddBookCommand::new(add_svc).execute(
            AddBookCommandRequest::new("Dune", "Herbert", "1965", "Sci-Fi", true))
            .await.expect("should add book");

        let search_svc = factory::create_catalog_service(&config, RepositoryStore::File)
            .await.expect("should create service");
        let cmd = SearchBooksCommand::new(search_svc);

        let res = cmd.execute(SearchBooksCommandRequest::new(SearchField::Title, "dun"))
            .await.expect("should search books");
        assert_eq!(1, res.matches.len());
        assert_eq!("Dune", res.matches[0].title.as_str());

        let res = cmd.execute(SearchBooksCommandRequest::new(SearchField::Author, "austen"))
            .await.expect("should search books");
        assert!(res.matches.is_empty());
    }
}
