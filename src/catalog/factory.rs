use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

// Loads the library once; a corrupt or unreadable store is refused here so no
// operation ever runs against a library that storage does not back.
pub(crate) async fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config, store).await;
    let service = CatalogServiceImpl::load(book_repo).await?;
    Ok(Box::new(service))
}
