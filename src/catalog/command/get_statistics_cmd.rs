use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryStats;

pub(crate) struct GetStatisticsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetStatisticsCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetStatisticsCommandRequest {}

impl GetStatisticsCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetStatisticsCommandResponse {
    pub statistics: LibraryStats,
}

impl GetStatisticsCommandResponse {
    pub fn new(statistics: LibraryStats) -> Self {
        Self {
            statistics,
        }
    }
}

#[async_trait]
impl Command<GetStatisticsCommandRequest, GetStatisticsCommandResponse> for GetStatisticsCommand {
    async fn execute(&self, _req: GetStatisticsCommandRequest) -> Result<GetStatisticsCommandResponse, CommandError> {
        self.catalog_service.statistics().await
            .map_err(CommandError::from).map(GetStatisticsCommandResponse::new)
    }
}
