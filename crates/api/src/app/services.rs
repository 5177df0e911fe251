use std::sync::Arc;

use thiserror::Error;

use catalog_application::products::register_handlers;
use catalog_application::{AppError, AppResult, Mediator, RepositoryError, Request};
use catalog_infra::{InMemoryProductRepository, PostgresProductRepository, StoreConfig};

#[derive(Debug, Error)]
pub enum ServicesError {
    #[error("store initialization failed: {0}")]
    Store(#[from] RepositoryError),

    #[error("handler registration failed: {0}")]
    Registration(#[from] AppError),
}

/// Everything the routes need: a fully registered mediator.
#[derive(Debug)]
pub struct AppServices {
    mediator: Mediator,
}

impl AppServices {
    pub fn new(mediator: Mediator) -> Self {
        Self { mediator }
    }

    pub async fn send<R: Request>(&self, request: R) -> AppResult<R::Response> {
        self.mediator.send(request).await
    }
}

/// Wire the product store selected by `store` and register every handler.
pub async fn build_services(store: &StoreConfig) -> Result<AppServices, ServicesError> {
    let mut mediator = Mediator::new();

    match store {
        StoreConfig::InMemory => {
            register_handlers(&mut mediator, Arc::new(InMemoryProductRepository::new()))?;
            tracing::info!("using in-memory product store");
        }
        StoreConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let repository = PostgresProductRepository::connect(database_url, *max_connections).await?;
            repository.ensure_schema().await?;
            register_handlers(&mut mediator, repository)?;
            tracing::info!(max_connections, "using postgres product store");
        }
    }

    Ok(AppServices::new(mediator))
}
