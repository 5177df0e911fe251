//! Persistence contract consumed by the product handlers.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use catalog_products::{Product, ProductId};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Store-layer failure (connectivity, constraint violations, corrupt rows).
///
/// Absence of a record is never an error here; it is reported through the
/// `Option` / `bool` results of [`ProductRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A store constraint rejected the write (e.g. unique or check violation).
    #[error("storage conflict: {0}")]
    Conflict(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Product storage.
///
/// Every implementation must honor the same return semantics:
///
/// - `get_all` returns products in insertion (id) order
/// - `add` assigns and returns a fresh, strictly positive id
/// - `update` returns `false` when the product no longer exists (no write happens)
/// - `delete` returns `true` only if a record was removed
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;

    async fn get_all(&self) -> RepositoryResult<Vec<Product>>;

    async fn add(&self, product: Product) -> RepositoryResult<ProductId>;

    async fn update(&self, product: &Product) -> RepositoryResult<bool>;

    async fn delete(&self, id: ProductId) -> RepositoryResult<bool>;
}

#[async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn get_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        (**self).get_by_id(id).await
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        (**self).get_all().await
    }

    async fn add(&self, product: Product) -> RepositoryResult<ProductId> {
        (**self).add(product).await
    }

    async fn update(&self, product: &Product) -> RepositoryResult<bool> {
        (**self).update(product).await
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<bool> {
        (**self).delete(id).await
    }
}
