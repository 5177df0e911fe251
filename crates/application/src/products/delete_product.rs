use async_trait::async_trait;

use catalog_products::ProductId;

use crate::error::AppError;
use crate::handler::RequestHandler;
use crate::repository::ProductRepository;
use crate::request::Request;

/// Command: DeleteProduct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProduct {
    pub id: i64,
}

impl Request for DeleteProduct {
    /// `true` if a product was removed, `false` if none existed.
    type Response = bool;
    const NAME: &'static str = "DeleteProduct";
}

#[derive(Debug, Clone)]
pub struct DeleteProductHandler<R> {
    repository: R,
}

impl<R> DeleteProductHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RequestHandler<DeleteProduct> for DeleteProductHandler<R>
where
    R: ProductRepository + 'static,
{
    async fn handle(&self, command: DeleteProduct) -> Result<bool, AppError> {
        let id = ProductId::parse(command.id)?;

        tracing::info!(product_id = %id, "attempting to delete product");
        let removed = self.repository.delete(id).await?;

        if removed {
            tracing::info!(product_id = %id, "deleted product");
        } else {
            tracing::warn!(product_id = %id, "product not found");
        }

        Ok(removed)
    }
}
