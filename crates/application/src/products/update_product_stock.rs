use async_trait::async_trait;

use catalog_products::{Product, ProductId};

use crate::error::AppError;
use crate::handler::RequestHandler;
use crate::repository::ProductRepository;
use crate::request::Request;

/// Command: UpdateProductStock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProductStock {
    pub id: i64,
    pub stock: i32,
}

impl Request for UpdateProductStock {
    /// The updated product, or `None` if it does not exist.
    type Response = Option<Product>;
    const NAME: &'static str = "UpdateProductStock";
}

#[derive(Debug, Clone)]
pub struct UpdateProductStockHandler<R> {
    repository: R,
}

impl<R> UpdateProductStockHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RequestHandler<UpdateProductStock> for UpdateProductStockHandler<R>
where
    R: ProductRepository + 'static,
{
    async fn handle(&self, command: UpdateProductStock) -> Result<Option<Product>, AppError> {
        let id = ProductId::parse(command.id)?;
        Product::validate_stock(command.stock)?;

        let Some(mut product) = self.repository.get_by_id(id).await? else {
            tracing::warn!(product_id = %id, "product not found");
            return Ok(None);
        };

        product.update_stock(command.stock)?;
        if !self.repository.update(&product).await? {
            tracing::warn!(product_id = %id, "product disappeared before stock was persisted");
            return Ok(None);
        }

        tracing::info!(product_id = %id, stock = command.stock, "updated product stock");
        Ok(Some(product))
    }
}
