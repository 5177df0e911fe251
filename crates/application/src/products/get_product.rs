use async_trait::async_trait;

use catalog_products::{Product, ProductId};

use crate::error::AppError;
use crate::handler::RequestHandler;
use crate::repository::ProductRepository;
use crate::request::Request;

/// Query: GetProduct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProduct {
    pub id: i64,
}

impl Request for GetProduct {
    type Response = Option<Product>;
    const NAME: &'static str = "GetProduct";
}

#[derive(Debug, Clone)]
pub struct GetProductHandler<R> {
    repository: R,
}

impl<R> GetProductHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RequestHandler<GetProduct> for GetProductHandler<R>
where
    R: ProductRepository + 'static,
{
    async fn handle(&self, query: GetProduct) -> Result<Option<Product>, AppError> {
        let id = ProductId::parse(query.id)?;
        let product = self.repository.get_by_id(id).await?;

        if product.is_none() {
            tracing::info!(product_id = %id, "product not found");
        }

        Ok(product)
    }
}
