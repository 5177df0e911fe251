use async_trait::async_trait;

use catalog_products::Product;

use crate::error::AppError;
use crate::handler::RequestHandler;
use crate::repository::ProductRepository;
use crate::request::Request;

/// Query: GetProducts (whole catalog, insertion order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetProducts;

impl Request for GetProducts {
    type Response = Vec<Product>;
    const NAME: &'static str = "GetProducts";
}

#[derive(Debug, Clone)]
pub struct GetProductsHandler<R> {
    repository: R,
}

impl<R> GetProductsHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RequestHandler<GetProducts> for GetProductsHandler<R>
where
    R: ProductRepository + 'static,
{
    async fn handle(&self, _query: GetProducts) -> Result<Vec<Product>, AppError> {
        let products = self.repository.get_all().await?;
        tracing::debug!(count = products.len(), "listed products");
        Ok(products)
    }
}
