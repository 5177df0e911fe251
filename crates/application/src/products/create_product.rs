use async_trait::async_trait;
use rust_decimal::Decimal;

use catalog_products::{Product, ProductId};

use crate::error::AppError;
use crate::handler::RequestHandler;
use crate::repository::ProductRepository;
use crate::request::Request;

/// Command: CreateProduct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl Request for CreateProduct {
    type Response = ProductId;
    const NAME: &'static str = "CreateProduct";
}

/// Validates a new listing, stores it, and returns the store-assigned id.
#[derive(Debug, Clone)]
pub struct CreateProductHandler<R> {
    repository: R,
}

impl<R> CreateProductHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RequestHandler<CreateProduct> for CreateProductHandler<R>
where
    R: ProductRepository + 'static,
{
    async fn handle(&self, command: CreateProduct) -> Result<ProductId, AppError> {
        Product::ensure_listing_price(command.price)?;
        let product = Product::new(command.name, command.description, command.price, command.stock)?;

        tracing::info!(name = %product.name(), "creating product");
        let id = self.repository.add(product).await?;
        tracing::info!(product_id = %id, "created product");

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::RecordingRepository;
    use catalog_core::DomainError;

    fn command(price: Decimal, stock: i32) -> CreateProduct {
        CreateProduct {
            name: "Test Product".to_string(),
            description: "Test Description".to_string(),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn valid_command_returns_assigned_id() {
        let repository = Arc::new(RecordingRepository::new());
        let handler = CreateProductHandler::new(repository.clone());

        let id = handler.handle(command(Decimal::new(1999, 2), 5)).await.unwrap();

        assert_eq!(id.get(), 1);
        assert_eq!(repository.writes(), 1);
        let stored = repository.stored(id).unwrap();
        assert_eq!(stored.name(), "Test Product");
        assert_eq!(stored.stock(), 5);
    }

    #[tokio::test]
    async fn ids_increase_with_each_create() {
        let repository = Arc::new(RecordingRepository::new());
        let handler = CreateProductHandler::new(repository.clone());

        let first = handler.handle(command(Decimal::ONE, 0)).await.unwrap();
        let second = handler.handle(command(Decimal::ONE, 0)).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn non_positive_price_is_rejected_without_write() {
        let repository = Arc::new(RecordingRepository::new());
        let handler = CreateProductHandler::new(repository.clone());

        for price in [Decimal::ZERO, Decimal::new(-100, 2)] {
            let err = handler.handle(command(price, 1)).await.unwrap_err();
            assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
        }
        assert_eq!(repository.writes(), 0);
    }

    #[tokio::test]
    async fn unstorable_price_is_rejected_without_write() {
        let repository = Arc::new(RecordingRepository::new());
        let handler = CreateProductHandler::new(repository.clone());

        let sub_cent = Decimal::new(19_999, 3);
        let too_large = catalog_products::MAX_PRICE + Decimal::ONE;
        for price in [sub_cent, too_large] {
            let err = handler.handle(command(price, 1)).await.unwrap_err();
            assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
        }
        assert_eq!(repository.reads(), 0);
        assert_eq!(repository.writes(), 0);
    }

    #[tokio::test]
    async fn negative_stock_is_rejected_without_write() {
        let repository = Arc::new(RecordingRepository::new());
        let handler = CreateProductHandler::new(repository.clone());

        let err = handler.handle(command(Decimal::TEN, -1)).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(repository.writes(), 0);
    }

    #[tokio::test]
    async fn empty_name_is_rejected_without_write() {
        let repository = Arc::new(RecordingRepository::new());
        let handler = CreateProductHandler::new(repository.clone());

        let mut cmd = command(Decimal::TEN, 1);
        cmd.name = String::new();
        assert!(handler.handle(cmd).await.is_err());
        assert_eq!(repository.writes(), 0);
    }

    #[tokio::test]
    async fn storage_failure_is_propagated() {
        let repository = Arc::new(RecordingRepository::failing_writes());
        let handler = CreateProductHandler::new(repository.clone());

        let err = handler.handle(command(Decimal::TEN, 1)).await.unwrap_err();
        assert!(matches!(err, AppError::Repository(_)));
        assert!(!err.is_client_error());
    }
}
