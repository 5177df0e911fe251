use async_trait::async_trait;
use rust_decimal::Decimal;

use catalog_products::{Product, ProductId};

use crate::error::AppError;
use crate::handler::RequestHandler;
use crate::repository::ProductRepository;
use crate::request::Request;

/// Command: UpdateProduct.
///
/// Replaces name, description, price and stock of an existing product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl Request for UpdateProduct {
    /// `true` if the product was updated; `false` if it does not exist or the
    /// price change was out of band.
    type Response = bool;
    const NAME: &'static str = "UpdateProduct";
}

/// Read-modify-write of a single product, gated by the price change band.
#[derive(Debug, Clone)]
pub struct UpdateProductHandler<R> {
    repository: R,
}

impl<R> UpdateProductHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RequestHandler<UpdateProduct> for UpdateProductHandler<R>
where
    R: ProductRepository + 'static,
{
    async fn handle(&self, command: UpdateProduct) -> Result<bool, AppError> {
        let id = ProductId::parse(command.id)?;
        Product::validate(&command.name, &command.description, command.price, command.stock)?;

        tracing::info!(product_id = %id, "attempting to update product");

        let Some(mut product) = self.repository.get_by_id(id).await? else {
            tracing::warn!(product_id = %id, "product not found");
            return Ok(false);
        };

        if !product.can_update_price(command.price) {
            tracing::warn!(
                product_id = %id,
                current_price = %product.price(),
                requested_price = %command.price,
                "price change exceeds allowed band; update rejected"
            );
            return Ok(false);
        }

        product.update(command.name, command.description, command.price, command.stock)?;

        if !self.repository.update(&product).await? {
            tracing::warn!(product_id = %id, "product disappeared before update was persisted");
            return Ok(false);
        }

        tracing::info!(product_id = %id, "updated product");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::RecordingRepository;
    use catalog_core::DomainError;

    fn command(id: i64, price: i64) -> UpdateProduct {
        UpdateProduct {
            id,
            name: "Updated Name".to_string(),
            description: "Updated Description".to_string(),
            price: Decimal::from(price),
            stock: 20,
        }
    }

    #[tokio::test]
    async fn price_change_within_band_is_persisted() {
        let repository = Arc::new(RecordingRepository::new());
        let id = repository.seed(1, Decimal::from(100));
        let handler = UpdateProductHandler::new(repository.clone());

        assert!(handler.handle(command(1, 110)).await.unwrap());

        assert_eq!(repository.reads(), 1);
        assert_eq!(repository.writes(), 1);
        let stored = repository.stored(id).unwrap();
        assert_eq!(stored.id_typed(), id);
        assert_eq!(stored.name(), "Updated Name");
        assert_eq!(stored.description(), "Updated Description");
        assert_eq!(stored.price(), Decimal::from(110));
        assert_eq!(stored.stock(), 20);
    }

    #[tokio::test]
    async fn price_change_over_band_is_rejected_without_write() {
        let repository = Arc::new(RecordingRepository::new());
        let id = repository.seed(1, Decimal::from(100));
        let handler = UpdateProductHandler::new(repository.clone());

        assert!(!handler.handle(command(1, 150)).await.unwrap());

        assert_eq!(repository.writes(), 0);
        let stored = repository.stored(id).unwrap();
        assert_eq!(stored.price(), Decimal::from(100));
        assert_eq!(stored.name(), "Test Product");
    }

    #[tokio::test]
    async fn missing_product_returns_false_without_write() {
        let repository = Arc::new(RecordingRepository::new());
        let handler = UpdateProductHandler::new(repository.clone());

        assert!(!handler.handle(command(1, 30)).await.unwrap());
        assert_eq!(repository.reads(), 1);
        assert_eq!(repository.writes(), 0);
    }

    #[tokio::test]
    async fn zero_stored_price_accepts_any_new_price() {
        let repository = Arc::new(RecordingRepository::new());
        repository.seed(4, Decimal::ZERO);
        let handler = UpdateProductHandler::new(repository.clone());

        assert!(handler.handle(command(4, 1_000)).await.unwrap());
    }

    #[tokio::test]
    async fn non_positive_id_fails_before_any_io() {
        let repository = Arc::new(RecordingRepository::new());
        let handler = UpdateProductHandler::new(repository.clone());

        for id in [0, -1] {
            let err = handler.handle(command(id, 100)).await.unwrap_err();
            assert!(matches!(err, AppError::Domain(DomainError::InvalidId(_))));
        }
        assert_eq!(repository.reads(), 0);
        assert_eq!(repository.writes(), 0);
    }

    #[tokio::test]
    async fn invalid_fields_fail_before_any_io() {
        let repository = Arc::new(RecordingRepository::new());
        repository.seed(1, Decimal::from(100));
        let handler = UpdateProductHandler::new(repository.clone());

        let mut cmd = command(1, 100);
        cmd.stock = -5;
        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
        assert_eq!(repository.reads(), 0);
    }

    #[tokio::test]
    async fn row_vanishing_between_read_and_write_reports_false() {
        let repository = Arc::new(RecordingRepository::vanishing_on_update());
        repository.seed(1, Decimal::from(100));
        let handler = UpdateProductHandler::new(repository.clone());

        assert!(!handler.handle(command(1, 105)).await.unwrap());
    }
}
