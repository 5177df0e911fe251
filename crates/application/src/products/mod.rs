//! Product commands, queries and their handlers.

mod create_product;
mod delete_product;
mod get_product;
mod get_products;
mod update_product;
mod update_product_stock;

pub use create_product::{CreateProduct, CreateProductHandler};
pub use delete_product::{DeleteProduct, DeleteProductHandler};
pub use get_product::{GetProduct, GetProductHandler};
pub use get_products::{GetProducts, GetProductsHandler};
pub use update_product::{UpdateProduct, UpdateProductHandler};
pub use update_product_stock::{UpdateProductStock, UpdateProductStockHandler};

use crate::error::AppError;
use crate::mediator::Mediator;
use crate::repository::ProductRepository;

/// Register every product handler against one shared repository.
pub fn register_handlers<R>(mediator: &mut Mediator, repository: R) -> Result<(), AppError>
where
    R: ProductRepository + Clone + 'static,
{
    mediator.register::<CreateProduct, _>(CreateProductHandler::new(repository.clone()))?;
    mediator.register::<UpdateProduct, _>(UpdateProductHandler::new(repository.clone()))?;
    mediator.register::<UpdateProductStock, _>(UpdateProductStockHandler::new(repository.clone()))?;
    mediator.register::<DeleteProduct, _>(DeleteProductHandler::new(repository.clone()))?;
    mediator.register::<GetProduct, _>(GetProductHandler::new(repository.clone()))?;
    mediator.register::<GetProducts, _>(GetProductsHandler::new(repository))?;
    Ok(())
}
