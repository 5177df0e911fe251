use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_application::products::{CreateProduct, UpdateProduct, UpdateProductStock};
use catalog_products::Product;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(body: CreateProductRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            price: body.price,
            stock: body.stock,
        }
    }
}

/// Full replacement of a product. `id` must match the path.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(body: UpdateProductRequest) -> Self {
        Self {
            id: body.id,
            name: body.name,
            description: body.description,
            price: body.price,
            stock: body.stock,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub stock: i32,
}

impl UpdateStockRequest {
    pub fn into_command(self, id: i64) -> UpdateProductStock {
        UpdateProductStock { id, stock: self.stock }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl From<&Product> for ProductResponse {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id_typed().get(),
            name: p.name().to_string(),
            description: p.description().to_string(),
            price: p.price(),
            stock: p.stock(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<ProductResponse>,
}

impl From<&[Product]> for ProductListResponse {
    fn from(products: &[Product]) -> Self {
        Self {
            items: products.iter().map(ProductResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}
