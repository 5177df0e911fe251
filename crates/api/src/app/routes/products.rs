use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use catalog_application::products::{
    CreateProduct, DeleteProduct, GetProduct, GetProducts, UpdateProduct,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
        .route("/:id/stock", put(update_product_stock))
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.send(GetProducts).await {
        Ok(products) => Json(dto::ProductListResponse::from(products.as_slice())).into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.send(GetProduct { id }).await {
        Ok(Some(product)) => Json(dto::ProductResponse::from(&product)).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    match services.send(CreateProduct::from(body)).await {
        Ok(id) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/products/{id}"))],
            Json(dto::CreatedResponse { id: id.get() }),
        )
            .into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    if body.id != id {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "id_mismatch",
            format!("path id {id} does not match body id {}", body.id),
        );
    }

    // `false` covers both a missing product and a rejected price change.
    match services.send(UpdateProduct::from(body)).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::not_found(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn update_product_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateStockRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    match services.send(body.into_command(id)).await {
        Ok(Some(product)) => Json(dto::ProductResponse::from(&product)).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.send(DeleteProduct { id }).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::not_found(),
        Err(e) => errors::app_error_to_response(e),
    }
}
