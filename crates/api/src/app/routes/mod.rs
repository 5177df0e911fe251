use axum::Router;

pub mod products;
pub mod system;

/// Router for every service-backed endpoint.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
