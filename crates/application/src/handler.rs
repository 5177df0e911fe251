use async_trait::async_trait;

use crate::error::AppError;
use crate::request::Request;

/// Handles exactly one request type.
///
/// Handlers validate eagerly (before touching the repository) and perform at most
/// one read followed by at most one write per call.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> Result<R::Response, AppError>;
}
