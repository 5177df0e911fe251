//! In-process request dispatch.
//!
//! The mediator maps a request's `TypeId` to a type-erased handler closure. It is
//! populated once at startup and read-only afterwards, so it can be shared
//! behind an `Arc` without locking.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::AppError;
use crate::handler::RequestHandler;
use crate::request::Request;

type BoxedResponse = Box<dyn Any + Send>;

type HandlerFuture = Pin<Box<dyn Future<Output = Result<BoxedResponse, AppError>> + Send>>;

type ErasedHandler = Arc<dyn Fn(Box<dyn Any + Send>) -> HandlerFuture + Send + Sync>;

#[derive(Default)]
pub struct Mediator {
    handlers: HashMap<TypeId, ErasedHandler>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for request type `R`.
    ///
    /// Each request type has exactly one handler; registering a second one fails.
    pub fn register<R, H>(&mut self, handler: H) -> Result<(), AppError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let key = TypeId::of::<R>();
        if self.handlers.contains_key(&key) {
            return Err(AppError::AlreadyRegistered(R::NAME));
        }

        let handler = Arc::new(handler);
        let erased: ErasedHandler = Arc::new(move |boxed_request| {
            let handler = handler.clone();
            Box::pin(async move {
                let request = boxed_request
                    .downcast::<R>()
                    .map_err(|_| AppError::TypeMismatch(R::NAME))?;
                let response = handler.handle(*request).await?;
                Ok(Box::new(response) as BoxedResponse)
            })
        });

        self.handlers.insert(key, erased);
        tracing::debug!(request = R::NAME, "registered request handler");
        Ok(())
    }

    /// Dispatch `request` to its handler and return the typed response.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, AppError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .cloned()
            .ok_or(AppError::HandlerNotFound(R::NAME))?;

        let response = handler(Box::new(request)).await?;
        response
            .downcast::<R::Response>()
            .map(|boxed| *boxed)
            .map_err(|_| AppError::TypeMismatch(R::NAME))
    }
}

impl core::fmt::Debug for Mediator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mediator")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
