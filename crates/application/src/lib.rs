//! Application layer: requests, handlers, and the in-process mediator.
//!
//! HTTP (or any other caller) builds a command/query value and hands it to the
//! [`Mediator`], which routes it to the single handler registered for its type.
//! Handlers depend only on the [`ProductRepository`] contract; storage lives in
//! `catalog-infra`.

pub mod error;
pub mod handler;
pub mod mediator;
pub mod products;
pub mod repository;
pub mod request;

#[cfg(test)]
mod test_support;

pub use error::{AppError, AppResult};
pub use handler::RequestHandler;
pub use mediator::Mediator;
pub use repository::{ProductRepository, RepositoryError, RepositoryResult};
pub use request::Request;
