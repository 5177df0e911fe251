/// A command or query routed through the [`Mediator`](crate::Mediator).
///
/// Requests are plain owned values: they cross task boundaries and are boxed as
/// `dyn Any` while in flight, hence the `Send + 'static` bounds.
pub trait Request: Send + 'static {
    /// What the handler returns on success.
    type Response: Send + 'static;

    /// Stable name used in logs and dispatch errors.
    const NAME: &'static str;
}
