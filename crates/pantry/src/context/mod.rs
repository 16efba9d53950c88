//! Request-scoped context.
//!
//! Provides the `StoreConnection` extractor that opens one store connection
//! per request, complementing the application-scoped `AppState`.

mod extractor;

pub use extractor::StoreConnection;
