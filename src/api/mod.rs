//! Remote API access
//!
//! [`ApiClient`] wraps one `reqwest::Client` configured from [`ApiConfig`]
//! and knows how to build collection URLs. [`CollectionApi`] is the seam
//! between the reactive resources and the wire: [`RestCollection`] is the
//! production implementation, and tests substitute a mock.

pub mod rest;

pub use rest::{ApiClient, RestCollection};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Record, RecordId};

/// CRUD operations against one remote collection endpoint.
///
/// Every method is a single attempt with no retry or backoff; callers decide
/// what a failure means for their local state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionApi<T: Record>: Send + Sync {
    /// Read the full collection, in server order.
    async fn list(&self) -> Result<Vec<T>>;

    /// Read a single record by id.
    async fn get(&self, id: RecordId) -> Result<T>;

    /// Create a record from a draft; returns the record with its
    /// server-assigned id.
    async fn create(&self, draft: &T::Draft) -> Result<T>;

    /// Update an existing record from a draft.
    async fn update(&self, id: RecordId, draft: &T::Draft) -> Result<T>;

    /// Delete a record by id.
    async fn delete(&self, id: RecordId) -> Result<()>;
}
