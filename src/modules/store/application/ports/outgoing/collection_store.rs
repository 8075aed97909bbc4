// src/modules/store/application/ports/outgoing/collection_store.rs

use async_trait::async_trait;
use serde_json::Value;

// Query DTOs.

/// One record from a remote collection: the store-assigned opaque id plus
/// its fields as a plain JSON object.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

/// Single-field equality predicate, the only filter shape the pages need.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub field: String,
    pub equals: Value,
}

impl FieldFilter {
    pub fn equals(field: &str, value: impl Into<Value>) -> Self {
        Self {
            field: field.to_string(),
            equals: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Descending,
        }
    }
}

// Errors.

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Remote store unreachable: {0}")]
    Unavailable(String),

    #[error("Remote store rejected the request: {0}")]
    Rejected(String),

    #[error("Unreadable store payload: {0}")]
    Malformed(String),
}

// Port.

/// Boundary to the hosted document database. Collections are queried
/// wholesale; there is no pagination, retry or timeout policy at this
/// seam; callers decide whether a failure is recovered (public pages)
/// or surfaced (admin).
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Ordered read of a collection, optionally restricted by one
    /// equality predicate.
    async fn fetch(
        &self,
        collection: &str,
        filter: Option<FieldFilter>,
        order: OrderBy,
    ) -> Result<Vec<Document>, StoreError>;

    /// Removes a single document by id.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Creates a document; the store assigns and returns the new id.
    async fn add(&self, collection: &str, fields: Value) -> Result<String, StoreError>;

    /// Number of documents in the collection, visibility ignored.
    async fn count(&self, collection: &str) -> Result<usize, StoreError>;
}

/// Services stay generic over the port; the wiring in `main` hands them
/// shared `Arc<dyn CollectionStore>` handles.
pub type DynStore = std::sync::Arc<dyn CollectionStore>;

#[async_trait]
impl<T: CollectionStore + ?Sized> CollectionStore for std::sync::Arc<T> {
    async fn fetch(
        &self,
        collection: &str,
        filter: Option<FieldFilter>,
        order: OrderBy,
    ) -> Result<Vec<Document>, StoreError> {
        (**self).fetch(collection, filter, order).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        (**self).delete(collection, id).await
    }

    async fn add(&self, collection: &str, fields: Value) -> Result<String, StoreError> {
        (**self).add(collection, fields).await
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        (**self).count(collection).await
    }
}
