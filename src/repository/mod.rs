use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::domain::product::Product;

pub mod product;

#[cfg(test)]
pub mod mock;

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures raised by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

#[derive(Clone, Default)]
/// In-memory repository keyed by product identifier.
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<i64, Product>>>, // cloning shares the same map
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    /// Insert the product or replace the record stored under its identifier.
    fn upsert_product(&self, product: &Product) -> RepositoryResult<()>;
}
