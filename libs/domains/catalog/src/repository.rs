use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{CatalogView, CreateProduct, PageWindow, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Defines the data access interface for the catalog. Implementations can
/// use different storage backends; ids are hex ObjectId strings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return the persisted record
    async fn create(&self, input: CreateProduct) -> CatalogResult<Product>;

    /// Get a product by id; None when no record matches
    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Product>>;

    /// List products for a view within the given page window
    async fn list(&self, view: CatalogView, window: PageWindow) -> CatalogResult<Vec<Product>>;

    /// Atomically apply the present fields of the update and return the
    /// post-update record; None when no record matches
    async fn update(&self, id: &str, input: UpdateProduct) -> CatalogResult<Option<Product>>;

    /// Delete a product by id; false when no record matched
    async fn delete(&self, id: &str) -> CatalogResult<bool>;
}
