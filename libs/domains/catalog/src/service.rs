//! Catalog Service - pagination policy and outcome classification

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CatalogView, CreateProduct, PageWindow, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Catalog service providing the query and response policy layer
///
/// The service translates list-type requests into paginated store queries
/// and classifies outcomes: an empty window is a not-found condition, a
/// missing id is distinct from a malformed one (rejected upstream by the
/// path extractor), and store failures propagate unmasked.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product> {
        self.repository.create(input).await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound("Product not found with the given ID.".into()))
    }

    /// List one page of a catalog view
    ///
    /// Pages are 1-based and `PAGE_SIZE` records wide. An empty window is
    /// reported as `EmptyPage` so callers can answer with a not-found
    /// envelope.
    #[instrument(skip(self), fields(view = %view))]
    pub async fn list_page(&self, view: CatalogView, page: u64) -> CatalogResult<Vec<Product>> {
        let window = PageWindow::from_page(page).ok_or(CatalogError::InvalidPage(page))?;

        let products = self.repository.list(view, window).await?;
        if products.is_empty() {
            return Err(CatalogError::EmptyPage);
        }
        Ok(products)
    }

    /// Update a product, returning the post-update record
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> CatalogResult<Product> {
        self.repository
            .update(id, input)
            .await?
            .ok_or_else(|| CatalogError::NotFound("Product not found for update.".into()))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> CatalogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::NotFound(
                "Product not found for deletion.".into(),
            ));
        }
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PAGE_SIZE;
    use crate::repository::MockProductRepository;

    fn product(id: &str, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: "Widget".to_string(),
            description: String::new(),
            price: 9.99,
            stock,
            category: "general".to_string(),
            sold: 0,
        }
    }

    #[tokio::test]
    async fn test_create_product_returns_persisted_record() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(repo);
        let created = service
            .create_product(CreateProduct {
                name: "Widget".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Widget");
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .withf(|id| id == "65f000000000000000000001")
            .returning(|id| Ok(Some(product(id, 3))));

        let service = ProductService::new(repo);
        let found = service.get_product("65f000000000000000000001").await.unwrap();
        assert_eq!(found.id, "65f000000000000000000001");
    }

    #[tokio::test]
    async fn test_get_product_absent_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service
            .get_product("65f000000000000000000001")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_page_builds_window_from_page() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .withf(|view, window| {
                *view == CatalogView::All && window.skip == 4 && window.limit == PAGE_SIZE
            })
            .returning(|_, _| Ok(vec![product("65f000000000000000000001", 3)]));

        let service = ProductService::new(repo);
        let products = service.list_page(CatalogView::All, 3).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_page_empty_window_is_empty_page() {
        let mut repo = MockProductRepository::new();
        repo.expect_list().returning(|_, _| Ok(vec![]));

        let service = ProductService::new(repo);
        let err = service
            .list_page(CatalogView::Available, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyPage));
    }

    #[tokio::test]
    async fn test_list_page_rejects_page_zero_before_querying() {
        let mut repo = MockProductRepository::new();
        repo.expect_list().never();

        let service = ProductService::new(repo);
        let err = service.list_page(CatalogView::All, 0).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPage(0)));
    }

    #[tokio::test]
    async fn test_update_product_passes_zero_stock_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .withf(|_, input| input.stock == Some(0))
            .returning(|id, _| Ok(Some(product(id, 0))));

        let service = ProductService::new(repo);
        let updated = service
            .update_product(
                "65f000000000000000000001",
                UpdateProduct {
                    stock: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.stock, 0);
    }

    #[tokio::test]
    async fn test_update_product_absent_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductService::new(repo);
        let err = service
            .update_product("65f000000000000000000001", UpdateProduct::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_product_absent_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = ProductService::new(repo);
        let err = service
            .delete_product("65f000000000000000000001")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_database_error_propagates() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(CatalogError::Database("connection reset".into())));

        let service = ProductService::new(repo);
        let err = service
            .get_product("65f000000000000000000001")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Database(_)));
    }
}
