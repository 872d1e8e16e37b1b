//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
    Collection, Database,
};
use tracing::instrument;

use crate::error::CatalogResult;
use crate::models::{CatalogView, CreateProduct, PageWindow, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the `products` collection
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build the filter document for a listing view
    fn view_filter(view: CatalogView) -> Document {
        match view {
            CatalogView::All => doc! {},
            CatalogView::Available => doc! { "stock": { "$gt": 0 } },
            CatalogView::Unavailable => doc! { "stock": { "$eq": 0 } },
            CatalogView::TopSellers => doc! {
                "stock": { "$gt": 0 },
                "sold": { "$gt": 0 },
            },
        }
    }

    /// Build the sort document for a listing view, if the view orders results
    fn view_sort(view: CatalogView) -> Option<Document> {
        match view {
            CatalogView::TopSellers => Some(doc! { "sold": -1 }),
            _ => None,
        }
    }

    /// Build a `$set` document from the present fields of an update
    fn update_document(input: &UpdateProduct) -> Document {
        let mut set = doc! {};

        if let Some(ref name) = input.name {
            set.insert("name", name);
        }
        if let Some(ref description) = input.description {
            set.insert("description", description);
        }
        if let Some(price) = input.price {
            set.insert("price", price);
        }
        if let Some(stock) = input.stock {
            set.insert("stock", stock);
        }
        if let Some(ref category) = input.category {
            set.insert("category", category);
        }

        set
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> CatalogResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Product>> {
        let filter = doc! { "_id": id };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, view: CatalogView, window: PageWindow) -> CatalogResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let filter = Self::view_filter(view);

        let options = match Self::view_sort(view) {
            Some(sort) => FindOptions::builder()
                .limit(window.limit)
                .skip(window.skip)
                .sort(sort)
                .build(),
            None => FindOptions::builder()
                .limit(window.limit)
                .skip(window.skip)
                .build(),
        };

        let cursor = self.collection.find(filter).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: UpdateProduct) -> CatalogResult<Option<Product>> {
        let filter = doc! { "_id": id };

        // An update with no present fields degenerates to a read
        if input.is_empty() {
            let product = self.collection.find_one(filter).await?;
            return Ok(product);
        }

        let update = doc! { "$set": Self::update_document(&input) };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(filter, update)
            .with_options(options)
            .await?;

        if updated.is_some() {
            tracing::info!(product_id = %id, "Product updated successfully");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> CatalogResult<bool> {
        let filter = doc! { "_id": id };
        let deleted = self.collection.find_one_and_delete(filter).await?;

        if deleted.is_some() {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(deleted.is_some())
    }
}
