use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Fixed page size for all listing views
pub const PAGE_SIZE: i64 = 2;

/// Product entity - represents a product stored in MongoDB
///
/// The id is the hex form of a driver-generated ObjectId, stored as `_id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Product name
    #[serde(default)]
    pub name: String,
    /// Product description
    #[serde(default)]
    pub description: String,
    /// Price in currency units
    #[serde(default)]
    pub price: f64,
    /// Current stock quantity
    #[serde(default)]
    pub stock: i64,
    /// Product category
    #[serde(default)]
    pub category: String,
    /// Units sold, used for ranking top sellers
    #[serde(default)]
    pub sold: i64,
}

impl Product {
    /// Create a new product from a CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category: input.category,
            sold: input.sold,
        }
    }
}

/// DTO for creating a new product
///
/// Every field is optional and defaults when absent; unknown fields are
/// ignored. No schema constraints are enforced at this layer.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sold: i64,
}

/// DTO for updating an existing product
///
/// A field is applied when its key is present with a defined value, so
/// `{"stock": 0}` updates stock to 0. Unrecognized keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

impl UpdateProduct {
    /// True when no recognized field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category.is_none()
    }
}

/// Query parameters for listing endpoints
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
pub struct PageQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
}

fn default_page() -> u64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// A resolved pagination window: skip/limit for the store query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: i64,
}

impl PageWindow {
    /// Build the window for a 1-based page number.
    ///
    /// Returns None for page 0, which has no valid window.
    pub fn from_page(page: u64) -> Option<Self> {
        if page == 0 {
            return None;
        }
        Some(Self {
            skip: (PAGE_SIZE as u64) * (page - 1),
            limit: PAGE_SIZE,
        })
    }
}

/// Listing views over the catalog, each with its own predicate and ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CatalogView {
    /// Every product, natural store order
    All,
    /// Products with stock > 0
    Available,
    /// Products with stock == 0
    Unavailable,
    /// Products with stock > 0 and sold > 0, ranked by units sold
    TopSellers,
}

impl CatalogView {
    /// Success message for the view's listing response
    pub fn success_message(&self) -> &'static str {
        match self {
            CatalogView::All => "Products found and retrieved successfully.",
            CatalogView::Available => "Available products found and retrieved successfully.",
            CatalogView::Unavailable => "Unavailable products found and retrieved successfully.",
            CatalogView::TopSellers => "Top selling products found and retrieved successfully.",
        }
    }
}

/// Response envelope carrying only a message
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Response envelope carrying a single product
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub message: String,
    pub product: Product,
}

impl ProductResponse {
    pub fn new(message: impl Into<String>, product: Product) -> Self {
        Self {
            success: true,
            message: message.into(),
            product,
        }
    }
}

/// Response envelope carrying a page of products
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub success: bool,
    pub message: String,
    pub products: Vec<Product>,
}

impl ProductListResponse {
    pub fn new(message: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            success: true,
            message: message.into(),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_first_page_starts_at_zero() {
        let window = PageWindow::from_page(1).unwrap();
        assert_eq!(window.skip, 0);
        assert_eq!(window.limit, PAGE_SIZE);
    }

    #[test]
    fn test_page_window_offsets_by_page_size() {
        let window = PageWindow::from_page(3).unwrap();
        assert_eq!(window.skip, 4);
        assert_eq!(window.limit, 2);
    }

    #[test]
    fn test_page_window_rejects_page_zero() {
        assert!(PageWindow::from_page(0).is_none());
    }

    #[test]
    fn test_page_query_defaults_to_first_page() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_create_product_defaults_all_fields() {
        let input: CreateProduct = serde_json::from_str("{}").unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.price, 0.0);
        assert_eq!(input.stock, 0);
        assert_eq!(input.sold, 0);
    }

    #[test]
    fn test_create_product_ignores_unknown_fields() {
        let input: CreateProduct =
            serde_json::from_str(r#"{"name": "Keyboard", "rating": 5}"#).unwrap();
        assert_eq!(input.name, "Keyboard");
    }

    #[test]
    fn test_update_product_zero_stock_is_present() {
        let input: UpdateProduct = serde_json::from_str(r#"{"stock": 0}"#).unwrap();
        assert_eq!(input.stock, Some(0));
        assert!(!input.is_empty());
    }

    #[test]
    fn test_update_product_empty_body() {
        let input: UpdateProduct = serde_json::from_str("{}").unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn test_product_new_generates_hex_object_id() {
        let product = Product::new(CreateProduct {
            name: "Mouse".into(),
            ..Default::default()
        });
        assert!(ObjectId::parse_str(&product.id).is_ok());
        assert_eq!(product.name, "Mouse");
    }

    #[test]
    fn test_product_serializes_id_as_underscore_id() {
        let product = Product::new(CreateProduct::default());
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
    }
}
