//! HTTP handlers for the Catalog API

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestIdResponse, InternalServerErrorResponse, NotFoundResponse},
    ObjectIdPath, ValidatedJson, ValidatedQuery,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    CatalogView, CreateProduct, MessageResponse, PageQuery, Product, ProductListResponse,
    ProductResponse, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        list_available,
        list_unavailable,
        list_top_sellers,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct, PageQuery,
            MessageResponse, ProductResponse, ProductListResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/available", get(list_available))
        .route("/unavailable", get(list_unavailable))
        .route("/top-sellers", get(list_top_sellers))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = MessageResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Product successfully created.")),
    ))
}

/// List all products, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductListResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> CatalogResult<Json<ProductListResponse>> {
    list_view(&service, CatalogView::All, query.page).await
}

/// List products that are in stock
#[utoipa::path(
    get,
    path = "/available",
    tag = "Products",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of available products", body = ProductListResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_available<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> CatalogResult<Json<ProductListResponse>> {
    list_view(&service, CatalogView::Available, query.page).await
}

/// List products that are out of stock
#[utoipa::path(
    get,
    path = "/unavailable",
    tag = "Products",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of unavailable products", body = ProductListResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_unavailable<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> CatalogResult<Json<ProductListResponse>> {
    list_view(&service, CatalogView::Unavailable, query.page).await
}

/// List in-stock products ranked by units sold
#[utoipa::path(
    get,
    path = "/top-sellers",
    tag = "Products",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of top selling products", body = ProductListResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_top_sellers<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> CatalogResult<Json<ProductListResponse>> {
    list_view(&service, CatalogView::TopSellers, query.page).await
}

async fn list_view<R: ProductRepository>(
    service: &ProductService<R>,
    view: CatalogView,
    page: u64,
) -> CatalogResult<Json<ProductListResponse>> {
    let products = service.list_page(view, page).await?;
    Ok(Json(ProductListResponse::new(
        view.success_message(),
        products,
    )))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> CatalogResult<Json<ProductResponse>> {
    let product = service.get_product(&id).await?;
    Ok(Json(ProductResponse::new(
        "Product successfully found.",
        product,
    )))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (hex ObjectId)")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> CatalogResult<Json<ProductResponse>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(ProductResponse::new(
        "Product updated successfully.",
        product,
    )))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> CatalogResult<Json<MessageResponse>> {
    service.delete_product(&id).await?;
    Ok(Json(MessageResponse::new("Product successfully deleted.")))
}
