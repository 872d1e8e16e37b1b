//! # Axum Helpers
//!
//! A collection of utilities and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Uniform `{ success, message }` error envelopes
//! - **[`extractors`]**: Custom extractors (ObjectId path, validated JSON and query)
//! - **[`server`]**: Server setup, OpenAPI docs, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     #[derive(OpenApi)]
//!     #[openapi(paths())]
//!     struct ApiDoc;
//!
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes)?;
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{ApiError, ErrorResponse};

// Re-export extractors
pub use extractors::{ObjectIdPath, ValidatedJson, ValidatedQuery};

// Re-export server types
pub use server::{ShutdownCoordinator, create_production_app, create_router};
