//! # Query Gateway
//!
//! Translates HTTP requests into store calls and store results into pages,
//! fragments, JSON or redirects.
//!
//! # Endpoints
//!
//! - `/` and `/searchBy*` - Server-rendered pages
//! - `/api/*` - Author detail, create/update forms, edit fragment, deletes
//! - `/health` - Store round-trip check

pub mod api_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod page_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, GatewayError, PageError, StatusError, StatusResponse};
pub use server::HttpServer;
pub use state::GatewayState;
