//! HTTP server module.
//!
//! An axum-based REST API over the repository layer. Handlers parse the
//! request, perform exactly one storage call through the service layer,
//! and serialize a JSON response.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
