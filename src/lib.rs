//! # Autos API
//!
//! A small REST service for managing a catalog of cars ("autos").
//!
//! The crate exposes five CRUD endpoints over a single `autos` table,
//! backed by a swappable repository: an in-memory store for tests and
//! local development, or PostgreSQL (Diesel) for production.
//!
//! ## Architecture
//!
//! The crate is organized into three logical layers:
//!
//! - [`api`]: domain types shared across layers
//! - [`db`]: repository trait, storage backends, and the service layer
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! Handlers never touch a storage backend directly; they go through the
//! service layer, which works with any [`db::repository::AutoRepository`]
//! implementation.

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
