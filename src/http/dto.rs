//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::api::Auto;

/// Request body for creating or replacing an auto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoPayload {
    /// Brand
    pub marca: String,
    /// Model
    pub modelo: String,
}

/// An auto as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoDto {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
}

impl From<Auto> for AutoDto {
    fn from(auto: Auto) -> Self {
        Self {
            id: auto.id.value(),
            marca: auto.marca,
            modelo: auto.modelo,
        }
    }
}

/// Fixed-message response body, also used for error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
