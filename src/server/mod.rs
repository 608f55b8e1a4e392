//! Soldiers service backend.
//!
//! The backend uses Axum as the web framework and SeaORM for store access. It follows a
//! layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Data Layer** (`data/`) - Store connection lifecycle, queries, and error classification
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state holding the data loader
//! - **Startup** (`startup`) - Tracing, store connection, and shutdown signal handling
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts the DTO to params and makes one data-layer call
//! 3. **Data** runs a single statement against the store and converts entities to domain models
//! 4. **Controller** converts the domain model to a DTO, or maps the outcome to an error status

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
pub mod state;
