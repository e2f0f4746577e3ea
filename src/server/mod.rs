//! HTTP backend for the car dealership.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, uniqueness checks, relationship upkeep
//! - **Data Layer** (`data/`) - SeaORM repositories, one per table
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database connection, middleware and app assembly
//! - **Router** (`router`) - Routes and the OpenAPI document
//! - **Validation** (`validation`) - Business rules checked before persisting
//! - **Util** (`util/`) - Request extractors and path parsing
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** parses the body or path, converts DTOs to params, calls a service
//! 3. **Service** validates, opens a transaction, and orchestrates repositories
//! 4. **Data** runs the queries inside that transaction
//! 5. **Controller** converts the returned domain model to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
