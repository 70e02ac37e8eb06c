//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the blog, including API
//! endpoints, business logic, data access, and infrastructure. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, validation, and transactions
//! - **Data Layer** (`data/`) - Database operations generic over SeaORM's `ConnectionTrait`
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Admin token guard and client address extraction
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, admin token)
//! - **Startup** (`startup`) - Tracing, database connection with migrations, and CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks the admin token where required, converts DTOs to params, calls service
//! 3. **Service** validates input, opens a transaction for multi-statement writes
//! 4. **Data** queries database and returns entity models
//! 5. **Service** converts entities into domain models
//! 6. **Controller** converts domain model to DTO and wraps it in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
