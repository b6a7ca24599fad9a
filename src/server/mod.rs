//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: HTTP endpoints,
//! authentication, dispatch of domain work, and data access. The backend uses
//! Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and status mapping
//! - **Service Layer** (`service/`) - Sports operations, bounded task dispatch, credentials
//! - **Data Layer** (`data/`) - Repository contract and its database implementation
//! - **Model Layer** (`model/`) - Lookup results and entity conversions
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and session access
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Initialization of database, sessions, and services
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** authenticates the request through the session or Basic credentials
//! 3. **Controller** validates parameters and body, then dispatches the domain call
//! 4. **Service** runs the call on its own task, bounded by the dispatcher limits
//! 5. **Data** reads or mutates the sport document
//! 6. **Controller** turns the outcome into the route's status code and body

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
pub mod util;

#[cfg(test)]
mod test;
