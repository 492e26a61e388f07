//! Web server for the bed and breakfast.
//!
//! The server renders every page itself: handlers call services, and pages are
//! Dioxus components rendered to HTML (`render`). Axum routes requests, SeaORM
//! talks to Postgres and `tower-sessions` keeps per-visitor state.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, rendering or redirecting
//! - **Service Layer** (`service/`) - Booking, availability, the calendar, login and mail
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers, CSRF check and the staff guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, mail queue)
//! - **Startup** (`startup`) - Database, sessions, admin bootstrap and the mail listener
//! - **Router** (`router`) - Route table and middleware layers
//! - **Forms** (`form`) - Posted form access and validation
//! - **Rendering** (`render`) - Page registry and per-page default data
//!
//! # Request Flow
//!
//! 1. **Session layer** loads the visitor's session
//! 2. **CSRF middleware** rejects unsafe requests without the session token
//! 3. **Staff guard** admits only signed-in staff to `/admin`
//! 4. **Controller** reads the form or session and calls a service
//! 5. **Service** runs the business logic against the data layer
//! 6. **Controller** renders a page or redirects with a flash message

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod form;
pub mod middleware;
pub mod model;
pub mod render;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
