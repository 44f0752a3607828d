//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the dashboard API, plus
//! the static asset service for the single-page application.
//!
//! ## Available Handlers
//!
//! - **Root** (`root`) - Service name and version
//! - **Health Check** (`health_check`) - Liveness and database connectivity
//! - **Status Check** (`status_check`) - Create and list status check records
//! - **SPA** (`spa`) - Static asset serving and the API 404 guard

mod health_check;
mod root;
mod spa;
mod status_check;

pub use health_check::*;
pub use root::*;
pub use spa::*;
pub use status_check::*;
