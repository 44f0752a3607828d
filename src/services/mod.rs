//! # Services
//!
//! This module contains the services the HTTP handlers depend on.
//!
//! ## Available Services
//!
//! - **Store** (`store`) - Persistence of status check records

pub mod store;
