//! # Utility Modules
//!
//! This module contains constants and process-level helpers used throughout the
//! dashboard API.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Application-wide configuration constants
//! - **Shutdown** (`shutdown`) - Signal handling for graceful shutdown
//! - **Telemetry** (`telemetry`) - Tracing subscriber initialisation

pub mod constant;
pub mod shutdown;
pub mod telemetry;
