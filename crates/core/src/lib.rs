//! OrderDesk Core - Shared types library.
//!
//! This crate provides common types used across OrderDesk components:
//! - `admin` - Internal order-management panel
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Order documents, status values, and status filtering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
