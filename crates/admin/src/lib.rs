//! OrderDesk admin library.
//!
//! Server-rendered administration panel for the order store: operator
//! login, an order dashboard with status filtering, order detail pages,
//! and status updates written back to the store.
//!
//! Exposed as a library so the router can be exercised by integration
//! tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod sanity;
pub mod state;
