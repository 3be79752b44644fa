//! Core types for OrderDesk.
//!
//! This module provides typed wrappers for the order documents held in the
//! remote content store.

pub mod order;
pub mod status;

pub use order::{CartItem, Order};
pub use status::{OrderStatus, StatusFilter};
