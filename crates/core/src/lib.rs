//! SimpleMarket Core - Shared domain library.
//!
//! This crate provides the types and pure logic used by the storefront:
//! - `types` - Newtype IDs, prices, and the product record
//! - `catalog` - The compiled-in product fixture, category filtering, lookup
//! - `cart` - The shopping cart and the notices its operations emit
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! sessions, no HTTP. Every cart operation is a total function over the
//! current cart value, which keeps it trivially testable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartItem, CartNotice, NoticeLevel};
pub use catalog::{ALL_CATEGORIES, Catalog};
pub use types::*;
