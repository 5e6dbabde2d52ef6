//! Restaurants Module
//!
//! Restaurants with an embedded postal address.
//!
//! # Architecture
//!
//! - **`types`** - Response models, database rows and validated request bodies
//! - **`db`** - SQLite queries; multi-table writes run in one transaction
//! - **`handlers`** - HTTP handlers for `/restaurants`

pub mod db;
pub mod handlers;
pub mod types;
