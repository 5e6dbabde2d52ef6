//! Integration tests
//!
//! End-to-end tests through the HTTP router

mod api;
