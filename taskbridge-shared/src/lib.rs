//! # TaskBridge Shared Library
//!
//! This crate contains the types and data-access functions shared between
//! the TaskBridge API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: Password hashing, JWT tokens, and auth context
//! - `db`: Connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the TaskBridge shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
