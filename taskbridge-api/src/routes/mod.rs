/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `root`: Root welcome endpoint
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (register, login, refresh)
/// - `users`: User lookup endpoints
/// - `projects`: Project endpoints
/// - `tasks`: Task endpoints
/// - `payments`: Payment endpoints
/// - `admin`: Admin endpoints (user listing, platform stats)

pub mod admin;
pub mod auth;
pub mod health;
pub mod payments;
pub mod projects;
pub mod root;
pub mod tasks;
pub mod users;
