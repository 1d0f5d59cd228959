//! Passify — a desktop password-manager client for a Django REST backend.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod forms;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
