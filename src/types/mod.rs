// Passify shared type definitions
// Each submodule defines types used across the application.

pub mod auth;
pub mod entry;
pub mod errors;
pub mod generator;
pub mod profile;
pub mod settings;
