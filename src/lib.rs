//! Colorcop - perceptual color clustering for design-system audits
//!
//! HTTP and CLI boundary around the `color-similarity` engine.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
