//! Preview server for the Cardaminal docs site.
//!
//! Renders pages per request from one shared, immutable site configuration.

pub mod server;

pub use server::{DocsServer, ServerConfig, ServerError};
