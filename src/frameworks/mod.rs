// Frameworks: configuration, tracing, and the HTTP server entry point.

pub mod config;
pub mod server;
