//! Tallyhttp - minimal concurrent HTTP/1.x server
//!
//! Serves static files, a stats page and an addition endpoint while keeping
//! shared request/byte counters.

pub mod config;
pub mod handlers;
pub mod http;
pub mod metrics;
pub mod server;
