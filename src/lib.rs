//! Upcheck: a minimal HTTP status endpoint server.
//!
//! Exposes a single `GET /` route that reports the application is running
//! and logs the time each request was received. Everything else is wiring:
//! a router, a request-ID tracing layer, and a listener bound at startup.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod server;
