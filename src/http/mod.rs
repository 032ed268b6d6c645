//! HTTP server module.
//!
//! Serves the router over plain HTTP; TLS is terminated by the platform
//! ingress in front of the container. The server drains connections on
//! SIGTERM/SIGINT so that revision swaps do not drop in-flight requests.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
