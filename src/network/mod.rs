//! Network Module
//!
//! HTTP listener and host resolution.
//!
//! ## Architecture
//! - tokio multi-threaded runtime, one task per connection
//! - Requests routed through [`crate::http::router`]
//! - Listens on every address; routes only match the resolved host

mod interface;
mod server;

pub use interface::interface_ipv4;
pub use server::Server;
