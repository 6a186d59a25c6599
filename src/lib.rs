//! # SodaDB
//!
//! A toy in-memory record store served as JSON over HTTP:
//! - Create-or-replace, list, get and delete records by numeric id
//! - Single-writer/multi-reader concurrency model
//! - Server-assigned write timestamps
//! - No persistence: records live as long as the process
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HTTP Server (axum)                       │
//! │                 (one task per connection)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │              Router (method × path × host)                   │
//! │          Handlers: decode, validate, respond                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │  RecordStore  │
//!               │   (RwLock)    │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod http;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SodaError, Result};
pub use config::Config;
pub use record::{NewRecord, Record};
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SodaDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
