//! Core engine for the `rmqctl` management CLI.
//!
//! This crate holds everything with actual branching logic: turning
//! command-line terms into a concrete list of target queues
//! ([`select`]) and driving their deletion one by one against a
//! remote management endpoint ([`bulk`]). The HTTP client and the
//! CLI surface live in `rmqctl-http`; the only capability this crate
//! requires from them is the [`bulk::QueueDeleter`] trait.

pub mod bulk;
pub mod error;
pub mod select;
pub mod telemetry;

pub use error::{ApiError, SelectionError, TransportError};

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};

// =============================================================================
// CORE DATA STRUCTURES
// =============================================================================

/// Snapshot of one queue as reported by the management API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QueueInfo {
    pub name: String,
    pub vhost: String,
    pub durable: bool,
    pub auto_delete: bool,
}

/// Snapshot of one user as reported by the management API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserInfo {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QueueInfo {
    pub fn new(name: &str, vhost: &str, durable: bool, auto_delete: bool) -> Self {
        Self {
            name: name.to_string(),
            vhost: vhost.to_string(),
            durable,
            auto_delete,
        }
    }
}
