//! Error type shared by configuration, routing, registry and session fetch.
//!
//! ERROR HANDLING
//! ==============
//! A missing user or session location is a redirect, not an error. Only
//! host-facing contract violations end up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid shell config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("base path must start with '/': {0:?}")]
    InvalidBasePath(String),
    #[error("unknown layout type: {0:?}")]
    UnknownLayout(String),
    #[error("extension {id:?} already registered in slot {slot:?}")]
    DuplicateExtension { slot: String, id: String },
    #[error("session request failed: {0}")]
    Http(String),
    #[error("not available outside the browser")]
    Unavailable,
}
