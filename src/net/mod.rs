//! HTTP calls to the host platform.

pub mod api;
