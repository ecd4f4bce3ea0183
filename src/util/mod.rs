//! Browser-environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps web-sys glue out of components; every helper no-ops off `hydrate`.

pub mod connectivity;
pub mod persistence;
