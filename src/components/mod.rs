//! Header UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `navigation_header` owns the guard and the panel selector; the pieces in
//! `header_panels` read both from Leptos context.

pub mod header_panels;
pub mod navigation_header;
pub mod offline_banner;
