//! Header state models.
//!
//! DESIGN
//! ======
//! Each concern (panel selection, derived visibility, session snapshot,
//! layout class) lives in its own small model so the pure logic can be
//! tested without a reactive runtime.

pub mod layout;
pub mod panel;
pub mod session;
pub mod visibility;
