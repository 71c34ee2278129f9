//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and store access so route handlers can
//! stay focused on protocol translation.

pub mod furniture;
