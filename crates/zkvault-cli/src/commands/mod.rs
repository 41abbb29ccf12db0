//! Command handlers.

pub mod misc;
pub mod vault;
