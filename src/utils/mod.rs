//! Utility modules

pub mod diagnostics;
pub mod error;
