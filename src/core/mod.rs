//! Core expansion modules
//!
//! The pipeline is: [`checker`] validates the input's tag structure,
//! [`engine`] rewrites innermost-out using pairs found by [`scanner`], and
//! [`validator`] guards the tag set once at formatter construction.

pub mod checker;
pub mod engine;
pub mod scanner;
pub mod validator;

pub use engine::{Formatter, MAX_ITERATIONS};
