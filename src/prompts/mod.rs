//! Prompt module for LLM review passes.
//!
//! This module provides placeholder substitution and the two prompt
//! profiles built from a record set: the title filter and the abstract review.

pub mod review;
pub mod template;

pub use review::*;
pub use template::*;
