//! Task module
//!
//! This module contains task-related types and input parsing.

mod model;

pub use model::*;
