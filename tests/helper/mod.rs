//! Shared utilities for integration tests

#![allow(dead_code)]

mod backend;
mod repository;

pub use backend::*;
pub use repository::*;
