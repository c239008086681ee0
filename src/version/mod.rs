//! Version discovery layer
//!
//! This module provides the core functionality for listing repository files,
//! extracting versions from their names and choosing the file that satisfies
//! a requirement.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Backend   │────▶│  ResultSet  │────▶│  Resolver   │
//! │  (search)   │     │ (loc->name) │     │  (select)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │  Backends   │                         │  Extractor  │
//! │(api, crawl) │                         │(loose cmp)  │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`backend`]: Backend trait and backend selection
//! - [`backends`]: Storage API and HTML crawl implementations
//! - [`fetch`]: Page fetching capability used by the crawler
//! - [`loose`]: Loose dotted-numeric versions
//! - [`extract`]: Version extraction from file names
//! - [`resolver`]: Candidate filtering and collision handling
//! - [`error`]: Error types for backends and resolution
//! - [`types`]: Common types like `Candidate` and `ResultSet`

pub mod backend;
pub mod backends;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod loose;
pub mod resolver;
pub mod types;
