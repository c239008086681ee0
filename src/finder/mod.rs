//! Finder layer
//!
//! Wires the version discovery layer into the operations callers use.
//!
//! # Modules
//!
//! - [`driver`]: `ArtifactFinder`, the single `resolve` entry point
//! - [`local`]: Pre-check for a matching source module already on disk
//! - [`download`]: Fetches the winning candidate into a directory

pub mod download;
pub mod driver;
pub mod local;

pub use download::Downloader;
pub use driver::{ArtifactFinder, Resolution};
pub use local::find_local;
