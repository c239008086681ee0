//! Backend implementations for enumerating repository files

pub mod crawl;
pub mod links;
pub mod structured;

pub use crawl::CrawlBackend;
pub use links::{Link, LinkExtractor, LinkKind};
pub use structured::StructuredBackend;
