//! Locate versioned Python artifacts in remote repositories
//!
//! ```text
//! requirement ──▶ finder ──▶ backend (storage API | HTML crawl)
//!                   │                     │
//!                   ▼                     ▼
//!               resolver ◀──────────  result set
//! ```

pub mod config;
pub mod finder;
pub mod logging;
pub mod requirement;
pub mod version;
