// Public modules
pub mod changes;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod resolve;
pub mod rewrite;
pub mod summary;

// Internal modules - not part of public API
pub(crate) mod http;

// Re-export common types for convenience
pub use changes::{ChangeEntry, SelectorIndex};
pub use config::Config;
pub use error::{Error, ErrorCode, Result};
pub use summary::{FileDiffRecord, Summary, SUMMARY_FILE};
