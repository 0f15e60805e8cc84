//! Conventional commit message rewrite engine
//!
//! This library classifies commits from their original message and changed
//! files, and rewrites the message into a bounded `type: summary` line. Diff
//! and metadata retrieval shell out to git; the history-rewrite transaction
//! itself belongs to an external driver that calls back in per commit.
pub mod classify;
pub mod config;
pub mod error;
pub mod generate;
pub mod git;
pub mod rewrite;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use config::RewriteConfig;
pub use error::{Result, RewriteError};
pub use types::{ClassifiedMessage, CommitMetadata, CommitType, Parentage};
