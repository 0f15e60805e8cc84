use std::{fmt, path::PathBuf};

use clap::Parser;
use serde::Serialize;

/// Conventional commit type vocabulary produced by the classifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
   Fix,
   Feat,
   Refactor,
   Docs,
   Style,
   Chore,
   Test,
}

impl CommitType {
   pub const fn as_str(self) -> &'static str {
      match self {
         Self::Fix => "fix",
         Self::Feat => "feat",
         Self::Refactor => "refactor",
         Self::Docs => "docs",
         Self::Style => "style",
         Self::Chore => "chore",
         Self::Test => "test",
      }
   }
}

impl fmt::Display for CommitType {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

/// How many parents a commit has, as an explicit branch.
///
/// `Merge` carries the parent count so callers can report it; the diff
/// retriever always uses the first parent for merges.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Parentage {
   Root,
   Single,
   Merge { parents: usize },
}

/// Author, date and full message body of a commit.
///
/// Fetched fresh from the backend per request, never cached. The message is
/// lossy-decoded, so it is always valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMetadata {
   pub author:  String,
   pub date:    String,
   pub message: String,
}

/// A classified summary line before formatting.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedMessage {
   pub commit_type: CommitType,
   pub summary:     String,
}

impl ClassifiedMessage {
   /// Render as the final `type: summary` line.
   pub fn format(&self) -> String {
      format!("{}: {}", self.commit_type, self.summary)
   }
}

impl fmt::Display for ClassifiedMessage {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}: {}", self.commit_type, self.summary)
   }
}

// CLI Args
#[derive(Parser, Debug)]
#[command(author, version, about = "Rewrite a commit message into a conventional summary line", long_about = None)]
pub struct Args {
   /// Commit hash/ref to operate on
   pub commit: String,

   /// Directory to run git commands in
   #[arg(long, default_value = ".")]
   pub dir: String,

   /// Print the commit's diff to stdout instead of rewriting
   #[arg(long)]
   pub show_diff: bool,

   /// Take the original message from the commit itself instead of stdin
   #[arg(long)]
   pub from_ref: bool,

   /// Run the pluggable generation hook over (message, diff) instead of the
   /// rule cascade
   #[arg(long)]
   pub generate: bool,

   /// Path to config file (default: ~/.config/conv-git/config.toml)
   #[arg(long)]
   pub config: Option<PathBuf>,
}

impl Default for Args {
   fn default() -> Self {
      Self {
         commit:    String::new(),
         dir:       ".".to_string(),
         show_diff: false,
         from_ref:  false,
         generate:  false,
         config:    None,
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_commit_type_as_str() {
      assert_eq!(CommitType::Fix.as_str(), "fix");
      assert_eq!(CommitType::Feat.as_str(), "feat");
      assert_eq!(CommitType::Refactor.as_str(), "refactor");
      assert_eq!(CommitType::Docs.as_str(), "docs");
      assert_eq!(CommitType::Style.as_str(), "style");
      assert_eq!(CommitType::Chore.as_str(), "chore");
      assert_eq!(CommitType::Test.as_str(), "test");
   }

   #[test]
   fn test_commit_type_display() {
      assert_eq!(CommitType::Feat.to_string(), "feat");
   }

   #[test]
   fn test_commit_type_serializes_lowercase() {
      let json = serde_json::to_string(&CommitType::Refactor).unwrap();
      assert_eq!(json, "\"refactor\"");
   }

   #[test]
   fn test_classified_message_format() {
      let msg = ClassifiedMessage {
         commit_type: CommitType::Feat,
         summary:     "Add login button".to_string(),
      };
      assert_eq!(msg.format(), "feat: Add login button");
      assert_eq!(msg.to_string(), msg.format());
   }
}
