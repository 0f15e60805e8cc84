//! Message rewriting.
//!
//! Takes the original commit message and the changed-file list, classifies
//! the commit, and produces a single `type: summary` line bounded by the
//! configured character limit. The caller is responsible for substituting the
//! result back into the commit record.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::{
   classify::classify_type,
   config::RewriteConfig,
   types::ClassifiedMessage,
};

const ELLIPSIS: &str = "...";

static PREFIX_RE: OnceLock<Regex> = OnceLock::new();

// Matches an existing conventional prefix: word, optional parenthesized
// scope, colon, optional space, anchored at the start of the line.
fn prefix_re() -> &'static Regex {
   PREFIX_RE.get_or_init(|| Regex::new(r"^\w+(\(.+\))?:\s*").expect("valid pattern"))
}

/// Remove a leading `type(scope):` prefix from a summary line, if present.
pub fn strip_conventional_prefix(first_line: &str) -> &str {
   match prefix_re().find(first_line) {
      Some(m) => &first_line[m.end()..],
      None => first_line,
   }
}

/// Classify a commit and build the new summary, untruncated.
///
/// The classification runs over the full original message, not the stripped
/// first line, so body keywords still count.
pub fn classify_message(
   message: &str,
   files: &[String],
   config: &RewriteConfig,
) -> ClassifiedMessage {
   let first_line = message.lines().next().unwrap_or("").trim();
   let summary = strip_conventional_prefix(first_line).to_string();

   ClassifiedMessage { commit_type: classify_type(message, files, config), summary }
}

/// Rewrite a commit message into a bounded `type: summary` line.
pub fn rewrite_message(message: &str, files: &[String], config: &RewriteConfig) -> String {
   truncate_line(&classify_message(message, files, config).format(), config.summary_hard_limit)
}

/// Byte-level entry point for drivers that hand over raw message bytes.
/// Decoding is lenient: invalid sequences become replacement characters,
/// never an error.
pub fn rewrite_from_bytes(message: &[u8], files: &[String], config: &RewriteConfig) -> String {
   rewrite_message(&String::from_utf8_lossy(message), files, config)
}

/// Bound a line to `limit` characters, ending in an ellipsis when cut.
///
/// Counts Unicode scalars, not bytes, so multi-byte text never splits
/// mid-sequence.
fn truncate_line(line: &str, limit: usize) -> String {
   if line.chars().count() <= limit {
      return line.to_string();
   }

   let mut out: String = line.chars().take(limit.saturating_sub(ELLIPSIS.len())).collect();
   out.push_str(ELLIPSIS);
   out
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::types::CommitType;

   fn files(paths: &[&str]) -> Vec<String> {
      paths.iter().map(|s| s.to_string()).collect()
   }

   // strip_conventional_prefix tests

   #[test]
   fn test_strip_plain_prefix() {
      assert_eq!(strip_conventional_prefix("feat: add thing"), "add thing");
   }

   #[test]
   fn test_strip_scoped_prefix() {
      assert_eq!(strip_conventional_prefix("fix(ui): correct spacing"), "correct spacing");
      assert_eq!(strip_conventional_prefix("feat(core/utils): thing"), "thing");
   }

   #[test]
   fn test_strip_prefix_no_space_after_colon() {
      assert_eq!(strip_conventional_prefix("chore:bump deps"), "bump deps");
   }

   #[test]
   fn test_strip_prefix_absent() {
      assert_eq!(strip_conventional_prefix("Add login button"), "Add login button");
      assert_eq!(strip_conventional_prefix("fix(ui) missing colon"), "fix(ui) missing colon");
      assert_eq!(strip_conventional_prefix(": no word"), ": no word");
   }

   // rewrite_message tests

   #[test]
   fn test_rewrite_add_login_button() {
      let config = RewriteConfig::default();
      let out = rewrite_message("Add login button", &files(&["client/Login.tsx"]), &config);
      assert_eq!(out, "feat: Add login button");
   }

   #[test]
   fn test_rewrite_bump_deps() {
      let config = RewriteConfig::default();
      let out = rewrite_message("bump deps", &files(&["package.json"]), &config);
      assert_eq!(out, "chore: bump deps");
   }

   #[test]
   fn test_rewrite_strips_old_prefix_and_reclassifies() {
      let config = RewriteConfig::default();
      // Classification sees the full original message, so "fix" in the old
      // prefix still wins; the new line carries the freshly computed type.
      let out = rewrite_message("fix(ui): correct spacing\n\nbody text", &[], &config);
      assert_eq!(out, "fix: correct spacing");
   }

   #[test]
   fn test_rewrite_uses_first_line_only() {
      let config = RewriteConfig::default();
      let out = rewrite_message("bump deps\n\nalso add analytics", &[], &config);
      // Summary comes from line 1, but the body keyword "add" still drives
      // classification
      assert_eq!(out, "feat: bump deps");
   }

   #[test]
   fn test_rewrite_trims_first_line() {
      let config = RewriteConfig::default();
      let out = rewrite_message("   bump deps   \nrest", &[], &config);
      assert_eq!(out, "chore: bump deps");
   }

   #[test]
   fn test_rewrite_empty_message() {
      let config = RewriteConfig::default();
      assert_eq!(rewrite_message("", &[], &config), "chore: ");
   }

   #[test]
   fn test_rewrite_length_bound() {
      let config = RewriteConfig::default();
      let long = format!("fix {}", "a".repeat(100));
      let out = rewrite_message(&long, &[], &config);
      assert_eq!(out.chars().count(), 72);
      assert!(out.ends_with("..."));
      assert!(out.starts_with("fix: "));
   }

   #[test]
   fn test_rewrite_length_bound_multibyte() {
      let config = RewriteConfig::default();
      let long = format!("fix {}", "é".repeat(100));
      let out = rewrite_message(&long, &[], &config);
      assert_eq!(out.chars().count(), 72);
      assert!(out.ends_with("..."));
   }

   #[test]
   fn test_rewrite_exactly_at_limit_untouched() {
      let config = RewriteConfig::default();
      // "fix: " is 5 chars; 67 more gives exactly 72
      let msg = format!("fix {}", "b".repeat(63));
      let out = rewrite_message(&msg, &[], &config);
      assert_eq!(out.chars().count(), 72);
      assert!(!out.ends_with("..."));
   }

   #[test]
   fn test_rewrite_from_bytes_lenient() {
      let config = RewriteConfig::default();
      let out = rewrite_from_bytes(b"fix \xFF crash", &[], &config);
      assert!(out.starts_with("fix: "));
      assert!(out.contains('\u{FFFD}'));
   }

   #[test]
   fn test_classify_message_untruncated() {
      let config = RewriteConfig::default();
      let long = format!("docs {}", "a".repeat(100));
      let msg = classify_message(&long, &files(&["README.md"]), &config);
      // No keyword match ("docs" is not in the cascade), file rule applies
      assert_eq!(msg.commit_type, CommitType::Docs);
      assert_eq!(msg.summary.chars().count(), 105);
   }
}
