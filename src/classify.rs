//! Commit type classification.
//!
//! An ordered, first-match-wins rule cascade over the original message text
//! and the changed-file list. Classification is a pure function: no state, no
//! dependency on commit order.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::{config::RewriteConfig, types::CommitType};

static FIX_RE: OnceLock<Regex> = OnceLock::new();
static FEAT_RE: OnceLock<Regex> = OnceLock::new();
static REFACTOR_RE: OnceLock<Regex> = OnceLock::new();
static TEST_RE: OnceLock<Regex> = OnceLock::new();

// Whole-word matching: "prefix" must not match "fix".
fn fix_re() -> &'static Regex {
   FIX_RE.get_or_init(|| Regex::new(r"(?i)\b(fix|bug|correct|repair)\b").expect("valid pattern"))
}

fn feat_re() -> &'static Regex {
   FEAT_RE.get_or_init(|| {
      Regex::new(r"(?i)\b(feat|feature|add|implement)\b").expect("valid pattern")
   })
}

fn refactor_re() -> &'static Regex {
   REFACTOR_RE.get_or_init(|| {
      Regex::new(r"(?i)\b(refactor|restructure|rewrite)\b").expect("valid pattern")
   })
}

fn test_re() -> &'static Regex {
   TEST_RE.get_or_init(|| Regex::new(r"(?i)\b(test|spec)\b").expect("valid pattern"))
}

/// Determine the commit type from the original message and changed files.
///
/// Message keyword rules run first, then file-based rules, then the keyword
/// `test` rule, then path-prefix defaults. `chore` is the fallback, including
/// for an empty file list with no keyword match.
pub fn classify_type(message: &str, files: &[String], config: &RewriteConfig) -> CommitType {
   if fix_re().is_match(message) {
      return CommitType::Fix;
   }
   if feat_re().is_match(message) {
      return CommitType::Feat;
   }
   if refactor_re().is_match(message) {
      return CommitType::Refactor;
   }

   if files
      .iter()
      .any(|f| config.docs_extensions.iter().any(|ext| f.ends_with(ext)))
   {
      return CommitType::Docs;
   }
   if files.iter().any(|f| {
      config.style_extensions.iter().any(|ext| f.ends_with(ext)) || f.contains("style")
   }) {
      return CommitType::Style;
   }
   if files
      .iter()
      .any(|f| config.chore_files.iter().any(|name| f == name))
   {
      return CommitType::Chore;
   }

   if test_re().is_match(message) {
      return CommitType::Test;
   }

   // Default types based on where the changes live
   if files
      .iter()
      .any(|f| config.feat_path_prefixes.iter().any(|p| f.starts_with(p)))
   {
      return CommitType::Feat;
   }
   if files.iter().any(|f| {
      config
         .refactor_path_prefixes
         .iter()
         .any(|p| f.starts_with(p))
   }) {
      return CommitType::Refactor;
   }

   CommitType::Chore
}
