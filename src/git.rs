//! Version-control backend invocations.
//!
//! Every call spawns one scoped `git` process, captures its output, and waits
//! for exit. Nothing is cached: metadata and diffs are re-fetched per request.

use std::process::Command;

use crate::{
   error::{Result, RewriteError},
   types::{CommitMetadata, Parentage},
};

/// Run a git command and return its stdout, lossy-decoded.
///
/// A missing executable or non-zero exit is a `Backend` error; it is never
/// retried.
fn run_git(args: &[&str], dir: &str) -> Result<String> {
   let output = Command::new("git")
      .args(args)
      .current_dir(dir)
      .output()
      .map_err(|e| RewriteError::Backend(format!("Failed to run git {}: {e}", args[0])))?;

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(RewriteError::Backend(format!("git {} failed: {stderr}", args[0])));
   }

   Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Fetch author, date and full message body for a commit.
pub fn get_commit_metadata(commit: &str, dir: &str) -> Result<CommitMetadata> {
   let output = run_git(&["show", "-s", "--format=%an%n%ad%n%B", commit], dir)?;
   parse_metadata(&output)
}

/// Split the three-field `show` output: line 1 = author, line 2 = date,
/// remaining lines joined by newline = message body.
fn parse_metadata(output: &str) -> Result<CommitMetadata> {
   let lines: Vec<&str> = output.lines().collect();
   if lines.len() < 2 {
      return Err(RewriteError::MalformedOutput {
         context: format!("expected at least 2 metadata lines, got {}", lines.len()),
      });
   }

   Ok(CommitMetadata {
      author:  lines[0].to_string(),
      date:    lines[1].to_string(),
      message: lines[2..].join("\n"),
   })
}

/// Determine whether a commit is a root, a single-parent commit, or a merge.
pub fn get_parentage(commit: &str, dir: &str) -> Result<Parentage> {
   let output = run_git(&["rev-list", "--parents", "-n", "1", commit], dir)?;
   parse_parents(&output)
}

/// Parse `rev-list --parents -n 1` output: the commit hash followed by its
/// parent hashes on one line.
fn parse_parents(output: &str) -> Result<Parentage> {
   let line = output
      .lines()
      .next()
      .ok_or_else(|| RewriteError::MalformedOutput {
         context: "rev-list --parents returned no output".to_string(),
      })?;

   let parents = line.split_whitespace().skip(1).count();
   Ok(match parents {
      0 => Parentage::Root,
      1 => Parentage::Single,
      n => Parentage::Merge { parents: n },
   })
}

/// Fetch the patch text for a commit, verbatim.
///
/// Root commits are shown as the whole initial tree added; merges are diffed
/// against their first parent.
pub fn get_commit_diff(commit: &str, dir: &str) -> Result<String> {
   match get_parentage(commit, dir)? {
      Parentage::Root => run_git(&["show", "--format=", commit], dir),
      Parentage::Single => run_git(&["diff", &format!("{commit}^"), commit], dir),
      Parentage::Merge { .. } => run_git(&["diff", &format!("{commit}^1"), commit], dir),
   }
}

/// List the file paths touched by a commit, in backend-reported order.
///
/// `--root` makes parentless commits list their files too.
pub fn list_changed_files(commit: &str, dir: &str) -> Result<Vec<String>> {
   let output = run_git(
      &["diff-tree", "--no-commit-id", "--name-only", "-r", "--root", commit],
      dir,
   )?;
   Ok(output.lines().map(|s| s.to_string()).collect())
}
