use std::io::{self, Read, Write};

use clap::Parser;
use config::RewriteConfig;
use conv_git::*;
use error::Result;
use generate::{MessageGenerator, StubGenerator};
use git::{get_commit_diff, get_commit_metadata, list_changed_files};
use rewrite::{classify_message, rewrite_from_bytes};
use types::Args;

/// Load config from args or the default location.
fn load_config_from_args(args: &Args) -> Result<RewriteConfig> {
   if let Some(ref config_path) = args.config {
      RewriteConfig::from_file(config_path)
   } else {
      RewriteConfig::load()
   }
}

/// Read the original message: stdin bytes by default, the commit's own
/// message with `--from-ref`.
fn read_original_message(args: &Args) -> Result<Vec<u8>> {
   if args.from_ref {
      let metadata = get_commit_metadata(&args.commit, &args.dir)?;
      return Ok(metadata.message.into_bytes());
   }

   let mut buf = Vec::new();
   io::stdin().lock().read_to_end(&mut buf)?;
   Ok(buf)
}

fn run() -> Result<()> {
   let args = Args::parse();
   let config = load_config_from_args(&args)?;

   // Diff-retriever entry point: dump the patch text verbatim
   if args.show_diff {
      let diff = get_commit_diff(&args.commit, &args.dir)?;
      io::stdout().write_all(diff.as_bytes())?;
      return Ok(());
   }

   let message = read_original_message(&args)?;

   // Generation hook path: (message, diff) through the pluggable stub
   if args.generate {
      let diff = get_commit_diff(&args.commit, &args.dir)?;
      let generator = StubGenerator::default();
      let new_message = generator.generate(&String::from_utf8_lossy(&message), &diff)?;
      io::stdout().write_all(new_message.as_bytes())?;
      return Ok(());
   }

   // Classification path: changed files + original message -> new summary line
   let files = list_changed_files(&args.commit, &args.dir)?;
   if files.is_empty() {
      style::warn("commit touches no files; only keyword rules apply");
   }

   let new_message = rewrite_from_bytes(&message, &files, &config);

   if std::env::var("CONV_GIT_VERBOSE").is_ok() {
      let classified = classify_message(&String::from_utf8_lossy(&message), &files, &config);
      eprintln!("{}", serde_json::to_string_pretty(&classified)?);
   }

   io::stdout().write_all(new_message.as_bytes())?;
   Ok(())
}

fn main() {
   if let Err(e) = run() {
      eprintln!("{} {e}", style::error(style::icons::ERROR));
      std::process::exit(1);
   }
}
