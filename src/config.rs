use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, RewriteError};

/// Rewrite engine configuration.
///
/// The file-based classification rules are plain lists so maintainers can
/// extend them per repository; the defaults reproduce the fixed rule set.
/// Keyword rules are not configurable, the word-boundary patterns are part of
/// the classification contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
   /// Hard limit for the whole `type: summary` line, in characters
   pub summary_hard_limit: usize,

   /// File extensions that classify a commit as `docs`
   pub docs_extensions: Vec<String>,

   /// File extensions that classify a commit as `style`
   pub style_extensions: Vec<String>,

   /// Exact build/config-tool filenames that classify a commit as `chore`
   pub chore_files: Vec<String>,

   /// Path prefixes that classify a commit as `feat`
   pub feat_path_prefixes: Vec<String>,

   /// Path prefixes that classify a commit as `refactor`
   pub refactor_path_prefixes: Vec<String>,
}

impl Default for RewriteConfig {
   fn default() -> Self {
      Self {
         summary_hard_limit:     72,
         docs_extensions:        vec![".md".to_string()],
         style_extensions:       vec![
            ".css".to_string(),
            ".scss".to_string(),
            ".less".to_string(),
         ],
         chore_files:            vec![
            "package.json".to_string(),
            "Makefile".to_string(),
            "vite.config.js".to_string(),
            "eslint.config.js".to_string(),
         ],
         feat_path_prefixes:     vec!["client/".to_string()],
         refactor_path_prefixes: vec!["server/".to_string()],
      }
   }
}

impl RewriteConfig {
   /// Load config from the default location
   /// (`~/.config/conv-git/config.toml`).
   ///
   /// `CONV_GIT_CONFIG` overrides the path. Falls back to `Default` when the
   /// file does not exist or no home directory can be determined.
   pub fn load() -> Result<Self> {
      let config_path = if let Ok(custom_path) = std::env::var("CONV_GIT_CONFIG") {
         PathBuf::from(custom_path)
      } else {
         Self::default_config_path().unwrap_or_else(|_| PathBuf::new())
      };

      if config_path.exists() {
         Self::from_file(&config_path)
      } else {
         Ok(Self::default())
      }
   }

   /// Load config from a specific file.
   pub fn from_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path)
         .map_err(|e| RewriteError::Other(format!("Failed to read config: {e}")))?;
      toml::from_str(&contents)
         .map_err(|e| RewriteError::Other(format!("Failed to parse config: {e}")))
   }

   /// Get default config path (platform-safe).
   /// Tries HOME (Unix/Linux/macOS) then USERPROFILE (Windows).
   pub fn default_config_path() -> Result<PathBuf> {
      if let Ok(home) = std::env::var("HOME") {
         return Ok(PathBuf::from(home).join(".config/conv-git/config.toml"));
      }

      if let Ok(home) = std::env::var("USERPROFILE") {
         return Ok(PathBuf::from(home).join(".config/conv-git/config.toml"));
      }

      Err(RewriteError::Other("No home directory found (tried HOME and USERPROFILE)".to_string()))
   }
}
