use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
   #[error("Git command failed: {0}")]
   Backend(String),

   #[error("Unexpected git output: {context}")]
   MalformedOutput { context: String },

   #[error("Message generation failed: {0}")]
   Generation(String),

   #[error("IO error: {0}")]
   Io(#[from] std::io::Error),

   #[error("JSON error: {0}")]
   Json(#[from] serde_json::Error),

   #[error("{0}")]
   Other(String),
}

pub type Result<T> = std::result::Result<T, RewriteError>;
