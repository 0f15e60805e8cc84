//! Pluggable message-generation hook.
//!
//! Production behavior is "ask an external generation service"; nothing in
//! this crate wires one up. The trait is the seam: a real backend substitutes
//! for the stub without the classification engine noticing.

use crate::error::Result;

/// Capability interface: a single function from (original message, diff) to a
/// new message.
pub trait MessageGenerator {
   fn generate(&self, original_message: &str, diff: &str) -> Result<String>;
}

/// Plain functions and closures are generators too.
impl<F> MessageGenerator for F
where
   F: Fn(&str, &str) -> Result<String>,
{
   fn generate(&self, original_message: &str, diff: &str) -> Result<String> {
      self(original_message, diff)
   }
}

/// Reference generator used when no service is wired: returns a fixed reply.
///
/// The reply is a field, not a hardcoded literal, so tests and callers can
/// swap it without a new type.
#[derive(Debug, Clone)]
pub struct StubGenerator {
   pub reply: String,
}

impl Default for StubGenerator {
   fn default() -> Self {
      Self { reply: "feat: Refactor based on changes".to_string() }
   }
}

impl MessageGenerator for StubGenerator {
   fn generate(&self, _original_message: &str, _diff: &str) -> Result<String> {
      Ok(self.reply.clone())
   }
}
