//! Blocking confirm/alert boundary of the host environment.
//!
//! # Responsibility
//! - Model the page's modal yes/no and acknowledge interactions so core
//!   logic never talks to a concrete UI directly.

/// Host-side modal prompts.
pub trait HostPrompt {
    /// Blocking yes/no question; `true` means the user confirmed.
    fn confirm(&mut self, message: &str) -> bool;
    /// Blocking acknowledge-only warning.
    fn alert(&mut self, message: &str);
}

/// Prompt that confirms everything and swallows alerts.
///
/// Useful for headless probes where no operator is present.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl HostPrompt for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }

    fn alert(&mut self, _message: &str) {}
}
