//! Application layer - Use cases and port interfaces
//!
//! Contains the core notification operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod poller;
pub mod recovery;
pub mod toast;

#[cfg(test)]
pub(crate) mod testing;

// Re-export use cases
pub use poller::{NotificationPoller, PollError, PollOutcome};
pub use recovery::{PendingPresenter, PresentationReport, RecoveryError};
pub use toast::ToastPresenter;
