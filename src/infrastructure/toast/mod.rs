//! Toast infrastructure module
//!
//! Renders toasts on the desktop via notify-rust or in the terminal.

mod notify_rust;
mod terminal;

pub use notify_rust::NotifyRustToaster;
pub use terminal::TerminalToaster;

use std::sync::Arc;

use crate::application::ports::Toaster;
use crate::domain::config::ToastBackend;

/// Create the toaster for a backend; `None` means toasts are dropped
pub fn create_toaster(backend: ToastBackend) -> Option<Arc<dyn Toaster>> {
    match backend {
        ToastBackend::Desktop => Some(Arc::new(NotifyRustToaster::new())),
        ToastBackend::Terminal => Some(Arc::new(TerminalToaster::new())),
        ToastBackend::None => None,
    }
}
