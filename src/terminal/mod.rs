//! Terminal helpers for the TUI and help screen.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::RawModeGuard;
