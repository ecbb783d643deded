//! Platform-specific configuration

/// Download shortcut display for the status bar.
/// Ctrl+S on every platform; macOS renders Control as ⌃
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "⌃S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
