//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for shortcut chords
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the help line
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Enhance-with-AI shortcut display
/// - macOS: "Cmd+E"
/// - Linux/Windows: "Ctrl+E"
#[cfg(target_os = "macos")]
pub const ENHANCE_SHORTCUT: &str = "Cmd+E";

#[cfg(not(target_os = "macos"))]
pub const ENHANCE_SHORTCUT: &str = "Ctrl+E";
