//! Color palette.
//!
//! Named terminal colors only, so the UI follows the user's terminal theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset;
pub const CARD_BG: Color = Color::Reset;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
/// Secondary accent for headings inside a tab
pub const ACCENT_ALT: Color = Color::Magenta;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
/// Foreground used on top of `ACCENT` backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Submit button ---
pub const BUTTON_BG: Color = Color::Blue;
pub const BUTTON_DISABLED_BG: Color = Color::DarkGray;

// --- Editor ---
pub const GUTTER_FG: Color = Color::DarkGray;
