// Centralized theme for the widget - edit this file to change the look

use ratatui::style::Color;

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text (unfocused labels)
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for placeholders and the token row
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - muted blue (focused field)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success - muted green
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber (hint keys)
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error text
pub const ACCENT_ERROR: Color = Color::Rgb(224, 108, 117);

/// Unfocused input underline/border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);
