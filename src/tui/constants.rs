//! TUI constants: colors, timing, and layout sizes.

use std::time::Duration;

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent, soft cyan (#7EC8E3).
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Rendered math (#DC96FF).
pub(super) const MATH: Color = Color::Rgb(220, 150, 255);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input box height in text lines (borders excluded).
pub(crate) const INPUT_LINES: u16 = 4;

/// How long a code block shows "copied" (and the toast stays) after a copy.
pub(crate) const COPY_INDICATION: Duration = Duration::from_secs(2);

/// Minimalist logo when idle (single character).
pub(super) const LOGO_IDLE: &str = "◆";

/// Spinner frames while a request is in flight (braille pattern, 4 frames).
pub(super) const LOGO_SENDING: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
