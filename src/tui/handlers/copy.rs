//! Click-to-copy for code blocks.

use std::time::Instant;

use ratatui::layout::Position;

use super::super::app::{App, CopyRegion};

/// Code block under the given screen position, if any.
pub(crate) fn hit_test_copy_region(app: &App, pos: Position) -> Option<&CopyRegion> {
    let history_rect = app.history_area_rect?;
    if !history_rect.contains(pos) {
        return None;
    }
    let rel_row = pos.y.saturating_sub(history_rect.y) as usize;
    let clicked_line = app.scroll_line() + rel_row;
    app.copy_regions
        .iter()
        .find(|r| r.start <= clicked_line && clicked_line < r.end)
}

/// Copy the code block under `pos` to the clipboard. Returns true on success.
pub(crate) fn try_copy_at(app: &mut App, pos: Position) -> bool {
    let Some(region) = hit_test_copy_region(app, pos) else {
        return false;
    };
    let key = region.key;
    let text = region.text.clone();
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
        Ok(()) => {
            app.mark_copied(key, Instant::now());
            true
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::*;
    use crate::tui::app::ScrollPosition;

    fn app_with_region() -> App {
        let mut app = App::new("http://localhost/chat".to_string(), false);
        app.history_area_rect = Some(Rect::new(1, 2, 40, 10));
        app.last_max_scroll = 20;
        app.copy_regions = vec![CopyRegion {
            start: 12,
            end: 15,
            key: (3, 1),
            text: "let x = 1;".to_string(),
        }];
        app
    }

    #[test]
    fn hit_test_accounts_for_scroll_offset() {
        let mut app = app_with_region();
        app.scroll = ScrollPosition::Line(10);
        let hit = hit_test_copy_region(&app, Position::new(5, 4)).map(|r| r.key);
        assert_eq!(hit, Some((3, 1)));
        assert!(hit_test_copy_region(&app, Position::new(5, 2)).is_none());
    }

    #[test]
    fn clicks_outside_history_miss() {
        let app = app_with_region();
        assert!(hit_test_copy_region(&app, Position::new(0, 0)).is_none());
        assert!(hit_test_copy_region(&app, Position::new(50, 4)).is_none());
    }
}
