use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::borrow::Cow;

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Make store-provided text safe to paint: control characters (escape
/// sequences included) are shown escaped instead of reaching the terminal.
pub fn inert_text(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(inert_text("Chess Club"), Cow::Borrowed("Chess Club")));
    }

    #[test]
    fn escape_sequences_are_neutralized() {
        let painted = inert_text("\u{1b}[2J<b>x</b>\n");
        assert!(!painted.chars().any(char::is_control));
        assert_eq!(painted, "\\u{1b}[2J<b>x</b>\\n");
    }

    #[test]
    fn centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 10, outer);
        assert_eq!((inner.x, inner.y, inner.width, inner.height), (25, 15, 50, 10));
    }
}
