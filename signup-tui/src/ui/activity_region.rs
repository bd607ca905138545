use super::utils::inert_text;
use super::*;
use crate::app::{FocusedBox, HitTarget};
use crate::view::{
    Element, Node, NodePath, Tag, ViewHandle, CARD_CLASS, PARTICIPANTS_EMPTY_CLASS,
    PARTICIPANT_EMAIL_CLASS,
};

/// A clickable piece of painted text, in line/column coordinates.
#[derive(Debug, Clone, PartialEq)]
struct LineHit {
    line: usize,
    column: usize,
    width: usize,
    path: NodePath,
}

struct Painted {
    lines: Vec<Line<'static>>,
    hits: Vec<LineHit>,
    focused_line: Option<usize>,
}

/// Lays the card region's node tree out as terminal lines.
///
/// Block elements start on a fresh line, inline ones flow and wrap at word
/// boundaries. Text nodes are only ever painted through `inert_text`.
struct Painter<'a> {
    width: usize,
    focused: Option<&'a [usize]>,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    column: usize,
    hits: Vec<LineHit>,
    focused_line: Option<usize>,
}

impl<'a> Painter<'a> {
    fn new(width: usize, focused: Option<&'a [usize]>) -> Self {
        Self {
            width: width.max(1),
            focused,
            lines: Vec::new(),
            current: Vec::new(),
            column: 0,
            hits: Vec::new(),
            focused_line: None,
        }
    }

    fn finish(mut self) -> Painted {
        self.break_line();
        Painted {
            lines: self.lines,
            hits: self.hits,
            focused_line: self.focused_line,
        }
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
        self.column = 0;
    }

    fn blank_line(&mut self) {
        self.break_line();
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    /// Place one piece, wrapping first if it would overflow.
    ///
    /// A piece wider than a whole line is split by character, starting on the
    /// current line. Returns `(line, column, width)` of the first chunk.
    fn place(&mut self, text: String, style: Style) -> (usize, usize, usize) {
        let width = Span::raw(text.as_str()).width();
        if width <= self.width {
            if self.column + width > self.width {
                self.break_line();
            }
            return self.push(text, width, style);
        }

        let mut first = None;
        let mut chunk = String::new();
        let mut chunk_width = 0;
        for c in text.chars() {
            let mut buf = [0; 4];
            let char_width = Span::raw(&*c.encode_utf8(&mut buf)).width();
            let taken = self.column + chunk_width;
            if taken > 0 && taken + char_width > self.width {
                if !chunk.is_empty() {
                    let at = self.push(std::mem::take(&mut chunk), chunk_width, style);
                    first.get_or_insert(at);
                }
                self.break_line();
                chunk_width = 0;
            }
            chunk.push(c);
            chunk_width += char_width;
        }
        if !chunk.is_empty() {
            let at = self.push(chunk, chunk_width, style);
            first.get_or_insert(at);
        }
        first.unwrap_or((self.lines.len(), self.column, 0))
    }

    fn push(&mut self, text: String, width: usize, style: Style) -> (usize, usize, usize) {
        let at = (self.lines.len(), self.column, width);
        self.column += width;
        self.current.push(Span::styled(text, style));
        at
    }

    fn text(&mut self, text: &str, style: Style) {
        let text = inert_text(text);
        for word in text.split_inclusive(' ') {
            self.place(word.to_string(), style);
        }
    }

    fn node(&mut self, node: &Node, path: &mut NodePath, style: Style) {
        match node {
            Node::Text(text) => self.text(text, style),
            Node::Element(element) => self.element(element, path, style),
        }
    }

    fn element(&mut self, element: &Element, path: &mut NodePath, style: Style) {
        if element.tag() == Tag::Button {
            self.control(element, path);
            return;
        }

        if element.has_class(CARD_CLASS) {
            self.blank_line();
        }
        let block = element.tag().is_block();
        if block {
            self.break_line();
        }
        if element.tag() == Tag::Li {
            self.place("  • ".to_string(), Style::default().fg(Color::DarkGray));
        }

        let style = style.patch(element_style(element));
        for (index, child) in element.children().iter().enumerate() {
            path.push(index);
            self.node(child, path, style);
            path.pop();
        }

        if block {
            self.break_line();
        }
    }

    fn control(&mut self, element: &Element, path: &NodePath) {
        let focused = self.focused == Some(path.as_slice());
        let mut style = Style::default().fg(Color::Red);
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        self.place(" ".to_string(), Style::default());
        let label = format!("[{}]", inert_text(&element.text_content()));
        let (line, column, width) = self.place(label, style);

        // Clicks land on the label node and bubble up to the control.
        let mut target = path.clone();
        if !element.children().is_empty() {
            target.push(0);
        }
        self.hits.push(LineHit {
            line,
            column,
            width,
            path: target,
        });
        if focused {
            self.focused_line = Some(line);
        }
    }
}

fn element_style(element: &Element) -> Style {
    match element.tag() {
        Tag::H4 => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Tag::H5 => Style::default().fg(Color::Yellow),
        Tag::Strong => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        _ if element.has_class(PARTICIPANT_EMAIL_CLASS) => Style::default().fg(Color::White),
        _ if element.has_class(PARTICIPANTS_EMPTY_CLASS) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        _ => Style::default(),
    }
}

fn paint(view: &ViewHandle, width: usize, focused: Option<&[usize]>) -> Painted {
    let mut painter = Painter::new(width, focused);
    let base = Style::default().fg(Color::Gray);
    let mut path = Vec::new();
    for (index, node) in view.activities().iter().enumerate() {
        path.push(index);
        painter.node(node, &mut path, base);
        path.pop();
    }
    painter.finish()
}

/// Screen cell range of a painted hit, clipped to the region.
fn hit_target(hit: &LineHit, inner: Rect, scroll: usize) -> HitTarget {
    let cells = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
    let column = cells(hit.column);
    HitTarget {
        x: inner.x.saturating_add(column),
        y: inner.y.saturating_add(cells(hit.line.saturating_sub(scroll))),
        width: cells(hit.width).min(inner.width.saturating_sub(column)),
        path: hit.path.clone(),
    }
}

pub fn render_activity_region(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_box == FocusedBox::Roster;
    let border_color = if is_focused {
        Color::Magenta
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Activities ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focused_path = if is_focused {
        app.focused_control_path().cloned()
    } else {
        None
    };
    let painted = paint(app.view(), inner.width as usize, focused_path.as_deref());

    let height = inner.height as usize;
    app.roster_view_height = height;
    if app.scroll_to_focus {
        if let Some(line) = painted.focused_line {
            if line < app.roster_scroll {
                app.roster_scroll = line;
            } else if line >= app.roster_scroll + height {
                app.roster_scroll = line + 1 - height;
            }
        }
        app.scroll_to_focus = false;
    }
    app.roster_scroll = app
        .roster_scroll
        .min(painted.lines.len().saturating_sub(height));
    let scroll = app.roster_scroll;

    app.region_hits = painted
        .hits
        .iter()
        .filter(|hit| hit.line >= scroll && hit.line < scroll + height)
        .map(|hit| hit_target(hit, inner, scroll))
        .collect();

    let total = painted.lines.len();
    let visible: Vec<Line> = painted.lines.into_iter().skip(scroll).take(height).collect();
    frame.render_widget(Paragraph::new(visible), inner);

    if total > height {
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(height)).position(scroll);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Activity, ActivityCatalog};
    use crate::view::{removal_control_paths, removal_target, render, RemovalTarget};

    fn view_of(activities: Vec<Activity>) -> ViewHandle {
        let catalog: ActivityCatalog = activities.into_iter().collect();
        let mut view = ViewHandle::new();
        render(&catalog, &mut view);
        view
    }

    fn chess(participants: &[&str]) -> Activity {
        Activity {
            name: "Chess Club".to_string(),
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: Some("Fridays, 3:30 PM - 5:00 PM".to_string()),
            max_participants: 12,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn card_is_painted_in_reading_order() {
        let view = view_of(vec![chess(&["a@x.com"])]);
        let painted = paint(&view, 80, None);
        let text: Vec<String> = painted.lines.iter().map(line_text).collect();

        assert_eq!(
            text,
            vec![
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Schedule: Fridays, 3:30 PM - 5:00 PM",
                "Availability: 11 spots left",
                "Participants",
                "  • a@x.com [×]",
            ]
        );
    }

    #[test]
    fn painted_controls_resolve_to_their_participant() {
        let view = view_of(vec![chess(&["a@x.com", "b@x.com"])]);
        let painted = paint(&view, 80, None);

        let targets: Vec<RemovalTarget> = painted
            .hits
            .iter()
            .filter_map(|hit| removal_target(&view, &hit.path))
            .collect();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[1].email, "b@x.com");
        assert_eq!(targets[1].activity, "Chess Club");
    }

    #[test]
    fn focused_control_is_highlighted_and_located() {
        let view = view_of(vec![chess(&["a@x.com", "b@x.com"])]);
        let controls = removal_control_paths(&view);
        let painted = paint(&view, 80, Some(controls[1].as_slice()));

        let line = painted.focused_line.unwrap();
        assert_eq!(line_text(&painted.lines[line]), "  • b@x.com [×]");
        let highlighted = painted.lines[line]
            .spans
            .iter()
            .any(|s| s.style.add_modifier.contains(Modifier::REVERSED));
        assert!(highlighted);
    }

    #[test]
    fn cards_are_separated_by_a_blank_line() {
        let mut gym = chess(&[]);
        gym.name = "Gym Class".to_string();
        let view = view_of(vec![chess(&[]), gym]);
        let painted = paint(&view, 80, None);
        let text: Vec<String> = painted.lines.iter().map(line_text).collect();

        let gap = text.iter().position(|l| l == "Gym Class").unwrap();
        assert_eq!(text[gap - 1], "");
        assert_eq!(text[gap - 2], "  • No participants yet");
    }

    #[test]
    fn long_text_wraps_within_width() {
        let view = view_of(vec![chess(&[])]);
        let painted = paint(&view, 20, None);

        for line in &painted.lines {
            assert!(line.width() <= 20, "{:?} overflows", line_text(line));
        }
    }

    #[test]
    fn overlong_email_breaks_across_lines_after_its_bullet() {
        let email = format!("{}@mergington.edu", "a".repeat(62));
        assert_eq!(email.len(), 77);
        let view = view_of(vec![chess(&[email.as_str()])]);
        let painted = paint(&view, 40, None);
        let text: Vec<String> = painted.lines.iter().map(line_text).collect();

        for line in &painted.lines {
            assert!(line.width() <= 40, "{:?} overflows", line_text(line));
        }
        let start = text.iter().position(|l| l.starts_with("  • ")).unwrap();
        assert_ne!(text[start], "  • ");
        assert_eq!(text[start].len(), "  • ".len() + 36);
        assert_eq!(text[start..].concat(), format!("  • {email} [×]"));

        let hit = &painted.hits[0];
        assert_eq!(hit.line, painted.lines.len() - 1);
        let target = removal_target(&view, &hit.path).unwrap();
        assert_eq!(target.email, email);
    }

    #[test]
    fn hit_targets_are_offset_into_the_region() {
        let inner = Rect::new(5, 3, 40, 10);
        let hit = LineHit {
            line: 2,
            column: 4,
            width: 3,
            path: vec![0, 1],
        };

        let target = hit_target(&hit, inner, 1);
        assert_eq!((target.x, target.y, target.width), (9, 4, 3));
        assert_eq!(target.path, vec![0, 1]);
    }

    #[test]
    fn hit_targets_saturate_instead_of_wrapping() {
        let inner = Rect::new(5, 3, 40, 10);
        let hit = LineHit {
            line: 100_000,
            column: 70_000,
            width: 70_000,
            path: vec![0],
        };

        let target = hit_target(&hit, inner, 0);
        assert_eq!(target.x, u16::MAX);
        assert_eq!(target.y, u16::MAX);
        assert_eq!(target.width, 0);
    }

    #[test]
    fn hostile_strings_paint_without_control_characters() {
        let mut activity = chess(&["\u{1b}]0;pwned\u{7}@x.com"]);
        activity.name = "Chess\u{1b}[2J".to_string();
        let view = view_of(vec![activity]);
        let painted = paint(&view, 80, None);

        for line in &painted.lines {
            assert!(!line_text(line).chars().any(char::is_control));
        }
    }
}
