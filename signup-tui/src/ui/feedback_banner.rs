use super::utils::inert_text;
use super::*;
use crate::app::FeedbackKind;

pub fn render_feedback_banner(frame: &mut Frame, app: &App, area: Rect) {
    if !app.feedback.is_visible() {
        return;
    }

    let color = match app.feedback.kind() {
        FeedbackKind::Success => Color::Green,
        FeedbackKind::Error => Color::Red,
    };

    let paragraph = Paragraph::new(Span::styled(
        inert_text(app.feedback.text()).into_owned(),
        Style::default().fg(color),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1)),
    );

    let height = area.height.min(4);
    frame.render_widget(paragraph, Rect { height, ..area });
}
