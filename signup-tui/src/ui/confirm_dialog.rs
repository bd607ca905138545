use super::utils::{centered_rect, inert_text};
use super::*;

pub fn render_confirm_unregister_dialog(frame: &mut Frame, app: &App) {
    let Some(target) = &app.pending_unregister else {
        return;
    };

    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Unregister {} from {}?",
                inert_text(&target.email),
                inert_text(&target.activity)
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
