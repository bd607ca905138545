use super::utils::inert_text;
use super::*;

fn box_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn render_signup_form(frame: &mut Frame, app: &App, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Sign Up for an Activity ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    render_email_input(frame, app, rows[0]);
    render_activity_picker(frame, app, rows[1]);

    if let Some(err) = &app.form.validation_error {
        frame.render_widget(
            Paragraph::new(Span::styled(err.as_str(), Style::default().fg(Color::Red))),
            rows[2],
        );
    }
}

fn render_email_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_box == FocusedBox::Email;
    let input = &app.form.email;

    let line = if focused {
        let (before, after) = input.split_at_cursor();
        Line::from(vec![
            Span::styled(inert_text(before).into_owned(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::White)),
            Span::styled(inert_text(after).into_owned(), Style::default().fg(Color::White)),
        ])
    } else if input.value.is_empty() {
        Line::from(Span::styled(
            "your-email@mergington.edu",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            inert_text(&input.value).into_owned(),
            Style::default().fg(Color::White),
        ))
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(box_style(focused))
            .title(" Student Email ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}

fn render_activity_picker(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_box == FocusedBox::Activity;
    let select = app.view().activity_select();
    let label_style = if select.selected_value().is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(
        inert_text(select.selected_label()).into_owned(),
        label_style,
    )];
    if focused {
        spans.push(Span::styled("  ◂ ▸", Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(box_style(focused))
            .title(" Activity ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
