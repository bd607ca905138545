use crate::app::{App, FocusedBox, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
    Frame,
};

mod activity_region;
mod confirm_dialog;
mod feedback_banner;
mod signup_form;
pub(super) mod utils;

const TITLE: &str = "Mergington High School Activities";

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, root[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(root[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(panes[0]);

    signup_form::render_signup_form(frame, app, left[0]);
    feedback_banner::render_feedback_banner(frame, app, left[1]);
    activity_region::render_activity_region(frame, app, panes[1]);

    render_controls(frame, app, root[2]);

    if app.current_view == View::ConfirmUnregister {
        confirm_dialog::render_confirm_unregister_dialog(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    if app.is_loading {
        let throbber = throbber_widgets_tui::Throbber::default()
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, cols[0], &mut app.throbber_state);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        cols[1],
    );
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let mut spans = match (app.current_view, app.focused_box) {
        (View::ConfirmUnregister, _) => vec![
            key("y"),
            Span::raw(": Unregister  "),
            key("n/Esc"),
            Span::raw(": Cancel  "),
        ],
        (View::Main, FocusedBox::Roster) => {
            let mut spans = Vec::new();
            if let Some(label) = app.focused_control_label() {
                spans.push(Span::styled(
                    format!("{}  ", utils::inert_text(label)),
                    Style::default().fg(Color::White),
                ));
            }
            spans.extend([
                key("↑↓"),
                Span::raw(": Move  "),
                key("Enter/d"),
                Span::raw(": Unregister  "),
                key("PgUp/PgDn"),
                Span::raw(": Scroll  "),
            ]);
            spans
        }
        (View::Main, FocusedBox::Activity) => vec![
            key("↑↓"),
            Span::raw(": Choose activity  "),
            key("Enter"),
            Span::raw(": Sign up  "),
        ],
        (View::Main, FocusedBox::Email) => vec![key("Enter"), Span::raw(": Sign up  ")],
    };
    spans.extend([
        key("Tab"),
        Span::raw(": Next field  "),
        key("Ctrl+Q"),
        Span::raw(": Quit"),
    ]);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
