mod character;
mod film;
mod people;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::selection::SelectionPhase;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);

    let state = app.navigator.state();
    if state.selected_character.is_some() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);
        people::render(frame, app, body[0]);
        character::render(frame, app, body[1]);
    } else {
        people::render(frame, app, chunks[1]);
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "STAR FOLKS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Click on someone to see more",
            Style::default().fg(Color::Gray),
        )),
    ])
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.navigator.state();
    let status = if state.fetch_error {
        Line::from(vec![Span::styled(
            "Error connecting to the API",
            Style::default().fg(Color::Red),
        )])
    } else if let Some(input) = &app.page_input {
        Line::from(vec![
            Span::styled("Go to page: ", Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}_", input), Style::default().fg(Color::White)),
        ])
    } else if state.loading() || state.film_loading || state.selected_character_detail.is_pending()
    {
        Line::from(vec![Span::styled(
            format!("{} Loading...", app.spinner()),
            Style::default().fg(Color::Yellow),
        )])
    } else {
        let help = match state.phase {
            SelectionPhase::NoSelection => {
                "j/k: nav | Enter: open | n/p: page | 1-9, g: page # | q: quit"
            }
            SelectionPhase::DetailPending | SelectionPhase::DetailShown => {
                "j/k: nav | Enter: open | Tab: panel | n/p: page | g: page # | Esc: close | q: quit"
            }
            SelectionPhase::FilmShown => "Esc: go back | Tab: switch panel | q: quit",
        };
        Line::from(vec![Span::styled(help, Style::default().fg(Color::Gray))])
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}
