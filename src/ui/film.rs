use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::types::FilmDetail;

pub fn render(frame: &mut Frame, film: &FilmDetail, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "[Esc] Go back",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            film.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("dir. {}", film.director),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    // SWAPI crawls use \r\n line breaks
    for line in film.description.lines() {
        lines.push(Line::from(line.trim_end().to_string()));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}
