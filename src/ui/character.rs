use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::types::{CharacterDetail, Remote};

use super::film;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.navigator.state();
    let Some(selected) = state.selected_character else {
        return;
    };

    let is_active = app.focus == Focus::Films;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", selected.name))
        .border_style(if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let detail = match &state.selected_character_detail {
        Remote::Loaded(detail) => *detail,
        _ => {
            let loading = Paragraph::new(format!("{} Loading {}...", app.spinner(), selected.name))
                .block(block)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, area);
            return;
        }
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    render_header(frame, detail, chunks[0]);

    if let Some(active) = state.active_film() {
        film::render(frame, active, chunks[1]);
    } else {
        render_body(frame, app, detail, chunks[1]);
    }

    let close = Paragraph::new(Span::styled(
        "[Esc] Close",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(close, chunks[2]);
}

fn render_header(frame: &mut Frame, detail: &CharacterDetail, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            detail.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{}, {}", detail.height_label(), detail.mass_label())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_body(frame: &mut Frame, app: &App, detail: &CharacterDetail, area: Rect) {
    let state = app.navigator.state();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let label = Style::default().fg(Color::Gray);
    let traits = vec![
        Line::from(vec![Span::styled("Skin  ", label), Span::raw(&detail.skin_color)]),
        Line::from(vec![Span::styled("Hair  ", label), Span::raw(&detail.hair_color)]),
        Line::from(vec![Span::styled("Eyes  ", label), Span::raw(&detail.eye_color)]),
        Line::from(vec![Span::styled("Born  ", label), Span::raw(&detail.birth_year)]),
    ];
    frame.render_widget(Paragraph::new(traits), chunks[0]);

    let is_active = app.focus == Focus::Films;
    let items: Vec<ListItem> = detail
        .film_refs
        .iter()
        .enumerate()
        .map(|(i, film)| {
            let style = if is_active && i == app.film_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("[ {} ]", state.film_title(film)),
                style,
            )))
        })
        .collect();

    let title = if state.film_loading {
        format!("Films {}", app.spinner())
    } else {
        "Films".to_string()
    };
    let list = List::new(items)
        .block(Block::default().title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut list_state = ListState::default();
    if is_active && !detail.film_refs.is_empty() {
        list_state.select(Some(app.film_index));
    }
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}
