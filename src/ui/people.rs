use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::navigation::NavigationState;
use crate::types::Remote;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.navigator.state();
    let is_active = app.focus == Focus::People;

    let title = match state.current_page {
        Some(page) => format!(" People (page {}/{}) ", page, state.total_pages),
        None => " People ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if state.fetch_error {
        let error = Paragraph::new("Error connecting to the API")
            .block(block)
            .style(Style::default().fg(Color::Red));
        frame.render_widget(error, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let listing = match &state.page_listing {
        Remote::Loaded(listing) => *listing,
        Remote::Pending => {
            let loader = Paragraph::new(format!("{} Loading...", app.spinner()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(loader, chunks[0]);
            render_paginator(frame, &state, chunks[1]);
            return;
        }
        Remote::Absent => return,
    };

    let selected_name = state.selected_character.map(|c| c.name.as_str());
    let items: Vec<ListItem> = listing
        .items
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let is_cursor = is_active && i == app.person_index;
            let is_selected = selected_name == Some(person.name.as_str());

            let mut style = Style::default();
            if is_selected {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if is_cursor {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            let marker = if is_selected { "* " } else { "  " };

            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, person.name),
                style,
            )))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
    let mut list_state = ListState::default();
    if is_active && !listing.items.is_empty() {
        list_state.select(Some(app.person_index));
    }
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    render_paginator(frame, &state, chunks[1]);
}

/// `< 1 2 3 >` with the arrows only where a link exists
fn render_paginator(frame: &mut Frame, state: &NavigationState<'_>, area: Rect) {
    let button = Style::default().fg(Color::Gray);
    let mut spans = Vec::new();

    if state.has_previous {
        spans.push(Span::styled("< ", button));
    }
    for page in state.page_numbers() {
        let style = if state.current_page == Some(page) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            button
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }
    if state.has_next {
        spans.push(Span::styled(" >", button));
    }

    let paginator = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paginator, area);
}
