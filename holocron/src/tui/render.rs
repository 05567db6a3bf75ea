use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{BrowserState, Mode};
use crate::view::{self, DetailView};

pub fn render(f: &mut Frame, state: &BrowserState) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(f.size());

    render_controls(f, vertical[0], state);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(vertical[1]);

    render_list(f, main[0], state);
    render_detail(f, main[1], state);
    render_help(f, vertical[2], state);
}

fn render_controls(f: &mut Frame, area: Rect, state: &BrowserState) {
    let criteria = state.catalog.criteria();
    let editing = state.mode == Mode::EditingSearch;
    let search = if editing {
        format!("{}_", state.input)
    } else {
        criteria.pending_search().to_string()
    };
    let search_style = if editing {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        Span::styled(search, search_style),
        Span::raw("   "),
        Span::styled("Sort by: ", Style::default().fg(Color::Gray)),
        Span::styled(
            criteria.pending_sort().label(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]);

    let controls =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Holocron"));
    f.render_widget(controls, area);
}

fn render_list(f: &mut Frame, area: Rect, state: &BrowserState) {
    let block = Block::default().title("Movies").borders(Borders::ALL);
    let rows = view::list_rows(&state.catalog);

    if rows.is_empty() {
        let loading = Paragraph::new(view::LOADING_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    let selected_episode = state.catalog.selected().map(|movie| movie.episode_id);
    let items: Vec<ListItem> = rows
        .into_iter()
        .zip(state.catalog.visible_movies())
        .map(|(row, movie)| {
            let episode_style = if Some(movie.episode_id) == selected_episode {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            ListItem::new(Line::from(vec![
                Span::styled(row.episode, episode_style),
                Span::raw("  "),
                Span::raw(row.title),
                Span::raw("  "),
                Span::styled(row.year, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::new()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(f: &mut Frame, area: Rect, state: &BrowserState) {
    let detail = DetailView::of(state.catalog.selected().map(|movie| movie.as_ref()));
    let lines: Vec<Line> = match &detail {
        DetailView::Movie {
            title,
            episode,
            opening_crawl,
        } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    title.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    episode.clone(),
                    Style::default().fg(Color::Yellow),
                )),
                Line::default(),
            ];
            lines.extend(opening_crawl.iter().map(|l| Line::from(l.clone())));
            lines
        }
        DetailView::Empty => vec![Line::from(Span::styled(
            view::NO_SELECTION_MESSAGE,
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Details").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect, state: &BrowserState) {
    let text = match state.mode {
        Mode::Browse => {
            "/ search  Tab/s sort key  S sort  Up/Down move  Enter select  q quit"
        }
        Mode::EditingSearch => "Enter search  Esc cancel",
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
