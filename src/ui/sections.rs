//! Section editing screen
//!
//! Two-panel layout: the section list on the left, the focused
//! section's options and the focused option's details on the right.

use super::header::{render_banner, HeaderRenderer};
use crate::app::AppState;
use crate::catalog::{Section, SelectionMode, MANDATORY_SECTION_ID};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the editing screen in the specified area
pub fn render_editing_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Length(3), // Error/status banner
            Constraint::Min(10),   // Content
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "UMC100.3 Starter Configuration");
    render_banner(f, state, chunks[2]);

    // Split content into section list and option panel
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);

    render_section_list(f, state, content_chunks[0]);
    render_option_panel(f, state, content_chunks[1]);
}

/// Render the list of catalog sections with selection counts
fn render_section_list(f: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = state
        .catalog
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let focused = index == state.section_index;
            let prefix = if focused { "▸ " } else { "  " };
            let count = state.selections.selected_count(&section.id);

            let mut spans = vec![Span::styled(
                format!("{}{}", prefix, section.title),
                if focused {
                    Styles::cursor()
                } else {
                    Style::default().fg(Colors::FG_PRIMARY)
                },
            )];

            if count > 0 {
                spans.push(Span::styled(
                    format!("  [{}]", count),
                    Styles::selected(),
                ));
            } else if section.id == MANDATORY_SECTION_ID {
                spans.push(Span::styled("  required", Styles::error()));
            } else if section.is_optional {
                spans.push(Span::styled("  optional", Styles::hint()));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sections ")
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );

    f.render_widget(list, area);
}

/// Render the focused section's options and the focused option detail
fn render_option_panel(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(section) = state.current_section() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Question
            Constraint::Min(6),    // Options
            Constraint::Length(4), // Focused option detail
        ])
        .split(area);

    let question = Paragraph::new(section.question.as_str())
        .style(Style::default().fg(Colors::FG_SECONDARY))
        .wrap(Wrap { trim: true });
    f.render_widget(question, chunks[0]);

    render_option_list(f, state, section, chunks[1]);
    render_option_detail(f, state, chunks[2]);
}

fn render_option_list(f: &mut Frame, state: &AppState, section: &Section, area: Rect) {
    let items: Vec<ListItem> = section
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let focused = index == state.option_index;
            let selected = state.selections.is_selected(&section.id, &option.id);

            let marker = match (section.mode(), selected) {
                (SelectionMode::Single, true) => "(•)",
                (SelectionMode::Single, false) => "( )",
                (SelectionMode::Multiple, true) => "[x]",
                (SelectionMode::Multiple, false) => "[ ]",
            };
            let prefix = if focused { "▸ " } else { "  " };

            let style = if focused {
                Styles::cursor()
            } else if selected {
                Styles::selected()
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };

            ListItem::new(format!(
                "{}{} {}  {}",
                prefix, marker, option.id, option.label
            ))
            .style(style)
        })
        .collect();

    let mode_tag = match section.mode() {
        SelectionMode::Single => "choose one",
        SelectionMode::Multiple => "choose any",
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Options · {} ", mode_tag))
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );

    f.render_widget(list, area);
}

fn render_option_detail(f: &mut Frame, state: &AppState, area: Rect) {
    let lines = match state.current_option() {
        Some(option) => {
            let code_span = if option.is_orderable() {
                Span::styled(
                    option.order_code.clone(),
                    Style::default().fg(Colors::INFO),
                )
            } else {
                Span::styled("not a listed component", Styles::hint())
            };
            vec![
                Line::from(Span::styled(
                    option.description.clone(),
                    Style::default().fg(Colors::FG_PRIMARY),
                )),
                Line::from(vec![
                    Span::styled("Order code: ", Style::default().fg(Colors::FG_SECONDARY)),
                    code_span,
                ]),
            ]
        }
        None => vec![Line::from("")],
    };

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}
