//! Summary screen rendering
//!
//! Shows the generated configuration summary as a table mapping each
//! chosen component to its order code, or an explicit empty state when
//! no selected component carries one.

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the summary screen in the specified area
pub fn render_summary_in_area(
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
            Constraint::Min(8),    // Table or empty state
            Constraint::Length(1), // Footer line
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Configuration Summary");

    if state.report.is_empty() {
        render_empty_state(f, chunks[2]);
    } else {
        render_component_table(f, state, chunks[2]);
    }

    let footer = Paragraph::new(state.status_message.as_str())
        .style(Style::default().fg(Colors::FG_SECONDARY));
    f.render_widget(footer, chunks[3]);
}

fn render_component_table(f: &mut Frame, state: &AppState, area: Rect) {
    let header_row = Row::new(vec!["SECTION", "COMPONENT", "ORDER CODE"])
        .style(
            Style::default()
                .fg(Colors::FG_SECONDARY)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .report
        .iter()
        .map(|component| {
            let details = Text::from(vec![
                Line::from(Span::styled(
                    component.label.clone(),
                    Style::default()
                        .fg(Colors::FG_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    component.description.clone(),
                    Style::default().fg(Colors::FG_SECONDARY),
                )),
            ]);

            Row::new(vec![
                Cell::from(component.section_id.clone())
                    .style(Style::default().fg(Colors::SECONDARY)),
                Cell::from(details),
                Cell::from(component.order_code.clone())
                    .style(Style::default().fg(Colors::INFO)),
            ])
            .height(2)
            .bottom_margin(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Percentage(55),
            Constraint::Percentage(35),
        ],
    )
    .header(header_row)
    .column_spacing(2)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Selected Components ({}) ", state.report.len()))
            .title_style(Styles::title())
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );

    f.render_widget(table, area);
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No additional components selected.",
            Style::default().fg(Colors::FG_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The chosen configuration needs no separately ordered parts.",
            Styles::hint(),
        )),
    ];

    let empty = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Selected Components ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::PRIMARY)),
        );
    f.render_widget(empty, area);
}
