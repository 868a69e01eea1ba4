//! Header and common widget rendering
//!
//! This module contains the ASCII art header, title rendering, the
//! error/status banner, the navigation bar and the help overlay.

use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Header renderer containing the ASCII art header
pub struct HeaderRenderer {
    /// ASCII art header lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    /// Create the ASCII art header
    fn create_header() -> Vec<Line<'static>> {
        let art = [
            "██╗   ██╗███╗   ███╗ ██████╗ ██╗ ██████╗  ██████╗    ██████╗ ",
            "██║   ██║████╗ ████║██╔════╝ ███║██╔═████╗██╔═████╗   ╚═══██╗",
            "██║   ██║██╔████╔██║██║      ╚██║██║██╔██║██║██╔██║    ████╔╝",
            "██║   ██║██║╚██╔╝██║██║       ██║████╔╝██║████╔╝██║    ╚═██╗ ",
            "╚██████╔╝██║ ╚═╝ ██║╚██████╗  ██║╚██████╔╝╚██████╔╝██╗████╔╝ ",
            " ╚═════╝ ╚═╝     ╚═╝ ╚═════╝  ╚═╝ ╚═════╝  ╚═════╝ ╚═╝╚═══╝  ",
        ];

        let mut lines: Vec<Line<'static>> = art
            .iter()
            .map(|row| {
                Line::from(vec![Span::styled(
                    *row,
                    Style::default().fg(Colors::PRIMARY),
                )])
            })
            .collect();
        lines.push(Line::from(vec![Span::styled(
            "Universal Motor Controller · Component Selector",
            Style::default().fg(Colors::FG_SECONDARY),
        )]));
        lines
    }
}

/// Render the error/status banner.
///
/// A pending validation error takes precedence over the status line.
pub fn render_banner(f: &mut Frame, state: &AppState, area: Rect) {
    let (text, style) = match &state.error {
        Some(err) => (format!("✗ {}", err), Styles::error()),
        None => (
            state.status_message.clone(),
            Style::default().fg(Colors::FG_SECONDARY),
        ),
    };

    let banner = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(banner, area);
}

/// Render the navigation bar with the current mode's key hints
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints = match state.mode {
        AppMode::Editing => {
            " ↑/↓ option   ←/→ section   Space toggle   g generate   r reset   ? help   q quit"
        }
        AppMode::Reviewing => " Esc back   e export   r reset   ? help   q quit",
    };

    let nav = Paragraph::new(hints).style(Styles::hint());
    f.render_widget(nav, area);
}

/// Render the help overlay centered on top of the current screen
pub fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(56, 16, f.area());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Keyboard Reference", Styles::title())),
        Line::from(""),
        help_line("↑ / ↓", "Move between options"),
        help_line("← / → or Tab", "Move between sections"),
        help_line("Space / Enter", "Select or deselect an option"),
        help_line("g", "Validate and show the order summary"),
        help_line("e", "Export the summary as plain text"),
        help_line("r", "Clear all selections"),
        help_line("Esc", "Leave the summary view"),
        help_line("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Section A requires a base controller before a",
            Style::default().fg(Colors::FG_SECONDARY),
        )),
        Line::from(Span::styled(
            "  summary can be generated.",
            Style::default().fg(Colors::FG_SECONDARY),
        )),
    ];

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .style(Style::default().bg(Colors::BG_PRIMARY));

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn help_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<14}", key),
            Style::default().fg(Colors::SECONDARY),
        ),
        Span::styled(action, Style::default().fg(Colors::FG_PRIMARY)),
    ])
}

/// Compute a centered rectangle of the given size within `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
