use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Board, Marker, TextSlot};
use crate::render::Scene;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title and subtitle
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Score
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(scene), chunks[0]);

        // Center the board horizontally
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_board(scene), board_area);
        frame.render_widget(self.render_score(scene), chunks[2]);
        frame.render_widget(self.render_controls(), chunks[3]);
    }

    fn render_header<'a>(&self, scene: &'a Scene) -> Paragraph<'a> {
        let mut lines = Vec::new();

        if let Some(title) = scene.text(TextSlot::Title) {
            lines.push(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(subtitle) = scene.text(TextSlot::Subtitle) {
            lines.push(Line::from(Span::styled(
                subtitle,
                Style::default().fg(Color::Gray),
            )));
        }

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn render_board(&self, scene: &Scene) -> Paragraph<'_> {
        let Some((side, cell)) = scene.board() else {
            return Paragraph::new("");
        };
        let board = Board::new(side, cell);
        let n = board.cells_per_side().max(0) as usize;

        // First marker per cell wins, so segments cover food
        let mut grid: Vec<Vec<Option<(Marker, &str)>>> = vec![vec![None; n]; n];
        for (marker, pos, color) in scene.markers() {
            if let Some((col, row)) = board.grid_index(pos) {
                let slot = &mut grid[row][col];
                if slot.is_none() {
                    *slot = Some((marker, color));
                }
            }
        }

        let lines: Vec<Line> = grid
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(cell_span).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_score<'a>(&self, scene: &'a Scene) -> Paragraph<'a> {
        let score = scene.text(TextSlot::Score).unwrap_or_default();
        Paragraph::new(Line::from(Span::styled(
            score,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Click", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" to start | "),
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_span(cell: Option<(Marker, &str)>) -> Span<'static> {
    match cell {
        Some((Marker::Segment(0), color)) => Span::styled(
            "■ ",
            Style::default()
                .fg(parse_color(color))
                .add_modifier(Modifier::BOLD),
        ),
        Some((Marker::Segment(_), color)) => {
            Span::styled("□ ", Style::default().fg(parse_color(color)))
        }
        Some((Marker::Food, color)) => Span::styled(
            "● ",
            Style::default()
                .fg(parse_color(color))
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

/// Color names from the config; unknown names fall back to white
fn parse_color(name: &str) -> Color {
    name.parse().unwrap_or(Color::White)
}
