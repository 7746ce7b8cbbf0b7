use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Layout helpers shared by the wizard steps.
pub struct LayoutUtils;

impl LayoutUtils {
    /// Create a standard paragraph with title styling
    pub fn create_title_paragraph(title_text: &str) -> Paragraph<'_> {
        Paragraph::new(title_text)
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .block(Block::default().borders(Borders::ALL))
    }

    /// Split a row into `columns` equal-width cells
    pub fn create_column_layout(area: Rect, columns: usize) -> Vec<Rect> {
        let columns = columns.max(1) as u32;
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns)))
            .split(area)
            .to_vec()
    }

    /// Progress indicator on the left, one button on the right
    pub fn create_footer_layout(area: Rect) -> Vec<Rect> {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(2),  // Left margin
                Constraint::Min(0),     // Progress
                Constraint::Length(18), // Button
                Constraint::Length(2),  // Right margin
            ])
            .split(area);

        // Progress text sits on the button's middle line
        let progress = Rect {
            y: chunks[1].y + chunks[1].height.min(3) / 2,
            height: chunks[1].height.min(1),
            ..chunks[1]
        };
        vec![progress, chunks[2]]
    }

    /// Create a horizontal button layout with margins and spacing
    pub fn create_button_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(2),  // Left margin
                Constraint::Length(18), // Left button
                Constraint::Min(0),     // Space between
                Constraint::Length(18), // Right button
                Constraint::Length(2),  // Right margin
            ])
            .split(area)
            .to_vec()
    }
}
