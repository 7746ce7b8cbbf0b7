use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Language, database, config file, site info, done.
pub const TOTAL_STEPS: u8 = 5;

/// Dot-per-step indicator, e.g. `●●○○○ 2/5`.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    step: u8,
}

impl Progress {
    pub fn new(step: u8) -> Self {
        Self {
            step: step.clamp(1, TOTAL_STEPS),
        }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans: Vec<Span> = (1..=TOTAL_STEPS)
            .map(|idx| {
                if idx <= self.step {
                    Span::styled("●", Style::default().fg(Color::Green))
                } else {
                    Span::styled("○", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        spans.push(Span::raw(format!(" {}/{TOTAL_STEPS}", self.step)));
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()), area);
    }
}
