use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::components::TOTAL_STEPS;
use crate::wizard::WizardStep;

pub struct StatusBarRenderer {
    pub status_message: String,
    pub current_step: WizardStep,
    pub help_text: &'static str,
}

impl StatusBarRenderer {
    pub fn new() -> Self {
        Self {
            status_message: "Ready".to_string(),
            current_step: WizardStep::Database,
            help_text: "",
        }
    }

    pub fn status_text(&self) -> String {
        format!(
            " {} | Step {}/{TOTAL_STEPS} | {} | Ctrl+C - Quit",
            self.status_message,
            self.current_step.index(),
            self.help_text
        )
    }

    pub fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status = Paragraph::new(self.status_text())
            .style(Style::default().bg(Color::Blue).fg(Color::White));
        f.render_widget(status, area);
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn set_current_step(&mut self, step: WizardStep) {
        self.current_step = step;
    }

    pub fn set_help_text(&mut self, help: &'static str) {
        self.help_text = help;
    }
}
