use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::components::{Button, ButtonColor, ButtonId, ButtonManager, Progress};
use crate::i18n::Translator;
use crate::settings::DatabaseSettings;
use crate::ui_utils::LayoutUtils;
use crate::wizard::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Back,
    Confirm,
}

/// Read-only summary shown after the database step.
pub struct ReviewScreen {
    translator: Translator,
    button_manager: ButtonManager,
}

impl ReviewScreen {
    pub fn new(translator: Translator) -> Self {
        let mut button_manager = ButtonManager::new();
        button_manager.add_button(
            Button::new(ButtonId::Back, translator.t("back"))
                .with_hotkey('b')
                .with_color(ButtonColor::Blue),
        );
        button_manager.add_button(
            Button::new(ButtonId::Confirm, translator.t("confirm"))
                .with_hotkey('o')
                .with_color(ButtonColor::Green),
        );
        Self {
            translator,
            button_manager,
        }
    }

    pub fn handle_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Option<ReviewAction> {
        if let Some(id) = self.button_manager.handle_hotkey(key, modifiers) {
            return Self::action_for(id);
        }
        match key {
            KeyCode::Enter => Some(ReviewAction::Confirm),
            KeyCode::Esc => Some(ReviewAction::Back),
            _ => None,
        }
    }

    pub fn handle_mouse_click(&mut self, column: u16, row: u16) -> Option<ReviewAction> {
        self.button_manager
            .handle_mouse_click(column, row)
            .and_then(Self::action_for)
    }

    fn action_for(id: ButtonId) -> Option<ReviewAction> {
        match id {
            ButtonId::Back => Some(ReviewAction::Back),
            ButtonId::Confirm => Some(ReviewAction::Confirm),
            ButtonId::Next => None,
        }
    }

    fn summary_lines(&self, settings: &DatabaseSettings) -> Vec<Line<'static>> {
        let row = |key: &str, value: String| {
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", self.translator.t(&format!("{key}.label"))),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(value),
            ])
        };

        let mut lines = vec![row("db_type", settings.db_type.clone())];
        if settings.db_type == "sqlite3" {
            lines.push(row("db_file", settings.db_file.clone()));
            return lines;
        }

        lines.push(row("db_username", settings.db_username.clone()));
        lines.push(row("db_password", "*".repeat(settings.db_password.chars().count())));
        lines.push(row("db_host", settings.db_host.clone()));
        lines.push(row("db_name", settings.db_name.clone()));
        if settings.db_type == "postgres" && settings.ssl_enabled {
            lines.push(row("ssl_mode", settings.ssl_mode.clone()));
            for (name, value) in [
                ("sslrootcert", &settings.ssl_root_cert),
                ("sslcert", &settings.ssl_cert),
                ("sslkey", &settings.ssl_key),
            ] {
                if !value.is_empty() {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{name:<16}"), Style::default().fg(Color::DarkGray)),
                        Span::raw(value.clone()),
                    ]));
                }
            }
        }
        lines
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, settings: &DatabaseSettings, visible: bool) {
        if !visible {
            return;
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Summary
                Constraint::Length(1), // Progress
                Constraint::Length(3), // Buttons
            ])
            .split(area);

        let title = format!(
            "{} - {}",
            self.translator.t("title"),
            self.translator.t("review.title")
        );
        f.render_widget(LayoutUtils::create_title_paragraph(&title), chunks[0]);

        let summary = Paragraph::new(self.summary_lines(settings))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(self.translator.t("review.hint"))
                    .borders(Borders::ALL),
            );
        f.render_widget(summary, chunks[1]);

        Progress::new(WizardStep::Review.index()).render(f, chunks[2]);

        let buttons = LayoutUtils::create_button_layout(chunks[3]);
        self.button_manager.render_buttons(f, &[buttons[1], buttons[3]]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::database::{FieldName, FormPatch, FormState};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(settings: &DatabaseSettings) -> String {
        let mut screen = ReviewScreen::new(Translator::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| screen.render(f, f.area(), settings, true))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn masks_password_and_lists_network_fields() {
        let state = FormState::default().apply(&FormPatch::edit_text(FieldName::DbPassword, "s3cret"));
        let output = render(&DatabaseSettings::from(&state));
        assert!(output.contains("db:3306"));
        assert!(output.contains("******"));
        assert!(!output.contains("s3cret"));
        assert!(output.contains("3/5"));
    }

    #[test]
    fn sqlite_summary_lists_only_the_file() {
        let state = FormState::default().apply(&FormPatch::edit_text(FieldName::DbType, "sqlite3"));
        let output = render(&DatabaseSettings::from(&state));
        assert!(output.contains("/data/answer.db"));
        assert!(!output.contains("db:3306"));
    }

    #[test]
    fn keys_map_to_actions() {
        let mut screen = ReviewScreen::new(Translator::default());
        assert_eq!(
            screen.handle_input(KeyCode::Enter, KeyModifiers::NONE),
            Some(ReviewAction::Confirm)
        );
        assert_eq!(
            screen.handle_input(KeyCode::Char('b'), KeyModifiers::ALT),
            Some(ReviewAction::Back)
        );
        assert_eq!(screen.handle_input(KeyCode::Char('x'), KeyModifiers::NONE), None);
    }
}
