use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::form::{ConnectionStepForm, Focus};
use super::state::FormState;
use super::types::*;
use super::view::ViewVariant;
use crate::components::Progress;
use crate::ui_utils::LayoutUtils;

const FIELD_HEIGHT: u16 = 3;

impl ConnectionStepForm {
    /// Draws the step into `area`. Draws nothing at all when not visible.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FormState, visible: bool) {
        self.field_areas.clear();
        if !visible {
            return;
        }
        self.ensure_focus_visible(data);
        self.sync_input(data);

        let view = ViewVariant::for_state(data);
        let rows = Self::rows(view);

        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(rows.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(3));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let title = format!(
            "{} - {}",
            self.translator.t("title"),
            self.translator.t("db_step.title")
        );
        f.render_widget(LayoutUtils::create_title_paragraph(&title), chunks[0]);

        for (row, chunk) in rows.iter().zip(chunks.iter().skip(1)) {
            if row.len() == 1 {
                self.render_field(f, *chunk, row[0], data);
            } else {
                let columns = LayoutUtils::create_column_layout(*chunk, row.len());
                for (field, column) in row.iter().zip(columns) {
                    self.render_field(f, column, *field, data);
                }
            }
        }

        let footer = LayoutUtils::create_footer_layout(chunks[chunks.len() - 1]);
        Progress::new(Self::STEP_INDEX).render(f, footer[0]);
        self.button_manager.render_buttons(f, &[footer[1]]);
    }

    /// Groups visible fields into screen rows; the certificate paths share one.
    fn rows(view: ViewVariant) -> Vec<Vec<FieldName>> {
        let mut rows: Vec<Vec<FieldName>> = Vec::new();
        for field in view.fields() {
            let is_cert = matches!(
                field,
                FieldName::SslRootCert | FieldName::SslCert | FieldName::SslKey
            );
            match rows.last_mut() {
                Some(row) if is_cert && row.first() == Some(&FieldName::SslRootCert) => {
                    row.push(*field)
                }
                _ => rows.push(vec![*field]),
            }
        }
        rows
    }

    fn render_field(&mut self, f: &mut Frame, area: Rect, field: FieldName, data: &FormState) {
        self.field_areas.push((field, area));

        let state = data.get(field);
        let focused = self.focus == Focus::Field(field);
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else if state.is_invalid() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        if let Some(label) = self.label(field) {
            block = block.title(label);
        }
        if state.is_invalid() {
            block = block.title_bottom(Line::styled(
                state.error_msg().to_string(),
                Style::default().fg(Color::Red),
            ));
        }

        let text_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        match field.kind() {
            FieldKind::Select => {
                let current = data.text(field);
                let shown = match field {
                    FieldName::DbType => DbEngine::from_value(current)
                        .map(DbEngine::label)
                        .unwrap_or(current),
                    _ => current,
                };
                let line = Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(shown.to_string(), text_style),
                    Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
                ]);
                f.render_widget(Paragraph::new(line).block(block), area);
            }
            FieldKind::Toggle => {
                let (mark, key) = if state.value().as_flag() {
                    ("☑", "ssl_enabled_on.label")
                } else {
                    ("☐", "ssl_enabled_off.label")
                };
                let text = format!("{mark} {}", self.translator.t(key));
                f.render_widget(Paragraph::new(text).style(text_style).block(block), area);
            }
            FieldKind::Text | FieldKind::Secret => {
                self.render_text_field(f, area, field, data, block, text_style, focused);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_text_field(
        &self,
        f: &mut Frame,
        area: Rect,
        field: FieldName,
        data: &FormState,
        block: Block,
        text_style: Style,
        focused: bool,
    ) {
        let value = data.text(field);
        let width = area.width.max(3) - 3;
        let scroll = if focused {
            self.input.visual_scroll(width as usize)
        } else {
            0
        };

        let paragraph = if value.is_empty() && !focused {
            Paragraph::new(self.translator.t(&format!("{}.placeholder", field.key())))
                .style(Style::default().fg(Color::DarkGray))
        } else if field.kind() == FieldKind::Secret {
            Paragraph::new("*".repeat(value.chars().count())).style(text_style)
        } else {
            Paragraph::new(value.to_string()).style(text_style)
        };
        f.render_widget(
            paragraph.scroll((0, scroll as u16)).block(block),
            area,
        );

        if focused {
            let cursor_x = self.input.visual_cursor().max(scroll) - scroll + 1;
            f.set_cursor_position((area.x + cursor_x as u16, area.y + 1));
        }
    }

    /// Block title for a field; the certificate paths go without one and rely
    /// on their placeholder.
    fn label(&self, field: FieldName) -> Option<String> {
        match field {
            FieldName::SslRootCert | FieldName::SslCert | FieldName::SslKey => None,
            _ => Some(self.translator.t(&format!("{}.label", field.key()))),
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self.focus {
            Focus::Field(field) => match field.kind() {
                FieldKind::Select => "←→ - Change | Tab/↑↓ - Move | Enter/Alt+N - Next",
                FieldKind::Toggle => "Space - Toggle | Tab/↑↓ - Move | Enter/Alt+N - Next",
                FieldKind::Text | FieldKind::Secret => {
                    "Type to edit | Tab/↑↓ - Move | Enter/Alt+N - Next"
                }
            },
            Focus::Submit => "Enter/Space - Next | Tab/↑↓ - Move",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translator;
    use crate::screens::database::{FieldState, FormPatch};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn render(form: &mut ConnectionStepForm, data: &FormState, visible: bool) -> String {
        let backend = TestBackend::new(90, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| form.render(f, f.area(), data, visible))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn network_engine_shows_credentials_host_and_name() {
        let mut form = ConnectionStepForm::new(Translator::default());
        let output = render(&mut form, &FormState::default(), true);
        assert!(output.contains("Database engine"));
        assert!(output.contains("MariaDB/MySQL"));
        assert!(output.contains("Username"));
        assert!(output.contains("Password"));
        assert!(output.contains("Database host"));
        assert!(output.contains("Database name"));
        assert!(!output.contains("Database file"));
        assert!(!output.contains("Enable SSL"));
        assert!(output.contains("2/5"));
        assert!(output.contains("Next"));
    }

    #[test]
    fn sqlite_shows_only_file_path() {
        let data = FormState::default().apply(&FormPatch::edit_text(FieldName::DbType, "sqlite3"));
        let mut form = ConnectionStepForm::new(Translator::default());
        let output = render(&mut form, &data, true);
        assert!(output.contains("Database file"));
        assert!(output.contains("/data/answer.db"));
        assert!(!output.contains("Username"));
        assert!(!output.contains("Database host"));
    }

    #[test]
    fn verify_modes_show_certificate_placeholders() {
        let data = FormState::default()
            .apply(&FormPatch::edit_text(FieldName::DbType, "postgres"))
            .apply(&FormPatch::tls_toggle(true));
        let mut form = ConnectionStepForm::new(Translator::default());

        let output = render(&mut form, &data, true);
        assert!(output.contains("Enable SSL"));
        assert!(output.contains("SSL Mode"));
        assert!(!output.contains("sslrootcert file path"));

        let data = data.apply(&FormPatch::edit_text(FieldName::SslMode, "verify-ca"));
        let output = render(&mut form, &data, true);
        assert!(output.contains("sslrootcert file path"));
        assert!(output.contains("sslcert file path"));
        assert!(output.contains("sslkey file path"));
    }

    #[test]
    fn invalid_field_shows_its_message() {
        let data = FormState::default().apply(
            &FormPatch::new().with(FieldName::DbPassword, FieldState::invalid("Password cannot be empty.")),
        );
        let mut form = ConnectionStepForm::new(Translator::default());
        let output = render(&mut form, &data, true);
        assert!(output.contains("Password cannot be empty."));
    }

    #[test]
    fn password_is_masked() {
        let data = FormState::default().apply(&FormPatch::edit_text(FieldName::DbPassword, "hunter2"));
        let mut form = ConnectionStepForm::new(Translator::default());
        let output = render(&mut form, &data, true);
        assert!(!output.contains("hunter2"));
        assert!(output.contains("*******"));
    }

    #[test]
    fn hidden_step_draws_nothing() {
        let data = FormState::default().apply(
            &FormPatch::new().with(FieldName::DbHost, FieldState::invalid("Database host cannot be empty.")),
        );
        let mut form = ConnectionStepForm::new(Translator::default());
        let output = render(&mut form, &data, false);
        assert!(output.chars().all(|c| c == ' ' || c == '\n'));
        assert!(form.field_areas.is_empty());
    }

    #[test]
    fn certificate_fields_share_a_row() {
        let rows = ConnectionStepForm::rows(ViewVariant::PostgresTlsCertificates);
        assert_eq!(rows.len(), 8);
        assert_eq!(
            rows[5],
            vec![FieldName::SslRootCert, FieldName::SslCert, FieldName::SslKey]
        );
    }
}
