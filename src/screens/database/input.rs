use crossterm::event::{KeyCode, KeyModifiers};
use tui_input::InputRequest;

use super::form::{ConnectionStepForm, Focus, FormAction};
use super::state::FormState;
use super::types::*;

impl ConnectionStepForm {
    pub fn handle_input(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
        data: &FormState,
    ) -> Vec<FormAction> {
        self.ensure_focus_visible(data);

        if let Some(button_id) = self.button_manager.handle_hotkey(key, modifiers) {
            return self.handle_button_action(button_id, data);
        }

        match key {
            KeyCode::Enter => self.submit(data),
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                self.focus_prev(data);
                Vec::new()
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next(data);
                Vec::new()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev(data);
                Vec::new()
            }
            _ => match self.focus {
                Focus::Submit if key == KeyCode::Char(' ') => self.submit(data),
                Focus::Submit => Vec::new(),
                Focus::Field(field) => self.handle_field_input(field, key, modifiers, data),
            },
        }
    }

    pub fn handle_mouse_click(&mut self, column: u16, row: u16, data: &FormState) -> Vec<FormAction> {
        if let Some(button_id) = self.button_manager.handle_mouse_click(column, row) {
            self.set_focus(Focus::Submit, data);
            return self.handle_button_action(button_id, data);
        }

        let hit = self.field_areas.iter().find(|(_, area)| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        });
        if let Some((field, _)) = hit.copied() {
            self.set_focus(Focus::Field(field), data);
            if field.kind() == FieldKind::Toggle {
                return vec![self.toggle_tls(data)];
            }
        }
        Vec::new()
    }

    fn handle_field_input(
        &mut self,
        field: FieldName,
        key: KeyCode,
        modifiers: KeyModifiers,
        data: &FormState,
    ) -> Vec<FormAction> {
        match field.kind() {
            FieldKind::Select => self.handle_select_input(field, key, data),
            FieldKind::Toggle => match key {
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => vec![self.toggle_tls(data)],
                _ => Vec::new(),
            },
            FieldKind::Text | FieldKind::Secret => {
                self.handle_text_input(field, key, modifiers, data)
            }
        }
    }

    fn handle_select_input(
        &mut self,
        field: FieldName,
        key: KeyCode,
        data: &FormState,
    ) -> Vec<FormAction> {
        let forward = match key {
            KeyCode::Right | KeyCode::Char(' ') => true,
            KeyCode::Left => false,
            _ => return Vec::new(),
        };
        let options: Vec<&'static str> = match field {
            FieldName::DbType => DbEngine::ALL.iter().map(|e| e.value()).collect(),
            FieldName::SslMode => TlsMode::ALL.iter().map(|m| m.value()).collect(),
            _ => return Vec::new(),
        };
        let next = cycle_option(&options, data.text(field), forward);
        vec![self.change_field(field, FieldValue::Text(next.to_string()))]
    }

    fn handle_text_input(
        &mut self,
        field: FieldName,
        key: KeyCode,
        modifiers: KeyModifiers,
        data: &FormState,
    ) -> Vec<FormAction> {
        let request = match key {
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                InputRequest::InsertChar(c)
            }
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return Vec::new(),
        };

        self.sync_input(data);
        match self.input.handle(request) {
            Some(changed) if changed.value => vec![self.change_field(
                field,
                FieldValue::Text(self.input.value().to_string()),
            )],
            _ => Vec::new(),
        }
    }
}
