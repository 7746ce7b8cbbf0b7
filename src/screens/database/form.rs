use log::{debug, info};
use ratatui::layout::Rect;
use tui_input::Input;

use super::state::{FormPatch, FormState};
use super::types::*;
use super::validator::ConnectValidator;
use super::view::ViewVariant;
use crate::components::{ButtonId, ButtonManager};
use crate::i18n::Translator;

/// What the step asks of its controller. `Change` patches are merged into the
/// controller's [`FormState`] in order; `Next` advances the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Change(FormPatch),
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Submit,
}

/// The database connection step. Holds only what the screen needs between
/// events (focus, text cursor, buttons); field values live in the
/// controller's [`FormState`].
pub struct ConnectionStepForm {
    pub(super) translator: Translator,
    pub(super) focus: Focus,
    pub(super) input: Input,
    pub(super) button_manager: ButtonManager,
    /// Field rectangles from the last render, for mouse hit-testing.
    pub(super) field_areas: Vec<(FieldName, Rect)>,
}

impl ConnectionStepForm {
    /// Wizard-wide index of this step.
    pub const STEP_INDEX: u8 = 2;

    pub fn new(translator: Translator) -> Self {
        let mut form = Self {
            translator,
            focus: Focus::Field(FieldName::DbType),
            input: Input::default(),
            button_manager: ButtonManager::new(),
            field_areas: Vec::new(),
        };
        form.setup_buttons();
        form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Focus order: visible fields top to bottom, then the submit button.
    pub fn focus_order(data: &FormState) -> Vec<Focus> {
        ViewVariant::for_state(data)
            .fields()
            .iter()
            .map(|field| Focus::Field(*field))
            .chain(std::iter::once(Focus::Submit))
            .collect()
    }

    /// Moves focus back to the engine selector when the focused field is no
    /// longer part of the view.
    pub fn ensure_focus_visible(&mut self, data: &FormState) {
        if let Focus::Field(field) = self.focus {
            if !ViewVariant::for_state(data).shows(field) {
                self.set_focus(Focus::Field(FieldName::DbType), data);
            }
        }
    }

    pub fn set_focus(&mut self, focus: Focus, data: &FormState) {
        self.focus = focus;
        self.button_manager.focus(match focus {
            Focus::Submit => Some(ButtonId::Next),
            Focus::Field(_) => None,
        });
        self.input = match focus {
            Focus::Field(field) => Input::default().with_value(data.text(field).to_string()),
            Focus::Submit => Input::default(),
        };
    }

    pub fn focus_next(&mut self, data: &FormState) {
        self.step_focus(data, true);
    }

    pub fn focus_prev(&mut self, data: &FormState) {
        self.step_focus(data, false);
    }

    fn step_focus(&mut self, data: &FormState, forward: bool) {
        let order = Self::focus_order(data);
        let len = order.len();
        let next = match order.iter().position(|f| *f == self.focus) {
            Some(idx) if forward => order[(idx + 1) % len],
            Some(idx) => order[(idx + len - 1) % len],
            None => order[0],
        };
        self.set_focus(next, data);
    }

    /// Keeps the text buffer in step with the controller's value, which may
    /// have been changed by another patch (e.g. the TLS reset).
    pub(super) fn sync_input(&mut self, data: &FormState) {
        if let Focus::Field(field) = self.focus {
            let current = data.text(field);
            if self.input.value() != current {
                self.input = Input::default().with_value(current.to_string());
            }
        }
    }

    /// A single field edit: new value, error cleared.
    pub fn change_field(&self, field: FieldName, value: FieldValue) -> FormAction {
        if field == FieldName::DbPassword {
            debug!("Database step: {} edited", field.key());
        } else {
            debug!("Database step: {} = {value:?}", field.key());
        }
        let patch = match value {
            FieldValue::Text(text) => FormPatch::edit_text(field, text),
            FieldValue::Flag(flag) => FormPatch::edit_flag(field, flag),
        };
        FormAction::Change(patch)
    }

    pub fn toggle_tls(&self, data: &FormState) -> FormAction {
        let enabled = !data.tls_enabled();
        info!(
            "Database step: SSL {}",
            if enabled { "enabled" } else { "disabled" }
        );
        FormAction::Change(FormPatch::tls_toggle(enabled))
    }

    /// Validates and reports the full state back; asks to advance only when
    /// every required field is filled in.
    pub fn submit(&self, data: &FormState) -> Vec<FormAction> {
        let validation = ConnectValidator::check_validated(data, &self.translator);
        let passed = validation.passed();
        let mut actions = vec![FormAction::Change(validation.patch)];
        if passed {
            info!(
                "Database step complete ({})",
                data.engine().map(DbEngine::label).unwrap_or("unknown engine")
            );
            actions.push(FormAction::Next);
        } else {
            let missing: Vec<&str> = validation
                .issues
                .iter()
                .map(|issue| issue.field.key())
                .collect();
            info!("Database step: missing {}", missing.join(", "));
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postgres() -> FormState {
        FormState::default().apply(&FormPatch::edit_text(FieldName::DbType, "postgres"))
    }

    #[test]
    fn submit_with_missing_password_blocks_next() {
        let form = ConnectionStepForm::new(Translator::default());
        let actions = form.submit(&FormState::default());
        assert_eq!(actions.len(), 1);
        let FormAction::Change(patch) = &actions[0] else {
            panic!("expected a change");
        };
        assert_eq!(patch.len(), FieldName::ALL.len());
        assert!(patch.get(FieldName::DbPassword).unwrap().is_invalid());
    }

    #[test]
    fn submit_with_complete_form_advances_once() {
        let form = ConnectionStepForm::new(Translator::default());
        let data = FormState::default().apply(&FormPatch::edit_text(FieldName::DbPassword, "pw"));
        let actions = form.submit(&data);
        assert_eq!(actions.iter().filter(|a| **a == FormAction::Next).count(), 1);
        assert!(matches!(actions[0], FormAction::Change(_)));
        assert_eq!(actions.last(), Some(&FormAction::Next));
    }

    fn submit_with_empty_credentials(engine: &str) -> (Vec<FormAction>, FormState) {
        let data = [
            FieldName::DbUsername,
            FieldName::DbPassword,
            FieldName::DbHost,
            FieldName::DbName,
        ]
        .into_iter()
        .fold(
            FormState::default().apply(&FormPatch::edit_text(FieldName::DbType, engine)),
            |state, field| state.apply(&FormPatch::edit_text(field, "")),
        );
        let form = ConnectionStepForm::new(Translator::default());
        let actions = form.submit(&data);
        let after = actions.iter().fold(data, |state, action| match action {
            FormAction::Change(patch) => state.apply(patch),
            FormAction::Next => state,
        });
        (actions, after)
    }

    #[test]
    fn postgres_and_unknown_engines_require_network_fields() {
        for engine in ["postgres", "oracle"] {
            let (actions, after) = submit_with_empty_credentials(engine);
            assert!(!actions.contains(&FormAction::Next), "{engine}");
            assert_eq!(actions.len(), 1, "{engine}");
            assert_eq!(
                after.invalid_fields(),
                vec![
                    FieldName::DbUsername,
                    FieldName::DbPassword,
                    FieldName::DbHost,
                    FieldName::DbName,
                ],
                "{engine}"
            );
            assert!(!after.get(FieldName::DbFile).is_invalid());
            assert_eq!(after.text(FieldName::DbType), engine);
        }
    }

    #[test]
    fn postgres_with_tls_still_requires_only_network_fields() {
        let data = postgres()
            .apply(&FormPatch::tls_toggle(true))
            .apply(&FormPatch::edit_text(FieldName::SslMode, "verify-ca"))
            .apply(&FormPatch::edit_text(FieldName::DbHost, ""));
        let form = ConnectionStepForm::new(Translator::default());
        let actions = form.submit(&data);
        assert!(!actions.contains(&FormAction::Next));
        let FormAction::Change(patch) = &actions[0] else {
            panic!("expected a change");
        };
        assert_eq!(
            data.apply(patch).invalid_fields(),
            vec![FieldName::DbPassword, FieldName::DbHost]
        );
    }

    #[test]
    fn focus_order_follows_view_and_ends_on_submit() {
        let order = ConnectionStepForm::focus_order(&postgres());
        assert_eq!(order.first(), Some(&Focus::Field(FieldName::DbType)));
        assert_eq!(order[3], Focus::Field(FieldName::SslEnabled));
        assert_eq!(order.last(), Some(&Focus::Submit));
    }

    #[test]
    fn focus_wraps_around() {
        let data = FormState::default();
        let mut form = ConnectionStepForm::new(Translator::default());
        form.focus_prev(&data);
        assert_eq!(form.focus(), Focus::Submit);
        form.focus_next(&data);
        assert_eq!(form.focus(), Focus::Field(FieldName::DbType));
    }

    #[test]
    fn hidden_focus_falls_back_to_engine() {
        let data = FormState::default();
        let mut form = ConnectionStepForm::new(Translator::default());
        form.set_focus(Focus::Field(FieldName::DbHost), &data);

        let sqlite = data.apply(&FormPatch::edit_text(FieldName::DbType, "sqlite3"));
        form.ensure_focus_visible(&sqlite);
        assert_eq!(form.focus(), Focus::Field(FieldName::DbType));
    }

    #[test]
    fn change_field_clears_previous_error() {
        let form = ConnectionStepForm::new(Translator::default());
        let FormAction::Change(patch) =
            form.change_field(FieldName::DbHost, FieldValue::Text("x".into()))
        else {
            panic!("expected a change");
        };
        assert_eq!(patch.len(), 1);
        let field = patch.get(FieldName::DbHost).unwrap();
        assert!(!field.is_invalid());
        assert_eq!(field.error_msg(), "");
    }
}
