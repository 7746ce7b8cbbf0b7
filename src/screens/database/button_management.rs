use super::form::{ConnectionStepForm, FormAction};
use super::state::FormState;
use crate::components::{Button, ButtonColor, ButtonId};

impl ConnectionStepForm {
    pub(super) fn setup_buttons(&mut self) {
        self.button_manager.clear();
        self.button_manager.add_button(
            Button::new(ButtonId::Next, self.translator.t("next"))
                .with_hotkey('n')
                .with_color(ButtonColor::Green),
        );
    }

    pub fn handle_button_action(&mut self, id: ButtonId, data: &FormState) -> Vec<FormAction> {
        match id {
            ButtonId::Next => self.submit(data),
            ButtonId::Back | ButtonId::Confirm => Vec::new(),
        }
    }
}
