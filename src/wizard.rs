use log::info;

use crate::screens::database::{ConnectionStepForm, FormAction, FormState};
use crate::settings::DatabaseSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Database,
    Review,
}

impl WizardStep {
    /// Position in the full installer flow (language comes first).
    pub fn index(self) -> u8 {
        match self {
            WizardStep::Database => ConnectionStepForm::STEP_INDEX,
            WizardStep::Review => ConnectionStepForm::STEP_INDEX + 1,
        }
    }
}

/// Owns the form data for every step and decides which step is shown.
#[derive(Debug, Clone)]
pub struct Wizard {
    form: FormState,
    step: WizardStep,
    finished: bool,
}

impl Wizard {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            step: WizardStep::Database,
            finished: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn step_index(&self) -> u8 {
        self.step.index()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Change(patch) if patch.is_empty() => {}
            FormAction::Change(patch) => self.form = self.form.apply(&patch),
            FormAction::Next => self.next(),
        }
    }

    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = FormAction>) {
        for action in actions {
            self.apply(action);
        }
    }

    fn next(&mut self) {
        if self.step == WizardStep::Database {
            self.step = WizardStep::Review;
            info!("Moved to step {}: review", self.step_index());
        }
    }

    pub fn back(&mut self) {
        if self.step == WizardStep::Review {
            self.step = WizardStep::Database;
            info!("Back to step {}: database", self.step_index());
        }
    }

    pub fn confirm(&mut self) {
        if self.step == WizardStep::Review {
            self.finished = true;
            info!("Database settings confirmed");
        }
    }

    pub fn settings(&self) -> DatabaseSettings {
        DatabaseSettings::from(&self.form)
    }
}
