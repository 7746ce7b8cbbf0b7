//! Database connection step of the install wizard.
//!
//! The step renders the fields that apply to the chosen engine, turns every
//! edit into a [`FormPatch`] and validates required fields on submit. Field
//! values themselves belong to the wizard controller.

pub use form::{ConnectionStepForm, Focus, FormAction};
pub use state::{FormPatch, FormState};
pub use types::*;
pub use validator::{ConnectValidator, IssueKind, Validation, ValidationIssue};
pub use view::ViewVariant;

mod button_management;
mod form;
mod input;
mod render;
mod state;
pub mod types;
mod validator;
mod view;
