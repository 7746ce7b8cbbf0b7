use log::warn;

use super::state::{FormPatch, FormState};
use super::types::*;
use crate::i18n::Translator;

const NETWORK_REQUIRED: [FieldName; 4] = [
    FieldName::DbUsername,
    FieldName::DbPassword,
    FieldName::DbHost,
    FieldName::DbName,
];
const SQLITE_REQUIRED: [FieldName; 1] = [FieldName::DbFile];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    RequiredFieldMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: FieldName,
    pub kind: IssueKind,
}

/// Result of a submit-time check: the full state to hand back to the
/// controller, with every failing field marked.
#[derive(Debug, Clone)]
pub struct Validation {
    pub patch: FormPatch,
    pub issues: Vec<ValidationIssue>,
}

impl Validation {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

pub struct ConnectValidator;

impl ConnectValidator {
    pub fn required_fields(data: &FormState) -> &'static [FieldName] {
        if data.is_sqlite() {
            &SQLITE_REQUIRED
        } else {
            &NETWORK_REQUIRED
        }
    }

    /// Marks every empty required field invalid. TLS mode and certificate
    /// paths are not checked, whatever the TLS switch says.
    pub fn check_validated(data: &FormState, t: &Translator) -> Validation {
        let mut marked = FormPatch::new();
        let mut issues = Vec::new();

        for &field in Self::required_fields(data) {
            if data.get(field).value().is_empty() {
                let key = field.key();
                let issue = ValidationIssue {
                    field,
                    kind: IssueKind::RequiredFieldMissing,
                };
                warn!("Database step: {key} {:?}", issue.kind);
                marked = marked.with(field, FieldState::invalid(t.t(&format!("{key}.msg"))));
                issues.push(issue);
            }
        }

        Validation {
            patch: FormPatch::from_state(&data.apply(&marked)),
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(edits: &[(FieldName, &str)]) -> FormState {
        edits.iter().fold(FormState::default(), |state, (field, value)| {
            state.apply(&FormPatch::edit_text(*field, *value))
        })
    }

    fn missing(validation: &Validation) -> Vec<FieldName> {
        validation.issues.iter().map(|i| i.field).collect()
    }

    #[test]
    fn complete_network_form_passes() {
        let data = state(&[(FieldName::DbPassword, "secret")]);
        let validation = ConnectValidator::check_validated(&data, &Translator::default());
        assert!(validation.passed());
        let after = data.apply(&validation.patch);
        assert_eq!(after, data);
        assert!(after.invalid_fields().is_empty());
    }

    #[test]
    fn empty_network_fields_are_marked_exactly() {
        let data = state(&[
            (FieldName::DbUsername, ""),
            (FieldName::DbPassword, ""),
            (FieldName::DbHost, "db:3306"),
            (FieldName::DbName, ""),
        ]);
        let validation = ConnectValidator::check_validated(&data, &Translator::default());
        assert!(!validation.passed());
        assert_eq!(
            missing(&validation),
            vec![FieldName::DbUsername, FieldName::DbPassword, FieldName::DbName]
        );

        let after = data.apply(&validation.patch);
        assert_eq!(
            after.invalid_fields(),
            vec![FieldName::DbUsername, FieldName::DbPassword, FieldName::DbName]
        );
        assert_eq!(
            after.get(FieldName::DbUsername).error_msg(),
            "Username cannot be empty."
        );
    }

    #[test]
    fn sqlite_checks_only_the_file_path() {
        let data = state(&[
            (FieldName::DbType, "sqlite3"),
            (FieldName::DbFile, ""),
            (FieldName::DbUsername, ""),
            (FieldName::DbPassword, ""),
        ]);
        let validation = ConnectValidator::check_validated(&data, &Translator::default());
        assert_eq!(missing(&validation), vec![FieldName::DbFile]);
        let after = data.apply(&validation.patch);
        assert_eq!(after.invalid_fields(), vec![FieldName::DbFile]);
    }

    #[test]
    fn sqlite_leaves_other_fields_untouched() {
        let flagged = FormState::default().apply(
            &FormPatch::new().with(FieldName::DbHost, FieldState::invalid("old message")),
        );
        let data = flagged.apply(&FormPatch::edit_text(FieldName::DbType, "sqlite3"));
        let validation = ConnectValidator::check_validated(&data, &Translator::default());
        assert!(validation.passed());
        let after = data.apply(&validation.patch);
        assert_eq!(after.get(FieldName::DbHost).error_msg(), "old message");
    }

    #[test]
    fn tls_paths_are_not_validated() {
        let data = state(&[
            (FieldName::DbType, "postgres"),
            (FieldName::DbPassword, "secret"),
        ])
        .apply(&FormPatch::tls_toggle(true))
        .apply(&FormPatch::edit_text(FieldName::SslMode, "verify-full"));

        let validation = ConnectValidator::check_validated(&data, &Translator::default());
        assert!(validation.passed());
    }

    #[test]
    fn blank_message_override_still_yields_a_message() {
        let t = Translator::with_overrides(std::collections::HashMap::from([(
            "db_password.msg".to_string(),
            String::new(),
        )]));
        let validation = ConnectValidator::check_validated(&FormState::default(), &t);
        let after = FormState::default().apply(&validation.patch);
        let password = after.get(FieldName::DbPassword);
        assert!(password.is_invalid());
        assert_eq!(password.error_msg(), "Password cannot be empty.");
    }

    #[test]
    fn whitespace_counts_as_content() {
        let data = state(&[(FieldName::DbPassword, " ")]);
        let validation = ConnectValidator::check_validated(&data, &Translator::default());
        assert!(validation.passed());
    }
}
