use serde::Serialize;

use crate::screens::database::{FieldName, FormState};

/// What the database step hands to the installer once the wizard is
/// confirmed. Keys match the form's field names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub db_type: String,
    pub db_username: String,
    pub db_password: String,
    pub db_host: String,
    pub db_name: String,
    pub db_file: String,
    pub ssl_enabled: bool,
    pub ssl_mode: String,
    pub ssl_root_cert: String,
    pub ssl_cert: String,
    pub ssl_key: String,
}

impl From<&FormState> for DatabaseSettings {
    fn from(state: &FormState) -> Self {
        let text = |field| state.text(field).to_string();
        Self {
            db_type: text(FieldName::DbType),
            db_username: text(FieldName::DbUsername),
            db_password: text(FieldName::DbPassword),
            db_host: text(FieldName::DbHost),
            db_name: text(FieldName::DbName),
            db_file: text(FieldName::DbFile),
            ssl_enabled: state.tls_enabled(),
            ssl_mode: text(FieldName::SslMode),
            ssl_root_cert: text(FieldName::SslRootCert),
            ssl_cert: text(FieldName::SslCert),
            ssl_key: text(FieldName::SslKey),
        }
    }
}

impl DatabaseSettings {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
