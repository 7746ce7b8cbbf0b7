use std::collections::BTreeMap;

use super::types::*;
use crate::config::FormDefaults;

/// The database step's field record. Owned by the wizard controller; the form
/// only reads it and asks for changes through [`FormPatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    db_type: FieldState,
    db_username: FieldState,
    db_password: FieldState,
    db_host: FieldState,
    db_name: FieldState,
    db_file: FieldState,
    ssl_enabled: FieldState,
    ssl_mode: FieldState,
    ssl_root_cert: FieldState,
    ssl_cert: FieldState,
    ssl_key: FieldState,
}

impl FormState {
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            db_type: FieldState::text(defaults.db_type.clone()),
            db_username: FieldState::text(defaults.db_username.clone()),
            db_password: FieldState::text(defaults.db_password.clone()),
            db_host: FieldState::text(defaults.db_host.clone()),
            db_name: FieldState::text(defaults.db_name.clone()),
            db_file: FieldState::text(defaults.db_file.clone()),
            ssl_enabled: FieldState::flag(defaults.ssl_enabled),
            ssl_mode: FieldState::text(defaults.ssl_mode.clone()),
            ssl_root_cert: FieldState::text(defaults.ssl_root_cert.clone()),
            ssl_cert: FieldState::text(defaults.ssl_cert.clone()),
            ssl_key: FieldState::text(defaults.ssl_key.clone()),
        }
    }

    pub fn get(&self, field: FieldName) -> &FieldState {
        match field {
            FieldName::DbType => &self.db_type,
            FieldName::DbUsername => &self.db_username,
            FieldName::DbPassword => &self.db_password,
            FieldName::DbHost => &self.db_host,
            FieldName::DbName => &self.db_name,
            FieldName::DbFile => &self.db_file,
            FieldName::SslEnabled => &self.ssl_enabled,
            FieldName::SslMode => &self.ssl_mode,
            FieldName::SslRootCert => &self.ssl_root_cert,
            FieldName::SslCert => &self.ssl_cert,
            FieldName::SslKey => &self.ssl_key,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut FieldState {
        match field {
            FieldName::DbType => &mut self.db_type,
            FieldName::DbUsername => &mut self.db_username,
            FieldName::DbPassword => &mut self.db_password,
            FieldName::DbHost => &mut self.db_host,
            FieldName::DbName => &mut self.db_name,
            FieldName::DbFile => &mut self.db_file,
            FieldName::SslEnabled => &mut self.ssl_enabled,
            FieldName::SslMode => &mut self.ssl_mode,
            FieldName::SslRootCert => &mut self.ssl_root_cert,
            FieldName::SslCert => &mut self.ssl_cert,
            FieldName::SslKey => &mut self.ssl_key,
        }
    }

    /// Returns a new state with the patched fields replaced wholesale.
    /// Fields the patch does not name are carried over untouched.
    pub fn apply(&self, patch: &FormPatch) -> FormState {
        let mut next = self.clone();
        for (field, state) in patch.iter() {
            *next.slot_mut(field) = state.clone();
        }
        next
    }

    pub fn text(&self, field: FieldName) -> &str {
        self.get(field).value().as_text()
    }

    pub fn engine_value(&self) -> &str {
        self.text(FieldName::DbType)
    }

    pub fn engine(&self) -> Option<DbEngine> {
        DbEngine::from_value(self.engine_value())
    }

    pub fn is_sqlite(&self) -> bool {
        self.engine() == Some(DbEngine::Sqlite3)
    }

    pub fn tls_enabled(&self) -> bool {
        self.get(FieldName::SslEnabled).value().as_flag()
    }

    pub fn tls_mode(&self) -> TlsMode {
        TlsMode::from_value(self.text(FieldName::SslMode))
    }

    pub fn invalid_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_invalid())
            .collect()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_defaults(&FormDefaults::default())
    }
}

/// A partial update: the listed fields replace the ones in the target state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    fields: BTreeMap<FieldName, FieldState>,
}

impl FormPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldName, state: FieldState) -> Self {
        self.fields.insert(field, state);
        self
    }

    /// A user edit: the new value, with any previous error cleared.
    pub fn edit_text(field: FieldName, value: impl Into<String>) -> Self {
        Self::new().with(field, FieldState::text(value))
    }

    pub fn edit_flag(field: FieldName, value: bool) -> Self {
        Self::new().with(field, FieldState::flag(value))
    }

    /// Flipping the TLS switch also resets the mode and every certificate
    /// path, so nothing stale survives behind the switch.
    pub fn tls_toggle(enabled: bool) -> Self {
        Self::new()
            .with(FieldName::SslEnabled, FieldState::flag(enabled))
            .with(FieldName::SslMode, FieldState::text(TlsMode::Require.value()))
            .with(FieldName::SslRootCert, FieldState::text(""))
            .with(FieldName::SslCert, FieldState::text(""))
            .with(FieldName::SslKey, FieldState::text(""))
    }

    /// Every field of `state`; applying it reproduces `state`.
    pub fn from_state(state: &FormState) -> Self {
        FieldName::ALL
            .into_iter()
            .fold(Self::new(), |patch, field| {
                patch.with(field, state.get(field).clone())
            })
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldState)> {
        self.fields.iter().map(|(field, state)| (*field, state))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
