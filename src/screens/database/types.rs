/// Every field the database step knows about, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    DbType,
    DbUsername,
    DbPassword,
    DbHost,
    DbName,
    DbFile,
    SslEnabled,
    SslMode,
    SslRootCert,
    SslCert,
    SslKey,
}

impl FieldName {
    pub const ALL: [FieldName; 11] = [
        FieldName::DbType,
        FieldName::DbUsername,
        FieldName::DbPassword,
        FieldName::DbHost,
        FieldName::DbName,
        FieldName::DbFile,
        FieldName::SslEnabled,
        FieldName::SslMode,
        FieldName::SslRootCert,
        FieldName::SslCert,
        FieldName::SslKey,
    ];

    /// Wire and translation key of the field.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::DbType => "db_type",
            FieldName::DbUsername => "db_username",
            FieldName::DbPassword => "db_password",
            FieldName::DbHost => "db_host",
            FieldName::DbName => "db_name",
            FieldName::DbFile => "db_file",
            FieldName::SslEnabled => "ssl_enabled",
            FieldName::SslMode => "ssl_mode",
            FieldName::SslRootCert => "ssl_root_cert",
            FieldName::SslCert => "ssl_cert",
            FieldName::SslKey => "ssl_key",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldName::DbType | FieldName::SslMode => FieldKind::Select,
            FieldName::SslEnabled => FieldKind::Toggle,
            FieldName::DbPassword => FieldKind::Secret,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Select,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Text content; flags read as an empty string.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Text(_) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Flag(flag) => !*flag,
        }
    }
}

/// Value of one field plus its validation feedback.
///
/// `is_invalid` and `error_msg` are only ever set together, so a field is
/// invalid exactly when it carries a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    value: FieldValue,
    is_invalid: bool,
    error_msg: String,
}

impl FieldState {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: FieldValue::Text(value.into()),
            is_invalid: false,
            error_msg: String::new(),
        }
    }

    pub fn flag(value: bool) -> Self {
        Self {
            value: FieldValue::Flag(value),
            is_invalid: false,
            error_msg: String::new(),
        }
    }

    /// Empty text field flagged with `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            value: FieldValue::Text(String::new()),
            is_invalid: true,
            error_msg: message.into(),
        }
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn is_invalid(&self) -> bool {
        self.is_invalid
    }

    pub fn error_msg(&self) -> &str {
        &self.error_msg
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbEngine {
    Mysql,
    Sqlite3,
    Postgres,
}

impl DbEngine {
    pub const ALL: [DbEngine; 3] = [DbEngine::Mysql, DbEngine::Sqlite3, DbEngine::Postgres];

    pub fn value(self) -> &'static str {
        match self {
            DbEngine::Mysql => "mysql",
            DbEngine::Sqlite3 => "sqlite3",
            DbEngine::Postgres => "postgres",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DbEngine::Mysql => "MariaDB/MySQL",
            DbEngine::Sqlite3 => "SQLite",
            DbEngine::Postgres => "PostgreSQL",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|engine| engine.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    #[default]
    Require,
    VerifyCa,
    VerifyFull,
}

impl TlsMode {
    pub const ALL: [TlsMode; 3] = [TlsMode::Require, TlsMode::VerifyCa, TlsMode::VerifyFull];

    pub fn value(self) -> &'static str {
        match self {
            TlsMode::Require => "require",
            TlsMode::VerifyCa => "verify-ca",
            TlsMode::VerifyFull => "verify-full",
        }
    }

    /// Unknown modes behave like `require`.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|mode| mode.value() == value)
            .unwrap_or_default()
    }

    pub fn requires_certificates(self) -> bool {
        matches!(self, TlsMode::VerifyCa | TlsMode::VerifyFull)
    }
}

/// Cycles through `values` starting at `current`, one step forward or back.
/// A value not in the list starts from the first option.
pub fn cycle_option(values: &[&'static str], current: &str, forward: bool) -> &'static str {
    let len = values.len();
    match values.iter().position(|v| *v == current) {
        Some(idx) if forward => values[(idx + 1) % len],
        Some(idx) => values[(idx + len - 1) % len],
        None => values[0],
    }
}
