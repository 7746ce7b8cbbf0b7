use super::state::FormState;
use super::types::*;

/// Which group of fields the step shows, derived from the engine and TLS
/// switches only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewVariant {
    Sqlite,
    /// MySQL/MariaDB, or any engine string we don't recognize.
    Network,
    Postgres,
    PostgresTls,
    PostgresTlsCertificates,
}

impl ViewVariant {
    pub fn select(engine: &str, tls_enabled: bool, tls_mode: TlsMode) -> Self {
        match DbEngine::from_value(engine) {
            Some(DbEngine::Sqlite3) => ViewVariant::Sqlite,
            Some(DbEngine::Postgres) if !tls_enabled => ViewVariant::Postgres,
            Some(DbEngine::Postgres) if tls_mode.requires_certificates() => {
                ViewVariant::PostgresTlsCertificates
            }
            Some(DbEngine::Postgres) => ViewVariant::PostgresTls,
            Some(DbEngine::Mysql) | None => ViewVariant::Network,
        }
    }

    pub fn for_state(state: &FormState) -> Self {
        Self::select(
            state.engine_value(),
            state.tls_enabled(),
            state.tls_mode(),
        )
    }

    /// Visible fields, top to bottom. The three certificate paths share one row.
    pub fn fields(self) -> &'static [FieldName] {
        use FieldName::*;
        match self {
            ViewVariant::Sqlite => &[DbType, DbFile],
            ViewVariant::Network => &[DbType, DbUsername, DbPassword, DbHost, DbName],
            ViewVariant::Postgres => &[DbType, DbUsername, DbPassword, SslEnabled, DbHost, DbName],
            ViewVariant::PostgresTls => &[
                DbType, DbUsername, DbPassword, SslEnabled, SslMode, DbHost, DbName,
            ],
            ViewVariant::PostgresTlsCertificates => &[
                DbType,
                DbUsername,
                DbPassword,
                SslEnabled,
                SslMode,
                SslRootCert,
                SslCert,
                SslKey,
                DbHost,
                DbName,
            ],
        }
    }

    pub fn shows(self, field: FieldName) -> bool {
        self.fields().contains(&field)
    }
}
