use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Namespace every installer string lives under.
pub const NAMESPACE: &str = "install";

static EN_US: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("install.title", "Install"),
        ("install.db_step.title", "Database"),
        ("install.db_type.label", "Database engine"),
        ("install.db_username.label", "Username"),
        ("install.db_username.placeholder", "root"),
        ("install.db_username.msg", "Username cannot be empty."),
        ("install.db_password.label", "Password"),
        ("install.db_password.placeholder", "root"),
        ("install.db_password.msg", "Password cannot be empty."),
        ("install.db_host.label", "Database host"),
        ("install.db_host.placeholder", "db:3306"),
        ("install.db_host.msg", "Database host cannot be empty."),
        ("install.db_name.label", "Database name"),
        ("install.db_name.placeholder", "answer"),
        ("install.db_name.msg", "Database name cannot be empty."),
        ("install.db_file.label", "Database file"),
        ("install.db_file.placeholder", "/data/answer.db"),
        ("install.db_file.msg", "Database file cannot be empty."),
        ("install.ssl_enabled.label", "Enable SSL"),
        ("install.ssl_enabled_on.label", "On"),
        ("install.ssl_enabled_off.label", "Off"),
        ("install.ssl_mode.label", "SSL Mode"),
        ("install.ssl_root_cert.placeholder", "sslrootcert file path"),
        ("install.ssl_root_cert.msg", "Path to sslrootcert file cannot be empty"),
        ("install.ssl_cert.placeholder", "sslcert file path"),
        ("install.ssl_cert.msg", "Path to sslcert file cannot be empty"),
        ("install.ssl_key.placeholder", "sslkey file path"),
        ("install.ssl_key.msg", "Path to sslkey file cannot be empty"),
        ("install.review.title", "Review"),
        ("install.review.hint", "Check the settings below before they are written."),
        ("install.next", "Next"),
        ("install.back", "Back"),
        ("install.confirm", "Confirm"),
    ])
});

/// Resolves display strings by key under [`NAMESPACE`].
///
/// Non-empty overrides (from the config file) win over the built-in English
/// table; a key found in neither comes back unchanged.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    overrides: HashMap<String, String>,
}

impl Translator {
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn t(&self, key: &str) -> String {
        let full = format!("{NAMESPACE}.{key}");
        // Blank overrides fall through, so messages never come back empty.
        let overridden = [full.as_str(), key]
            .into_iter()
            .filter_map(|k| self.overrides.get(k))
            .find(|text| !text.is_empty());
        if let Some(text) = overridden {
            return text.clone();
        }
        EN_US
            .get(full.as_str())
            .map(|text| (*text).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}
