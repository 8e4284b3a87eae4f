//! Generator options.
//!
//! [`GeneratorOptions`] names the identifiers the generated code refers to:
//! the receiver, the client parameter, the dispatch primitive and so on.
//! Defaults match the client library the wrappers are generated for; a TOML
//! file can override any subset of them.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::GeneratorError;

/// Identifiers and literals used in generated wrapper methods.
///
/// ## Examples
///
/// ```
/// use wrapper_gen::config::GeneratorOptions;
///
/// let options = GeneratorOptions::from_toml_str(r#"
///     method_name = "Do"
///     client_param = "c"
/// "#).unwrap();
///
/// assert_eq!(options.method_name, "Do");
/// assert_eq!(options.client_param, "c");
/// // Unset keys keep their defaults
/// assert_eq!(options.dispatch_fn, "SendRequest");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Name of the generated method.
    pub method_name: String,
    /// Receiver variable name.
    pub receiver: String,
    /// Name of the shared client parameter.
    pub client_param: String,
    /// Type of the shared client parameter.
    pub client_type: String,
    /// Field on the client holding the HTTP handle passed to the dispatcher.
    pub client_field: String,
    /// Dispatch primitive invoked by every wrapper.
    pub dispatch_fn: String,
    /// Function used to marshal the request receiver.
    pub marshal_fn: String,
    /// Expression passed as the rate-limit bucket while it is unresolved.
    pub rate_limit_placeholder: String,
    /// Service named in generated doc comments.
    pub service_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            method_name: "Send".to_string(),
            receiver: "r".to_string(),
            client_param: "bot".to_string(),
            client_type: "*Client".to_string(),
            client_field: "client".to_string(),
            dispatch_fn: "SendRequest".to_string(),
            marshal_fn: "json.Marshal".to_string(),
            rate_limit_placeholder: "\"TODO\"".to_string(),
            service_name: "Discord".to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Parses options from TOML text.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, GeneratorError> {
        toml::from_str(text).map_err(|e| GeneratorError::ConfigError(e.to_string()))
    }

    /// Reads options from a TOML file.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ReadError` if the file cannot be read, or
    /// `GeneratorError::ConfigError` if it does not parse.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let text = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.method_name, "Send");
        assert_eq!(options.receiver, "r");
        assert_eq!(options.client_param, "bot");
        assert_eq!(options.client_type, "*Client");
        assert_eq!(options.client_field, "client");
        assert_eq!(options.dispatch_fn, "SendRequest");
        assert_eq!(options.marshal_fn, "json.Marshal");
        assert_eq!(options.rate_limit_placeholder, "\"TODO\"");
        assert_eq!(options.service_name, "Discord");
    }

    #[test]
    fn empty_toml_is_default() {
        let options = GeneratorOptions::from_toml_str("").unwrap();
        assert_eq!(options, GeneratorOptions::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = GeneratorOptions::from_toml_str("reciever = \"x\"").unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigError(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrapper.toml");
        fs::write(&path, "service_name = \"Example\"\n").unwrap();

        let options = GeneratorOptions::load(&path).unwrap();
        assert_eq!(options.service_name, "Example");
    }

    #[test]
    fn load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = GeneratorOptions::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GeneratorError::ReadError { .. }));
    }
}
