//! Parameter store data types
//!
//! The store owns these entities; this crate only reads them and round-trips
//! the pagination cursor.

use crate::error::MigrateError;
use std::fmt;

/// Storage classification of a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterType {
    String,
    StringList,
    SecureString,
    /// A type this build does not know about, kept verbatim
    Other(String),
}

impl ParameterType {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterType::String => "String",
            ParameterType::StringList => "StringList",
            ParameterType::SecureString => "SecureString",
            ParameterType::Other(name) => name,
        }
    }

    /// Whether values of this type are encrypted at rest
    pub fn is_encrypted(&self) -> bool {
        matches!(self, ParameterType::SecureString)
    }
}

impl From<&str> for ParameterType {
    fn from(name: &str) -> Self {
        match name {
            "String" => ParameterType::String,
            "StringList" => ParameterType::StringList,
            "SecureString" => ParameterType::SecureString,
            other => ParameterType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parameter as returned by a decrypting fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// Decrypted value; `None` when the store sent no value
    pub value: Option<String>,
    pub parameter_type: ParameterType,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        value: Option<String>,
        parameter_type: ParameterType,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            parameter_type,
        }
    }

    /// The decrypted value, which must be present and non-empty to be rewritten
    pub fn decrypted_value(&self) -> Result<&str, MigrateError> {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(MigrateError::MissingValue {
                name: self.name.clone(),
            }),
        }
    }
}

/// Opaque continuation cursor handed out by the store.
///
/// Never parsed or built locally; it only travels from one fetch response to
/// the next fetch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken(String);

impl PageToken {
    /// Wrap the cursor from a store response. Absent and empty both mean "no more pages".
    pub fn from_response(token: Option<String>) -> Option<Self> {
        token.filter(|t| !t.is_empty()).map(PageToken)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of a paginated fetch
#[derive(Debug, Clone, Default)]
pub struct ParameterPage {
    pub parameters: Vec<Parameter>,
    pub next_token: Option<PageToken>,
}

impl ParameterPage {
    pub fn new(parameters: Vec<Parameter>, next_token: Option<PageToken>) -> Self {
        Self {
            parameters,
            next_token,
        }
    }

    /// Check if the store has more pages after this one
    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
