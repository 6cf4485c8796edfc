//! Values that are always usable, even when producing them went wrong.
//!
//! Loaders in this workspace never fail outright: they substitute defaults and
//! report what happened through a [`Diagnostic`]. Callers that only want the value
//! take `.value`; callers that care about the signal inspect `.diagnostic`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The source did not exist; the whole value is the default.
    NotFound { path: PathBuf },
    /// The source could not be read; the whole value is the default.
    Unreadable { path: PathBuf, error: String },
    /// The source was read but could not be interpreted; the whole value is the default.
    Malformed { path: PathBuf, error: String },
    /// The source was used, but the listed fields had the wrong shape and were defaulted.
    FieldsDefaulted {
        path: PathBuf,
        fields: Vec<String>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NotFound { path } => write!(f, "{} not found", path.display()),
            Diagnostic::Unreadable { path, error } => {
                write!(f, "could not read {}: {error}", path.display())
            }
            Diagnostic::Malformed { path, error } => {
                write!(f, "could not parse {}: {error}", path.display())
            }
            Diagnostic::FieldsDefaulted { path, fields } => write!(
                f,
                "{}: defaulted malformed fields [{}]",
                path.display(),
                fields.join(", ")
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recovered<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl<T> Recovered<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    pub fn degraded(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostic: Some(diagnostic),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
