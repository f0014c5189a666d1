//! Structured error types shared across gtx crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`GraphError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex ids, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for graph transforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GraphError {
    /// A caller supplied argument was rejected before any mutation.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// The graph collaborator refused or could not serve a request.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// An internal consistency check failed; the graph's add/remove semantics are broken.
    #[error("invariant violated: {0}")]
    Invariant(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl GraphError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GraphError::InvalidArgument(info)
            | GraphError::Graph(info)
            | GraphError::Invariant(info) => info,
        }
    }

    /// Shorthand for [`GraphError::InvalidArgument`].
    pub fn invalid_argument(code: impl Into<String>, message: impl Into<String>) -> Self {
        GraphError::InvalidArgument(ErrorInfo::new(code, message))
    }

    /// Shorthand for [`GraphError::Graph`].
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        GraphError::Graph(ErrorInfo::new(code, message))
    }

    /// Shorthand for [`GraphError::Invariant`].
    pub fn invariant(code: impl Into<String>, message: impl Into<String>) -> Self {
        GraphError::Invariant(ErrorInfo::new(code, message))
    }

    /// Adds a context entry to the payload, keeping the variant.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            GraphError::InvalidArgument(info) => {
                GraphError::InvalidArgument(info.with_context(key, value))
            }
            GraphError::Graph(info) => GraphError::Graph(info.with_context(key, value)),
            GraphError::Invariant(info) => GraphError::Invariant(info.with_context(key, value)),
        }
    }

    /// Attaches a remediation hint, keeping the variant.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            GraphError::InvalidArgument(info) => GraphError::InvalidArgument(info.with_hint(hint)),
            GraphError::Graph(info) => GraphError::Graph(info.with_hint(hint)),
            GraphError::Invariant(info) => GraphError::Invariant(info.with_hint(hint)),
        }
    }
}
